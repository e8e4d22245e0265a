//! Terminal driver for the tic-tac-toe session engine.
//!
//! Parses the command line, loads configuration, and feeds user input into
//! a [`tictactoe_engine::Engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, SinkKind};
pub use driver::{Input, run_interactive, run_replay};
