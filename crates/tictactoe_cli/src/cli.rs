//! Command-line interface for the tic-tac-toe driver.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Tic-tac-toe with a session scoreboard and an audit trail
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading one command per line from stdin
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a sequence of cell indices (or `reset`) and print the result
    Replay {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Moves to apply in order
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

impl Command {
    /// Config file passed to the subcommand, if any.
    pub fn config(&self) -> Option<&Path> {
        match self {
            Command::Play { config } | Command::Replay { config, .. } => config.as_deref(),
        }
    }
}
