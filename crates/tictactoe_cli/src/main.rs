//! Tic-tac-toe terminal driver.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, CliConfig, Command, run_interactive, run_replay};
use tictactoe_engine::Engine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.command.config())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(first_player = %config.first_player(), "Starting tic-tac-toe session");
    let mut engine = Engine::with_first_player(*config.first_player(), config.build_sink());

    match cli.command {
        Command::Play { .. } => {
            let stdin = std::io::stdin();
            run_interactive(&mut engine, stdin.lock(), std::io::stdout().lock())?
        }
        Command::Replay { moves, .. } => run_replay(&mut engine, &moves, std::io::stdout().lock())?,
    }

    info!(scoreboard = %engine.scoreboard(), "Session ended");
    Ok(())
}
