//! Line-oriented front end that feeds user input into the engine.

use std::io::{BufRead, Write};
use tictactoe_engine::{AuditSink, Engine, GameStatus};
use tracing::{debug, instrument};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Anything else is treated as a cell to play.
    Play(String),
    /// Start a new round.
    Reset,
    /// Print the scoreboard.
    Score,
    /// Print the audit log as JSON lines.
    Log,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

impl Input {
    /// Classifies a line. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "reset" | "r" => Input::Reset,
            "score" | "s" => Input::Score,
            "log" => Input::Log,
            "help" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => Input::Play(trimmed.to_string()),
        }
    }
}

const HELP: &str = "Commands: 0-8 to play a cell, reset, score, log, help, quit";

/// Runs an interactive session until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_interactive<S, R, W>(
    engine: &mut Engine<S>,
    input: R,
    mut out: W,
) -> std::io::Result<()>
where
    S: AuditSink,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", HELP)?;
    print_state(engine, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Input::parse(&line) {
            Input::Quit => break,
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::Score => writeln!(out, "{}", engine.scoreboard())?,
            Input::Log => print_log(engine, &mut out)?,
            Input::Reset => {
                engine.reset();
                print_state(engine, &mut out)?;
            }
            Input::Play(raw) => {
                if let Err(e) = engine.apply_move_input(&raw) {
                    writeln!(out, "Rejected: {}", e)?;
                    continue;
                }
                print_state(engine, &mut out)?;
            }
        }
    }

    writeln!(out, "Final score: {}", engine.scoreboard())?;
    Ok(())
}

/// Applies each token in order, then prints the final state.
///
/// Rejected moves are reported and skipped.
#[instrument(skip(engine, out), fields(count = moves.len()))]
pub fn run_replay<S, W>(engine: &mut Engine<S>, moves: &[String], mut out: W) -> std::io::Result<()>
where
    S: AuditSink,
    W: Write,
{
    for token in moves {
        match Input::parse(token) {
            Input::Reset => engine.reset(),
            Input::Play(raw) => {
                if let Err(e) = engine.apply_move_input(&raw) {
                    writeln!(out, "Rejected {:?}: {}", raw, e)?;
                }
            }
            other => debug!(?other, "Ignoring non-move token in replay"),
        }
    }

    print_state(engine, &mut out)?;
    writeln!(out, "{}", engine.scoreboard())?;
    Ok(())
}

fn print_state<S, W: Write>(engine: &Engine<S>, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", engine.board().render())?;
    match engine.status() {
        GameStatus::InProgress => writeln!(out, "{} to move", engine.current_player()),
        status => writeln!(out, "{} ({})", status, engine.scoreboard()),
    }
}

fn print_log<S, W: Write>(engine: &Engine<S>, out: &mut W) -> std::io::Result<()> {
    for entry in engine.audit_log() {
        let line = entry.to_json_line().map_err(std::io::Error::from)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
