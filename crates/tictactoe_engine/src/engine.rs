//! The session-scoped game state engine.

use crate::action::{EngineError, Move};
use crate::audit::{AuditEntry, AuditSink, TracingSink};
use crate::contracts::{Contract, LegalMove, MoveContract};
use crate::position::Position;
use crate::scoreboard::Scoreboard;
use crate::types::{Board, GameState, GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Reason recorded on every reset entry.
pub const RESET_REASON: &str = "User initiated reset";

/// Owns one session: the current round, the scoreboard and the audit trail.
///
/// All mutation goes through [`apply_move`](Self::apply_move) and
/// [`reset`](Self::reset). A move is computed and checked on a candidate
/// state first and only then committed, so a rejected move never leaves a
/// partial update behind.
#[derive(Debug, Clone)]
pub struct Engine<S = TracingSink> {
    state: GameState,
    scoreboard: Scoreboard,
    audit_log: Vec<AuditEntry>,
    sink: S,
}

impl Engine<TracingSink> {
    /// Creates an engine that forwards audit entries to `tracing`, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for Engine<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AuditSink> Engine<S> {
    /// Creates an engine with a custom audit sink, X to move.
    pub fn with_sink(sink: S) -> Self {
        Self::with_first_player(Player::X, sink)
    }

    /// Creates an engine whose first round is opened by `first_player`.
    #[instrument(skip(sink))]
    pub fn with_first_player(first_player: Player, sink: S) -> Self {
        info!(%first_player, "Starting session");
        Self {
            state: GameState::new(first_player),
            scoreboard: Scoreboard::new(),
            audit_log: Vec::new(),
            sink,
        }
    }

    /// Plays the current player's marker at `index` (0-8, row-major).
    ///
    /// Checks, in order: the index is in range, the round is still in
    /// progress, the square is empty. A rejection leaves the state untouched
    /// and appends one error entry to the audit log.
    ///
    /// Returns the round status after the move.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidIndex`], [`EngineError::GameAlreadyEnded`],
    /// [`EngineError::CellOccupied`], or [`EngineError::InvariantViolation`]
    /// if the candidate state fails its postconditions.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, EngineError> {
        let next = match self.candidate(index) {
            Ok(next) => next,
            Err(err) => {
                self.reject(Some(index), &err);
                return Err(err);
            }
        };

        let before = *self.state.board();
        let status = next.status();
        self.state = next;
        self.scoreboard.record(status);
        self.append(AuditEntry::moved(before, *self.state.board(), index));

        match status {
            GameStatus::InProgress => {
                debug!(next_player = %self.state.current_player(), "Move applied")
            }
            _ => info!(%status, scoreboard = %self.scoreboard, "Round finished"),
        }
        Ok(status)
    }

    /// Plays a move from raw user input.
    ///
    /// Anything that does not parse as a non-negative integer is rejected as
    /// an invalid index, with no index on the audit entry.
    #[instrument(skip(self))]
    pub fn apply_move_input(&mut self, raw: &str) -> Result<GameStatus, EngineError> {
        let trimmed = raw.trim();
        match trimmed.parse::<usize>() {
            Ok(index) => self.apply_move(index),
            Err(_) => {
                let err = EngineError::InvalidIndex(trimmed.to_string());
                self.reject(None, &err);
                Err(err)
            }
        }
    }

    /// Starts a new round.
    ///
    /// Clears the board and the round history, and hands the first move to
    /// the opponent of whoever was current. The scoreboard is kept.
    #[instrument(skip(self), fields(previous = %self.state.current_player()))]
    pub fn reset(&mut self) {
        let before = *self.state.board();
        self.state = self.state.restarted();
        self.append(AuditEntry::reset(before, *self.state.board(), RESET_REASON));
        info!(first_player = %self.state.current_player(), "Round reset");
    }

    /// Builds and checks the state that playing `index` would produce.
    fn candidate(&self, index: usize) -> Result<GameState, EngineError> {
        let mov: Move = LegalMove::check(index, &self.state)?;
        let next = self.state.with_move(mov);
        MoveContract::post(&self.state, &next)?;
        Ok(next)
    }

    fn reject(&mut self, index: Option<usize>, err: &EngineError) {
        warn!(?index, error = %err, "Move rejected");
        self.append(AuditEntry::rejected(
            *self.state.board(),
            index,
            err.audit_message(),
        ));
    }

    fn append(&mut self, entry: AuditEntry) {
        self.sink.record(&entry);
        self.audit_log.push(entry);
    }
}

impl<S> Engine<S> {
    /// Returns the current round.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose marker the next move places.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Returns the session scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns every audit entry recorded this session, oldest first.
    pub fn audit_log(&self) -> &[AuditEntry] {
        &self.audit_log
    }

    /// Returns the empty squares, or nothing once the round is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.board())
        }
    }

    /// Returns the audit sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
