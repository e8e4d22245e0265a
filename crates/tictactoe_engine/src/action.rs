//! Moves and the errors raised while validating or applying them.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// None of these are fatal: the engine leaves its state untouched and
/// records the rejection in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The index is not an integer in 0..=8.
    #[display("Invalid cell index: {}", _0)]
    InvalidIndex(String),

    /// The round is already won or drawn.
    #[display("Game is already over")]
    GameAlreadyEnded,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// A board handed to a pure query is malformed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),

    /// A round invariant failed on the candidate state (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Human-readable message stored on the error audit entry.
    pub fn audit_message(&self) -> String {
        match self {
            EngineError::InvalidIndex(_) => "Invalid cell index".to_string(),
            EngineError::GameAlreadyEnded => "Move attempted after game ended".to_string(),
            EngineError::CellOccupied(_) => "Overwrite attempt blocked".to_string(),
            EngineError::InvalidBoard(detail) => format!("Invalid board: {}", detail),
            EngineError::InvariantViolation(detail) => detail.clone(),
        }
    }
}
