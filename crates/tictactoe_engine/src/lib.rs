//! Tic-tac-toe session engine.
//!
//! One [`Engine`] owns a session: the 3x3 board, the player to move, the
//! round status, a scoreboard that survives resets, and an append-only
//! audit trail that is also forwarded to an injected [`AuditSink`].
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`GameStatus`], [`Position`]
//! - **Rules**: pure win/draw queries ([`check_winner`], [`is_board_full`])
//! - **Contracts**: move preconditions and postconditions
//! - **Invariants**: properties every committed round satisfies
//! - **Audit**: [`AuditEntry`] records and the sinks they are forwarded to
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, GameStatus, Player, RecordingSink};
//!
//! let mut engine = Engine::with_sink(RecordingSink::new());
//! for index in [0, 1, 3, 2] {
//!     engine.apply_move(index)?;
//! }
//! assert_eq!(engine.apply_move(6)?, GameStatus::Won(Player::X));
//! assert_eq!(engine.scoreboard().wins(Player::X), 1);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod audit;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod scoreboard;
mod types;

pub use action::{EngineError, Move};
pub use audit::{
    AuditAction, AuditEntry, AuditSink, JsonLinesSink, NullSink, RecordingSink, TracingSink,
};
pub use contracts::{Contract, IndexInBounds, LegalMove, MoveContract, RoundInProgress, SquareIsEmpty};
pub use engine::{Engine, RESET_REASON};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, RoundInvariants, StatusConsistentInvariant,
};
pub use position::Position;
pub use rules::{LINES, check_winner, check_winner_cells, is_board_full, is_board_full_cells};
pub use scoreboard::Scoreboard;
pub use types::{Board, GameState, GameStatus, Player, Square};
