//! Contract-based validation for moves.
//!
//! A move is checked against its preconditions in a fixed order before it is
//! applied, and the candidate state is checked against its postconditions
//! before the engine commits it: {P} move {Q}.

use crate::action::{EngineError, Move};
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::position::Position;
use crate::types::GameState;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions on the state produced by the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: the requested index names a board square.
pub struct IndexInBounds;

impl IndexInBounds {
    /// Resolves the index to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, EngineError> {
        Position::try_from(index)
    }
}

/// Precondition: the round has not been won or drawn.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects moves on a finished round.
    #[instrument(skip(state), fields(status = %state.status()))]
    pub fn check(state: &GameState) -> Result<(), EngineError> {
        if state.status().is_terminal() {
            Err(EngineError::GameAlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects overwrites.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), EngineError> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(EngineError::CellOccupied(position))
        }
    }
}

/// Composite precondition: bounds, then round status, then occupancy.
///
/// On success returns the move the current player would make.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `index`.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<Move, EngineError> {
        let position = IndexInBounds::check(index)?;
        RoundInProgress::check(state)?;
        SquareIsEmpty::check(position, state)?;
        Ok(Move::new(state.current_player(), position))
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Index is in 0..=8
/// - Round is in progress
/// - Square is empty
///
/// Postconditions:
/// - The new history extends the old one by exactly one move
/// - All [`RoundInvariants`] hold on the new state
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, index: &usize) -> Result<(), EngineError> {
        LegalMove::check(*index, state).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        let extends = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());
        if !extends {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History does not extend by one move"
            );
            return Err(EngineError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Round invariants violated");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
