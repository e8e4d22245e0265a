//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, GameState, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the round history onto an empty board must place every move
/// on an empty square and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_round_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new(Player::X)));
    }

    #[test]
    fn test_single_move_holds() {
        let state = GameState::new(Player::X).with_move(Move::new(Player::X, Position::Center));
        assert!(MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state =
            GameState::new(Player::X).with_move(Move::new(Player::X, Position::Center));
        state.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut state =
            GameState::new(Player::X).with_move(Move::new(Player::X, Position::Center));
        state.history.push(Move::new(Player::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
