//! Status consistency invariant: the recorded outcome matches the board.

use super::Invariant;
use crate::types::{GameState, GameStatus};

/// Invariant: the round status is exactly what the rules say about the board.
///
/// `Won(p)` only with a complete line for `p`, `Draw` only on a full board
/// without a line, `InProgress` otherwise.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.status() == GameStatus::evaluate(state.board())
    }

    fn description() -> &'static str {
        "Round status matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_fresh_round_holds() {
        assert!(StatusConsistentInvariant::holds(&GameState::new(Player::X)));
    }

    #[test]
    fn test_premature_win_violates() {
        let mut state = GameState::new(Player::X);
        state.board.set(Position::Center, Square::Occupied(Player::X));
        state.status = GameStatus::Won(Player::X);
        assert!(!StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_missed_draw_violates() {
        let mut state = GameState::new(Player::X);
        state.board = "XOXXOOOXX".parse().unwrap();
        assert!(!StatusConsistentInvariant::holds(&state));
        state.status = GameStatus::Draw;
        assert!(StatusConsistentInvariant::holds(&state));
    }
}
