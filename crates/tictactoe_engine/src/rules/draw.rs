//! Full-board detection for tic-tac-toe.

use crate::action::EngineError;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(board = %board))]
pub fn is_board_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Slice form of [`is_board_full`] for callers holding raw cells.
#[instrument(skip(cells), fields(len = cells.len()))]
pub fn is_board_full_cells(cells: &[Square]) -> Result<bool, EngineError> {
    let board = Board::from_cells(cells)?;
    Ok(is_board_full(&board))
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::Player;

    fn is_draw(board: &Board) -> bool {
        is_board_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_board_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "XOXOXOXO_".parse().unwrap();
        assert!(!is_board_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_cells(&[Square::Occupied(Player::X); 9]).unwrap();
        assert!(is_board_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert!(is_board_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_cells_wrong_length_is_invalid() {
        let cells = [Square::Occupied(Player::O); 10];
        assert!(matches!(
            is_board_full_cells(&cells),
            Err(EngineError::InvalidBoard(_))
        ));
        assert!(matches!(is_board_full_cells(&[]), Err(EngineError::InvalidBoard(_))));
    }
}
