//! Win detection logic for tic-tac-toe.

use crate::action::EngineError;
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning triples, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the player holding the first complete line in [`LINES`] order,
/// `None` otherwise.
#[instrument(skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}

/// Slice form of [`check_winner`] for callers holding raw cells.
#[instrument(skip(cells), fields(len = cells.len()))]
pub fn check_winner_cells(cells: &[Square]) -> Result<Option<Player>, EngineError> {
    let board = Board::from_cells(cells)?;
    Ok(check_winner(&board))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let mut b = Board::new();
                for pos in line {
                    b.set(pos, Square::Occupied(player));
                }
                assert_eq!(check_winner(&b), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(check_winner(&board("O___O___O")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX_______")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_winner(&board("XXO______")), None);
    }

    #[test]
    fn test_first_line_in_order_wins_on_illegal_board() {
        // The top row is checked before the middle row.
        assert_eq!(check_winner(&board("XXXOOOO__")), Some(Player::X));
        assert_eq!(check_winner(&board("OOOXXX___")), Some(Player::O));
    }

    #[test]
    fn test_cells_wrong_length_is_invalid() {
        let cells = [Square::Empty; 8];
        assert!(matches!(
            check_winner_cells(&cells),
            Err(EngineError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_cells_valid_length() {
        let cells = *board("__X_X_X__").squares();
        assert_eq!(check_winner_cells(&cells), Ok(Some(Player::X)));
    }
}
