//! Tests for the pure win/draw queries.

use tictactoe_engine::{
    Board, EngineError, LINES, Player, Position, Square, check_winner, check_winner_cells,
    is_board_full, is_board_full_cells,
};

#[test]
fn test_single_line_boards_report_their_owner() {
    for (i, line) in LINES.iter().enumerate() {
        let mut board = Board::new();
        for pos in line {
            board.set(*pos, Square::Occupied(Player::O));
        }
        // One stray X off the line keeps the board plausible.
        if let Some(free) = Position::valid_moves(&board).first() {
            board.set(*free, Square::Occupied(Player::X));
        }
        assert_eq!(check_winner(&board), Some(Player::O), "line {}", i);
    }
}

#[test]
fn test_full_iff_no_empty_cells() {
    let mut board = Board::new();
    for pos in Position::ALL {
        assert!(!is_board_full(&board));
        board.set(pos, Square::Occupied(Player::X));
    }
    assert!(is_board_full(&board));
}

#[test]
fn test_slice_queries_validate_length() {
    let short = vec![Square::Empty; 3];
    assert!(matches!(
        check_winner_cells(&short),
        Err(EngineError::InvalidBoard(_))
    ));
    assert!(matches!(
        is_board_full_cells(&short),
        Err(EngineError::InvalidBoard(_))
    ));

    let full = vec![Square::Occupied(Player::X); 9];
    assert_eq!(is_board_full_cells(&full), Ok(true));
    assert_eq!(check_winner_cells(&full), Ok(Some(Player::X)));
}
