//! Game rules for tic-tac-toe.
//!
//! Pure functions over board contents. The typed [`Board`](crate::Board)
//! forms cannot fail; the slice forms validate the cell count first and
//! report [`EngineError::InvalidBoard`](crate::EngineError::InvalidBoard)
//! for anything other than nine cells.

mod draw;
mod win;

pub use draw::{is_board_full, is_board_full_cells};
pub use win::{LINES, check_winner, check_winner_cells};
