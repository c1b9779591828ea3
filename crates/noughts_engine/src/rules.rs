//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. They never consult the board's
//! cached winner, so they stay correct while search mutates and restores
//! squares.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line, winning_line};

use crate::board::Board;
use crate::types::GameResult;

/// Derives the result of a board: a completed line wins even when empty
/// squares remain; otherwise a full board is a draw.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Won(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
