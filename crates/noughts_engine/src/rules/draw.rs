//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;
use crate::types::Square;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        let board: Board = "XOX / OXX / OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX / OOX / OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_one_empty_square_with_winner_is_not_full() {
        let board: Board = "XOX / OXO / O.X".parse().unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }
}
