//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Mark, Square};

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `mark` fills any winning line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let target = Some(Square::Occupied(mark));
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == target))
}

/// Returns the first completed line, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.iter().copied().find(|[a, b, c]| {
        let sq = board.get(*a);
        sq != Some(Square::Empty) && sq == board.get(*b) && sq == board.get(*c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).and_then(Square::mark))
}
