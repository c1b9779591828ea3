//! 3x3 board with apply/undo moves and winner queries.

use std::fmt;
use std::str::FromStr;

use tracing::instrument;

use crate::error::ParseBoardError;
use crate::rules;
use crate::types::{GameResult, Mark, Square};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order (0-8). The board also remembers
/// the winner of its current contents so a presentation layer can show it
/// without re-scanning; search code calls [`Board::check_winner`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [Square; CELLS],
    winner: Option<Mark>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        let mut board = Self {
            squares,
            winner: None,
        };
        board.winner = rules::check_winner(&board);
        board
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Places `mark` at `index`.
    ///
    /// Returns `false` and leaves the board unchanged when the index is out
    /// of range or the square is taken.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_empty(index) {
            return false;
        }
        self.squares[index] = Square::Occupied(mark);
        self.winner = rules::check_winner(self);
        true
    }

    /// Clears the square at `index`.
    ///
    /// Only search uses this, to take back the move it applied just before
    /// on a board that had no winner.
    #[instrument(level = "trace", skip(self))]
    pub fn undo_move(&mut self, index: usize) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Empty;
            // The undone move was the only one since the board was live.
            self.winner = None;
        }
    }

    /// True iff `mark` fills one of the eight winning lines right now.
    pub fn check_winner(&self, mark: Mark) -> bool {
        rules::has_line(self, mark)
    }

    /// Winner remembered from the last mutation.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Checks if no empty squares remain.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Empty)
            .count()
    }

    /// Number of marked squares.
    pub fn occupied_count(&self) -> usize {
        CELLS - self.empty_count()
    }

    /// Evaluates the board from scratch.
    pub fn result(&self) -> GameResult {
        rules::evaluate(self)
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells written as `X`, `O`, `.` or `-`.
///
/// Whitespace and `/` row separators are ignored, so `"XO. / .X. / ..O"`
/// is accepted.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c {
                'x' | 'X' => Ok(Square::Occupied(Mark::X)),
                'o' | 'O' => Ok(Square::Occupied(Mark::O)),
                '.' | '-' => Ok(Square::Empty),
                other => Err(ParseBoardError::InvalidChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; CELLS] = cells
            .as_slice()
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength(cells.len()))?;

        let board = Self::from_squares(squares);
        if board.check_winner(Mark::X) && board.check_winner(Mark::O) {
            return Err(ParseBoardError::TwoWinners(Mark::X, Mark::O));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        assert!(board.apply_move(4, Mark::X));
        assert!(!board.apply_move(4, Mark::O));
        assert!(!board.apply_move(9, Mark::O));
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_winner_cache_follows_contents() {
        let mut board: Board = "XX. / OO. / ...".parse().unwrap();
        assert_eq!(board.winner(), None);
        assert!(board.apply_move(2, Mark::X));
        assert_eq!(board.winner(), Some(Mark::X));
        board.undo_move(2);
        assert_eq!(board.winner(), None);
        assert_eq!(board, "XX. / OO. / ...".parse::<Board>().unwrap());
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X.. / .O. / ...".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::InvalidChar('?'))
        );
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "XXX / OOO / ...".parse::<Board>(),
            Err(ParseBoardError::TwoWinners(Mark::X, Mark::O))
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board: Board = "XXX / OO. / ...".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_count(), CELLS);
    }
}
