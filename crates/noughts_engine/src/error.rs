//! Error types for moves, setup, and board parsing.

use crate::types::Mark;

/// A rejected move. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside the board.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Row or column outside the board.
    #[display("Row {} column {} is off the board (each must be 0-2)", _0, _1)]
    OutOfRangeRowCol(usize, usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(usize),

    /// A human move arrived outside the human's turn.
    #[display("It is not the human player's turn")]
    NotHumanTurn,

    /// A computer move was requested outside the computer's turn.
    #[display("It is not the computer player's turn")]
    NotComputerTurn,
}

impl std::error::Error for MoveError {}

/// A rejected setup or round-control request. The caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Mark choice was neither X nor O.
    #[display("Invalid mark {:?}: choose X or O", _0)]
    InvalidMark(String),

    /// Strategy choice was not recognized.
    #[display("Invalid strategy {:?}: choose 1 (minimax) or 2 (random)", _0)]
    InvalidStrategy(String),

    /// Setup was attempted while a round is configured.
    #[display("Session is not awaiting setup")]
    NotAwaitingSetup,

    /// Next round requested before the current one ended.
    #[display("The current round is still in progress")]
    RoundInProgress,
}

impl std::error::Error for SetupError {}

/// Failure parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Character that is not a mark or an empty marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidChar(char),

    /// Number of cells other than nine.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// Layout where both marks complete a line.
    #[display("Both {} and {} complete a line", _0, _1)]
    TwoWinners(Mark, Mark),
}

impl std::error::Error for ParseBoardError {}
