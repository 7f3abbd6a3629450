//! Error types for board mutation and move selection.

use crate::{Outcome, Position};

/// A move the board refused to apply.
///
/// Recoverable: the board is left untouched and the caller can ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// The computer was asked to move on a board that has no legal move.
///
/// This is a caller bug: check [`crate::Board::outcome`] before asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AiError {
    /// Every square is occupied.
    #[display("No legal moves remain")]
    NoLegalMoves,

    /// The game was already decided before the request.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),
}

impl std::error::Error for AiError {}

/// Failure to read a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCharacter(char),

    /// The text described more or fewer than nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}
