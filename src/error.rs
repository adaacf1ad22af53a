use thiserror::Error;

use crate::board::Cell;
use crate::WIDTH;

/// Reasons a move cannot be applied to a game
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid move, column {selector} out of range. Columns must be between 1 and {}", WIDTH)]
    ColumnOutOfRange { selector: u8 },
    #[error("Invalid move, column {selector} full")]
    ColumnFull { selector: u8 },
    #[error("Invalid move, the game is already won")]
    GameOver,
    #[error("Invalid move, expected {expected:?} for the next tile but got {found:?}")]
    CellMismatch { expected: Cell, found: Cell },
    #[error("Invalid move, it is not this player's turn")]
    WrongPlayer,
}

/// Failures turning text or binary records into move sequences
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("could not parse '{found}' at position {index} as a valid move")]
    MalformedSelector { index: usize, found: char },
    #[error("invalid game record: {0}")]
    InvalidRecord(String),
}
