//! Errors for parsing squares, moves and board diagrams.
//!
//! The rules themselves never fail: an illegal move is `false`, not an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid square name: {0:?}")]
    Square(String),

    #[error("invalid move notation: {0:?}")]
    Move(String),

    #[error("board diagram line {line}: {reason}")]
    Diagram { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
