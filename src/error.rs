use crate::board::Square;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square ({row}, {col}) is outside a {size}x{size} board")]
    InvalidCoordinate { row: i32, col: i32, size: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no knight path from {start} to {target}")]
    Unreachable { start: Square, target: Square },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty square notation")]
    Empty,
    #[error("invalid square notation length: {0:?}")]
    InvalidLength(String),
    #[error("invalid file: {0}")]
    InvalidFile(char),
    #[error("invalid rank: {0:?}")]
    InvalidRank(String),
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to talk to the terminal: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid board size: {0:?}")]
    InvalidSize(String),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error("input ended before all values were given")]
    UnexpectedEof,
}
