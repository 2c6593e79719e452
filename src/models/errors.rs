use std::fmt;

/// Game-specific error types
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Placement attempted outside the board's columns
    ColumnOutOfRange(usize),
    /// Placement attempted on a column with no empty cells
    ColumnFull(usize),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::ColumnOutOfRange(column) => {
                write!(f, "column {} is outside the board", column)
            }
            GameError::ColumnFull(column) => write!(f, "column {} is already full", column),
        }
    }
}

impl std::error::Error for GameError {}
