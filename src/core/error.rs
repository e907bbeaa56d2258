//! Error types.
//!
//! The simulation itself never fails on well-formed calls: rejected moves,
//! full boards and finished games are ordinary values. Errors exist for the
//! caller-facing edges (move submission, configuration, dataset files).

use thiserror::Error;

/// A move that cannot be applied to the current grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("game is already over")]
    GameOver,
}

/// Invalid simulation settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Errors raised while reading or writing persisted examples.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
}

/// Crate-level error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Convenience alias for results using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Dataset(DatasetError::Io(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds { row: 3, col: 0, size: 3 };
        assert_eq!(err.to_string(), "cell (3, 0) is outside the 3x3 board");

        let err = MoveError::Occupied { row: 1, col: 2 };
        assert_eq!(err.to_string(), "cell (1, 2) is already occupied");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board_size must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: board_size must be > 0");
    }

    #[test]
    fn test_dataset_error_wraps_into_crate_error() {
        let err: Error = DatasetError::MalformedRow {
            line: 4,
            reason: "expected 10 fields, got 3".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "malformed row at line 4: expected 10 fields, got 3");
    }
}
