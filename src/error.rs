//! Error types for the tactix crate

use thiserror::Error;

/// Main error type for the tactix crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("position {position} is out of bounds for a board with {cells} cells")]
    InvalidPosition { position: usize, cells: usize },

    #[error("coordinates ({row}, {col}) are out of bounds for a {dimension}x{dimension} board")]
    InvalidCoordinates {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("illegal move: position {position} is already occupied")]
    IllegalMove { position: usize },

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("game already over")]
    GameOver,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
