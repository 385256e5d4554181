use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed puzzle file: {0}")]
    Json(#[from] serde_json::Error),
}
