// error.rs - Error types for grid ingestion and access

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WarmthError>;

#[derive(Debug, Error)]
pub enum WarmthError {
    /// Declared dimensions do not match the tokens that follow them.
    #[error("malformed input at row {row}: {reason}")]
    MalformedInput { row: usize, reason: String },

    #[error("grid {rows}x{cols} exceeds the {max}x{max} limit")]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    /// A checked write landed outside the declared grid.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WarmthError {
    pub(crate) fn malformed(row: usize, reason: impl Into<String>) -> Self {
        WarmthError::MalformedInput { row, reason: reason.into() }
    }
}
