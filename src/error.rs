//! Error types for matrix construction and determinant computation

use thiserror::Error;

/// Result type alias for cofactor operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A matrix needs at least one row
    #[error("matrix is empty: dimension must be at least 1")]
    Empty,

    /// A row length differs from the number of rows
    #[error("matrix is not square: row {row} has {found} elements, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot take a minor of a 1x1 matrix")]
    MinorOfScalar,

    #[error("row {row} is out of range for a {dimension}x{dimension} matrix")]
    MinorOutOfRange { row: usize, dimension: usize },

    /// Checked 64-bit arithmetic overflowed while expanding a matrix
    #[error("integer overflow while expanding a {dimension}x{dimension} matrix")]
    Overflow { dimension: usize },

    /// A unit of parallel work returned an error
    #[error("task for row {index} failed: {source}")]
    TaskFailed {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// A unit of parallel work panicked
    #[error("worker panicked while processing row {index}: {message}")]
    WorkerPanicked { index: usize, message: String },

    /// The scoped worker threads could not be joined
    #[error("worker pool failure: {0}")]
    Pool(String),

    #[error("failed to parse matrix: {0}")]
    Parse(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
