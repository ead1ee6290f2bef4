//! Error types for matrix and random-generator operations

use thiserror::Error;

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised by the checked paths of [`FixedMatrix`](crate::FixedMatrix)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Checked element access outside the matrix extents
    #[error("Index ({row}, {col}) out of range for {rows}x{columns} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Row extent
        rows: usize,
        /// Column extent
        columns: usize,
    },

    /// Source shape disagrees with the matrix extents
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not defined for this matrix shape
    #[error("Logic error: {0}")]
    LogicError(String),
}

/// Errors raised when building a random distribution
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RandomError {
    /// Lower bound above upper bound
    #[error("Invalid range: low {low} is greater than high {high}")]
    InvalidRange {
        /// Lower bound, rendered
        low: String,
        /// Upper bound, rendered
        high: String,
    },

    /// Weight table with no positive entry
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
