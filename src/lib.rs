//! Fixed-extent dense matrices and parameterized random generators.
//!
//! ```rust
//! use crescent::{FixedMatrix, MatrixError};
//!
//! let m = FixedMatrix::<i32, 2, 3>::from_list(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! assert_eq!(m[1][2], 6);
//! assert!(matches!(m.at(2, 0), Err(MatrixError::OutOfRange { .. })));
//! assert!(matches!(m.trace(), Err(MatrixError::LogicError(_))));
//! ```

pub mod error;

pub mod matrix {
    pub mod fixed_matrix;
    pub mod format;
    pub mod matrix;
}
pub mod random {
    pub mod distribution;
    pub mod generator;
}

#[cfg(feature = "python")]
pub mod python;

pub use error::{MatrixError, RandomError, Result};
pub use matrix::fixed_matrix::{make_identity, to_fixed_matrix, FixedMatrix, Scalar};
pub use matrix::format::{write_matrix, write_matrix_io, MatrixFormat};
pub use matrix::matrix::Matrix;
