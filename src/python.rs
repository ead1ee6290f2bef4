use itertools::Itertools;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::error::MatrixError;
use crate::matrix::fixed_matrix::FixedMatrix;
use crate::matrix::matrix::Matrix;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::OutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

// Python has no const generics: expose a few square f64 shapes.
macro_rules! py_fixed_matrix {
    ($name:ident, $py_name:tt, $n:tt $(, submatrix = $sub:ident)?) => {
        #[derive(Debug, Clone)]
        #[pyclass(frozen, name = $py_name)]
        pub struct $name {
            inner: FixedMatrix<f64, $n, $n>,
        }

        #[pymethods]
        impl $name {
            #[classmethod]
            pub fn from_list(_cls: &Bound<'_, PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
                Ok($name {
                    inner: Matrix::from_list(lines)?,
                })
            }

            #[staticmethod]
            pub fn identity() -> Self {
                $name {
                    inner: FixedMatrix::identity(),
                }
            }

            pub fn to_list(&self) -> Vec<Vec<f64>> {
                Matrix::to_list(&self.inner)
            }

            pub fn at(&self, row: usize, col: usize) -> PyResult<f64> {
                Ok(*Matrix::at(&self.inner, row, col)?)
            }

            pub fn trace(&self) -> PyResult<f64> {
                Ok(Matrix::trace(&self.inner)?)
            }

            #[getter]
            pub fn rows(&self) -> usize {
                Matrix::rows(&self.inner)
            }

            #[getter]
            pub fn cols(&self) -> usize {
                Matrix::columns(&self.inner)
            }

            #[getter]
            #[allow(non_snake_case)]
            pub fn T(&self) -> Self {
                $name {
                    inner: self.inner.transpose(),
                }
            }

            pub fn __add__(&self, rhs: &Self) -> Self {
                $name {
                    inner: &self.inner + &rhs.inner,
                }
            }

            pub fn __sub__(&self, rhs: &Self) -> Self {
                $name {
                    inner: &self.inner - &rhs.inner,
                }
            }

            pub fn __mul__(&self, rhs: &Self) -> Self {
                $name {
                    inner: &self.inner * &rhs.inner,
                }
            }

            pub fn __eq__(&self, rhs: &Self) -> bool {
                self.inner == rhs.inner
            }

            pub fn __str__(&self) -> String {
                self.inner.to_string()
            }

            pub fn __repr__(&self) -> String {
                let rows = self
                    .inner
                    .row_iter()
                    .map(|row| format!("[{}]", row.iter().join(", ")))
                    .join(", ");
                format!("{}([{}])", $py_name, rows)
            }

            $(
                pub fn submatrix(&self, row: usize, col: usize) -> $sub {
                    $sub {
                        inner: self.inner.submatrix(row, col),
                    }
                }
            )?
        }
    };
}

py_fixed_matrix!(Matrix1, "Matrix1", 1);
py_fixed_matrix!(Matrix2, "Matrix2", 2, submatrix = Matrix1);
py_fixed_matrix!(Matrix3, "Matrix3", 3, submatrix = Matrix2);
py_fixed_matrix!(Matrix4, "Matrix4", 4, submatrix = Matrix3);

/// A Python module implemented in Rust.
#[pymodule]
fn crescent(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Matrix1>()?;
    m.add_class::<Matrix2>()?;
    m.add_class::<Matrix3>()?;
    m.add_class::<Matrix4>()?;
    Ok(())
}
