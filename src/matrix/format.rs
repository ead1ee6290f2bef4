//! Text rendering of a matrix, one line per row.

use std::fmt;
use std::io;

use crate::matrix::fixed_matrix::FixedMatrix;

/// Rendering options for [`write_matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixFormat {
    /// Written after every element, including the last one of a row.
    pub delimiter: char,
}

impl MatrixFormat {
    pub fn new(delimiter: char) -> Self {
        MatrixFormat { delimiter }
    }
}

impl Default for MatrixFormat {
    fn default() -> Self {
        MatrixFormat { delimiter: ' ' }
    }
}

/// Writes every element followed by the delimiter, and a newline after every
/// `C`-th element.
pub fn write_matrix<W, T, const R: usize, const C: usize>(
    sink: &mut W,
    matrix: &FixedMatrix<T, R, C>,
    format: &MatrixFormat,
) -> fmt::Result
where
    W: fmt::Write,
    T: fmt::Display,
{
    for (count, el) in matrix.iter().enumerate() {
        write!(sink, "{}{}", el, format.delimiter)?;
        if (count + 1) % C == 0 {
            sink.write_char('\n')?;
        }
    }
    Ok(())
}

/// Same as [`write_matrix`] for byte sinks such as files or stdout.
pub fn write_matrix_io<W, T, const R: usize, const C: usize>(
    sink: &mut W,
    matrix: &FixedMatrix<T, R, C>,
    format: &MatrixFormat,
) -> io::Result<()>
where
    W: io::Write,
    T: fmt::Display,
{
    for (count, el) in matrix.iter().enumerate() {
        write!(sink, "{}{}", el, format.delimiter)?;
        if (count + 1) % C == 0 {
            sink.write_all(b"\n")?;
        }
    }
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
