//! Dense matrix with compile-time extents.
//!
//! `FixedMatrix<T, R, C>` stores exactly `R * C` elements inline, row after
//! row. Shapes are part of the type, so a product with mismatched inner
//! dimensions or an addition of two differently shaped matrices is rejected
//! by the compiler.
//!
//! ```
//! use crescent::FixedMatrix;
//!
//! let a = FixedMatrix::from([[1, 2], [3, 4]]);
//! let b = FixedMatrix::from([[5, 6], [7, 8]]);
//! assert_eq!(&a * &b, FixedMatrix::from([[19, 22], [43, 50]]));
//! assert_eq!(a[1][0], 3);
//! assert_eq!(a.at(1, 1), Ok(&4));
//! ```

use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;
use std::ops::{self, AddAssign, Index, IndexMut, Mul, MulAssign, SubAssign};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::{MatrixError, Result};
use crate::matrix::format::{write_matrix, MatrixFormat};
use crate::matrix::matrix::Matrix;
use crate::random::distribution::BoundedDistribution;
use crate::random::generator::RandomNumberGenerator;

pub trait Scalar:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + AddAssign
    + SubAssign
    + MulAssign
    + Mul<Output = Self>
    + fmt::Debug
{
}

impl<T> Scalar for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + AddAssign
        + SubAssign
        + MulAssign
        + Mul<Output = T>
        + fmt::Debug
{
}

/// A matrix of `R` rows and `C` columns stored in row-major order.
///
/// The backing store is the inline array `[[T; C]; R]`, which is laid out
/// contiguously, so element `(row, col)` lives at linear index `row * C + col`
/// of [`as_slice`](Self::as_slice).
#[derive(Debug, Clone, Copy, Hash)]
pub struct FixedMatrix<T, const R: usize, const C: usize> {
    cells: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    pub const ROWS: usize = R;
    pub const COLUMNS: usize = C;
    pub const SIZE: usize = R * C;

    // CONSTRUCTION

    pub fn new() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_, _| value.clone())
    }

    /// Builds each cell from its `(row, col)` position, visiting cells in
    /// row-major order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        FixedMatrix {
            cells: std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))),
        }
    }

    /// Copies `source[i][j]` for every `i < R`, `j < C`.
    ///
    /// The source shape is a caller contract and is not validated: surplus
    /// rows or columns are ignored.
    ///
    /// # Panics
    ///
    /// If `source` has fewer than `R` rows or one of its first `R` rows has
    /// fewer than `C` elements. Use [`from_list`](Self::from_list) when the
    /// shape is not known to be correct.
    pub fn from_slices<S>(source: &[S]) -> Self
    where
        S: AsRef<[T]>,
        T: Clone,
    {
        Self::from_fn(|i, j| source[i].as_ref()[j].clone())
    }

    /// Builds the matrix from nested rows, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `lines.len() != R` or any row does not
    /// hold exactly `C` elements.
    #[cfg_attr(feature = "tracing", instrument(skip(lines), fields(dims = %format!("{}x{}", R, C))))]
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        if lines.len() != R {
            return Err(invalid_argument(format!(
                "expected {} rows, got {}",
                R,
                lines.len()
            )));
        }

        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let len = line.len();
                <[T; C]>::try_from(line).map_err(|_| {
                    invalid_argument(format!(
                        "row {} has {} elements, expected {}",
                        i, len, C
                    ))
                })
            })
            .collect::<Result<Vec<[T; C]>>>()?;

        let cells = <[[T; C]; R]>::try_from(rows).map_err(|rows| {
            invalid_argument(format!("expected {} rows, got {}", R, rows.len()))
        })?;

        Ok(FixedMatrix { cells })
    }

    /// Builds the matrix from a flat row-major sequence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `source` yields exactly `R * C` items.
    pub fn from_row_major<I>(source: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = source.into_iter().fuse();
        let mut count = 0;
        let slots = FixedMatrix::<Option<T>, R, C>::from_fn(|_, _| {
            let item = items.next();
            count += usize::from(item.is_some());
            item
        });

        if count < R * C {
            return Err(invalid_argument(format!(
                "expected {} elements for a {}x{} matrix, got {}",
                R * C,
                R,
                C,
                count
            )));
        }
        if items.next().is_some() {
            return Err(invalid_argument(format!(
                "expected {} elements for a {}x{} matrix, got more",
                R * C,
                R,
                C
            )));
        }

        Ok(FixedMatrix {
            cells: slots
                .cells
                .map(|row| row.map(|item| item.expect("every slot was counted"))),
        })
    }

    pub fn from_generator<D, G>(generator: &mut RandomNumberGenerator<T, D, G>) -> Self
    where
        D: BoundedDistribution<T>,
        G: Rng,
    {
        Self::from_fn(|_, _| generator.generate())
    }

    pub fn into_rows(self) -> [[T; C]; R] {
        self.cells
    }

    // ASSIGNMENT

    /// Replaces the contents with a copy of `other`.
    ///
    /// The copy is fully built before `self` is touched, so a panic while
    /// cloning leaves `self` unchanged.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        let mut tmp = other.clone();
        self.swap(&mut tmp);
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.cells, &mut other.cells);
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    // CAPACITY

    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    pub const fn rows(&self) -> usize {
        R
    }

    pub const fn columns(&self) -> usize {
        C
    }

    pub const fn size(&self) -> usize {
        R * C
    }

    pub const fn max_size(&self) -> usize {
        R * C
    }

    // ELEMENT ACCESS

    /// Checked access to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `row >= R` or `col >= C`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        if row >= R || col >= C {
            return Err(out_of_range(row, col, R, C));
        }
        Ok(&self.cells[row][col])
    }

    /// Checked mutable access to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `row >= R` or `col >= C`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        if row >= R || col >= C {
            return Err(out_of_range(row, col, R, C));
        }
        Ok(&mut self.cells[row][col])
    }

    /// Element at linear index `row * C + col` without bounds checking.
    ///
    /// # Safety
    ///
    /// `row < R` and `col < C` must hold. Anything else is undefined
    /// behaviour.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < R && col < C);
        self.as_slice().get_unchecked(row * C + col)
    }

    /// Mutable element at linear index `row * C + col` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `row < R` and `col < C` must hold. Anything else is undefined
    /// behaviour.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < R && col < C);
        self.as_mut_slice().get_unchecked_mut(row * C + col)
    }

    /// Row `row` as a borrowed array, the target of `m[row][col]`.
    pub fn row(&self, row: usize) -> &[T; C] {
        &self.cells[row]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.cells[row]
    }

    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        self.cells.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.cells.as_flattened_mut()
    }

    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    // ITERATORS

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub fn row_iter(&self) -> std::slice::Iter<'_, [T; C]> {
        self.cells.iter()
    }

    // OPERATIONS

    /// Fails with `LogicError` on a non-square matrix.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(dims = %format!("{}x{}", R, C))))]
    pub fn trace(&self) -> Result<T>
    where
        T: Clone + Zero,
    {
        if R != C {
            return Err(logic_error(format!(
                "cannot compute trace of non-square {}x{} matrix",
                R, C
            )));
        }

        let data = self.as_slice();
        Ok((0..R).fold(T::zero(), |acc, i| acc + data[i * (C + 1)].clone()))
    }

    /// Matrix obtained by removing row `drop_row` and column `drop_col`.
    ///
    /// The result extents are checked at compile time: `R2 + 1 == R` and
    /// `C2 + 1 == C`. The drop indices are not validated; an index past the
    /// last row (column) removes the last row (column).
    ///
    /// ```
    /// use crescent::FixedMatrix;
    ///
    /// let m = FixedMatrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let sub: FixedMatrix<i32, 2, 2> = m.submatrix(1, 1);
    /// assert_eq!(sub, FixedMatrix::from([[1, 3], [7, 9]]));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(dims = %format!("{}x{}", R, C))))]
    pub fn submatrix<const R2: usize, const C2: usize>(
        &self,
        drop_row: usize,
        drop_col: usize,
    ) -> FixedMatrix<T, R2, C2>
    where
        T: Clone,
    {
        const {
            assert!(
                R2 + 1 == R && C2 + 1 == C,
                "submatrix extents must be one less than the source extents"
            )
        };

        FixedMatrix::from_fn(|i, j| {
            let row = i + usize::from(i >= drop_row);
            let col = j + usize::from(j >= drop_col);
            self.cells[row][col].clone()
        })
    }

    pub fn transpose(&self) -> FixedMatrix<T, C, R>
    where
        T: Clone,
    {
        FixedMatrix::from_fn(|i, j| self.cells[j][i].clone())
    }

    pub fn scaled(&self, factor: T) -> Self
    where
        T: Clone + MulAssign,
    {
        let mut tmp = self.clone();
        tmp *= factor;
        tmp
    }

    pub fn write<W: fmt::Write>(&self, sink: &mut W, format: &MatrixFormat) -> fmt::Result
    where
        T: fmt::Display,
    {
        write_matrix(sink, self, format)
    }
}

impl<T: Zero + One, const N: usize> FixedMatrix<T, N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

pub fn make_identity<T: Zero + One, const N: usize>() -> FixedMatrix<T, N, N> {
    FixedMatrix::identity()
}

/// Shorthand for [`FixedMatrix::from_slices`], with the same precondition on
/// the source shape.
pub fn to_fixed_matrix<T, S, const R: usize, const C: usize>(source: &[S]) -> FixedMatrix<T, R, C>
where
    S: AsRef<[T]>,
    T: Clone,
{
    FixedMatrix::from_slices(source)
}

fn out_of_range(row: usize, col: usize, rows: usize, columns: usize) -> MatrixError {
    #[cfg(feature = "tracing")]
    tracing::debug!(row, col, rows, columns, "matrix index out of range");
    MatrixError::OutOfRange {
        row,
        col,
        rows,
        columns,
    }
}

fn invalid_argument(reason: String) -> MatrixError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%reason, "matrix shape rejected");
    MatrixError::InvalidArgument(reason)
}

fn logic_error(reason: String) -> MatrixError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%reason, "matrix operation not defined for shape");
    MatrixError::LogicError(reason)
}

impl<T: Default, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for FixedMatrix<T, R, C> {
    fn from(cells: [[T; C]; R]) -> Self {
        FixedMatrix { cells }
    }
}

impl<T, const R: usize, const C: usize> TryFrom<Vec<Vec<T>>> for FixedMatrix<T, R, C> {
    type Error = MatrixError;

    fn try_from(lines: Vec<Vec<T>>) -> Result<Self> {
        Self::from_list(lines)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T> for FixedMatrix<T, R, C> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        FixedMatrix::from_list(lines)
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.row_iter().map(|line| line.to_vec()).collect()
    }

    fn rows(&self) -> usize {
        R
    }

    fn columns(&self) -> usize {
        C
    }

    fn at(&self, row: usize, col: usize) -> Result<&T> {
        FixedMatrix::at(self, row, col)
    }

    fn trace(&self) -> Result<T> {
        FixedMatrix::trace(self)
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self, &MatrixFormat::default())
    }
}

// --------------------------------------------------
//                   INDEXING
// --------------------------------------------------

impl<T, const R: usize, const C: usize> Index<usize> for FixedMatrix<T, R, C> {
    type Output = [T; C];

    #[inline(always)]
    fn index(&self, row: usize) -> &[T; C] {
        &self.cells[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for FixedMatrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.cells[row]
    }
}

// `m[(row, col)]` goes straight to the linear index, the column is not
// checked against `C` on its own.
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for FixedMatrix<T, R, C> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.as_slice()[row * C + col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for FixedMatrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.as_mut_slice()[row * C + col]
    }
}

// --------------------------------------------------
//                   ITERATION
// --------------------------------------------------

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a FixedMatrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut FixedMatrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const R: usize, const C: usize> IntoIterator for FixedMatrix<T, R, C> {
    type Item = T;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<[T; C], R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter().flatten()
    }
}

// --------------------------------------------------
//                   ARITHMETIC
// --------------------------------------------------

macro_rules! impl_elementwise_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T: Clone + $op_assign, const R: usize, const C: usize> $op_assign<&FixedMatrix<T, R, C>>
            for FixedMatrix<T, R, C>
        {
            fn $method_assign(&mut self, rhs: &FixedMatrix<T, R, C>) {
                self.iter_mut()
                    .zip(rhs.iter())
                    .for_each(|(a, b)| a.$method_assign(b.clone()));
            }
        }

        impl<T: $op_assign, const R: usize, const C: usize> $op_assign<FixedMatrix<T, R, C>>
            for FixedMatrix<T, R, C>
        {
            fn $method_assign(&mut self, rhs: FixedMatrix<T, R, C>) {
                self.iter_mut()
                    .zip(rhs)
                    .for_each(|(a, b)| a.$method_assign(b));
            }
        }

        impl<T: Clone + $op_assign, const R: usize, const C: usize> ops::$op<&FixedMatrix<T, R, C>>
            for &FixedMatrix<T, R, C>
        {
            type Output = FixedMatrix<T, R, C>;

            fn $method(self, rhs: &FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                let mut tmp = self.clone();
                tmp.$method_assign(rhs);
                tmp
            }
        }

        impl<T: Clone + $op_assign, const R: usize, const C: usize> ops::$op<&FixedMatrix<T, R, C>>
            for FixedMatrix<T, R, C>
        {
            type Output = FixedMatrix<T, R, C>;

            fn $method(mut self, rhs: &FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                self.$method_assign(rhs);
                self
            }
        }

        impl<T: $op_assign, const R: usize, const C: usize> ops::$op<FixedMatrix<T, R, C>>
            for FixedMatrix<T, R, C>
        {
            type Output = FixedMatrix<T, R, C>;

            fn $method(mut self, rhs: FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                self.$method_assign(rhs);
                self
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign);

impl<T: Clone + MulAssign, const R: usize, const C: usize> MulAssign<T> for FixedMatrix<T, R, C> {
    fn mul_assign(&mut self, factor: T) {
        self.iter_mut().for_each(|a| *a *= factor.clone());
    }
}

impl<T, const R: usize, const K: usize, const C: usize> ops::Mul<&FixedMatrix<T, K, C>>
    for &FixedMatrix<T, R, K>
where
    T: Clone + Zero + Mul<Output = T>,
{
    type Output = FixedMatrix<T, R, C>;

    #[cfg_attr(feature = "tracing", instrument(skip(self, rhs), fields(dims = %format!("{}x{} @ {}x{}", R, K, K, C))))]
    fn mul(self, rhs: &FixedMatrix<T, K, C>) -> FixedMatrix<T, R, C> {
        FixedMatrix::from_fn(|i, j| {
            (0..K).fold(T::zero(), |acc, k| {
                acc + self.cells[i][k].clone() * rhs.cells[k][j].clone()
            })
        })
    }
}

impl<T, const R: usize, const K: usize, const C: usize> ops::Mul<FixedMatrix<T, K, C>>
    for FixedMatrix<T, R, K>
where
    T: Clone + Zero + Mul<Output = T>,
{
    type Output = FixedMatrix<T, R, C>;

    fn mul(self, rhs: FixedMatrix<T, K, C>) -> FixedMatrix<T, R, C> {
        &self * &rhs
    }
}

// --------------------------------------------------
//                   COMPARISON
// --------------------------------------------------

impl<T: PartialEq, const R: usize, const C: usize> PartialEq for FixedMatrix<T, R, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for FixedMatrix<T, R, C> {}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
