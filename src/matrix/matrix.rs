use crate::error::Result;

/// Shape-agnostic view of a dense row-major matrix.
pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn columns(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> Result<&T>;
    fn trace(&self) -> Result<T>;
}
