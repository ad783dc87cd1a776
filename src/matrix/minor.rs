use super::Matrix;
use crate::error::{Error, Result};

impl Matrix {
    /// The `(n-1) x (n-1)` matrix left after deleting `except_row` and the
    /// first column
    ///
    /// Rows above `except_row` keep their index, rows below it shift up by
    /// one. The result owns its storage and shares nothing with `self`.
    ///
    /// # Panics
    ///
    /// Panics on a 1x1 matrix or when `except_row` is out of range. Use
    /// [`Matrix::try_minor`] for a fallible version.
    pub fn minor(&self, except_row: usize) -> Matrix {
        let n = self.dimension;
        assert!(n >= 2, "cannot take a minor of a 1x1 matrix");
        assert!(
            except_row < n,
            "row {except_row} is out of range for a {n}x{n} matrix"
        );

        let size = n - 1;
        let mut data = Vec::with_capacity(size * size);
        for row in (0..n).filter(|&row| row != except_row) {
            data.extend_from_slice(&self.row(row)[1..]);
        }

        Matrix::from_parts(size, data)
    }

    /// Like [`Matrix::minor`], but reports bad arguments as errors
    pub fn try_minor(&self, except_row: usize) -> Result<Matrix> {
        if self.dimension < 2 {
            return Err(Error::MinorOfScalar);
        }
        if except_row >= self.dimension {
            return Err(Error::MinorOutOfRange {
                row: except_row,
                dimension: self.dimension,
            });
        }
        Ok(self.minor(except_row))
    }
}

/// Free-function form of [`Matrix::minor`]
pub fn minor(original: &Matrix, except_row: usize) -> Matrix {
    original.minor(except_row)
}
