//! Square integer matrices
//!
//! [`Matrix`] is the only value the determinant engines operate on. Its
//! shape is validated once, at construction: every matrix has at least one
//! row and exactly as many columns as rows. The engines never mutate their
//! input; they derive fresh, smaller matrices through [`Matrix::minor`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

pub mod io;
mod minor;

pub use io::MatrixFormat;
pub use minor::minor;

/// A square, row-major matrix of signed 64-bit integers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Matrix {
    dimension: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Build a matrix from a fixed-size array of rows
    ///
    /// The shape is checked by the type system, so this cannot fail.
    pub fn new<const N: usize>(rows: [[i64; N]; N]) -> Self {
        const { assert!(N > 0, "a matrix needs at least one row") };
        Self {
            dimension: N,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Build a matrix from owned rows, rejecting empty and ragged input
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(Error::Empty);
        }

        let mut data = Vec::with_capacity(dimension * dimension);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != dimension {
                return Err(Error::Ragged {
                    row,
                    expected: dimension,
                    found: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Self { dimension, data })
    }

    /// Build an `n x n` matrix whose element at `(row, col)` is `f(row, col)`
    pub fn from_fn<F>(dimension: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> i64,
    {
        if dimension == 0 {
            return Err(Error::Empty);
        }

        let mut data = Vec::with_capacity(dimension * dimension);
        for row in 0..dimension {
            for col in 0..dimension {
                data.push(f(row, col));
            }
        }

        Ok(Self { dimension, data })
    }

    /// A 1x1 matrix holding `value`
    pub fn scalar(value: i64) -> Self {
        Self {
            dimension: 1,
            data: vec![value],
        }
    }

    /// The `n x n` identity matrix
    pub fn identity(dimension: usize) -> Result<Self> {
        Self::from_fn(dimension, |row, col| i64::from(row == col))
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Element at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self[(row, col)]
    }

    /// The elements of one row
    pub(crate) fn row(&self, row: usize) -> &[i64] {
        let start = row * self.dimension;
        &self.data[start..start + self.dimension]
    }

    /// Iterate over the rows in order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[i64]> + '_ {
        self.data.chunks_exact(self.dimension)
    }

    /// Copy the matrix out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }

    /// Raw row-major storage
    pub(crate) fn from_parts(dimension: usize, data: Vec<i64>) -> Self {
        debug_assert_eq!(data.len(), dimension * dimension);
        Self { dimension, data }
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.dimension && col < self.dimension,
            "index ({row}, {col}) out of range for a {n}x{n} matrix",
            n = self.dimension
        );
        row * self.dimension + col
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i64 {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<i64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1);

        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|value| format!("{value:>width$}"))
                .collect();
            write!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}
