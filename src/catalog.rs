//! Built-in example matrices with independently known determinants
//!
//! Every expected value here comes from a closed form (triangular product,
//! rank argument, known families), never from running the engines.

use crate::matrix::Matrix;

/// A named matrix together with its expected determinant
pub trait MatrixSource {
    fn name(&self) -> &str;
    fn matrix(&self) -> Matrix;
    fn determinant(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixExample {
    /// 3x3 identity
    Identity3,
    /// `[[1, 2], [3, 4]]`
    Pair,
    /// 1..=16 row by row; rank 2, so singular
    Sequential4,
    /// Lower triangular with diagonal 2, 3, -1, 4, 5
    Lower5,
    /// Symmetric Pascal matrix, `C(i + j, i)`
    Pascal6,
    /// Tridiagonal 2 / -1 (discrete Laplacian), determinant n + 1
    Laplacian9,
    /// 2 on the diagonal, 1 elsewhere, determinant n + 1
    Ones10,
}

impl MatrixExample {
    pub const ALL: [MatrixExample; 7] = [
        MatrixExample::Identity3,
        MatrixExample::Pair,
        MatrixExample::Sequential4,
        MatrixExample::Lower5,
        MatrixExample::Pascal6,
        MatrixExample::Laplacian9,
        MatrixExample::Ones10,
    ];

    pub fn all() -> impl Iterator<Item = MatrixExample> {
        Self::ALL.into_iter()
    }

    /// Look an example up by name, ignoring case
    pub fn find(name: &str) -> Option<MatrixExample> {
        Self::all().find(|example| example.name().eq_ignore_ascii_case(name))
    }

    pub fn dimension(self) -> usize {
        match self {
            MatrixExample::Identity3 => 3,
            MatrixExample::Pair => 2,
            MatrixExample::Sequential4 => 4,
            MatrixExample::Lower5 => 5,
            MatrixExample::Pascal6 => 6,
            MatrixExample::Laplacian9 => 9,
            MatrixExample::Ones10 => 10,
        }
    }

    fn build(self) -> Matrix {
        match self {
            MatrixExample::Identity3 => Matrix::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]),
            MatrixExample::Pair => Matrix::new([[1, 2], [3, 4]]),
            MatrixExample::Sequential4 => Matrix::new([
                [1, 2, 3, 4],
                [5, 6, 7, 8],
                [9, 10, 11, 12],
                [13, 14, 15, 16],
            ]),
            MatrixExample::Lower5 => Matrix::new([
                [2, 0, 0, 0, 0],
                [1, 3, 0, 0, 0],
                [-4, 2, -1, 0, 0],
                [3, -2, 5, 4, 0],
                [6, 1, -3, 2, 5],
            ]),
            MatrixExample::Pascal6 => Matrix::new(pascal::<6>()),
            MatrixExample::Laplacian9 => Matrix::new(banded::<9>(2, -1, 0)),
            MatrixExample::Ones10 => Matrix::new(banded::<10>(2, 1, 1)),
        }
    }
}

impl MatrixSource for MatrixExample {
    fn name(&self) -> &str {
        match self {
            MatrixExample::Identity3 => "identity3",
            MatrixExample::Pair => "pair",
            MatrixExample::Sequential4 => "sequential4",
            MatrixExample::Lower5 => "lower5",
            MatrixExample::Pascal6 => "pascal6",
            MatrixExample::Laplacian9 => "laplacian9",
            MatrixExample::Ones10 => "ones10",
        }
    }

    fn matrix(&self) -> Matrix {
        self.build()
    }

    fn determinant(&self) -> i64 {
        match self {
            MatrixExample::Identity3 => 1,
            MatrixExample::Pair => -2,
            MatrixExample::Sequential4 => 0,
            MatrixExample::Lower5 => -120,
            MatrixExample::Pascal6 => 1,
            MatrixExample::Laplacian9 => 10,
            MatrixExample::Ones10 => 11,
        }
    }
}

/// `C(i + j, i)` for every cell
fn pascal<const N: usize>() -> [[i64; N]; N] {
    let mut rows = [[1_i64; N]; N];
    for i in 1..N {
        for j in 1..N {
            rows[i][j] = rows[i - 1][j] + rows[i][j - 1];
        }
    }
    rows
}

/// `diagonal` on the main diagonal, `neighbour` right next to it and `far`
/// everywhere else
fn banded<const N: usize>(diagonal: i64, neighbour: i64, far: i64) -> [[i64; N]; N] {
    let mut rows = [[far; N]; N];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = match i.abs_diff(j) {
                0 => diagonal,
                1 => neighbour,
                _ => far,
            };
        }
    }
    rows
}
