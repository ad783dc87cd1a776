//! Determinants by Laplace cofactor expansion along the first column
//!
//! Two engines compute the same value:
//!
//! - [`determinant`]: plain recursion on the calling thread
//! - [`determinant_parallel`]: the outermost row expansion runs as one task
//!   per row on a [`WorkerPool`]; every deeper level is sequential inside
//!   the worker that picked up the row
//!
//! [`Determinant`] bundles a pool and an [`OverflowPolicy`] so callers can
//! pick an engine by [`Method`].

mod arithmetic;
mod parallel;
mod sequential;

pub use arithmetic::OverflowPolicy;
pub use parallel::{determinant_parallel, determinant_parallel_with};
pub use sequential::{determinant, determinant_with};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::parallel::{ProgressFn, WorkerPool};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which engine to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Sequential,
    Parallel,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Sequential => "sequential",
            Method::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured determinant calculator
#[derive(Debug, Clone)]
pub struct Determinant {
    pool: WorkerPool,
    overflow: OverflowPolicy,
}

impl Determinant {
    pub fn new(pool: WorkerPool, overflow: OverflowPolicy) -> Self {
        Self { pool, overflow }
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    pub fn compute(&self, matrix: &Matrix, method: Method) -> Result<i64> {
        self.compute_with_progress(matrix, method, None)
    }

    /// Like [`Determinant::compute`]; `progress` only fires for
    /// [`Method::Parallel`], once per top-level row
    pub fn compute_with_progress(
        &self,
        matrix: &Matrix,
        method: Method,
        progress: Option<&ProgressFn<'_>>,
    ) -> Result<i64> {
        match method {
            Method::Sequential => determinant_with(matrix, self.overflow),
            Method::Parallel => {
                determinant_parallel_with(matrix, &self.pool, self.overflow, progress)
            }
        }
    }
}

impl Default for Determinant {
    fn default() -> Self {
        Self::new(WorkerPool::default(), OverflowPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_methods_agree() {
        let calculator = Determinant::new(WorkerPool::new(2), OverflowPolicy::Checked);
        let matrix = Matrix::new([[3, 1, 4, 1], [5, 9, 2, 6], [5, 3, 5, 8], [9, 7, 9, 3]]);

        let sequential = calculator.compute(&matrix, Method::Sequential).unwrap();
        let parallel = calculator.compute(&matrix, Method::Parallel).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_overflow_policy_is_applied() {
        let matrix = Matrix::new([[i64::MAX, 0], [0, 2]]);

        let checked = Determinant::new(WorkerPool::new(2), OverflowPolicy::Checked);
        assert!(checked.compute(&matrix, Method::Parallel).is_err());

        let wrapping = Determinant::new(WorkerPool::new(2), OverflowPolicy::Wrapping);
        assert_eq!(
            wrapping.compute(&matrix, Method::Parallel).unwrap(),
            i64::MAX.wrapping_mul(2)
        );
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Sequential.to_string(), "sequential");
        assert_eq!(Method::Parallel.name(), "parallel");
    }
}
