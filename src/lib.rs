//! # cofactor - parallel cofactor-expansion determinants
//!
//! Computes the determinant of a square integer matrix by Laplace expansion
//! along the first column. The sequential engine recurses on the calling
//! thread; the parallel engine hands each top-level row term to a fixed-size
//! worker pool and expands the rest sequentially inside the worker.
//!
//! ## Quick Start
//!
//! ```
//! use cofactor::{Matrix, WorkerPool, determinant, determinant_parallel};
//!
//! let matrix = Matrix::new([[2, 0, 1], [1, 3, 2], [1, 1, 2]]);
//! let pool = WorkerPool::new(3);
//!
//! assert_eq!(determinant(&matrix).unwrap(), 6);
//! assert_eq!(determinant_parallel(&matrix, &pool).unwrap(), 6);
//! ```
//!
//! The `cofactor` binary wraps the same engines with layered configuration,
//! a catalog of matrices with known determinants and timing reports.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod determinant;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod report;

pub use cli::{Cli, Output};
pub use determinant::{
    Determinant, Method, OverflowPolicy, determinant, determinant_parallel,
    determinant_parallel_with, determinant_with,
};
pub use error::{Error, Result};
pub use matrix::{Matrix, minor};
pub use parallel::WorkerPool;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
