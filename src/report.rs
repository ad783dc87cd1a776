//! Timing and checking a single determinant computation

use crate::catalog::MatrixSource;
use crate::error::Result;
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

/// Outcome of one timed computation
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub method: String,
    pub matrix_name: String,
    pub dimension: usize,
    pub determinant: i64,
    /// Known value to check against, when there is one
    pub expected: Option<i64>,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl Report {
    /// Time `computation` and check it against the source's known determinant
    pub fn measure<S, F>(method: &str, source: &S, computation: F) -> Result<Self>
    where
        S: MatrixSource + ?Sized,
        F: FnOnce() -> Result<i64>,
    {
        let dimension = source.matrix().dimension();
        let mut report = Self::measure_unchecked(method, source.name(), dimension, computation)?;
        report.expected = Some(source.determinant());
        Ok(report)
    }

    /// Time `computation` for a matrix with no known determinant
    pub fn measure_unchecked<F>(
        method: &str,
        matrix_name: &str,
        dimension: usize,
        computation: F,
    ) -> Result<Self>
    where
        F: FnOnce() -> Result<i64>,
    {
        let start = Instant::now();
        let determinant = computation()?;
        let elapsed = start.elapsed();

        tracing::info!(
            "{} on {} ({}x{}) = {} in {:.3}ms",
            method,
            matrix_name,
            dimension,
            dimension,
            determinant,
            millis(elapsed)
        );

        Ok(Self {
            method: method.to_string(),
            matrix_name: matrix_name.to_string(),
            dimension,
            determinant,
            expected: None,
            elapsed,
        })
    }

    /// `false` only when a known value exists and differs
    pub fn is_match(&self) -> bool {
        self.expected.is_none_or(|expected| expected == self.determinant)
    }
}

/// Fractional milliseconds
pub fn millis(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}

fn serialize_millis<S: Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(millis(*elapsed))
}
