//! Time sequential against parallel expansion on the built-in examples
//!
//! Every example up to `--max-dimension` is computed with both engines.
//! The run fails if any engine disagrees with an example's known value.

use super::load_settings;
use crate::catalog::{MatrixExample, MatrixSource};
use crate::cli::Output;
use crate::config::ConfigOverrides;
use crate::determinant::{Determinant, Method, OverflowPolicy};
use crate::report::Report;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Exact number of worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Skip examples larger than this
    #[arg(long, default_value_t = 10)]
    pub max_dimension: usize,

    /// Overflow handling for 64-bit arithmetic
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowPolicy>,
}

/// Execute the bench command
pub async fn execute(args: BenchArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let overrides = ConfigOverrides {
        workers: args.workers,
        overflow: args.overflow,
    };
    let calculator = load_settings(custom_config, &overrides)?.determinant();

    let examples: Vec<MatrixExample> = MatrixExample::all()
        .filter(|example| example.dimension() <= args.max_dimension)
        .collect();
    if examples.is_empty() {
        output.warning(&format!(
            "No example has dimension {} or less",
            args.max_dimension
        ));
        return Ok(());
    }

    output.header(&format!(
        "Sequential vs parallel on {} workers",
        calculator.pool().workers()
    ));

    let mut mismatches = Vec::new();
    for example in examples {
        let sequential = measure(&calculator, example, Method::Sequential).await?;
        let parallel = measure(&calculator, example, Method::Parallel).await?;

        output.comparison(&sequential, &parallel);
        for report in [&sequential, &parallel] {
            if !report.is_match() {
                output.report(report);
                mismatches.push(format!("{} ({})", report.matrix_name, report.method));
            }
        }
    }

    if !mismatches.is_empty() {
        anyhow::bail!("Wrong determinant for {}", mismatches.join(", "));
    }

    output.blank_line();
    output.success("All determinants match their known values");
    Ok(())
}

async fn measure(calculator: &Determinant, example: MatrixExample, method: Method) -> Result<Report> {
    let calculator = calculator.clone();

    tokio::task::spawn_blocking(move || {
        let matrix = example.matrix();
        Report::measure(method.name(), &example, || calculator.compute(&matrix, method))
    })
    .await
    .context("Benchmark task was cancelled")?
    .with_context(|| format!("{method} expansion of {} failed", example.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::WorkerPool;

    #[tokio::test]
    async fn test_measure_checks_catalog_value() {
        let calculator = Determinant::new(WorkerPool::new(2), OverflowPolicy::Checked);
        let report = measure(&calculator, MatrixExample::Lower5, Method::Parallel)
            .await
            .unwrap();
        assert_eq!(report.determinant, -120);
        assert_eq!(report.expected, Some(-120));
        assert!(report.is_match());
    }
}
