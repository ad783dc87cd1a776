//! Compute the determinant of one matrix
//!
//! The matrix comes from the built-in catalog (`--example`) or a file
//! (`--file`). Each selected method is timed and reported; the command
//! fails when a result differs from the known determinant.

use super::load_settings;
use crate::catalog::{MatrixExample, MatrixSource};
use crate::cli::Output;
use crate::config::ConfigOverrides;
use crate::determinant::{Determinant, Method, OverflowPolicy};
use crate::matrix::Matrix;
use crate::parallel::ProgressFn;
use crate::report::Report;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::ProgressBar;
use std::path::PathBuf;

const DEFAULT_EXAMPLE: MatrixExample = MatrixExample::Pascal6;

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Built-in example matrix (see `cofactor examples`)
    #[arg(short, long, conflicts_with = "file")]
    pub example: Option<String>,

    /// Matrix file: JSON rows or whitespace-separated text
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Known determinant to check a file matrix against
    #[arg(long, requires = "file", allow_negative_numbers = true)]
    pub expect: Option<i64>,

    /// Expansion method
    #[arg(short, long, value_enum, default_value_t = MethodChoice::Both)]
    pub method: MethodChoice,

    /// Exact number of worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Overflow handling for 64-bit arithmetic
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowPolicy>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodChoice {
    Sequential,
    Parallel,
    Both,
}

impl MethodChoice {
    fn methods(self) -> Vec<Method> {
        match self {
            MethodChoice::Sequential => vec![Method::Sequential],
            MethodChoice::Parallel => vec![Method::Parallel],
            MethodChoice::Both => vec![Method::Sequential, Method::Parallel],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// The matrix to work on and what we know about it
struct Input {
    name: String,
    matrix: Matrix,
    expected: Option<i64>,
}

impl Input {
    fn resolve(args: &ComputeArgs) -> Result<Self> {
        if let Some(path) = &args.file {
            let matrix = Matrix::load(path)
                .with_context(|| format!("Failed to load matrix from {}", path.display()))?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            return Ok(Self {
                name,
                matrix,
                expected: args.expect,
            });
        }

        let example = match &args.example {
            Some(name) => MatrixExample::find(name).with_context(|| {
                format!("Unknown example '{name}'. Run 'cofactor examples' to list them")
            })?,
            None => DEFAULT_EXAMPLE,
        };

        Ok(Self {
            name: example.name().to_string(),
            matrix: example.matrix(),
            expected: Some(example.determinant()),
        })
    }
}

/// Execute the compute command
pub async fn execute(args: ComputeArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let overrides = ConfigOverrides {
        workers: args.workers,
        overflow: args.overflow,
    };
    let settings = load_settings(custom_config, &overrides)?;
    let calculator = settings.determinant();
    let input = Input::resolve(&args)?;
    let text = args.format == OutputFormat::Text;

    if text {
        output.verbose(&format!(
            "{} workers, {:?} arithmetic",
            calculator.pool().workers(),
            calculator.overflow()
        ));
        output.header(&format!(
            "Determinant of {} ({}x{})",
            input.name,
            input.matrix.dimension(),
            input.matrix.dimension()
        ));
    }

    let mut reports = Vec::new();
    for method in args.method.methods() {
        let progress = (text && settings.output.progress && method == Method::Parallel)
            .then(|| output.progress_bar(input.matrix.dimension() as u64, &input.name));

        let mut report = run_blocking(&calculator, &input, method, progress).await?;
        report.expected = input.expected;

        if text {
            output.report(&report);
        }
        reports.push(report);
    }

    if !text {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if reports.iter().any(|report| !report.is_match()) {
        anyhow::bail!("Determinant of {} does not match the expected value", input.name);
    }

    Ok(())
}

/// Run one method on tokio's blocking pool so the runtime stays free
async fn run_blocking(
    calculator: &Determinant,
    input: &Input,
    method: Method,
    progress: Option<ProgressBar>,
) -> Result<Report> {
    let calculator = calculator.clone();
    let matrix = input.matrix.clone();
    let name = input.name.clone();

    let result = tokio::task::spawn_blocking(move || {
        let dimension = matrix.dimension();
        let bar = progress.clone();
        let reporter = move |current: usize, _total: usize, _worker_id: usize| {
            if let Some(bar) = &bar {
                bar.set_position(current as u64);
            }
        };
        let reporter: Option<&ProgressFn<'_>> =
            progress.is_some().then_some(&reporter as &ProgressFn<'_>);

        let report = Report::measure_unchecked(method.name(), &name, dimension, || {
            calculator.compute_with_progress(&matrix, method, reporter)
        });

        if let Some(bar) = &progress {
            bar.finish_and_clear();
        }
        report
    })
    .await
    .context("Determinant task was cancelled")?;

    result.with_context(|| format!("{method} expansion of {} failed", input.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ComputeArgs {
        ComputeArgs {
            example: None,
            file: None,
            expect: None,
            method: MethodChoice::Both,
            workers: Some(2),
            overflow: None,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_default_input_is_catalog_example() {
        let input = Input::resolve(&args()).unwrap();
        assert_eq!(input.name, "pascal6");
        assert_eq!(input.expected, Some(1));
    }

    #[test]
    fn test_unknown_example_is_an_error() {
        let mut args = args();
        args.example = Some("nope".to_string());
        let err = Input::resolve(&args).err().expect("unknown example should fail");
        assert!(err.to_string().contains("Unknown example 'nope'"));
    }

    #[test]
    fn test_method_choice_expands() {
        assert_eq!(
            MethodChoice::Both.methods(),
            vec![Method::Sequential, Method::Parallel]
        );
        assert_eq!(MethodChoice::Parallel.methods(), vec![Method::Parallel]);
    }

    #[tokio::test]
    async fn test_run_blocking_reports_value() {
        let calculator = Determinant::new(crate::parallel::WorkerPool::new(2), OverflowPolicy::Checked);
        let input = Input {
            name: "pair".to_string(),
            matrix: Matrix::new([[1, 2], [3, 4]]),
            expected: Some(-2),
        };

        let report = run_blocking(&calculator, &input, Method::Parallel, None)
            .await
            .unwrap();
        assert_eq!(report.determinant, -2);
        assert_eq!(report.method, "parallel");
    }
}
