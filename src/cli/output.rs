//! Console output for cofactor
//!
//! All user-facing printing goes through [`Output`], which honours the
//! global `--quiet` and `-v` flags. Diagnostics go through `tracing`
//! instead.

use crate::report::{Report, millis};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a category header
    pub fn category(&self, category: &str) {
        if !self.quiet {
            println!("\n{}", style(category).bold().cyan());
        }
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str, highlight: bool) {
        if !self.quiet {
            let styled_value = if highlight {
                style(value).green().bold()
            } else {
                style(value).white()
            };
            println!("  {:<20} {}", style(key).dim(), styled_value);
        }
    }

    /// Print blank line
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Print one timed computation
    ///
    /// A determinant that differs from the known value is flagged with
    /// `ERROR!`, which is shown even in quiet mode.
    pub fn report(&self, report: &Report) {
        if !report.is_match() {
            eprintln!(
                "{} {} on {}: determinant {} but expected {} {}",
                style("✖").red().bold(),
                report.method,
                report.matrix_name,
                report.determinant,
                report.expected.map_or_else(String::new, |e| e.to_string()),
                style("ERROR!").red().bold()
            );
        }
        if self.quiet {
            return;
        }

        let determinant = if report.is_match() {
            style(report.determinant.to_string()).green().bold()
        } else {
            style(format!("{} ERROR!", report.determinant)).red().bold()
        };

        println!("{} {}", style("❯").cyan(), style(&report.method).bold());
        println!("  {:<20} {}", style("Matrix name:").dim(), report.matrix_name);
        println!("  {:<20} {}", style("Matrix dimension:").dim(), report.dimension);
        println!("  {:<20} {}", style("Determinant:").dim(), determinant);
        if let Some(expected) = report.expected {
            println!("  {:<20} {}", style("Expected:").dim(), expected);
        }
        println!(
            "  {:<20} {:.3} ms",
            style("Execution time:").dim(),
            millis(report.elapsed)
        );
    }

    /// Print a one-line comparison of a sequential and a parallel run
    pub fn comparison(&self, sequential: &Report, parallel: &Report) {
        if self.quiet {
            return;
        }

        let sequential_ms = millis(sequential.elapsed);
        let parallel_ms = millis(parallel.elapsed);
        let speedup = if parallel_ms > 0.0 {
            sequential_ms / parallel_ms
        } else {
            0.0
        };
        let icon = if sequential.is_match() && parallel.is_match() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        println!(
            "{} {:<14} {:>3}x{:<3} det={:<8} seq {:>10.3} ms  par {:>10.3} ms  {}",
            icon,
            sequential.matrix_name,
            sequential.dimension,
            sequential.dimension,
            sequential.determinant,
            sequential_ms,
            parallel_ms,
            style(format!("x{speedup:.2}")).yellow().bold()
        );
    }

    /// Create a progress bar counting finished rows
    pub fn progress_bar(&self, len: u64, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(progress_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(progress_style.progress_chars("#>-"));
        }
        pb.set_message(message.to_string());
        pb
    }
}
