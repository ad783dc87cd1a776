//! List the built-in example matrices

use crate::catalog::{MatrixExample, MatrixSource};
use crate::cli::Output;
use anyhow::Result;

/// Execute the examples command
pub async fn execute(output: &Output) -> Result<()> {
    output.header("Built-in example matrices");

    for example in MatrixExample::all() {
        let size = format!("{0}x{0}", example.dimension());
        output.key_value(
            example.name(),
            &format!("{size:<7} det = {}", example.determinant()),
            false,
        );

        output.verbose(&format!("\n{}", example.matrix()));
    }

    output.blank_line();
    output.info("Compute one with 'cofactor compute --example <NAME>'");
    Ok(())
}
