//! Version command implementation
//!
//! Displays version information about cofactor.

use crate::cli::Output;
use crate::{PKG_DESCRIPTION, PKG_NAME, VERSION};
use anyhow::Result;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let authors = env!("CARGO_PKG_AUTHORS");

    output.header(&format!("{PKG_NAME} v{VERSION}"));

    output.category("About");
    output.key_value("Description:", PKG_DESCRIPTION, false);
    output.key_value("Authors:", authors, false);
    output.blank_line();

    output.category("Build Information");
    output.key_value("Rust edition:", "2024", false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );
    output.key_value("Available cores:", &num_cpus::get().to_string(), false);

    if let Ok(timestamp) = std::env::var("BUILD_TIMESTAMP") {
        output.key_value("Built at:", &timestamp, false);
    }

    output.blank_line();
    output.info(&format!("Run '{PKG_NAME} --help' for usage information"));

    Ok(())
}
