//! Command implementations for the cofactor CLI
//!
//! Each command is organized into its own module.

pub mod bench;
pub mod compute;
pub mod config;
pub mod examples;
pub mod version;

use crate::config::{CofactorConfig, ConfigOverrides, Settings};
use anyhow::Result;

/// Load and validate settings with command-line overrides on top
pub(crate) fn load_settings(
    custom_config: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<Settings> {
    CofactorConfig::load(custom_config, overrides)?.settings()
}
