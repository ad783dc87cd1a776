//! Configuration command implementations

use super::load_settings;
use crate::cli::{ConfigCommands, Output};
use crate::config::{CofactorConfig, ConfigOverrides};
use anyhow::Result;

/// Execute config commands
pub async fn execute(cmd: ConfigCommands, custom_config: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { section, json } => show(custom_config, section.as_deref(), json),
        ConfigCommands::Validate => validate(custom_config, output),
    }
}

fn show(custom_config: Option<&str>, section: Option<&str>, json: bool) -> Result<()> {
    let config = CofactorConfig::load(custom_config, &ConfigOverrides::default())?;

    // Printed even with --quiet: the merged config is the command's output
    match (section, json) {
        (Some(section), _) => {
            let value = config.get_section(section)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        (None, true) => println!("{}", serde_json::to_string_pretty(&config.get_full_config()?)?),
        (None, false) => print!("{}", config.to_toml()?),
    }
    Ok(())
}

fn validate(custom_config: Option<&str>, output: &Output) -> Result<()> {
    let settings = load_settings(custom_config, &ConfigOverrides::default())?;
    let pool = settings.pool.worker_pool();

    output.success("Configuration is valid");
    output.key_value("Workers:", &pool.workers().to_string(), true);
    output.key_value(
        "Overflow:",
        &format!("{:?}", settings.arithmetic.overflow).to_lowercase(),
        false,
    );
    output.key_value("Progress bar:", &settings.output.progress.to_string(), false);
    Ok(())
}
