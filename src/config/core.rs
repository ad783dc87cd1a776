use super::Settings;
use crate::determinant::OverflowPolicy;
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Values given on the command line, applied above every other layer
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub workers: Option<usize>,
    pub overflow: Option<OverflowPolicy>,
}

pub struct CofactorConfig {
    figment: Figment,
}

impl CofactorConfig {
    /// Load configuration, lowest priority first:
    ///
    /// 1. embedded defaults
    /// 2. user config `~/.config/cofactor/config.{toml,json,yaml,yml}`
    /// 3. repository config `cofactor.{toml,json,yaml,yml}`
    /// 4. `custom_config`, when given (must exist)
    /// 5. `COFACTOR_*` environment variables
    /// 6. command-line overrides
    pub fn load(custom_config: Option<&str>, overrides: &ConfigOverrides) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let user_base = Self::user_config_base_path();
        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Toml::file(format!("{user_base}.toml")))
            .merge(Json::file(format!("{user_base}.json")))
            .merge(Yaml::file(format!("{user_base}.yaml")))
            .merge(Yaml::file(format!("{user_base}.yml")))
            .merge(Toml::file("cofactor.toml"))
            .merge(Json::file("cofactor.json"))
            .merge(Yaml::file("cofactor.yaml"))
            .merge(Yaml::file("cofactor.yml"));

        if let Some(path) = custom_config {
            let path = Path::new(path);
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = Self::merge_file(figment, path);
        }

        figment = figment.merge(Env::prefixed("COFACTOR_").split("__"));

        if let Some(workers) = overrides.workers {
            tracing::trace!("CONFIG LOAD: --workers {}", workers);
            figment = figment.merge(Serialized::default("pool.workers", workers));
        }
        if let Some(overflow) = overrides.overflow {
            tracing::trace!("CONFIG LOAD: --overflow {:?}", overflow);
            figment = figment.merge(Serialized::default("arithmetic.overflow", overflow));
        }

        Ok(CofactorConfig { figment })
    }

    /// Merge a file, choosing the format from its extension (TOML otherwise)
    fn merge_file(figment: Figment, path: &Path) -> Figment {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => figment.merge(Json::file(path)),
            "yaml" | "yml" => figment.merge(Yaml::file(path)),
            _ => figment.merge(Toml::file(path)),
        }
    }

    /// Extract and validate the typed settings
    pub fn settings(&self) -> Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .context("Failed to read configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        let value = self.figment.extract_inner(path)?;
        Ok(value)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        let value = self.figment.extract()?;
        Ok(value)
    }

    /// The merged settings rendered as TOML
    pub fn to_toml(&self) -> Result<String> {
        let settings = self.settings()?;
        toml::to_string_pretty(&settings).context("Failed to serialize configuration")
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/cofactor/config", home),
            Err(_) => "~/.config/cofactor/config".to_string(),
        }
    }
}
