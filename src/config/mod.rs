//! Configuration management for cofactor
//!
//! Settings are layered with figment (see [`CofactorConfig::load`]) and then
//! extracted into the typed [`Settings`] structure, which is validated before
//! use.

use crate::determinant::{Determinant, OverflowPolicy};
use crate::parallel::WorkerPool;
use anyhow::Result;
use serde::{Deserialize, Serialize};

mod core;

pub use core::{CofactorConfig, ConfigOverrides};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Worker pool sizing
    #[serde(default)]
    pub pool: PoolSettings,

    /// Integer arithmetic behaviour
    #[serde(default)]
    pub arithmetic: ArithmeticSettings,

    /// Console output
    #[serde(default)]
    pub output: OutputSettings,
}

/// Worker pool sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSettings {
    /// Exact worker count (0 = derive from available cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum number of worker threads when deriving (0 = no limit)
    #[serde(default)]
    pub max_threads: usize,

    /// Percentage of CPU cores to use when deriving (1-100)
    #[serde(default = "default_thread_percentage")]
    pub thread_percentage: u8,
}

fn default_thread_percentage() -> u8 {
    100
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticSettings {
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Show a progress bar while parallel rows complete
    #[serde(default = "default_progress")]
    pub progress: bool,
}

fn default_progress() -> bool {
    true
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            workers: 0,
            max_threads: 0,
            thread_percentage: default_thread_percentage(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            progress: default_progress(),
        }
    }
}

impl PoolSettings {
    /// Build the worker pool these settings describe
    pub fn worker_pool(&self) -> WorkerPool {
        if self.workers > 0 {
            WorkerPool::new(self.workers)
        } else {
            WorkerPool::from_limits(self.max_threads, self.thread_percentage)
        }
    }
}

impl Settings {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.pool.thread_percentage) {
            anyhow::bail!(
                "pool.thread_percentage must be between 1 and 100, got {}",
                self.pool.thread_percentage
            );
        }

        Ok(())
    }

    /// A determinant calculator wired with the configured pool and policy
    pub fn determinant(&self) -> Determinant {
        Determinant::new(self.pool.worker_pool(), self.arithmetic.overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.pool.thread_percentage, 100);
        assert_eq!(settings.arithmetic.overflow, OverflowPolicy::Checked);
        assert!(settings.output.progress);
    }

    #[test]
    fn test_thread_percentage_bounds() {
        let mut settings = Settings::default();
        settings.pool.thread_percentage = 0;
        assert!(settings.validate().is_err());

        settings.pool.thread_percentage = 101;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("thread_percentage"));
    }

    #[test]
    fn test_explicit_workers_win() {
        let pool = PoolSettings {
            workers: 3,
            max_threads: 1,
            thread_percentage: 10,
        };
        assert_eq!(pool.worker_pool().workers(), 3);
    }

    #[test]
    fn test_derived_workers_respect_max_threads() {
        let pool = PoolSettings {
            workers: 0,
            max_threads: 1,
            thread_percentage: 100,
        };
        assert_eq!(pool.worker_pool().workers(), 1);
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let settings: Settings = toml::from_str("[pool]\nworkers = 2\n").unwrap();
        assert_eq!(settings.pool.workers, 2);
        assert_eq!(settings.pool.thread_percentage, 100);
        assert!(settings.output.progress);
    }
}
