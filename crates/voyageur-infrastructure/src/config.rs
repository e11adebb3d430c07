//! Application configuration.
//!
//! Loaded from `config.toml` in the config directory; an absent file falls
//! back to defaults so a fresh install needs no setup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use voyageur_core::error::Result;

use crate::paths::VoyageurPaths;

const DEFAULT_PLANNER_DELAY_MS: u64 = 1500;

/// Voyageur application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageurConfig {
    /// Overrides the platform data directory when set.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Simulated latency of trip-plan generation, in milliseconds.
    #[serde(default = "default_planner_delay_ms")]
    pub planner_delay_ms: u64,
}

fn default_planner_delay_ms() -> u64 {
    DEFAULT_PLANNER_DELAY_MS
}

impl Default for VoyageurConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            planner_delay_ms: DEFAULT_PLANNER_DELAY_MS,
        }
    }
}

impl VoyageurConfig {
    /// Loads configuration from `path`, defaulting when the file is absent.
    ///
    /// A present but malformed file is an error; silently ignoring a typo'd
    /// config would be worse than refusing to start.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads configuration from the platform config file.
    pub fn load_default() -> Result<Self> {
        Self::load(&VoyageurPaths::config_file()?)
    }

    /// The effective data directory: the configured override, or the
    /// platform default.
    pub fn effective_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => VoyageurPaths::data_dir(),
        }
    }

    /// The simulated planner latency as a [`Duration`].
    pub fn planner_delay(&self) -> Duration {
        Duration::from_millis(self.planner_delay_ms)
    }
}
