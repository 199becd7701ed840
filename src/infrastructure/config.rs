//! Configuration management

use crate::error::{MinibankError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default refresh period for relative-time labels, in seconds
pub const DEFAULT_REFRESH_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Currency symbol used in formatted amounts
    pub currency: String,
    /// Period of the watch command's label refresh, in seconds
    pub refresh_secs: u64,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            currency: "$".to_string(),
            refresh_secs: DEFAULT_REFRESH_SECS,
            created: Utc::now(),
        }
    }

    /// Load config from .minibank/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".minibank").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MinibankError::NotMinibankDirectory(path.to_path_buf())
            } else {
                MinibankError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .minibank/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(".minibank");
        let config_path = data_dir.join("config.toml");

        // Ensure .minibank directory exists
        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
