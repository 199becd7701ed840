//! Config management use case

use crate::error::{MinibankError, Result};
use crate::infrastructure::{Config, FileStateStore};

/// Service for managing ledger configuration
pub struct ConfigService {
    store: FileStateStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStateStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "currency" => Ok(config.currency.clone()),
            "refresh" => Ok(config.refresh_secs.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MinibankError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: currency, refresh, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "currency" => {
                if value.is_empty() {
                    return Err(MinibankError::Config(
                        "Currency symbol cannot be empty".to_string(),
                    ));
                }
                config.currency = value.to_string();
            }
            "refresh" => {
                let secs: u64 = value.parse().map_err(|_| {
                    MinibankError::Config(format!(
                        "Invalid refresh period: '{}'. Expected seconds, e.g. 60",
                        value
                    ))
                })?;
                if secs == 0 {
                    return Err(MinibankError::Config(
                        "Refresh period must be at least 1 second".to_string(),
                    ));
                }
                config.refresh_secs = secs;
            }
            "created" => {
                return Err(MinibankError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MinibankError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: currency, refresh",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
