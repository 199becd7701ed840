//! File system state store

use crate::error::{MinibankError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed storage key for the accounts collection
pub const ACCOUNTS_KEY: &str = "accounts";
/// Fixed storage key for the transactions collection
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Fixed storage key for the notifications collection
pub const NOTIFICATIONS_KEY: &str = "notifications";

/// Abstract key-value store for serialized ledger collections
pub trait StateStore {
    /// Read the payload stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the payload stored under `key`
    fn write(&self, key: &str, payload: &str) -> Result<()>;
}

/// File system implementation of StateStore
///
/// Each key maps to one JSON document under `<root>/.minibank/`.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    pub root: PathBuf,
}

impl FileStateStore {
    /// Create a new store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        FileStateStore { root }
    }

    /// Discover the ledger root by walking up from the current directory
    /// First checks the MINIBANK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check MINIBANK_ROOT environment variable first
        if let Ok(root_path) = std::env::var("MINIBANK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileStateStore::new(path));
            } else {
                return Err(MinibankError::Config(format!(
                    "MINIBANK_ROOT is set to '{}' but no .minibank directory found. \
                    Run 'minibank init' in that directory or unset MINIBANK_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the ledger root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileStateStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .minibank
                    return Err(MinibankError::NotMinibankDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .minibank directory
    fn has_data_dir(path: &Path) -> bool {
        path.join(".minibank").is_dir()
    }

    /// The directory holding the serialized collections and config
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".minibank")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// Check if .minibank directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    /// Create the .minibank directory structure
    pub fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(MinibankError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&data_dir)?;
        Ok(())
    }

    /// Load configuration from .minibank/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .minibank/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }
}

impl StateStore for FileStateStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(MinibankError::Io)
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let data_dir = self.data_dir();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
        }

        fs::write(self.key_path(key), payload).map_err(MinibankError::Io)
    }
}
