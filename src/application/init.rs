//! Initialize ledger use case

use crate::application::LedgerService;
use crate::error::Result;
use crate::infrastructure::{Config, FileStateStore};
use std::fs;
use std::path::Path;

/// Initialize a new ledger at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create store for this path
    let store = FileStateStore::new(path.to_path_buf());

    // Initialize .minibank directory
    store.initialize()?;

    // Create default config
    let config = Config::new();

    // Save config
    store.save_config(&config)?;

    // Seed the three collections and write them out so the first command
    // starts from a known on-disk state.
    let service = LedgerService::load(store, config)?;
    service.close()?;

    println!("Initialized minibank ledger at {}", path.display());

    Ok(())
}
