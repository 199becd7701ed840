//! Error types for minibank

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the minibank application
#[derive(Debug, Error)]
pub enum MinibankError {
    #[error("Not a minibank directory: {0}")]
    NotMinibankDirectory(PathBuf),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Account not found")]
    AccountNotFound(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MinibankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MinibankError::NotMinibankDirectory(_) => 2,
            MinibankError::InsufficientFunds => 3,
            MinibankError::AccountNotFound(_) => 4,
            MinibankError::InvalidAmount(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MinibankError::NotMinibankDirectory(path) => {
                format!(
                    "Not a minibank directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'minibank init' in this directory to create a ledger\n\
                    • Navigate to an existing minibank directory\n\
                    • Set MINIBANK_ROOT environment variable to your ledger path",
                    path.display()
                )
            }
            MinibankError::InsufficientFunds => {
                "Insufficient funds\n\n\
                Suggestions:\n\
                • Check the source balance with 'minibank accounts'\n\
                • Transfer a smaller amount"
                    .to_string()
            }
            MinibankError::AccountNotFound(key) => {
                format!(
                    "Account not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'minibank accounts' to list the known account keys\n\
                    • Account keys are lowercase (e.g., checking, savings)",
                    key
                )
            }
            MinibankError::InvalidAmount(raw) => {
                format!(
                    "Invalid amount: '{}'\n\n\
                    Amounts are decimal numbers, e.g. 125.50",
                    raw
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MinibankError
pub type Result<T> = std::result::Result<T, MinibankError>;
