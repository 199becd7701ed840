//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{
    FileStateStore, StateStore, ACCOUNTS_KEY, NOTIFICATIONS_KEY, TRANSACTIONS_KEY,
};
