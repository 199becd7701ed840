//! minibank - Demo banking ledger with persistent local state
//!
//! Maintains mock account, transaction, and notification records in a
//! local key-value store, with relative-time labels derived from stored
//! timestamps and change events for a host presentation layer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MinibankError;
