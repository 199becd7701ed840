//! Transaction model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a statement entry credits or debits the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Positive,
    Negative,
}

/// A statement entry. The ledger keeps these newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique within the collection, strictly increasing in assignment order
    pub id: u64,
    pub name: String,
    /// Signed amount; positive credits, negative debits
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub icon: String,
    #[serde(rename = "iconBg")]
    pub icon_bg: String,
    /// Creation instant, ms since the epoch on the wire. Records inherited
    /// from older stores may lack it until the backfill pass runs.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Cached relative-time label, recomputable from `timestamp`
    #[serde(default)]
    pub date: String,
}

/// Payload for a new transaction before the ledger assigns id, timestamp
/// and label.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub name: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub icon: String,
    pub icon_bg: String,
}
