//! Account model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accounts keyed by a short identifier such as "checking".
pub type Accounts = BTreeMap<String, Account>;

/// A single bank account shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Display name, e.g. "Primary Checking"
    pub name: String,
    pub balance: Decimal,
    /// Masked account number, e.g. "•••• 4582"
    pub number: String,
    /// Icon glyph shown next to the name
    pub icon: String,
}

impl Account {
    pub fn new(name: &str, balance: Decimal, number: &str, icon: &str) -> Self {
        Account {
            name: name.to_string(),
            balance,
            number: number.to_string(),
            icon: icon.to_string(),
        }
    }
}
