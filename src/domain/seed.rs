//! Built-in default records, used only when no persisted data exists

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::relative_time::relative_label;
use crate::domain::{Account, Accounts, Notification, Transaction, TransactionKind};

/// The three seeded accounts.
pub fn default_accounts() -> Accounts {
    let mut accounts = Accounts::new();
    accounts.insert(
        "checking".to_string(),
        Account::new(
            "Primary Checking",
            Decimal::new(500_000_00, 2),
            "•••• 4582",
            "💳",
        ),
    );
    accounts.insert(
        "savings".to_string(),
        Account::new("High-Yield Savings", Decimal::new(0, 2), "•••• 7890", "🏦"),
    );
    accounts.insert(
        "investment".to_string(),
        Account::new("Investment Portfolio", Decimal::new(0, 2), "•••• 1234", "📈"),
    );
    accounts
}

/// A single seeded deposit, dated one day before first load.
pub fn default_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    let timestamp = now - Duration::days(1);
    vec![Transaction {
        id: 1,
        name: "CSBG Assistant Program Deposit".to_string(),
        amount: Decimal::new(500_000_00, 2),
        kind: TransactionKind::Positive,
        icon: "↓".to_string(),
        icon_bg: "#e6f7e6".to_string(),
        timestamp: Some(timestamp),
        date: relative_label(timestamp, now),
    }]
}

/// Three unread notifications referencing the seeded deposit.
pub fn default_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let timestamp = now - Duration::days(1);
    let entries = [
        (
            "Large deposit detected",
            "$500000.00 deposited to Primary Checking",
            "💰",
        ),
        (
            "CSBG Assistant Program",
            "Funds have been successfully deposited",
            "🤝",
        ),
        (
            "Account alert",
            "Your balance has increased significantly",
            "📈",
        ),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(index, (title, subtitle, icon))| Notification {
            id: index as u64 + 1,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            icon: icon.to_string(),
            read: false,
            timestamp: Some(timestamp),
            time: relative_label(timestamp, now),
        })
        .collect()
}
