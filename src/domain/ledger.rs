//! The ledger: three in-memory collections and the operations that mutate
//! them. Persistence and change events are layered on top by the
//! application service; everything here is pure state manipulation with an
//! injected clock.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::money::format_money;
use crate::domain::relative_time::relative_label;
use crate::domain::{
    Accounts, Notification, NotificationDraft, Transaction, TransactionDraft, TransactionKind,
};
use crate::error::{MinibankError, Result};

/// In-memory state of the three collections.
///
/// Transactions and notifications are ordered newest first. Ids are unique
/// per collection and strictly increasing in assignment order, which is not
/// the array order because new records go to the front.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ledger {
    pub accounts: Accounts,
    pub transactions: Vec<Transaction>,
    pub notifications: Vec<Notification>,
}

impl Ledger {
    pub fn new(
        accounts: Accounts,
        transactions: Vec<Transaction>,
        notifications: Vec<Notification>,
    ) -> Self {
        Ledger {
            accounts,
            transactions,
            notifications,
        }
    }

    fn next_transaction_id(&self) -> u64 {
        self.transactions
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    fn next_notification_id(&self) -> u64 {
        self.notifications
            .iter()
            .map(|n| n.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Insert a transaction at the front, assigning id, timestamp and label,
    /// and add the notification derived from it ("Deposit Received" for
    /// credits, "Transfer Sent" for debits).
    pub fn add_transaction(
        &mut self,
        draft: TransactionDraft,
        currency: &str,
        now: DateTime<Utc>,
    ) {
        let (sign, title, icon) = match draft.kind {
            TransactionKind::Positive => ('+', "Deposit Received", "↓"),
            TransactionKind::Negative => ('-', "Transfer Sent", "→"),
        };
        let derived = NotificationDraft::unread(
            title,
            &format!(
                "{}{} - {}",
                sign,
                format_money(currency, draft.amount.abs()),
                draft.name
            ),
            icon,
        );

        let id = self.next_transaction_id();
        self.transactions.insert(
            0,
            Transaction {
                id,
                name: draft.name,
                amount: draft.amount,
                kind: draft.kind,
                icon: draft.icon,
                icon_bg: draft.icon_bg,
                timestamp: Some(now),
                date: relative_label(now, now),
            },
        );
        self.add_notification(derived, now);
    }

    /// Insert a notification at the front, assigning id, timestamp and label.
    pub fn add_notification(&mut self, draft: NotificationDraft, now: DateTime<Utc>) {
        let id = self.next_notification_id();
        self.notifications.insert(
            0,
            Notification {
                id,
                title: draft.title,
                subtitle: draft.subtitle,
                icon: draft.icon,
                read: draft.read,
                timestamp: Some(now),
                time: relative_label(now, now),
            },
        );
    }

    /// Replace the balance of an existing account. Unknown keys are ignored;
    /// returns whether anything changed.
    pub fn update_account_balance(&mut self, key: &str, new_balance: Decimal) -> bool {
        match self.accounts.get_mut(key) {
            Some(account) => {
                account.balance = new_balance;
                true
            }
            None => false,
        }
    }

    /// Move `amount` out of `from`. Internal transfers credit the
    /// destination account; external ones only name the recipient.
    ///
    /// A missing source and an underfunded source both report insufficient
    /// funds, and either leaves the ledger untouched.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
        description: Option<&str>,
        external: bool,
        recipient: Option<&str>,
        currency: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        match self.accounts.get_mut(from) {
            Some(source) if source.balance >= amount => source.balance -= amount,
            _ => return Err(MinibankError::InsufficientFunds),
        }

        let to_name = match (external, self.accounts.get_mut(to)) {
            (false, Some(destination)) => {
                destination.balance += amount;
                destination.name.clone()
            }
            _ => recipient.unwrap_or("External Account").to_string(),
        };

        // Only the source side gets a statement entry; an internal
        // destination's balance changes without one.
        self.add_transaction(
            TransactionDraft {
                name: description.unwrap_or("Transfer").to_string(),
                amount: -amount,
                kind: TransactionKind::Negative,
                icon: "→".to_string(),
                icon_bg: "#ffe8e8".to_string(),
            },
            currency,
            now,
        );

        self.add_notification(
            NotificationDraft::unread(
                "Transfer Completed",
                &format!("{} transferred to {}", format_money(currency, amount), to_name),
                "⇄",
            ),
            now,
        );
        Ok(())
    }

    /// Credit `amount` to an existing account and record the deposit.
    pub fn deposit(
        &mut self,
        to: &str,
        amount: Decimal,
        description: Option<&str>,
        currency: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let to_name = match self.accounts.get_mut(to) {
            Some(destination) => {
                destination.balance += amount;
                destination.name.clone()
            }
            None => return Err(MinibankError::AccountNotFound(to.to_string())),
        };

        self.add_transaction(
            TransactionDraft {
                name: description.unwrap_or("Deposit").to_string(),
                amount,
                kind: TransactionKind::Positive,
                icon: "↓".to_string(),
                icon_bg: "#e6f7e6".to_string(),
            },
            currency,
            now,
        );

        self.add_notification(
            NotificationDraft::unread(
                "Deposit Received",
                &format!("{} deposited to {}", format_money(currency, amount), to_name),
                "⇩",
            ),
            now,
        );
        Ok(())
    }

    /// Count of notifications not yet read.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Mark the first notification with this id as read. Unknown ids are
    /// ignored; returns whether anything changed.
    pub fn mark_notification_read(&mut self, id: u64) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every notification as read.
    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    /// Recompute every cached label from its stored timestamp. Timestamps
    /// themselves are never reassigned here.
    pub fn refresh_labels(&mut self, now: DateTime<Utc>) {
        for transaction in &mut self.transactions {
            if let Some(timestamp) = transaction.timestamp {
                transaction.date = relative_label(timestamp, now);
            }
        }
        for notification in &mut self.notifications {
            if let Some(timestamp) = notification.timestamp {
                notification.time = relative_label(timestamp, now);
            }
        }
    }

    /// Assign timestamps to records that lack one, walking back one hour per
    /// position from the front of each collection (index 0 is the most
    /// recent), and recompute their labels. Returns whether anything changed.
    pub fn backfill_timestamps(&mut self, now: DateTime<Utc>) -> bool {
        let mut changed = false;
        for (index, transaction) in self.transactions.iter_mut().enumerate() {
            if transaction.timestamp.is_none() {
                let timestamp = now - Duration::hours(index as i64);
                transaction.timestamp = Some(timestamp);
                transaction.date = relative_label(timestamp, now);
                changed = true;
            }
        }
        for (index, notification) in self.notifications.iter_mut().enumerate() {
            if notification.timestamp.is_none() {
                let timestamp = now - Duration::hours(index as i64);
                notification.timestamp = Some(timestamp);
                notification.time = relative_label(timestamp, now);
                changed = true;
            }
        }
        changed
    }
}
