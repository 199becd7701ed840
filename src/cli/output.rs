//! Output formatting utilities

use crate::domain::money::format_money;
use crate::domain::{
    Accounts, Ledger, LedgerObserver, Notification, Transaction, TransactionKind,
};

/// Format the account cards for display
pub fn format_account_cards(accounts: &Accounts, currency: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found".to_string();
    }

    let mut output = String::new();
    for (key, account) in accounts {
        output.push_str(&format!(
            "{} {} ({})  {}  {}\n",
            account.icon,
            account.name,
            key,
            account.number,
            format_money(currency, account.balance)
        ));
    }
    output
}

/// Format the statement for display, newest first
pub fn format_transaction_list(
    transactions: &[Transaction],
    currency: &str,
    limit: Option<usize>,
) -> String {
    if transactions.is_empty() {
        return "No transactions found".to_string();
    }

    let shown = match limit {
        Some(n) => &transactions[..n.min(transactions.len())],
        None => transactions,
    };

    let mut output = String::new();
    for transaction in shown {
        let sign = match transaction.kind {
            TransactionKind::Positive => '+',
            TransactionKind::Negative => '-',
        };
        output.push_str(&format!(
            "#{:<4} {}  {}{}  {}  ({})\n",
            transaction.id,
            transaction.icon,
            sign,
            format_money(currency, transaction.amount.abs()),
            transaction.name,
            transaction.date
        ));
    }
    output
}

/// Format the notification list with its unread badge header
pub fn format_notification_list(notifications: &[Notification], unread_only: bool) -> String {
    let unread = notifications.iter().filter(|n| !n.read).count();
    let mut output = format!("Notifications ({} unread)\n", unread);

    let shown: Vec<&Notification> = notifications
        .iter()
        .filter(|n| !unread_only || !n.read)
        .collect();

    if shown.is_empty() {
        output.push_str("No notifications found\n");
        return output;
    }

    for notification in shown {
        let marker = if notification.read { ' ' } else { '●' };
        output.push_str(&format!(
            "{} #{:<4} {} {} - {} ({})\n",
            marker,
            notification.id,
            notification.icon,
            notification.title,
            notification.subtitle,
            notification.time
        ));
    }
    output
}

/// Renders collections to stdout as the ledger reports changes.
///
/// This is the host-side subscriber for the watch command; one-shot
/// commands format their output directly instead.
pub struct StdoutRenderer {
    currency: String,
}

impl StdoutRenderer {
    pub fn new(currency: String) -> Self {
        StdoutRenderer { currency }
    }
}

impl LedgerObserver for StdoutRenderer {
    fn accounts_changed(&self, ledger: &Ledger) {
        print!("{}", format_account_cards(&ledger.accounts, &self.currency));
    }

    fn transactions_changed(&self, ledger: &Ledger) {
        // The dashboard shows only the most recent entries.
        print!(
            "{}",
            format_transaction_list(&ledger.transactions, &self.currency, Some(5))
        );
    }

    fn notifications_changed(&self, ledger: &Ledger) {
        print!("{}", format_notification_list(&ledger.notifications, false));
    }
}
