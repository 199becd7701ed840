//! Domain layer - Ledger models and core operations

pub mod account;
pub mod events;
pub mod ledger;
pub mod money;
pub mod notification;
pub mod relative_time;
pub mod seed;
pub mod transaction;

pub use account::{Account, Accounts};
pub use events::{ChangeKind, LedgerObserver};
pub use ledger::Ledger;
pub use notification::{Notification, NotificationDraft};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
