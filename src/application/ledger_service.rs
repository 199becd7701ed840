//! Ledger store orchestration
//!
//! Owns the in-memory ledger, the persistent state store and the observer
//! list. Collections load independently with per-collection seed fallback,
//! every committed mutation persists all three collections, and change
//! events go out after the data is safely on disk.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{
    seed, ChangeKind, Ledger, LedgerObserver, NotificationDraft, TransactionDraft,
};
use crate::error::Result;
use crate::infrastructure::{
    Config, FileStateStore, StateStore, ACCOUNTS_KEY, NOTIFICATIONS_KEY, TRANSACTIONS_KEY,
};

/// Service for the ledger store
pub struct LedgerService {
    ledger: Ledger,
    store: FileStateStore,
    config: Config,
    observers: Vec<Box<dyn LedgerObserver>>,
}

/// Deserialize one stored collection; missing or malformed payloads fall
/// back to the seed independently of the other collections.
fn load_collection<T: DeserializeOwned>(store: &FileStateStore, key: &str) -> Option<T> {
    let payload = match store.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read stored collection, using seed data");
            return None;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(collection) => Some(collection),
        Err(e) => {
            warn!(key, error = %e, "stored collection is malformed, using seed data");
            None
        }
    }
}

fn write_collection<T: Serialize>(store: &FileStateStore, key: &str, collection: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(collection)?;
    store.write(key, &payload)
}

/// The current instant at millisecond precision, matching the stored
/// representation so persisted and in-memory timestamps compare equal.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

impl LedgerService {
    /// Load the three collections from the store, seeding each one that is
    /// missing or unreadable, then backfill timestamps on records that lack
    /// them. Backfill is the only load step that writes back.
    pub fn load(store: FileStateStore, config: Config) -> Result<Self> {
        let now = now_millis();

        let accounts = load_collection(&store, ACCOUNTS_KEY).unwrap_or_else(seed::default_accounts);
        let transactions = load_collection(&store, TRANSACTIONS_KEY)
            .unwrap_or_else(|| seed::default_transactions(now));
        let notifications = load_collection(&store, NOTIFICATIONS_KEY)
            .unwrap_or_else(|| seed::default_notifications(now));

        let mut service = LedgerService {
            ledger: Ledger::new(accounts, transactions, notifications),
            store,
            config,
            observers: Vec::new(),
        };

        if service.ledger.backfill_timestamps(now) {
            service.persist()?;
        }

        Ok(service)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register an observer; it is invoked after each committed mutation.
    pub fn subscribe(&mut self, observer: Box<dyn LedgerObserver>) {
        self.observers.push(observer);
    }

    /// Serialize all three collections under their fixed keys. Writes are
    /// sequential with no cross-key atomicity; an interrupted persist leaves
    /// the later keys at their previous values.
    pub fn persist(&self) -> Result<()> {
        write_collection(&self.store, ACCOUNTS_KEY, &self.ledger.accounts)?;
        write_collection(&self.store, TRANSACTIONS_KEY, &self.ledger.transactions)?;
        write_collection(&self.store, NOTIFICATIONS_KEY, &self.ledger.notifications)?;
        debug!("persisted ledger state");
        Ok(())
    }

    /// Final persist for host teardown.
    pub fn close(self) -> Result<()> {
        self.persist()
    }

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<()> {
        self.ledger
            .add_transaction(draft, &self.config.currency, now_millis());
        self.persist()?;
        self.emit(ChangeKind::Transactions);
        self.emit(ChangeKind::Notifications);
        Ok(())
    }

    pub fn add_notification(&mut self, draft: NotificationDraft) -> Result<()> {
        self.ledger.add_notification(draft, now_millis());
        self.persist()?;
        self.emit(ChangeKind::Notifications);
        Ok(())
    }

    pub fn update_account_balance(&mut self, key: &str, new_balance: Decimal) -> Result<()> {
        if self.ledger.update_account_balance(key, new_balance) {
            self.persist()?;
            self.emit(ChangeKind::Accounts);
        }
        Ok(())
    }

    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
        description: Option<&str>,
        external: bool,
        recipient: Option<&str>,
    ) -> Result<()> {
        self.ledger.transfer(
            from,
            to,
            amount,
            description,
            external,
            recipient,
            &self.config.currency,
            now_millis(),
        )?;
        self.persist()?;
        self.emit(ChangeKind::Accounts);
        self.emit(ChangeKind::Transactions);
        self.emit(ChangeKind::Notifications);
        Ok(())
    }

    pub fn deposit(&mut self, to: &str, amount: Decimal, description: Option<&str>) -> Result<()> {
        self.ledger
            .deposit(to, amount, description, &self.config.currency, now_millis())?;
        self.persist()?;
        self.emit(ChangeKind::Accounts);
        self.emit(ChangeKind::Transactions);
        self.emit(ChangeKind::Notifications);
        Ok(())
    }

    pub fn unread_count(&self) -> usize {
        self.ledger.unread_count()
    }

    pub fn mark_notification_read(&mut self, id: u64) -> Result<()> {
        self.ledger.mark_notification_read(id);
        // Persists even when the id did not match anything.
        self.persist()?;
        self.emit(ChangeKind::Notifications);
        Ok(())
    }

    pub fn mark_all_notifications_read(&mut self) -> Result<()> {
        self.ledger.mark_all_notifications_read();
        self.persist()?;
        self.emit(ChangeKind::Notifications);
        Ok(())
    }

    /// Recompute relative-time labels in memory. Not a persisted mutation;
    /// only the timestamps are ground truth.
    pub fn refresh_labels(&mut self) {
        self.ledger.refresh_labels(now_millis());
        self.emit(ChangeKind::Transactions);
        self.emit(ChangeKind::Notifications);
    }

    fn emit(&self, kind: ChangeKind) {
        for observer in &self.observers {
            match kind {
                ChangeKind::Accounts => observer.accounts_changed(&self.ledger),
                ChangeKind::Transactions => observer.transactions_changed(&self.ledger),
                ChangeKind::Notifications => observer.notifications_changed(&self.ledger),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn open_service(temp: &TempDir) -> LedgerService {
        let store = FileStateStore::new(temp.path().to_path_buf());
        if !store.is_initialized() {
            store.initialize().unwrap();
        }
        LedgerService::load(store, Config::new()).unwrap()
    }

    #[test]
    fn test_load_seeds_when_store_is_empty() {
        let temp = TempDir::new().unwrap();
        let service = open_service(&temp);

        assert_eq!(service.ledger().accounts.len(), 3);
        assert_eq!(service.ledger().transactions.len(), 1);
        assert_eq!(service.ledger().notifications.len(), 3);
        assert_eq!(service.unread_count(), 3);

        // Seeds are not written back until a mutation happens.
        assert!(!temp.path().join(".minibank/accounts.json").exists());
    }

    #[test]
    fn test_persist_then_reload_round_trips() {
        let temp = TempDir::new().unwrap();

        let mut service = open_service(&temp);
        service.deposit("savings", dec!(120.00), Some("Refund")).unwrap();
        service.mark_notification_read(1).unwrap();
        let before = service.ledger().clone();
        service.close().unwrap();

        let reloaded = open_service(&temp);
        // Ids, timestamps and balances survive exactly; labels recompute
        // from the same timestamps, so the whole state matches.
        assert_eq!(*reloaded.ledger(), before);
    }

    #[test]
    fn test_malformed_collection_falls_back_independently() {
        let temp = TempDir::new().unwrap();

        let mut service = open_service(&temp);
        service.deposit("savings", dec!(50.00), None).unwrap();
        drop(service);

        fs::write(temp.path().join(".minibank/transactions.json"), "not json").unwrap();

        let service = open_service(&temp);
        // Transactions reseeded, accounts untouched by the corruption.
        assert_eq!(service.ledger().transactions.len(), 1);
        assert_eq!(
            service.ledger().transactions[0].name,
            "CSBG Assistant Program Deposit"
        );
        assert_eq!(service.ledger().accounts["savings"].balance, dec!(50.00));
        // The deposit's notifications are also still there.
        assert!(service
            .ledger()
            .notifications
            .iter()
            .any(|n| n.title == "Deposit Received"));
    }

    #[test]
    fn test_backfill_persists_repaired_records() {
        let temp = TempDir::new().unwrap();
        let store = FileStateStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        // A legacy record with a label but no timestamp.
        fs::write(
            temp.path().join(".minibank/transactions.json"),
            r##"[{"id":1,"name":"Old deposit","amount":"10.00","type":"positive","icon":"↓","iconBg":"#e6f7e6","date":"Today"}]"##,
        )
        .unwrap();

        let service = LedgerService::load(store, Config::new()).unwrap();
        assert!(service.ledger().transactions[0].timestamp.is_some());
        assert_eq!(service.ledger().transactions[0].date, "Just now");

        // The repair was written back.
        let payload =
            fs::read_to_string(temp.path().join(".minibank/transactions.json")).unwrap();
        assert!(payload.contains("timestamp"));
    }

    #[test]
    fn test_failed_transfer_changes_nothing_on_disk() {
        let temp = TempDir::new().unwrap();

        let mut service = open_service(&temp);
        service.persist().unwrap();
        let before =
            fs::read_to_string(temp.path().join(".minibank/accounts.json")).unwrap();

        let result = service.transfer("savings", "checking", dec!(9.99), None, false, None);
        assert!(result.is_err());

        let after = fs::read_to_string(temp.path().join(".minibank/accounts.json")).unwrap();
        assert_eq!(before, after);
    }

    struct RecordingObserver {
        events: Rc<RefCell<Vec<&'static str>>>,
    }

    impl LedgerObserver for RecordingObserver {
        fn accounts_changed(&self, _ledger: &Ledger) {
            self.events.borrow_mut().push("accounts");
        }

        fn transactions_changed(&self, _ledger: &Ledger) {
            self.events.borrow_mut().push("transactions");
        }

        fn notifications_changed(&self, _ledger: &Ledger) {
            self.events.borrow_mut().push("notifications");
        }
    }

    #[test]
    fn test_observers_hear_each_mutation() {
        let temp = TempDir::new().unwrap();
        let mut service = open_service(&temp);

        let events = Rc::new(RefCell::new(Vec::new()));
        service.subscribe(Box::new(RecordingObserver {
            events: Rc::clone(&events),
        }));

        service
            .transfer("checking", "savings", dec!(1.00), None, false, None)
            .unwrap();

        assert_eq!(
            *events.borrow(),
            vec!["accounts", "transactions", "notifications"]
        );
    }

    #[test]
    fn test_mutations_work_with_no_observers() {
        let temp = TempDir::new().unwrap();
        let mut service = open_service(&temp);
        service
            .transfer("checking", "savings", dec!(1.00), None, false, None)
            .unwrap();
        assert_eq!(service.ledger().accounts["savings"].balance, dec!(1.00));
    }

    #[test]
    fn test_add_transaction_persists_and_notifies() {
        let temp = TempDir::new().unwrap();
        let mut service = open_service(&temp);

        let events = Rc::new(RefCell::new(Vec::new()));
        service.subscribe(Box::new(RecordingObserver {
            events: Rc::clone(&events),
        }));

        service
            .add_transaction(TransactionDraft {
                name: "Paycheck".to_string(),
                amount: dec!(1250.00),
                kind: TransactionKind::Positive,
                icon: "↓".to_string(),
                icon_bg: "#e6f7e6".to_string(),
            })
            .unwrap();

        assert_eq!(*events.borrow(), vec!["transactions", "notifications"]);
        let payload =
            fs::read_to_string(temp.path().join(".minibank/transactions.json")).unwrap();
        assert!(payload.contains("Paycheck"));
    }

    #[test]
    fn test_add_notification_assigns_next_id() {
        let temp = TempDir::new().unwrap();
        let mut service = open_service(&temp);

        service
            .add_notification(NotificationDraft::unread(
                "Card ready",
                "Your new card has shipped",
                "💳",
            ))
            .unwrap();

        // Three seeded entries, so the new one gets id 4 at the front.
        assert_eq!(service.ledger().notifications[0].id, 4);
        assert_eq!(service.unread_count(), 4);
    }

    #[test]
    fn test_mark_all_read_zeroes_unread_count() {
        let temp = TempDir::new().unwrap();
        let mut service = open_service(&temp);
        assert_eq!(service.unread_count(), 3);
        service.mark_all_notifications_read().unwrap();
        assert_eq!(service.unread_count(), 0);
    }
}
