//! Business logic helpers for managing transactions.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::ledger_store::LedgerStore;
use crate::core::validation::{self, TransactionDraft};
use crate::domain::Transaction;
use crate::errors::Result;

/// Provides validated CRUD helpers over the ledger store.
///
/// Validation always runs before any mutation, so a rejected draft never
/// touches committed state.
pub struct TransactionService;

impl TransactionService {
    /// Validates a draft and appends it, returning the new identifier.
    pub fn add(store: &mut LedgerStore, draft: &TransactionDraft, today: NaiveDate) -> Result<Uuid> {
        let transaction = validation::validate(draft, today)?;
        store.append(transaction)
    }

    /// Validates a draft and replaces the fields of the entry identified by `id`.
    pub fn update(
        store: &mut LedgerStore,
        id: Uuid,
        draft: &TransactionDraft,
        today: NaiveDate,
    ) -> Result<()> {
        let validated = validation::validate(draft, today)?;
        store.update(id, |txn| {
            txn.kind = validated.kind;
            txn.date = validated.date;
            txn.amount = validated.amount;
            txn.description = validated.description.clone();
        })
    }

    /// Removes the entry identified by `id`, returning the removed instance.
    pub fn remove(store: &mut LedgerStore, id: Uuid) -> Result<Transaction> {
        store.remove(id)
    }

    /// Removes every entry.
    pub fn clear(store: &mut LedgerStore) -> Result<()> {
        store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use crate::storage::JsonStorage;
    use tempfile::TempDir;

    fn test_store() -> (LedgerStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("transactions.json"));
        let store = LedgerStore::open(Box::new(storage)).expect("open store");
        (store, temp)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
    }

    #[test]
    fn rejected_draft_leaves_ledger_unchanged() {
        let (mut store, _guard) = test_store();
        let draft = TransactionDraft::new("expense", "2025-01-17", "50", "Groceries");
        let err = TransactionService::add(&mut store, &draft, today())
            .expect_err("future date must be rejected");
        assert!(matches!(err, LedgerError::FutureDate(_)), "unexpected error: {err:?}");
        assert!(store.ledger().is_empty());
    }

    #[test]
    fn update_applies_the_full_rule_set() {
        let (mut store, _guard) = test_store();
        let draft = TransactionDraft::new("expense", "2025-01-10", "20", "Lunch");
        let id = TransactionService::add(&mut store, &draft, today()).unwrap();

        let bad_edit = TransactionDraft::new("expense", "2025-01-10", "0", "Lunch");
        let err = TransactionService::update(&mut store, id, &bad_edit, today())
            .expect_err("zero amount must be rejected");
        assert!(matches!(err, LedgerError::InvalidAmount(_)), "unexpected error: {err:?}");
        assert_eq!(store.ledger().transaction(id).unwrap().amount, 20.0);

        let good_edit = TransactionDraft::new("income", "2025-01-11", "25", "Refund");
        TransactionService::update(&mut store, id, &good_edit, today()).unwrap();
        let txn = store.ledger().transaction(id).unwrap();
        assert_eq!(txn.amount, 25.0);
        assert_eq!(txn.description, "Refund");
    }

    #[test]
    fn remove_returns_deleted_transaction() {
        let (mut store, _guard) = test_store();
        let draft = TransactionDraft::new("income", "2025-01-10", "100", "Gift");
        let id = TransactionService::add(&mut store, &draft, today()).unwrap();

        let removed = TransactionService::remove(&mut store, id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.ledger().transaction(id).is_none());
    }
}
