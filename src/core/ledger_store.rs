use uuid::Uuid;

use crate::domain::{Ledger, Transaction};
use crate::errors::{LedgerError, Result};
use crate::storage::StorageBackend;

/// Facade that owns the in-memory ledger and its persistence backend.
///
/// Every mutating operation persists the full collection synchronously. If
/// the persist fails, the in-memory mutation is rolled back so callers never
/// observe state that was not written out.
pub struct LedgerStore {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl LedgerStore {
    /// Loads the persisted ledger (absent file means empty) and wraps it.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let ledger = storage.load()?;
        Ok(Self { ledger, storage })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Adds to the end of the sequence, then persists.
    pub fn append(&mut self, transaction: Transaction) -> Result<Uuid> {
        let id = transaction.id;
        self.commit(|ledger| {
            ledger.push(transaction);
            Ok(())
        })?;
        tracing::info!(%id, "transaction appended");
        Ok(id)
    }

    /// Removes the entry with the given id, then persists.
    pub fn remove(&mut self, id: Uuid) -> Result<Transaction> {
        let removed = self.commit(|ledger| {
            ledger.remove(id).ok_or(LedgerError::TransactionNotFound(id))
        })?;
        tracing::info!(%id, "transaction removed");
        Ok(removed)
    }

    /// Mutates the entry with the given id in place, then persists.
    pub fn update<F>(&mut self, id: Uuid, mutator: F) -> Result<()>
    where
        F: FnOnce(&mut Transaction),
    {
        self.commit(|ledger| {
            let txn = ledger
                .transaction_mut(id)
                .ok_or(LedgerError::TransactionNotFound(id))?;
            mutator(txn);
            Ok(())
        })?;
        tracing::info!(%id, "transaction updated");
        Ok(())
    }

    /// Empties the sequence, then persists.
    pub fn clear(&mut self) -> Result<()> {
        let removed = self.ledger.len();
        self.commit(|ledger| {
            ledger.clear();
            Ok(())
        })?;
        tracing::info!(removed, "ledger cleared");
        Ok(())
    }

    /// Applies `mutation` and persists; restores the previous ledger state
    /// when the mutation fails or the write does not complete.
    fn commit<T, F>(&mut self, mutation: F) -> Result<T>
    where
        F: FnOnce(&mut Ledger) -> Result<T>,
    {
        let snapshot = self.ledger.clone();
        let outcome = match mutation(&mut self.ledger) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.ledger = snapshot;
                return Err(err);
            }
        };
        if let Err(err) = self.storage.save(&self.ledger) {
            tracing::warn!(error = %err, "persist failed, rolling back in-memory state");
            self.ledger = snapshot;
            return Err(err);
        }
        Ok(outcome)
    }
}
