use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::transaction::Transaction;

/// Insertion-ordered collection of transactions.
///
/// Round-trips as a bare JSON array, matching the collaborator-facing file
/// format: no envelope, no version field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    /// Appends to the end of the sequence, preserving insertion order.
    pub fn push(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    /// Removes the entry with the given id, returning the removed instance.
    pub fn remove(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::NaiveDate;

    fn sample(amount: f64) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            amount,
            "Coffee",
        )
    }

    #[test]
    fn remove_targets_by_id_not_field_values() {
        let mut ledger = Ledger::new();
        let first = ledger.push(sample(3.5));
        let second = ledger.push(sample(3.5));

        let removed = ledger.remove(first).expect("first entry should be removed");
        assert_eq!(removed.id, first);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions()[0].id, second);
    }

    #[test]
    fn serializes_as_bare_array() {
        let mut ledger = Ledger::new();
        ledger.push(sample(12.0));
        let json = serde_json::to_value(&ledger).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
