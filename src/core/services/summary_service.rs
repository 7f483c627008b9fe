use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{Ledger, Transaction, TransactionKind};

/// Running totals over the full ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums income and expenses over the whole ledger. Empty ledger is all
    /// zeros; balance is income minus expenses.
    pub fn totals(ledger: &Ledger) -> LedgerTotals {
        let mut totals = LedgerTotals::default();
        for txn in ledger.transactions() {
            match txn.kind {
                TransactionKind::Income => totals.income += txn.amount,
                TransactionKind::Expense => totals.expenses += txn.amount,
            }
        }
        totals.balance = totals.income - totals.expenses;
        totals
    }

    /// Buckets transactions by date. Keys iterate in ascending date order;
    /// each bucket preserves the ledger's insertion order.
    pub fn group_by_date(ledger: &Ledger) -> BTreeMap<NaiveDate, Vec<&Transaction>> {
        let mut groups: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();
        for txn in ledger.transactions() {
            groups.entry(txn.date).or_default().push(txn);
        }
        groups
    }

    pub fn is_low_balance(balance: f64, threshold: f64) -> bool {
        balance < threshold
    }
}
