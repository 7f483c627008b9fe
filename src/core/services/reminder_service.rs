use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::core::ledger_store::LedgerStore;
use crate::domain::{Ledger, Transaction, TransactionKind};
use crate::errors::{LedgerError, Result};

/// Days of the month on which a salary entry is suggested.
pub const SALARY_DAYS: [u32; 2] = [15, 30];

pub const SALARY_DESCRIPTION: &str = "Salary";

/// Decides whether to prompt for a salary entry on application start.
///
/// Two states: armed until the first `check`, spent afterwards. The check
/// runs at most once per instance, matching the once-per-start contract.
#[derive(Debug, Default)]
pub struct SalaryReminder {
    checked: bool,
}

impl SalaryReminder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the presentation layer should prompt for a salary
    /// entry: today is a salary day and no income entry dated today exists.
    /// Subsequent calls on the same instance never prompt again.
    pub fn check(&mut self, ledger: &Ledger, today: NaiveDate) -> bool {
        if self.checked {
            return false;
        }
        self.checked = true;
        if has_income_on(ledger, today) {
            tracing::debug!(%today, "salary already recorded, skipping reminder");
            return false;
        }
        SALARY_DAYS.contains(&today.day())
    }

    /// Records an accepted salary prompt as an income entry dated `today`.
    pub fn accept(store: &mut LedgerStore, today: NaiveDate, amount: f64) -> Result<Uuid> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(format!(
                "{} must be greater than zero",
                amount
            )));
        }
        let transaction =
            Transaction::new(TransactionKind::Income, today, amount, SALARY_DESCRIPTION);
        let id = store.append(transaction)?;
        tracing::info!(%today, amount, "salary entry recorded");
        Ok(id)
    }
}

fn has_income_on(ledger: &Ledger, date: NaiveDate) -> bool {
    ledger
        .transactions()
        .iter()
        .any(|txn| txn.kind == TransactionKind::Income && txn.date == date)
}
