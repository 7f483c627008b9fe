use chrono::NaiveDate;

use crate::domain::{Transaction, TransactionKind};
use crate::errors::{LedgerError, Result};

/// Raw field bundle as the presentation layer collects it. Never stored;
/// `validate` turns it into a `Transaction` or rejects it.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub kind: String,
    pub date: String,
    pub amount: String,
    pub description: String,
}

impl TransactionDraft {
    pub fn new(
        kind: impl Into<String>,
        date: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            date: date.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }
}

/// Checks a draft against `today` and mints a transaction from it.
///
/// Rules apply in order, first failure wins: date must parse as an ISO
/// calendar date, must not be after `today`, amount must be a number greater
/// than zero, kind must be income or expense. `today` is an explicit
/// parameter; the core never reads the system clock.
pub fn validate(draft: &TransactionDraft, today: NaiveDate) -> Result<Transaction> {
    let date = parse_date(&draft.date)?;
    if date > today {
        return Err(LedgerError::FutureDate(date));
    }
    let amount = parse_amount(&draft.amount)?;
    let kind: TransactionKind = draft.kind.parse()?;
    Ok(Transaction::new(kind, date, amount, draft.description.trim()))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(raw.trim().to_string()))
}

fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidAmount("amount is required".into()));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(format!("`{}` is not a number", trimmed)))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::InvalidAmount(format!(
            "{} must be greater than zero",
            amount
        )));
    }
    Ok(amount)
}
