use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the ledger core and storage layers.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid date format: `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Date {0} is in the future")]
    FutureDate(NaiveDate),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid transaction kind: `{0}`")]
    InvalidKind(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Persistence error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Parse(err.to_string())
    }
}

impl LedgerError {
    /// True for errors the presentation layer reports as user input problems.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidDate(_)
                | LedgerError::FutureDate(_)
                | LedgerError::InvalidAmount(_)
                | LedgerError::InvalidKind(_)
        )
    }
}
