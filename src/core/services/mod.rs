pub mod reminder_service;
pub mod summary_service;
pub mod transaction_service;

pub use reminder_service::SalaryReminder;
pub use summary_service::{LedgerTotals, SummaryService};
pub use transaction_service::TransactionService;
