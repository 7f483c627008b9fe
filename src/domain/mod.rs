pub mod common;
pub mod ledger;
pub mod transaction;

pub use common::{Displayable, Identifiable};
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
