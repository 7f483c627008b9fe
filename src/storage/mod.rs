pub mod json_backend;

use crate::{domain::Ledger, errors::Result};

/// Abstraction over persistence backends capable of storing the ledger.
pub trait StorageBackend: Send + Sync {
    /// Reads the persisted ledger. An absent file is an empty ledger; a
    /// malformed file is a `Parse` error, never silently emptied.
    fn load(&self) -> Result<Ledger>;

    /// Serializes the full collection and replaces the persisted file.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub use json_backend::JsonStorage;
