use std::path::PathBuf;
use std::sync::Mutex;

use expense_core::core::LedgerStore;
use expense_core::storage::JsonStorage;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated store backed by a unique directory for each test.
pub fn setup_store() -> (LedgerStore, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("transactions.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store =
        LedgerStore::open(Box::new(JsonStorage::new(&path))).expect("open store on empty dir");
    (store, path)
}

/// Reopens a store over an existing ledger file, simulating an application restart.
pub fn reopen_store(path: &PathBuf) -> LedgerStore {
    LedgerStore::open(Box::new(JsonStorage::new(path))).expect("reopen store")
}
