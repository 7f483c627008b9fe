use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    domain::Ledger,
    errors::{LedgerError, Result},
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// Stores the ledger as a single JSON array in one file.
///
/// Every save rewrites the whole file through a temporary sibling and a
/// rename, so a failed write never truncates the previous contents.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let ledger: Ledger = serde_json::from_str(&data).map_err(|err| {
            LedgerError::Parse(format!("`{}` is not a valid ledger: {}", self.path.display(), err))
        })?;
        tracing::debug!(entries = ledger.len(), path = %self.path.display(), "ledger loaded");
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(entries = ledger.len(), path = %self.path.display(), "ledger saved");
        Ok(())
    }
}

/// Creates `path` and any missing ancestors.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("transactions.json"));
        (storage, temp)
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.push(Transaction::new(
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            1000.0,
            "Salary",
        ));
        ledger
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let ledger = sample_ledger();
        storage.save(&ledger).expect("save ledger");
        let loaded = storage.load().expect("load ledger");
        assert_eq!(loaded.len(), 1);
        assert!(loaded.transactions()[0].same_fields(&ledger.transactions()[0]));
    }

    #[test]
    fn absent_file_loads_as_empty_ledger() {
        let (storage, _guard) = storage_with_temp_dir();
        let loaded = storage.load().expect("load from missing file");
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.path(), "{not json").expect("write garbage");
        let err = storage.load().expect_err("corrupt file must not load");
        assert!(matches!(err, LedgerError::Parse(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn save_leaves_no_tmp_sibling() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&sample_ledger()).expect("save ledger");
        assert!(!tmp_path(storage.path()).exists());
    }
}
