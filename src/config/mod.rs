use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::paths;
use crate::errors::{LedgerError, Result};
use crate::storage::json_backend::ensure_dir;

const DEFAULT_LOW_BALANCE_THRESHOLD: f64 = 100.0;

/// User-tunable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Balance below which the presentation layer shows a warning.
    #[serde(default = "default_threshold")]
    pub low_balance_threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_LOW_BALANCE_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            low_balance_threshold: DEFAULT_LOW_BALANCE_THRESHOLD,
        }
    }
}

/// Loads and saves the configuration file under the app data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_path(paths::config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                LedgerError::Parse(format!(
                    "`{}` is not a valid config: {}",
                    self.path.display(),
                    err
                ))
            })
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("config.json")).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.low_balance_threshold, 100.0);
    }

    #[test]
    fn config_roundtrips() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("config.json")).unwrap();
        let config = Config {
            low_balance_threshold: 250.0,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap().low_balance_threshold, 250.0);
    }
}
