//! JSON-file backed key-value store for login streak state

use miniplay_economy::{EconomyError, KeyValueStore, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Flat string map persisted as a JSON object, rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`, starting empty when the file does not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).map_err(|e| {
                EconomyError::Store(format!("{} is not a string map: {e}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| EconomyError::Store(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use miniplay_economy::{check_in, CONSECUTIVE_LOGIN_DAYS_KEY};

    #[test]
    fn test_streak_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        check_in(&mut store, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).unwrap();

        let mut reopened = JsonFileStore::open(&path).unwrap();
        let outcome = check_in(&mut reopened, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()).unwrap();
        assert_eq!(outcome.consecutive_days, 2);
        assert_eq!(outcome.reward, Some(110));
        assert_eq!(
            reopened.get(CONSECUTIVE_LOGIN_DAYS_KEY).unwrap().as_deref(),
            Some("2")
        );
    }

    #[test]
    fn test_corrupt_file_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(EconomyError::Store(_))
        ));
    }
}
