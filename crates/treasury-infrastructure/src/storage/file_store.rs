//! File-backed key-value store.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use treasury_core::error::{Result, TreasuryError};
use treasury_core::session::KeyValueStore;

use super::atomic_toml::AtomicTomlFile;
use crate::paths::{ServiceType, TreasuryPaths};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as a flat TOML string table.
///
/// The file is read when the store is opened and cached in memory. Every
/// `set`/`remove` is a locked read-modify-write of the file whose result
/// replaces the cache, so a failed write leaves both unchanged. Changes made
/// by other processes become visible to `get` only after the next write.
pub struct FileKeyValueStore {
    file: AtomicTomlFile<Entries>,
    cache: RwLock<Entries>,
}

impl FileKeyValueStore {
    /// Opens the store at the platform storage path.
    pub fn open(paths: &TreasuryPaths) -> Result<Self> {
        Self::with_path(paths.get_path(ServiceType::Storage)?)
    }

    /// Opens the store at an explicit path.
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let file: AtomicTomlFile<Entries> = AtomicTomlFile::new(path);
        let entries = file.load()?.unwrap_or_default();
        tracing::debug!(
            "[FileKeyValueStore] Loaded {} entries from {}",
            entries.len(),
            file.path().display()
        );

        Ok(Self {
            file,
            cache: RwLock::new(entries),
        })
    }

    fn write_through<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Entries),
    {
        let mut cache = self
            .cache
            .write()
            .map_err(|e| TreasuryError::storage(format!("Cache lock poisoned: {}", e)))?;

        let updated = self.file.update(cache.clone(), |entries| {
            f(entries);
            Ok(())
        })?;
        *cache = updated;

        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let cache = self
            .cache
            .read()
            .map_err(|e| TreasuryError::storage(format!("Cache lock poisoned: {}", e)))?;
        Ok(cache.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        tracing::debug!("[FileKeyValueStore] set {}", key);
        self.write_through(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        tracing::debug!("[FileKeyValueStore] remove {}", key);
        self.write_through(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.toml");

        let store = FileKeyValueStore::with_path(path.clone()).unwrap();
        store.set("walletAddress", "0xA").unwrap();
        store.set("isWhitelisted", "true").unwrap();
        drop(store);

        let reopened = FileKeyValueStore::with_path(path).unwrap();
        assert_eq!(
            reopened.get("walletAddress").unwrap(),
            Some("0xA".to_string())
        );
        assert_eq!(
            reopened.get("isWhitelisted").unwrap(),
            Some("true".to_string())
        );
    }

    #[test]
    fn test_remove_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.toml");

        let store = FileKeyValueStore::with_path(path.clone()).unwrap();
        store.set("walletAddress", "0xA").unwrap();
        store.remove("walletAddress").unwrap();
        store.remove("walletAddress").unwrap();

        let reopened = FileKeyValueStore::with_path(path).unwrap();
        assert_eq!(reopened.get("walletAddress").unwrap(), None);
    }

    #[test]
    fn test_write_picks_up_other_writers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.toml");

        let first = FileKeyValueStore::with_path(path.clone()).unwrap();
        let second = FileKeyValueStore::with_path(path).unwrap();
        second.set("isWhitelisted", "true").unwrap();
        assert_eq!(first.get("isWhitelisted").unwrap(), None);

        first.set("walletAddress", "0xA").unwrap();
        assert_eq!(
            first.get("isWhitelisted").unwrap(),
            Some("true".to_string())
        );
    }

    #[test]
    fn test_open_uses_storage_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TreasuryPaths::new(Some(temp_dir.path().to_path_buf()));

        let store = FileKeyValueStore::open(&paths).unwrap();
        store.set("walletAddress", "0xB").unwrap();

        assert!(temp_dir.path().join("storage.toml").exists());
    }
}
