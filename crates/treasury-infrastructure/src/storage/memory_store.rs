//! In-process key-value store.

use std::collections::HashMap;
use std::sync::Mutex;

use treasury_core::error::{Result, TreasuryError};
use treasury_core::session::KeyValueStore;

/// Key-value store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| TreasuryError::storage(format!("Store lock poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("walletAddress").unwrap(), None);

        store.set("walletAddress", "0xA").unwrap();
        assert_eq!(store.get("walletAddress").unwrap(), Some("0xA".to_string()));

        store.remove("walletAddress").unwrap();
        store.remove("walletAddress").unwrap();
        assert_eq!(store.get("walletAddress").unwrap(), None);
    }

    #[test]
    fn test_with_entries() {
        let store = MemoryKeyValueStore::with_entries([("isWhitelisted", "true")]);
        assert_eq!(store.get("isWhitelisted").unwrap(), Some("true".to_string()));
    }
}
