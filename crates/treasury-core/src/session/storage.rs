//! Key-value persistence trait.

use crate::error::Result;

/// Key holding the last connected account address.
pub const WALLET_ADDRESS_KEY: &str = "walletAddress";

/// Key holding the whitelist flag; the literal `"true"` means whitelisted.
pub const WHITELIST_KEY: &str = "isWhitelisted";

/// A synchronous string key-value store.
///
/// Values are plain strings with no schema versioning. Implementations read
/// their backing storage once and write through on every change.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
