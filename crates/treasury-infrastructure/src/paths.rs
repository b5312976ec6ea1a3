//! Unified path management for treasury files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/treasury/          # Config directory
//! ├── config.toml              # Application configuration
//! ├── storage.toml             # Local key-value storage (connected wallet, whitelist flag)
//! └── logs/                    # Application logs
//!     └── treasury.log.YYYY-MM-DD
//! ```
//!
//! A base directory override replaces `~/.config/treasury` entirely, which
//! the CLI uses for `--home` and tests use for temporary directories.

use std::path::PathBuf;

use treasury_core::error::{Result, TreasuryError};

const APP_DIR_NAME: &str = "treasury";

/// Files the infrastructure layer reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    Storage,
    Logs,
}

/// Resolves platform paths, optionally rooted at an override directory.
#[derive(Debug, Clone, Default)]
pub struct TreasuryPaths {
    base_override: Option<PathBuf>,
}

impl TreasuryPaths {
    pub fn new(base_override: Option<PathBuf>) -> Self {
        Self { base_override }
    }

    /// Returns the root configuration directory.
    ///
    /// # Errors
    ///
    /// Returns a config error when no override is set and the platform has
    /// no config directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base_override {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| TreasuryError::config("Cannot find config directory")),
        }
    }

    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf> {
        let dir = self.config_dir()?;
        Ok(match service {
            ServiceType::Config => dir.join("config.toml"),
            ServiceType::Storage => dir.join("storage.toml"),
            ServiceType::Logs => dir.join("logs"),
        })
    }
}
