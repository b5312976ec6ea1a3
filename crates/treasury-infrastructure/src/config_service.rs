//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` in the treasury config directory,
//! writing a default file on first run.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use treasury_core::config::AppConfig;
use treasury_core::error::{Result, TreasuryError};

use crate::paths::{ServiceType, TreasuryPaths};
use crate::storage::AtomicTomlFile;

/// Configuration service that loads and caches the application configuration.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<AppConfig>>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &TreasuryPaths) -> Result<Self> {
        Ok(Self::with_path(paths.get_path(ServiceType::Config)?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the configuration, loading it on first access.
    ///
    /// A missing file is created with defaults. A malformed file is an error
    /// rather than being silently replaced.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| TreasuryError::internal(format!("Config lock poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|e| TreasuryError::internal(format!("Config lock poisoned: {}", e)))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(&self) -> Result<AppConfig> {
        match self.file.load() {
            Ok(Some(config)) => {
                tracing::debug!(
                    "[ConfigService] Loaded config from {}",
                    self.file.path().display()
                );
                Ok(config)
            }
            Ok(None) => {
                let config = AppConfig::default();
                self.file.save(&config)?;
                tracing::info!(
                    "[ConfigService] Created default config at {}",
                    self.file.path().display()
                );
                Ok(config)
            }
            Err(e) => Err(TreasuryError::config(format!(
                "Failed to load {}: {}",
                self.file.path().display(),
                e
            ))),
        }
    }
}
