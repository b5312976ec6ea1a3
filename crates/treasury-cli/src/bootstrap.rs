//! Builds the application from the on-disk configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use treasury_application::TreasuryApp;
use treasury_core::notification::Notifier;
use treasury_core::session::{KeyValueStore, Signer, WALLET_ADDRESS_KEY};
use treasury_infrastructure::{
    ConfigService, FileKeyValueStore, LocalSigner, ServiceType, TracingNotifier, TreasuryPaths,
};

use crate::console::ConsoleNotifier;
use crate::logging;

pub struct Bootstrap {
    pub app: TreasuryApp,
    /// Flushes the log file on drop
    _log_guard: Option<WorkerGuard>,
}

impl Bootstrap {
    /// Loads config, installs logging and restores the saved session.
    ///
    /// With `machine_output`, notifications go to the log instead of stdout.
    pub async fn start(paths: TreasuryPaths, verbose: bool, machine_output: bool) -> Result<Self> {
        let config = ConfigService::new(&paths)
            .and_then(|service| service.get_config())
            .context("Failed to load configuration")?;

        let env_filter = std::env::var("RUST_LOG").ok();
        let directive = logging::filter_directive(env_filter.as_deref(), verbose, &config.logging.level);
        let log_dir = if config.logging.file {
            Some(paths.get_path(ServiceType::Logs)?)
        } else {
            None
        };
        let log_guard = logging::init(&directive, log_dir.as_deref())?;

        tracing::info!(
            "[Bootstrap] Using config dir {}",
            paths.config_dir()?.display()
        );

        let store = FileKeyValueStore::open(&paths).context("Failed to open local storage")?;
        let saved_account = store.get(WALLET_ADDRESS_KEY)?;
        let signer = LocalSigner::from_settings(&config.signer, saved_account.as_deref())
            .map(|signer| Arc::new(signer) as Arc<dyn Signer>);
        if signer.is_none() {
            tracing::warn!("[Bootstrap] Signer disabled; wallet actions will fail");
        }

        let notifier: Arc<dyn Notifier> = if machine_output {
            Arc::new(TracingNotifier)
        } else {
            Arc::new(ConsoleNotifier)
        };

        let app = TreasuryApp::start(&config, signer, Arc::new(store), notifier).await;

        Ok(Self {
            app,
            _log_guard: log_guard,
        })
    }
}
