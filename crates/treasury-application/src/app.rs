//! Wiring of the use cases around one shared session.

use std::sync::Arc;

use treasury_core::config::AppConfig;
use treasury_core::event::EventCatalog;
use treasury_core::notification::Notifier;
use treasury_core::session::{KeyValueStore, Signer};

use crate::dashboard::Dashboard;
use crate::event_interaction::EventInteractionStore;
use crate::event_report::EventReportService;
use crate::session_holder::SessionHolder;
use crate::whitelist_application::WhitelistApplicationService;
use crate::withdrawal::WithdrawalService;

/// All use cases of one application instance.
///
/// Every service shares the same [`SessionHolder`], so a connect or
/// disconnect is immediately visible to all of them.
pub struct TreasuryApp {
    pub session: Arc<SessionHolder>,
    pub interactions: EventInteractionStore,
    pub withdrawals: WithdrawalService,
    pub whitelist: WhitelistApplicationService,
    pub reports: EventReportService,
    pub dashboard: Dashboard,
}

impl TreasuryApp {
    pub fn new(
        config: &AppConfig,
        signer: Option<Arc<dyn Signer>>,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let session = Arc::new(SessionHolder::new(
            config.session.clone(),
            signer,
            store,
            notifier.clone(),
        ));
        let catalog = Arc::new(EventCatalog::seeded());

        Self {
            interactions: EventInteractionStore::new(session.clone(), notifier.clone()),
            withdrawals: WithdrawalService::new(
                session.clone(),
                notifier.clone(),
                config.withdrawal.clone(),
            ),
            whitelist: WhitelistApplicationService::new(
                session.clone(),
                notifier.clone(),
                config.submission.clone(),
            ),
            reports: EventReportService::new(session.clone(), notifier, config.submission.clone()),
            dashboard: Dashboard::new(session.clone(), catalog),
            session,
        }
    }

    /// Builds the app and restores any previously connected wallet.
    pub async fn start(
        config: &AppConfig,
        signer: Option<Arc<dyn Signer>>,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let app = Self::new(config, signer, store, notifier);
        match app.session.restore().await {
            Some(address) => tracing::info!("[TreasuryApp] Restored session for {}", address),
            None => tracing::debug!("[TreasuryApp] No saved session"),
        }
        app
    }
}
