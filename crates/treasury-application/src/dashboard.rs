//! Read models for the dashboard and past-events views.

use std::sync::Arc;

use serde::Serialize;
use treasury_core::error::Result;
use treasury_core::event::{Event, EventCatalog, EventId};
use treasury_core::format::format_address;
use treasury_core::session::SessionStatus;
use treasury_core::treasury::{TreasuryStats, treasury_stats};

use crate::session_holder::SessionHolder;

/// Number of events listed on the dashboard.
pub const RECENT_EVENT_COUNT: usize = 3;

/// What the dashboard shows for the connected participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub address: String,
    pub short_address: String,
    pub balance: f64,
    pub can_withdraw: bool,
    pub status: SessionStatus,
    pub recent_events: Vec<Event>,
}

pub struct Dashboard {
    session: Arc<SessionHolder>,
    catalog: Arc<EventCatalog>,
}

impl Dashboard {
    pub fn new(session: Arc<SessionHolder>, catalog: Arc<EventCatalog>) -> Self {
        Self { session, catalog }
    }

    /// Builds the overview for the connected participant.
    ///
    /// Only a connection is required; the whitelist state is reported, not
    /// enforced.
    pub async fn overview(&self) -> Result<DashboardOverview> {
        let address = self.session.require_connected().await?;
        let snapshot = self.session.snapshot().await;

        Ok(DashboardOverview {
            short_address: format_address(&address),
            address,
            balance: snapshot.balance,
            can_withdraw: snapshot.balance > 0.0,
            status: snapshot.status(),
            recent_events: self
                .catalog
                .recent(RECENT_EVENT_COUNT)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    pub fn events(&self) -> &[Event] {
        self.catalog.all()
    }

    /// The `limit` most recent events, newest first.
    pub fn recent_events(&self, limit: usize) -> Vec<&Event> {
        self.catalog.recent(limit)
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.catalog.find(id)
    }

    pub fn treasury_stats(&self) -> TreasuryStats {
        treasury_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treasury_core::config::AppConfig;
    use treasury_core::error::TreasuryError;
    use treasury_core::session::{WALLET_ADDRESS_KEY, WHITELIST_KEY};
    use treasury_infrastructure::{MemoryKeyValueStore, MemoryNotifier};

    async fn dashboard(store: MemoryKeyValueStore) -> (Dashboard, Arc<SessionHolder>) {
        let session = Arc::new(SessionHolder::new(
            AppConfig::without_delays().session,
            None,
            Arc::new(store),
            Arc::new(MemoryNotifier::new()),
        ));
        session.restore().await;
        (
            Dashboard::new(session.clone(), Arc::new(EventCatalog::seeded())),
            session,
        )
    }

    #[tokio::test]
    async fn test_overview_for_connected_participant() {
        let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
        let (dashboard, _) = dashboard(MemoryKeyValueStore::with_entries([
            (WALLET_ADDRESS_KEY, address),
            (WHITELIST_KEY, "true"),
        ]))
        .await;

        let overview = dashboard.overview().await.unwrap();

        assert_eq!(overview.short_address, "0x71C7...976F");
        assert_eq!(overview.balance, 300.0);
        assert!(overview.can_withdraw);
        assert_eq!(overview.status, SessionStatus::Whitelisted);
        let ids: Vec<EventId> = overview.recent_events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[tokio::test]
    async fn test_overview_without_whitelist_still_allowed() {
        let (dashboard, session) =
            dashboard(MemoryKeyValueStore::with_entries([(WALLET_ADDRESS_KEY, "0xA")])).await;
        session.update_balance(0.0).await;

        let overview = dashboard.overview().await.unwrap();

        assert_eq!(overview.status, SessionStatus::NotWhitelisted);
        assert!(!overview.can_withdraw);
    }

    #[tokio::test]
    async fn test_overview_requires_connection() {
        let (dashboard, _) = dashboard(MemoryKeyValueStore::new()).await;
        assert!(matches!(
            dashboard.overview().await,
            Err(TreasuryError::NotConnected)
        ));
        assert_eq!(dashboard.events().len(), 4);
        assert!(dashboard.event(1).is_some());
    }
}
