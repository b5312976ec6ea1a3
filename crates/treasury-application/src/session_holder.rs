//! Session state holder.
//!
//! `SessionHolder` owns the single [`Session`] of an application instance and
//! is shared (via `Arc`) with every view that needs it. It is the only place
//! that talks to the signer and that writes the persisted wallet address.
//!
//! # State machine
//!
//! ```text
//! Disconnected --connect--> WhitelistUnknown --check--> Whitelisted
//!       ^                                         \---> NotWhitelisted
//!       +------------------ disconnect -----------------+
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use treasury_core::config::SessionSettings;
use treasury_core::error::{Result, TreasuryError};
use treasury_core::notification::{Notification, Notifier};
use treasury_core::route::Route;
use treasury_core::session::{
    KeyValueStore, Session, SessionStatus, Signer, WALLET_ADDRESS_KEY, WHITELIST_KEY,
};

use crate::in_flight::InFlight;

pub struct SessionHolder {
    state: RwLock<Session>,
    /// `None` when no wallet is installed
    signer: Option<Arc<dyn Signer>>,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    settings: SessionSettings,
    connecting: InFlight,
}

impl SessionHolder {
    /// Creates a disconnected session holder.
    ///
    /// Call [`restore`](Self::restore) afterwards to pick up a previously
    /// connected wallet.
    pub fn new(
        settings: SessionSettings,
        signer: Option<Arc<dyn Signer>>,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: RwLock::new(Session::new(settings.initial_balance)),
            signer,
            store,
            notifier,
            settings,
            connecting: InFlight::new(),
        }
    }

    // ============================================================================
    // Reads
    // ============================================================================

    /// Returns a copy of the current session state.
    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    pub async fn address(&self) -> Option<String> {
        self.state.read().await.address.clone()
    }

    pub async fn is_connected(&self) -> bool {
        self.state.read().await.is_connected()
    }

    pub async fn is_whitelisted(&self) -> Option<bool> {
        self.state.read().await.is_whitelisted
    }

    pub async fn balance(&self) -> f64 {
        self.state.read().await.balance
    }

    pub async fn status(&self) -> SessionStatus {
        self.state.read().await.status()
    }

    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// Returns the connected address or `NotConnected`.
    pub async fn require_connected(&self) -> Result<String> {
        self.address().await.ok_or(TreasuryError::NotConnected)
    }

    /// Where a visit to `route` lands for the current session.
    pub async fn resolve_route(&self, route: Route) -> Route {
        route.resolve(&*self.state.read().await)
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Restores a previously connected wallet from storage.
    ///
    /// The whitelist flag is re-derived by running the whitelist check.
    /// Storage read failures are logged and treated as "nothing to restore".
    pub async fn restore(&self) -> Option<String> {
        let saved = match self.store.get(WALLET_ADDRESS_KEY) {
            Ok(saved) => saved.filter(|a| !a.trim().is_empty()),
            Err(e) => {
                tracing::warn!("[SessionHolder] Failed to read saved wallet address: {}", e);
                None
            }
        };

        let address = saved?;
        tracing::info!("[SessionHolder] Restoring session for {}", address);
        self.state.write().await.connect(address.clone());
        self.check_whitelist_status().await;

        Some(address)
    }

    /// Connects the first account of the signer.
    ///
    /// Requests the account list, has the account sign the connect message,
    /// persists the address and runs the whitelist check.
    ///
    /// # Returns
    ///
    /// - `Some(address)`: Connected
    /// - `None`: No signer, no account, the user cancelled, the signer
    ///   failed, or a connect was already in progress. State is unchanged.
    pub async fn connect(&self) -> Option<String> {
        let Some(_guard) = self.connecting.try_begin() else {
            tracing::debug!("[SessionHolder] connect() ignored: already connecting");
            self.notifier.notify(Notification::error(
                "Please wait",
                "A wallet connection is already in progress.",
            ));
            return None;
        };

        let Some(signer) = self.signer.as_ref() else {
            tracing::warn!("[SessionHolder] connect() without an installed signer");
            self.notifier.notify(Notification::error(
                "Wallet not found",
                "Please install a wallet to use this feature.",
            ));
            return None;
        };

        let account = match signer.request_accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(account) => account,
                None => {
                    tracing::warn!("[SessionHolder] Signer returned no accounts");
                    return None;
                }
            },
            Err(e) => {
                tracing::error!("[SessionHolder] Error connecting wallet: {}", e);
                return None;
            }
        };

        if let Err(e) = signer
            .sign_message(&self.settings.connect_message, &account)
            .await
        {
            tracing::error!("[SessionHolder] Error connecting wallet: {}", e);
            return None;
        }

        if let Err(e) = self.store.set(WALLET_ADDRESS_KEY, &account) {
            tracing::error!("[SessionHolder] Failed to persist wallet address: {}", e);
            return None;
        }

        self.state.write().await.connect(account.clone());
        tracing::info!("[SessionHolder] Connected {}", account);
        self.notifier.notify(Notification::success(
            "Wallet connected",
            "Your wallet has been connected successfully.",
        ));

        self.check_whitelist_status().await;

        Some(account)
    }

    /// Clears the connection and the persisted address. Idempotent.
    ///
    /// The balance is kept.
    pub async fn disconnect(&self) {
        self.state.write().await.disconnect();

        if let Err(e) = self.store.remove(WALLET_ADDRESS_KEY) {
            tracing::error!("[SessionHolder] Failed to remove saved wallet address: {}", e);
        }
        tracing::debug!("[SessionHolder] Disconnected");
    }

    /// Resolves the whitelist flag from storage after the simulated delay.
    ///
    /// The result is applied to the session only if it is still connected
    /// when the check resolves; the value is returned either way.
    pub async fn check_whitelist_status(&self) -> bool {
        let delay = self.settings.whitelist_check_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let whitelisted = match self.store.get(WHITELIST_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!("[SessionHolder] Failed to read whitelist flag: {}", e);
                false
            }
        };

        let mut state = self.state.write().await;
        if state.is_connected() {
            state.is_whitelisted = Some(whitelisted);
        }
        tracing::debug!("[SessionHolder] Whitelist status: {}", whitelisted);

        whitelisted
    }

    /// Replaces the balance unconditionally.
    pub async fn update_balance(&self, new_balance: f64) {
        self.state.write().await.balance = new_balance;
    }

    // ============================================================================
    // Used by other use cases
    // ============================================================================

    /// Has the connected account sign `message`.
    pub async fn sign(&self, message: &str) -> Result<String> {
        let address = self.require_connected().await?;
        let signer = self.signer.as_ref().ok_or(TreasuryError::SignerUnavailable)?;
        signer.sign_message(message, &address).await
    }

    /// Persists the whitelist flag for the next whitelist check.
    pub(crate) fn mark_whitelisted(&self) -> Result<()> {
        self.store.set(WHITELIST_KEY, "true")
    }

    /// Subtracts `amount` from the balance of the session connected as
    /// `address`, refusing to go below zero.
    ///
    /// Check and update happen under one write lock.
    pub(crate) async fn debit(&self, address: &str, amount: f64) -> Result<f64> {
        let mut state = self.state.write().await;
        if state.address.as_deref() != Some(address) {
            return Err(TreasuryError::NotConnected);
        }
        if amount > state.balance {
            return Err(TreasuryError::InsufficientFunds {
                requested: amount,
                available: state.balance,
            });
        }
        state.balance -= amount;
        Ok(state.balance)
    }
}
