//! Petty-cash withdrawal.

use std::sync::Arc;

use treasury_core::config::WithdrawalSettings;
use treasury_core::error::{Result, TreasuryError};
use treasury_core::format::format_amount;
use treasury_core::notification::{Notification, Notifier};

use crate::in_flight::InFlight;
use crate::notifications;
use crate::session_holder::SessionHolder;

/// Message the connected account signs to authorize a withdrawal.
pub fn withdrawal_message(amount: f64) -> String {
    format!(
        "I am withdrawing {} from my Zuzalu Treasury petty cash",
        format_amount(amount)
    )
}

pub struct WithdrawalService {
    session: Arc<SessionHolder>,
    notifier: Arc<dyn Notifier>,
    settings: WithdrawalSettings,
    in_flight: InFlight,
}

impl WithdrawalService {
    pub fn new(
        session: Arc<SessionHolder>,
        notifier: Arc<dyn Notifier>,
        settings: WithdrawalSettings,
    ) -> Self {
        Self {
            session,
            notifier,
            settings,
            in_flight: InFlight::new(),
        }
    }

    /// Withdraws `amount` from the session balance.
    ///
    /// The connected account signs [`withdrawal_message`], then the simulated
    /// processing delay elapses before the balance is debited.
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal.
    ///
    /// # Errors
    ///
    /// - `OperationInProgress`: Another withdrawal is running
    /// - `InvalidAmount`: `amount` is not a positive number
    /// - `InsufficientFunds`: `amount` exceeds the balance, checked both
    ///   before signing and when committing
    /// - `NotConnected`: No wallet connected, or the signing account was
    ///   disconnected before the commit
    /// - `SignerUnavailable`, `Signer`
    ///
    /// The balance is unchanged on every error.
    pub async fn withdraw(&self, amount: f64) -> Result<f64> {
        let Some(_guard) = self.in_flight.try_begin() else {
            return Err(self.reject(TreasuryError::in_progress("withdrawal")));
        };

        if !amount.is_finite() || amount <= 0.0 {
            return Err(self.reject(TreasuryError::InvalidAmount { amount }));
        }

        let available = self.session.balance().await;
        if amount > available {
            return Err(self.reject(TreasuryError::InsufficientFunds {
                requested: amount,
                available,
            }));
        }

        let address = match self.session.require_connected().await {
            Ok(address) => address,
            Err(e) => return Err(self.reject(e)),
        };
        if !self.session.has_signer() {
            return Err(self.reject(TreasuryError::SignerUnavailable));
        }

        tracing::info!("[Withdrawal] Requesting signature for {}", format_amount(amount));
        if let Err(e) = self.session.sign(&withdrawal_message(amount)).await {
            tracing::error!("[Withdrawal] Withdrawal error: {}", e);
            return Err(self.reject(e));
        }

        let delay = self.settings.processing_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let new_balance = match self.session.debit(&address, amount).await {
            Ok(balance) => balance,
            Err(e) => return Err(self.reject(e)),
        };

        tracing::info!(
            "[Withdrawal] Withdrew {}, balance now {}",
            format_amount(amount),
            format_amount(new_balance)
        );
        self.notifier.notify(Notification::success(
            "Withdrawal initiated",
            format!(
                "Your withdrawal of {} has been initiated.",
                format_amount(amount)
            ),
        ));

        Ok(new_balance)
    }

    #[cfg(test)]
    fn is_processing(&self) -> bool {
        self.in_flight.is_active()
    }

    fn reject(&self, err: TreasuryError) -> TreasuryError {
        let notification = match &err {
            TreasuryError::InvalidAmount { .. } => Notification::error(
                "Invalid amount",
                "Please enter a valid amount to withdraw.",
            ),
            TreasuryError::InsufficientFunds { .. } => Notification::error(
                "Insufficient funds",
                "You cannot withdraw more than your available balance.",
            ),
            other => notifications::rejection(other, "withdraw funds").unwrap_or_else(|| {
                Notification::error(
                    "Withdrawal failed",
                    "There was an error processing your withdrawal. Please try again.",
                )
            }),
        };
        self.notifier.notify(notification);
        err
    }
}
