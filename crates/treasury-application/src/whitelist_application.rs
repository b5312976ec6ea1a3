//! Whitelist application submission.

use std::sync::Arc;

use treasury_core::config::SubmissionSettings;
use treasury_core::error::{Result, TreasuryError};
use treasury_core::forms::WhitelistApplication;
use treasury_core::notification::{Notification, Notifier};

use crate::in_flight::InFlight;
use crate::notifications;
use crate::session_holder::SessionHolder;

pub struct WhitelistApplicationService {
    session: Arc<SessionHolder>,
    notifier: Arc<dyn Notifier>,
    settings: SubmissionSettings,
    in_flight: InFlight,
}

impl WhitelistApplicationService {
    pub fn new(
        session: Arc<SessionHolder>,
        notifier: Arc<dyn Notifier>,
        settings: SubmissionSettings,
    ) -> Self {
        Self {
            session,
            notifier,
            settings,
            in_flight: InFlight::new(),
        }
    }

    /// Validates and submits `application` for the connected address.
    ///
    /// On success the whitelist flag is persisted and the session's whitelist
    /// status is re-derived, so the returned value is the new status.
    pub async fn submit(&self, application: &WhitelistApplication) -> Result<bool> {
        let Some(_guard) = self.in_flight.try_begin() else {
            return Err(self.reject(TreasuryError::in_progress("submission")));
        };

        if let Err(e) = application.validate() {
            return Err(self.reject(e));
        }
        let address = match self.session.require_connected().await {
            Ok(address) => address,
            Err(e) => return Err(self.reject(e)),
        };

        tracing::info!("[WhitelistApplication] Submitting application for {}", address);

        let delay = self.settings.whitelist_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Err(e) = self.session.mark_whitelisted() {
            tracing::error!("[WhitelistApplication] Error submitting application: {}", e);
            return Err(self.reject(e));
        }

        let whitelisted = self.session.check_whitelist_status().await;
        self.notifier.notify(Notification::success(
            "Application submitted",
            "Your whitelist application has been submitted successfully.",
        ));

        Ok(whitelisted)
    }

    fn reject(&self, err: TreasuryError) -> TreasuryError {
        let notification = notifications::rejection(&err, "apply for the whitelist")
            .unwrap_or_else(|| {
                Notification::error(
                    "Submission failed",
                    "There was an error submitting your application. Please try again.",
                )
            });
        self.notifier.notify(notification);
        err
    }
}
