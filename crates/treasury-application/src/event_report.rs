//! Event report submission.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use treasury_core::config::SubmissionSettings;
use treasury_core::error::{Result, TreasuryError};
use treasury_core::forms::{EventReport, EventReportForm};
use treasury_core::notification::{Notification, Notifier};
use uuid::Uuid;

use crate::in_flight::InFlight;
use crate::notifications;
use crate::session_holder::SessionHolder;

/// A report accepted for reimbursement review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedReport {
    pub id: String,
    pub submitted_by: String,
    /// RFC 3339
    pub submitted_at: String,
    pub report: EventReport,
}

pub struct EventReportService {
    session: Arc<SessionHolder>,
    notifier: Arc<dyn Notifier>,
    settings: SubmissionSettings,
    submitted: RwLock<Vec<SubmittedReport>>,
    in_flight: InFlight,
}

impl EventReportService {
    pub fn new(
        session: Arc<SessionHolder>,
        notifier: Arc<dyn Notifier>,
        settings: SubmissionSettings,
    ) -> Self {
        Self {
            session,
            notifier,
            settings,
            submitted: RwLock::new(Vec::new()),
            in_flight: InFlight::new(),
        }
    }

    /// Validates `form` and submits it on behalf of the connected address.
    pub async fn submit(&self, form: &EventReportForm) -> Result<SubmittedReport> {
        let Some(_guard) = self.in_flight.try_begin() else {
            return Err(self.reject(TreasuryError::in_progress("report submission")));
        };

        let report = match form.validate() {
            Ok(report) => report,
            Err(e) => return Err(self.reject(e)),
        };
        let submitted_by = match self.session.require_connected().await {
            Ok(address) => address,
            Err(e) => return Err(self.reject(e)),
        };

        let delay = self.settings.report_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let submitted = SubmittedReport {
            id: Uuid::new_v4().to_string(),
            submitted_by,
            submitted_at: Utc::now().to_rfc3339(),
            report,
        };
        self.submitted.write().await.push(submitted.clone());

        tracing::info!(
            "[EventReport] Report {} submitted for '{}' ({} photos, {} receipts)",
            submitted.id,
            submitted.report.event_name,
            submitted.report.photos.len(),
            submitted.report.receipts.len()
        );
        self.notifier.notify(Notification::success(
            "Report submitted",
            "Your event report has been submitted successfully.",
        ));

        Ok(submitted)
    }

    /// Reports accepted so far, oldest first.
    pub async fn submitted(&self) -> Vec<SubmittedReport> {
        self.submitted.read().await.clone()
    }

    fn reject(&self, err: TreasuryError) -> TreasuryError {
        let notification =
            notifications::rejection(&err, "submit a report").unwrap_or_else(|| {
                Notification::error(
                    "Submission failed",
                    "There was an error submitting your report. Please try again.",
                )
            });
        self.notifier.notify(notification);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use treasury_core::config::AppConfig;
    use treasury_core::session::WALLET_ADDRESS_KEY;
    use treasury_infrastructure::{MemoryKeyValueStore, MemoryNotifier};

    fn form() -> EventReportForm {
        EventReportForm {
            event_name: "Longevity Meetup".to_string(),
            date_place: "Oct 19, Chiang Mai".to_string(),
            description: "Evening meetup".to_string(),
            attendees: "45".to_string(),
            links: "https://example.org/slides".to_string(),
            photos: vec![PathBuf::from("photos/group.jpg")],
            receipts: vec![PathBuf::from("dinner.pdf")],
        }
    }

    async fn fixture(connected: bool) -> (EventReportService, Arc<MemoryNotifier>) {
        let store = if connected {
            MemoryKeyValueStore::with_entries([(WALLET_ADDRESS_KEY, "0xA")])
        } else {
            MemoryKeyValueStore::new()
        };
        let notifier = Arc::new(MemoryNotifier::new());
        let config = AppConfig::without_delays();
        let session = Arc::new(SessionHolder::new(
            config.session,
            None,
            Arc::new(store),
            notifier.clone(),
        ));
        session.restore().await;

        (
            EventReportService::new(session, notifier.clone(), config.submission),
            notifier,
        )
    }

    #[tokio::test]
    async fn test_submit_report() {
        let (service, notifier) = fixture(true).await;

        let submitted = service.submit(&form()).await.unwrap();

        assert_eq!(submitted.submitted_by, "0xA");
        assert!(Uuid::parse_str(&submitted.id).is_ok());
        assert_eq!(submitted.report.attendees, Some(45));
        assert_eq!(submitted.report.photos, vec!["group.jpg"]);
        assert_eq!(service.submitted().await, vec![submitted]);
        assert_eq!(notifier.last_title().as_deref(), Some("Report submitted"));
    }

    #[tokio::test]
    async fn test_missing_required_fields() {
        let (service, notifier) = fixture(true).await;
        let incomplete = EventReportForm {
            description: String::new(),
            ..form()
        };

        let result = service.submit(&incomplete).await;

        assert!(matches!(result, Err(TreasuryError::MissingFields(_))));
        assert!(service.submitted().await.is_empty());
        assert_eq!(notifier.last_title().as_deref(), Some("Missing information"));
    }

    #[tokio::test]
    async fn test_photo_must_be_image() {
        let (service, notifier) = fixture(true).await;
        let bad = EventReportForm {
            photos: vec![PathBuf::from("budget.pdf")],
            ..form()
        };

        let result = service.submit(&bad).await;

        assert!(matches!(result, Err(TreasuryError::InvalidField { .. })));
        assert_eq!(notifier.last_title().as_deref(), Some("Invalid photos"));
    }

    #[tokio::test]
    async fn test_requires_connection() {
        let (service, _) = fixture(false).await;
        assert!(matches!(
            service.submit(&form()).await,
            Err(TreasuryError::NotConnected)
        ));
    }
}
