//! Application layer for the treasury client.
//!
//! Use cases built around a shared [`SessionHolder`]: wallet connection,
//! event comments and reactions, petty-cash withdrawal, whitelist
//! applications, event reports and the dashboard read model.

pub mod app;
pub mod dashboard;
pub mod event_interaction;
pub mod event_report;
mod in_flight;
mod notifications;
pub mod session_holder;
pub mod whitelist_application;
pub mod withdrawal;

pub use app::TreasuryApp;
pub use dashboard::{Dashboard, DashboardOverview};
pub use event_interaction::EventInteractionStore;
pub use event_report::{EventReportService, SubmittedReport};
pub use session_holder::SessionHolder;
pub use whitelist_application::WhitelistApplicationService;
pub use withdrawal::{WithdrawalService, withdrawal_message};
