//! Domain layer for the community treasury client.
//!
//! Holds the session and event models, the collaborator traits the
//! application layer is wired against ([`Signer`], [`KeyValueStore`],
//! [`Notifier`]), the shared [`TreasuryError`], and the fixed treasury data.

pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod forms;
pub mod notification;
pub mod route;
pub mod session;
pub mod treasury;

// Re-export common types
pub use error::{Result, TreasuryError};
pub use notification::{Notification, Notifier, Severity};
pub use route::Route;
pub use session::{KeyValueStore, Session, SessionStatus, Signer};
