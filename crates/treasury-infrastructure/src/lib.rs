//! Infrastructure layer for the treasury client.
//!
//! Concrete implementations of the collaborator traits defined in
//! `treasury-core`: file and memory key-value stores, notifiers, the local
//! development signer, and configuration/path handling.

pub mod config_service;
pub mod notifier;
pub mod paths;
pub mod signer;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::notifier::{MemoryNotifier, TracingNotifier};
pub use crate::paths::{ServiceType, TreasuryPaths};
pub use crate::signer::LocalSigner;
pub use crate::storage::{AtomicTomlFile, FileKeyValueStore, MemoryKeyValueStore};
