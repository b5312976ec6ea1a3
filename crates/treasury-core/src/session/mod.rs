//! Session domain module.
//!
//! The session tracks which wallet account is connected, whether it has been
//! whitelisted, and the simulated petty-cash balance. The collaborators the
//! session talks to (the signer and the key-value store) are defined here as
//! traits so the application layer can inject real or fake implementations.
//!
//! # Module Structure
//!
//! - `model`: Session state and derived status
//! - `signer`: External wallet signer trait
//! - `storage`: Synchronous key-value persistence trait and key names

mod model;
mod signer;
mod storage;

pub use model::{Session, SessionStatus};
pub use signer::Signer;
pub use storage::{KeyValueStore, WALLET_ADDRESS_KEY, WHITELIST_KEY};
