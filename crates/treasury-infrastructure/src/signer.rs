//! Local development signer.
//!
//! Stands in for a browser wallet extension. It exposes a fixed account list
//! and produces an opaque, deterministic "signature" so the session flow can
//! be exercised without a real wallet.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use std::sync::atomic::{AtomicUsize, Ordering};

use treasury_core::config::SignerSettings;
use treasury_core::error::{Result, TreasuryError};
use treasury_core::session::Signer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Approve,
    RejectAccounts,
    RejectSignatures,
}

/// Signer backed by a configured list of accounts.
#[derive(Debug)]
pub struct LocalSigner {
    accounts: Vec<String>,
    behavior: Behavior,
    signatures: AtomicUsize,
}

impl LocalSigner {
    /// A signer that approves every request.
    pub fn new(accounts: Vec<String>) -> Self {
        Self {
            accounts,
            behavior: Behavior::Approve,
            signatures: AtomicUsize::new(0),
        }
    }

    /// A signer whose account request is rejected, as when the user cancels.
    pub fn rejecting_accounts(accounts: Vec<String>) -> Self {
        Self {
            behavior: Behavior::RejectAccounts,
            ..Self::new(accounts)
        }
    }

    /// A signer that exposes accounts but refuses to sign.
    pub fn rejecting_signatures(accounts: Vec<String>) -> Self {
        Self {
            behavior: Behavior::RejectSignatures,
            ..Self::new(accounts)
        }
    }

    /// Builds a signer from settings, or `None` when the signer is disabled.
    ///
    /// An empty account list falls back to `known_account` (typically the
    /// address saved by a previous run) or else a single random account.
    pub fn from_settings(settings: &SignerSettings, known_account: Option<&str>) -> Option<Self> {
        if !settings.enabled {
            return None;
        }
        let accounts = if !settings.accounts.is_empty() {
            settings.accounts.clone()
        } else if let Some(account) = known_account {
            vec![account.to_string()]
        } else {
            vec![random_address()]
        };
        Some(Self::new(accounts))
    }

    /// Number of signatures produced so far.
    #[cfg(test)]
    fn signature_count(&self) -> usize {
        self.signatures.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Signer for LocalSigner {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        if self.behavior == Behavior::RejectAccounts {
            return Err(TreasuryError::signer("User rejected the request"));
        }
        Ok(self.accounts.clone())
    }

    async fn sign_message(&self, message: &str, account: &str) -> Result<String> {
        if self.behavior == Behavior::RejectSignatures {
            return Err(TreasuryError::signer("User denied message signature"));
        }
        if !self.accounts.iter().any(|a| a.eq_ignore_ascii_case(account)) {
            return Err(TreasuryError::signer(format!(
                "Unknown account: {}",
                account
            )));
        }

        self.signatures.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "0x{}",
            STANDARD.encode(format!("{}:{}", account, message))
        ))
    }
}

/// Generates a random 20-byte hex address.
pub fn random_address() -> String {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", hex)
}
