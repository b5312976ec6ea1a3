//! External signer trait.

use async_trait::async_trait;

use crate::error::Result;

/// A wallet able to expose accounts and sign messages.
///
/// Both calls may fail, e.g. when the user cancels the prompt. The session
/// never interprets the signature; it only needs the call to succeed.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Requests access to the wallet's accounts.
    ///
    /// # Returns
    ///
    /// - `Ok(accounts)`: Accounts in wallet order; the first one is used
    /// - `Err(_)`: The request was rejected or the wallet failed
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Requests a signature of `message` by `account`.
    async fn sign_message(&self, message: &str, account: &str) -> Result<String>;
}
