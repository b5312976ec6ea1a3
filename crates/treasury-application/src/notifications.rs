//! Notification texts shared by the form-driven use cases.

use treasury_core::error::TreasuryError;
use treasury_core::notification::Notification;

/// Maps a rejected form or precondition to the message shown to the user.
///
/// `action` completes "Please connect your wallet to ...".
/// Returns `None` for errors that need use-case specific wording.
pub(crate) fn rejection(err: &TreasuryError, action: &str) -> Option<Notification> {
    let notification = match err {
        TreasuryError::NotConnected => Notification::error(
            "Not connected",
            format!("Please connect your wallet to {}.", action),
        ),
        TreasuryError::TermsNotAccepted => Notification::error(
            "Terms not accepted",
            "You must accept the terms to submit your application.",
        ),
        TreasuryError::MissingFields(fields) => Notification::error(
            "Missing information",
            format!("Please fill in all required fields: {}.", fields.join(", ")),
        ),
        TreasuryError::InvalidField { field, message } => {
            Notification::error(format!("Invalid {}", field), format!("{}.", message))
        }
        TreasuryError::OperationInProgress(operation) => Notification::error(
            "Please wait",
            format!("A {} is already in progress.", operation),
        ),
        TreasuryError::SignerUnavailable => Notification::error(
            "Wallet not found",
            format!("Please install a wallet to {}.", action),
        ),
        _ => return None,
    };
    Some(notification)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_connected_wording() {
        let n = rejection(&TreasuryError::NotConnected, "leave a comment").unwrap();
        assert_eq!(n.title, "Not connected");
        assert_eq!(n.description, "Please connect your wallet to leave a comment.");
        assert!(n.is_error());
    }

    #[test]
    fn test_collaborator_errors_not_mapped() {
        assert!(rejection(&TreasuryError::signer("denied"), "withdraw funds").is_none());
        assert!(rejection(&TreasuryError::storage("disk full"), "apply").is_none());
    }
}
