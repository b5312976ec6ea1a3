//! Error types for the treasury client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire treasury workspace.
///
/// Variants fall into two groups:
/// - *precondition failures* raised before any state is touched
///   (disconnected session, blank input, bad amounts, incomplete forms)
/// - *collaborator failures* raised by the signer, the key-value store or
///   the file system
///
/// Neither group is fatal. Callers surface them as notifications and leave
/// the prior state unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TreasuryError {
    /// No account is connected to the session
    #[error("Wallet not connected")]
    NotConnected,

    /// Comment text was empty or whitespace only
    #[error("Comment text is empty")]
    EmptyComment,

    /// Amount was zero, negative or not a number
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    /// Amount exceeds the available balance
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    /// Required form fields were left blank
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A form field failed its format check
    #[error("Invalid {field}: {message}")]
    InvalidField { field: String, message: String },

    /// Terms and conditions were not accepted
    #[error("Terms and conditions not accepted")]
    TermsNotAccepted,

    /// No signer is installed
    #[error("No signer available")]
    SignerUnavailable,

    /// The signer rejected or failed a request
    #[error("Signer error: {0}")]
    Signer(String),

    /// The same operation is already running
    #[error("Operation already in progress: {0}")]
    OperationInProgress(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TreasuryError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates an InvalidField error
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a Signer error
    pub fn signer(message: impl Into<String>) -> Self {
        Self::Signer(message.into())
    }

    /// Creates an OperationInProgress error
    pub fn in_progress(operation: impl Into<String>) -> Self {
        Self::OperationInProgress(operation.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Classification
    // ============================================================================

    /// Returns true for failures detected before any collaborator is called.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NotConnected
                | Self::EmptyComment
                | Self::InvalidAmount { .. }
                | Self::InsufficientFunds { .. }
                | Self::MissingFields(_)
                | Self::InvalidField { .. }
                | Self::TermsNotAccepted
                | Self::OperationInProgress(_)
        )
    }

    /// Returns true for failures raised by the signer or by storage.
    pub fn is_collaborator(&self) -> bool {
        matches!(
            self,
            Self::SignerUnavailable
                | Self::Signer(_)
                | Self::Storage(_)
                | Self::Io { .. }
                | Self::Serialization { .. }
        )
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TreasuryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TreasuryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TreasuryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for TreasuryError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TreasuryError>`.
pub type Result<T> = std::result::Result<T, TreasuryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_classification() {
        assert!(TreasuryError::NotConnected.is_precondition());
        assert!(TreasuryError::EmptyComment.is_precondition());
        assert!(TreasuryError::InvalidAmount { amount: -1.0 }.is_precondition());
        assert!(!TreasuryError::SignerUnavailable.is_precondition());
        assert!(TreasuryError::signer("user rejected").is_collaborator());
        assert!(!TreasuryError::TermsNotAccepted.is_collaborator());
    }

    #[test]
    fn test_display_messages() {
        let err = TreasuryError::InsufficientFunds {
            requested: 400.0,
            available: 300.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 400.00, available 300.00"
        );

        let err = TreasuryError::MissingFields(vec!["email".into(), "fullName".into()]);
        assert_eq!(err.to_string(), "Missing required fields: email, fullName");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TreasuryError = io.into();
        assert!(matches!(err, TreasuryError::Io { .. }));
        assert!(err.is_collaborator());
    }
}
