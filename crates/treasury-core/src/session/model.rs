//! Session domain model.

use serde::{Deserialize, Serialize};

/// Connection state of a session, derived from [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Disconnected,
    /// Connected, whitelist check not yet resolved
    WhitelistUnknown,
    Whitelisted,
    NotWhitelisted,
}

/// Client-side session state.
///
/// `is_connected` is not stored: it is derived from the presence of
/// `address`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Connected account, if any
    pub address: Option<String>,
    /// `None` until a whitelist check has resolved
    pub is_whitelisted: Option<bool>,
    /// Simulated petty-cash balance in USD
    pub balance: f64,
}

impl Session {
    /// Creates a disconnected session with the given starting balance.
    pub fn new(initial_balance: f64) -> Self {
        Self {
            address: None,
            is_whitelisted: None,
            balance: initial_balance,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Marks the session as connected to `address` with an unknown whitelist state.
    pub fn connect(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
        self.is_whitelisted = None;
    }

    /// Clears the connection and whitelist state. The balance is kept.
    pub fn disconnect(&mut self) {
        self.address = None;
        self.is_whitelisted = None;
    }

    pub fn status(&self) -> SessionStatus {
        match (self.is_connected(), self.is_whitelisted) {
            (false, _) => SessionStatus::Disconnected,
            (true, None) => SessionStatus::WhitelistUnknown,
            (true, Some(true)) => SessionStatus::Whitelisted,
            (true, Some(false)) => SessionStatus::NotWhitelisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_disconnected() {
        let session = Session::new(300.0);
        assert!(!session.is_connected());
        assert_eq!(session.status(), SessionStatus::Disconnected);
        assert_eq!(session.balance, 300.0);
    }

    #[test]
    fn test_status_transitions() {
        let mut session = Session::new(300.0);
        session.connect("0xA");
        assert_eq!(session.status(), SessionStatus::WhitelistUnknown);

        session.is_whitelisted = Some(true);
        assert_eq!(session.status(), SessionStatus::Whitelisted);

        session.is_whitelisted = Some(false);
        assert_eq!(session.status(), SessionStatus::NotWhitelisted);

        session.disconnect();
        assert_eq!(session.status(), SessionStatus::Disconnected);
        assert!(session.is_whitelisted.is_none());
    }

    #[test]
    fn test_disconnect_keeps_balance() {
        let mut session = Session::new(300.0);
        session.connect("0xA");
        session.balance = 250.0;
        session.disconnect();
        assert_eq!(session.balance, 250.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut session = Session::new(300.0);
        session.connect("0xA");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["address"], "0xA");
        assert!(json["isWhitelisted"].is_null());
    }
}
