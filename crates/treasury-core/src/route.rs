//! Page routes and the access guard.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Login,
    Whitelist,
    Dashboard,
    PastEvents,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Whitelist => "/whitelist",
            Route::Dashboard => "/dashboard",
            Route::PastEvents => "/past-events",
        }
    }

    /// Resolves where a visit to `self` actually lands for `session`.
    ///
    /// - the dashboard redirects to login while disconnected
    /// - login redirects connected users to the dashboard or the whitelist form
    pub fn resolve(self, session: &Session) -> Route {
        match self {
            Route::Dashboard if !session.is_connected() => Route::Login,
            Route::Login if session.is_connected() => Self::landing(session),
            other => other,
        }
    }

    /// Where a freshly connected user is sent.
    pub fn landing(session: &Session) -> Route {
        if !session.is_connected() {
            Route::Login
        } else if session.is_whitelisted == Some(true) {
            Route::Dashboard
        } else {
            Route::Whitelist
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn connected(whitelisted: Option<bool>) -> Session {
        let mut session = Session::new(300.0);
        session.connect("0xA");
        session.is_whitelisted = whitelisted;
        session
    }

    #[test]
    fn test_dashboard_requires_connection() {
        let session = Session::new(300.0);
        assert_eq!(Route::Dashboard.resolve(&session), Route::Login);
        assert_eq!(
            Route::Dashboard.resolve(&connected(Some(false))),
            Route::Dashboard
        );
    }

    #[test]
    fn test_login_redirects_connected_users() {
        assert_eq!(Route::Login.resolve(&connected(Some(true))), Route::Dashboard);
        assert_eq!(Route::Login.resolve(&connected(None)), Route::Whitelist);
        assert_eq!(Route::Login.resolve(&Session::new(0.0)), Route::Login);
    }

    #[test]
    fn test_public_routes_pass_through() {
        let session = Session::new(300.0);
        assert_eq!(Route::PastEvents.resolve(&session), Route::PastEvents);
        assert_eq!(Route::Whitelist.resolve(&session), Route::Whitelist);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Route::from_str("past-events").unwrap(), Route::PastEvents);
        assert_eq!(Route::PastEvents.to_string(), "past-events");
        assert_eq!(Route::PastEvents.path(), "/past-events");
    }
}
