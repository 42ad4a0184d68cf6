//! Session shapes produced by the authentication decision procedure.

use super::AccountProjection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful sign-in outcome.
///
/// Transient: never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Signed bearer token.
    pub token: String,
    /// End of the token validity window.
    pub expires_at: DateTime<Utc>,
    /// Public projection of the signed-in account.
    pub account: AccountProjection,
}

/// Wire shape of a sign-up or sign-in outcome.
///
/// On failure the token is empty and `errors` carries ordered human-readable
/// messages; the projection is present on success and on the deleted-account
/// failure diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    /// Signed bearer token, empty on failure.
    pub token: String,
    /// End of the token validity window, absent on failure.
    pub expiry: Option<DateTime<Utc>>,
    /// Ordered human-readable error messages, empty on success.
    pub errors: Vec<String>,
    /// Public account projection, when available.
    pub account: Option<AccountProjection>,
}

impl SessionResult {
    /// Builds the wire shape of a successful session.
    #[must_use]
    pub fn from_session(session: Session) -> Self {
        Self {
            token: session.token,
            expiry: Some(session.expires_at),
            errors: Vec::new(),
            account: Some(session.account),
        }
    }

    /// Builds the wire shape of a failed attempt.
    #[must_use]
    pub const fn failure(errors: Vec<String>) -> Self {
        Self {
            token: String::new(),
            expiry: None,
            errors,
            account: None,
        }
    }

    /// Builds the wire shape of a failed attempt that still carries the
    /// account projection (the deleted-account diagnostic).
    #[must_use]
    pub const fn failure_with_account(errors: Vec<String>, account: AccountProjection) -> Self {
        Self {
            token: String::new(),
            expiry: None,
            errors,
            account: Some(account),
        }
    }

    /// Returns whether the result represents a successful session.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.token.is_empty()
    }
}

impl From<Session> for SessionResult {
    fn from(session: Session) -> Self {
        Self::from_session(session)
    }
}
