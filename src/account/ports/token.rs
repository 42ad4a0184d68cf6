//! Token issuer port.
//!
//! The issuer is a pure mint: it does not check confirmation or lockout
//! state. Those decisions belong to the authentication service.

use crate::account::domain::AccountId;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Role claim carried by every issued token.
pub const USER_ROLE: &str = "user";

/// Result type for token issuing operations.
pub type TokenIssueResult<T> = Result<T, TokenIssueError>;

/// A signed, time-bounded bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Signed token string.
    pub token: String,
    /// End of the validity window.
    pub expires_at: DateTime<Utc>,
}

/// Bearer token minting contract.
pub trait TokenIssuer: Send + Sync {
    /// Mints a signed token asserting the account identity and role claim.
    ///
    /// # Errors
    ///
    /// Returns [`TokenIssueError::SigningKeyMissing`] when no signing key is
    /// configured, or a signing fault when encoding fails.
    fn issue(&self, account_id: AccountId, role: &str) -> TokenIssueResult<IssuedToken>;
}

/// Errors returned by token issuer implementations.
#[derive(Debug, Clone, Error)]
pub enum TokenIssueError {
    /// The symmetric signing key is empty or absent.
    #[error("token signing key is missing")]
    SigningKeyMissing,

    /// Token encoding failed.
    #[error("token encoding error: {0}")]
    Encoding(Arc<dyn std::error::Error + Send + Sync>),
}

impl TokenIssueError {
    /// Wraps a token encoding fault.
    pub fn encoding(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Encoding(Arc::new(err))
    }
}
