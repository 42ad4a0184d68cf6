//! Credential verifier port.
//!
//! Password material is owned entirely by implementations of this port; the
//! account aggregate never sees a hash. Lockout bookkeeping also lives behind
//! this boundary, which is why the verdict enum carries a lockout case.

use crate::account::domain::AccountId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential verifier operations.
pub type CredentialVerifierResult<T> = Result<T, CredentialVerifierError>;

/// Outcome of checking a plaintext password against stored credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVerdict {
    /// The password matches.
    Verified,
    /// The password does not match.
    Rejected,
    /// The account is locked out; the password was not evaluated.
    LockedOut,
}

/// Credential storage and verification contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Stores credentials for an account, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialVerifierError`] when the credential store rejects
    /// the registration.
    async fn register(&self, account_id: AccountId, password: &str)
    -> CredentialVerifierResult<()>;

    /// Checks a plaintext password against the stored credentials.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialVerifierError::UnknownAccount`] when no
    /// credentials are registered for the account, or a verification fault
    /// when the store fails.
    async fn verify(
        &self,
        account_id: AccountId,
        password: &str,
    ) -> CredentialVerifierResult<PasswordVerdict>;
}

/// Errors returned by credential verifier implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialVerifierError {
    /// No credentials are registered for the account.
    #[error("no credentials registered for account: {0}")]
    UnknownAccount(AccountId),

    /// The credential store failed.
    #[error("credential verification error: {0}")]
    Verification(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialVerifierError {
    /// Wraps a credential store fault.
    pub fn verification(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Verification(Arc::new(err))
    }
}
