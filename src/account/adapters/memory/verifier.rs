//! In-memory credential verifier with salted digests and lockout counting.
//!
//! The digest scheme is an adapter detail, not part of the port contract; a
//! production deployment would put a real password-hashing service behind
//! the same port.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::account::{
    domain::AccountId,
    ports::{
        CredentialVerifier, CredentialVerifierError, CredentialVerifierResult, PasswordVerdict,
    },
};

/// Consecutive failed attempts tolerated before lockout.
const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone)]
struct StoredCredential {
    salt: [u8; 16],
    digest: [u8; 32],
    failed_attempts: u32,
}

/// Thread-safe in-memory credential store.
///
/// Tracks a consecutive-failure counter per account; once the counter
/// reaches the configured threshold every further attempt reports
/// [`PasswordVerdict::LockedOut`] without evaluating the password.
#[derive(Debug, Clone)]
pub struct InMemoryCredentialVerifier {
    state: Arc<RwLock<HashMap<AccountId, StoredCredential>>>,
    max_failed_attempts: u32,
}

impl InMemoryCredentialVerifier {
    /// Creates a verifier with the default lockout threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
        }
    }

    /// Overrides the lockout threshold.
    #[must_use]
    pub fn with_max_failed_attempts(mut self, attempts: u32) -> Self {
        self.max_failed_attempts = attempts;
        self
    }
}

impl Default for InMemoryCredentialVerifier {
    fn default() -> Self {
        Self::new()
    }
}

fn digest(salt: &[u8; 16], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[async_trait]
impl CredentialVerifier for InMemoryCredentialVerifier {
    async fn register(
        &self,
        account_id: AccountId,
        password: &str,
    ) -> CredentialVerifierResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CredentialVerifierError::verification(std::io::Error::other(err.to_string()))
        })?;
        let salt: [u8; 16] = *Uuid::new_v4().as_bytes();
        let credential = StoredCredential {
            salt,
            digest: digest(&salt, password),
            failed_attempts: 0,
        };
        state.insert(account_id, credential);
        Ok(())
    }

    async fn verify(
        &self,
        account_id: AccountId,
        password: &str,
    ) -> CredentialVerifierResult<PasswordVerdict> {
        let mut state = self.state.write().map_err(|err| {
            CredentialVerifierError::verification(std::io::Error::other(err.to_string()))
        })?;
        let credential = state
            .get_mut(&account_id)
            .ok_or(CredentialVerifierError::UnknownAccount(account_id))?;

        if credential.failed_attempts >= self.max_failed_attempts {
            return Ok(PasswordVerdict::LockedOut);
        }

        if digest(&credential.salt, password) == credential.digest {
            credential.failed_attempts = 0;
            return Ok(PasswordVerdict::Verified);
        }

        credential.failed_attempts += 1;
        if credential.failed_attempts >= self.max_failed_attempts {
            return Ok(PasswordVerdict::LockedOut);
        }
        Ok(PasswordVerdict::Rejected)
    }
}
