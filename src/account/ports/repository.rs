//! Repository port for account persistence and lookup.
//!
//! Soft delete is a storage-layer invariant enforced here once: every lookup
//! excludes tombstoned rows unless the caller reaches for an explicit `_any`
//! variant. The `_any` variants serve the sign-in deleted-account diagnostic,
//! idempotent account tombstoning, and owner joins on surviving tasks.

use crate::account::domain::{Account, AccountId, EmailAddress};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account persistence contract.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateEmail`] when any account,
    /// tombstoned or not, already holds the email address, or
    /// [`AccountRepositoryError::DuplicateId`] on identifier collision.
    async fn insert(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Persists changes to an existing account (confirmation, tombstone,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when the account does not
    /// exist.
    async fn update(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Finds a live account by identifier.
    ///
    /// Returns `None` when the account does not exist or is tombstoned.
    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>>;

    /// Finds an account by identifier, including tombstoned rows.
    ///
    /// Returns `None` only when no row exists at all.
    async fn find_by_id_any(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>>;

    /// Finds a live account by email address.
    ///
    /// Returns `None` when no live account holds the address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> AccountRepositoryResult<Option<Account>>;

    /// Finds an account by email address, including tombstoned rows.
    ///
    /// Sign-in uses this lookup so it can distinguish "unknown email" from
    /// "email belongs to a tombstoned account".
    async fn find_by_email_any(
        &self,
        email: &EmailAddress,
    ) -> AccountRepositoryResult<Option<Account>>;

    /// Returns all live accounts.
    async fn list(&self) -> AccountRepositoryResult<Vec<Account>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// An account with the same email address already exists.
    #[error("duplicate account email: {0}")]
    DuplicateEmail(EmailAddress),

    /// An account with the same identifier already exists.
    #[error("duplicate account identifier: {0}")]
    DuplicateId(AccountId),

    /// The account was not found.
    #[error("account not found: {0}")]
    NotFound(AccountId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
