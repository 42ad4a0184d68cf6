//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing domain account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The email address is malformed.
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),
}
