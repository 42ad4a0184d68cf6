//! Port contracts for account persistence, credential verification, and
//! token minting.

pub mod repository;
pub mod token;
pub mod verifier;

pub use repository::{AccountRepository, AccountRepositoryError, AccountRepositoryResult};
pub use token::{IssuedToken, TokenIssueError, TokenIssueResult, TokenIssuer, USER_ROLE};
pub use verifier::{
    CredentialVerifier, CredentialVerifierError, CredentialVerifierResult, PasswordVerdict,
};

#[cfg(test)]
pub use verifier::MockCredentialVerifier;
