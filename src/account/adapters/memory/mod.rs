//! In-memory adapters for account persistence and credential verification.

mod repository;
mod verifier;

pub use repository::InMemoryAccountRepository;
pub use verifier::InMemoryCredentialVerifier;
