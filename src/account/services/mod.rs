//! Orchestration services for the account context.

mod authentication;

pub use authentication::{AuthError, AuthResult, AuthenticationService, SignUpRequest};
