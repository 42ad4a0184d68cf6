//! Authentication and account lifecycle for Tessera.
//!
//! This context owns the sign-up / sign-in decision procedure, account
//! tombstoning, credential verification, and bearer token minting. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
