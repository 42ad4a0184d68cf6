//! Task lifecycle management for Tessera.
//!
//! This context owns task creation against a live owner, full-overwrite
//! updates, soft-delete tombstoning, and read-time projection joined with
//! the owning account. Every successful mutation fans out one best-effort
//! change notification. The module follows hexagonal architecture:
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
