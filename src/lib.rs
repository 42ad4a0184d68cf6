//! Tessera: multi-tenant task tracking core.
//!
//! This crate provides the core functionality for account sign-up and
//! sign-in, bearer token issuance, soft-deleted task lifecycle management,
//! and best-effort fan-out of task change notifications.
//!
//! # Architecture
//!
//! Tessera follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, tokens, etc.)
//!
//! # Modules
//!
//! - [`account`]: Accounts, credential verification, and session issuance
//! - [`task`]: Task creation, updates, tombstoning, and projections
//! - [`broadcast`]: Fire-and-forget task change notifications
//! - [`api`]: Shared envelope types for transport layers

pub mod account;
pub mod api;
pub mod broadcast;
pub mod task;
