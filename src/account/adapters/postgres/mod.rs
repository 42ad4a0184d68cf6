//! `PostgreSQL` adapters for account persistence.

mod models;
mod repository;
mod schema;

pub use repository::{AccountPgPool, PostgresAccountRepository};
