//! Adapter implementations for the account ports.

pub mod jwt;
pub mod memory;
pub mod postgres;

pub use jwt::{Claims, JwtTokenIssuer, TokenSettings};
