//! Domain model for account lifecycle and authentication outcomes.
//!
//! The account domain models sign-up, tombstoning, and the shapes produced
//! by the sign-in decision procedure while keeping all infrastructure
//! concerns outside of the domain boundary.

mod account;
mod email;
mod error;
mod ids;
mod projection;
mod session;

pub use account::{Account, AccountProfile, PersistedAccountData};
pub use email::EmailAddress;
pub use error::AccountDomainError;
pub use ids::AccountId;
pub use projection::AccountProjection;
pub use session::{Session, SessionResult};
