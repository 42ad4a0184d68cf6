//! Diesel row models for account persistence.

use super::schema::accounts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
    /// Country.
    pub country: String,
    /// Optional profile image reference.
    pub profile_image: Option<String>,
    /// Email confirmation flag.
    pub email_confirmed: bool,
    /// Tombstone flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tombstone timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
    /// Country.
    pub country: String,
    /// Optional profile image reference.
    pub profile_image: Option<String>,
    /// Email confirmation flag.
    pub email_confirmed: bool,
    /// Tombstone flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tombstone timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Changeset for the mutable account columns.
///
/// Profile fields and the email address are immutable after sign-up, so the
/// changeset only carries lifecycle bookkeeping.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = accounts)]
#[diesel(treat_none_as_null = true)]
pub struct AccountChangeset {
    /// Email confirmation flag.
    pub email_confirmed: bool,
    /// Tombstone flag.
    pub deleted: bool,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tombstone timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}
