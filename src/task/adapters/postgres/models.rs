//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning account identifier.
    pub owner_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Tombstone flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tombstone timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning account identifier.
    pub owner_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Tombstone flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tombstone timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Changeset for the mutable task columns.
///
/// The owner reference and creation timestamp never change after insert.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Tombstone flag.
    pub deleted: bool,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tombstone timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}
