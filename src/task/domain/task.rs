//! Task aggregate root.

use super::{TaskId, TaskTitle};
use crate::account::domain::AccountId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task is exclusively owned by one account reference; the owning account
/// never references its tasks back. Deletion is a tombstone: flag and
/// timestamp, never removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: AccountId,
    title: TaskTitle,
    description: String,
    completed: bool,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning account reference.
    pub owner: AccountId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted tombstone flag.
    pub deleted: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted tombstone timestamp, if any.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new live, incomplete task owned by the given account.
    #[must_use]
    pub fn new(
        owner: AccountId,
        title: TaskTitle,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner,
            title,
            description: description.into(),
            completed: false,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            completed: data.completed,
            deleted: data.deleted,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning account reference.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the task has been tombstoned.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the tombstone timestamp, if the task has been tombstoned.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Overwrites title, description, and completion flag.
    pub fn apply_update(
        &mut self,
        title: TaskTitle,
        description: impl Into<String>,
        completed: bool,
        clock: &impl Clock,
    ) {
        self.title = title;
        self.description = description.into();
        self.completed = completed;
        self.touch(clock);
    }

    /// Tombstones the task, excluding it from all further reads and updates.
    pub fn tombstone(&mut self, clock: &impl Clock) {
        self.deleted = true;
        self.deleted_at = Some(clock.utc());
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
