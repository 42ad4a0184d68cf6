//! Read-time view of a task joined with its owning account.

use super::{Task, TaskId};
use crate::account::domain::AccountProjection;
use serde::Serialize;

/// Serializable task view handed to callers of the read operations.
///
/// Bookkeeping fields (tombstone flag and timestamps) are deliberately
/// absent: tombstoned tasks never reach a projection, and callers only see
/// presentation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProjection {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Owning account view.
    pub owner: AccountProjection,
}

impl TaskProjection {
    /// Builds the projection from a task and its owner's view.
    #[must_use]
    pub fn from_task(task: &Task, owner: AccountProjection) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            completed: task.completed(),
            owner,
        }
    }
}
