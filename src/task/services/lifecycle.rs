//! Service layer for task creation, update, tombstoning, and retrieval.
//!
//! Each successful mutation publishes one best-effort notification after the
//! store has acknowledged the write. Publish and persistence are not one
//! transaction: a fault between the two drops the notification, at most once.

use crate::account::{
    domain::{AccountId, AccountProjection},
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::broadcast::{EventBroadcaster, TASK_UPDATE_STREAM};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskProjection, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    owner_id: AccountId,
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        owner_id: AccountId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            owner_id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Request payload for overwriting a task's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: String,
    description: String,
    completed: bool,
}

impl UpdateTaskRequest {
    /// Creates a request carrying the full replacement state.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The owning account does not exist or is tombstoned.
    #[error("owner account not found: {0}")]
    OwnerNotFound(AccountId),

    /// The task does not exist or is tombstoned.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Account repository operation failed.
    #[error(transparent)]
    Accounts(#[from] AccountRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<T, A, C>
where
    T: TaskRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    accounts: Arc<A>,
    broadcaster: EventBroadcaster,
    clock: Arc<C>,
}

impl<T, A, C> TaskLifecycleService<T, A, C>
where
    T: TaskRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        accounts: Arc<A>,
        broadcaster: EventBroadcaster,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            accounts,
            broadcaster,
            clock,
        }
    }

    /// Creates a new task owned by a live account.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::OwnerNotFound`] when the owner does not
    /// exist or is tombstoned, [`TaskLifecycleError::Domain`] when the title
    /// is empty, or a repository error on persistence failure.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<TaskProjection> {
        let CreateTaskRequest {
            owner_id,
            title,
            description,
        } = request;

        let Some(owner) = self.accounts.find_by_id(owner_id).await? else {
            warn!(owner_id = %owner_id, "task creation rejected, owner not found");
            return Err(TaskLifecycleError::OwnerNotFound(owner_id));
        };

        let task_title = TaskTitle::new(title)?;
        let task = Task::new(owner.id(), task_title, description, &*self.clock);
        self.tasks.insert(&task).await?;
        info!(task_id = %task.id(), owner_id = %owner_id, "task created");

        let projection = TaskProjection::from_task(&task, AccountProjection::from_account(&owner));
        self.notify(format!("task created: {}", task.title()));
        Ok(projection)
    }

    /// Overwrites title, description, and completion flag of a live task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task is missing
    /// or tombstoned, [`TaskLifecycleError::Domain`] when the title is empty,
    /// or a repository error on persistence failure.
    pub async fn update_task(
        &self,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<TaskProjection> {
        let UpdateTaskRequest {
            id,
            title,
            description,
            completed,
        } = request;

        let Some(mut task) = self.tasks.find_by_id(id).await? else {
            warn!(task_id = %id, "task update rejected, task not found");
            return Err(TaskLifecycleError::TaskNotFound(id));
        };

        let task_title = TaskTitle::new(title)?;
        task.apply_update(task_title, description, completed, &*self.clock);
        self.tasks.update(&task).await?;
        info!(task_id = %id, "task updated");

        let owner = self.owner_projection(&task).await?;
        let projection = TaskProjection::from_task(&task, owner);
        self.notify(format!("task updated: {}", task.title()));
        Ok(projection)
    }

    /// Tombstones a live task.
    ///
    /// A missing or already-tombstoned identifier is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Tasks`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let Some(mut task) = self.tasks.find_by_id(id).await? else {
            warn!(task_id = %id, "delete requested for unknown or tombstoned task");
            return Ok(());
        };

        task.tombstone(&*self.clock);
        self.tasks.update(&task).await?;
        info!(task_id = %id, "task tombstoned");

        self.notify(format!("task deleted: {id}"));
        Ok(())
    }

    /// Returns the projection of a live task joined with its owner.
    ///
    /// Returns `Ok(None)` when the task is missing or tombstoned.
    ///
    /// # Errors
    ///
    /// Returns a repository error when a lookup fails.
    pub async fn fetch_task(&self, id: TaskId) -> TaskLifecycleResult<Option<TaskProjection>> {
        let Some(task) = self.tasks.find_by_id(id).await? else {
            return Ok(None);
        };
        let owner = self.owner_projection(&task).await?;
        Ok(Some(TaskProjection::from_task(&task, owner)))
    }

    /// Returns projections of all live tasks joined with their owners.
    ///
    /// # Errors
    ///
    /// Returns a repository error when a lookup fails.
    pub async fn fetch_all_tasks(&self) -> TaskLifecycleResult<Vec<TaskProjection>> {
        let tasks = self.tasks.list().await?;
        let mut projections = Vec::with_capacity(tasks.len());
        for task in &tasks {
            let owner = self.owner_projection(task).await?;
            projections.push(TaskProjection::from_task(task, owner));
        }
        Ok(projections)
    }

    /// Resolves the owner projection for read-time display.
    ///
    /// Uses the unfiltered lookup: account rows are never physically removed,
    /// and a task must still project after its owner is tombstoned.
    async fn owner_projection(&self, task: &Task) -> TaskLifecycleResult<AccountProjection> {
        let owner = self
            .accounts
            .find_by_id_any(task.owner())
            .await?
            .ok_or(TaskLifecycleError::OwnerNotFound(task.owner()))?;
        Ok(AccountProjection::from_account(&owner))
    }

    /// Publishes a change notification, best effort.
    fn notify(&self, message: String) {
        let reached = self.broadcaster.publish(message);
        debug!(
            stream = TASK_UPDATE_STREAM,
            listeners = reached,
            "task change notification published"
        );
    }
}
