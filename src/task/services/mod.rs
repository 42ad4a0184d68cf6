//! Orchestration services for the task context.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    UpdateTaskRequest,
};
