//! Domain model for task lifecycle management.
//!
//! The task domain models creation against a live owner, full-overwrite
//! updates, tombstoning, and read-time projection while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod projection;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use projection::TaskProjection;
pub use task::{PersistedTaskData, Task};
