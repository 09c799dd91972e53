//! Domain model for projects, statuses, tasks, and the board view.
//!
//! The board view is derived: it is rebuilt from flat join records on every
//! request and never persisted.

mod aggregate;
mod error;
mod ids;
mod project;
mod status;
mod task;

pub use aggregate::{BoardAggregate, BoardColumn, BoardRecord, aggregate};
pub use error::BoardDomainError;
pub use ids::{ProjectId, StatusId, TaskId};
pub use project::{PersistedProjectData, Project};
pub use status::Status;
pub use task::{PersistedTaskData, Task, TaskSummary};
