//! Task entity and its board projection.

use super::{BoardDomainError, ProjectId, StatusId, TaskId};
use serde::{Deserialize, Serialize};

/// A task owned by one project and currently in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    project_id: ProjectId,
    status_id: StatusId,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Owning project.
    pub project_id: ProjectId,
    /// Current status.
    pub status_id: StatusId,
}

impl Task {
    /// Creates a task in `status_id` belonging to `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn new(
        project_id: ProjectId,
        status_id: StatusId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self {
            id: TaskId::new(),
            title: trimmed.to_owned(),
            description: description.into(),
            project_id,
            status_id,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            project_id: data.project_id,
            status_id: data.status_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the current status identifier.
    #[must_use]
    pub const fn status_id(&self) -> StatusId {
        self.status_id
    }

    /// Moves the task to another status.
    pub const fn move_to(&mut self, status_id: StatusId) {
        self.status_id = status_id;
    }
}

/// Task shape exposed inside board columns.
///
/// Carries only the task's own fields; joined project and status snapshots
/// are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status the task was in when the board was built.
    pub status_id: StatusId,
    /// Owning project.
    pub project_id: ProjectId,
}

impl From<Task> for TaskSummary {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status_id: task.status_id,
            project_id: task.project_id,
        }
    }
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        Self::from(task.clone())
    }
}
