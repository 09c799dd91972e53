//! Repository ports for project persistence and board row retrieval.

use crate::board::domain::{BoardRecord, Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Single-entity project persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every stored project.
    async fn list(&self) -> BoardStoreResult<Vec<Project>>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> BoardStoreResult<Option<Project>>;

    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::DuplicateProject`] when the identifier is
    /// already taken.
    async fn store(&self, project: &Project) -> BoardStoreResult<()>;

    /// Persists changes to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::NotFound`] when the project does not exist.
    async fn update(&self, project: &Project) -> BoardStoreResult<()>;

    /// Deletes a project. Deleting a missing project succeeds.
    async fn delete(&self, id: ProjectId) -> BoardStoreResult<()>;
}

/// Source of flat project x task x status rows.
///
/// Implementations perform an inner join of a project with its tasks and
/// each task's status, so tasks without a resolvable status never appear.
/// The order of the returned records is unspecified.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRowSource: Send + Sync {
    /// Returns one record per task of `project_id`; empty for unknown
    /// projects and for projects without tasks.
    async fn board_records(&self, project_id: ProjectId) -> BoardStoreResult<Vec<BoardRecord>>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
