//! Service layer for project management and board retrieval.

use crate::board::{
    domain::{BoardAggregate, BoardDomainError, Project, ProjectId, aggregate},
    ports::{BoardRowSource, BoardStoreError, ProjectRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
}

impl CreateProjectRequest {
    /// Creates a request with an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for changing an existing project.
///
/// Fields left unset keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    id: ProjectId,
    name: Option<String>,
    description: Option<String>,
}

impl UpdateProjectRequest {
    /// Creates a request that changes nothing yet.
    #[must_use]
    pub const fn new(id: ProjectId) -> Self {
        Self {
            id,
            name: None,
            description: None,
        }
    }

    /// Sets a new project name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project management and board retrieval service.
#[derive(Clone)]
pub struct ProjectService<R, B, C>
where
    R: ProjectRepository,
    B: BoardRowSource,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    rows: Arc<B>,
    clock: Arc<C>,
}

impl<R, B, C> ProjectService<R, B, C>
where
    R: ProjectRepository,
    B: BoardRowSource,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>, rows: Arc<B>, clock: Arc<C>) -> Self {
        Self {
            repository,
            rows,
            clock,
        }
    }

    /// Returns every project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Store`] when the lookup fails.
    pub async fn list_projects(&self) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.repository.list().await?)
    }

    /// Finds a project by identifier.
    ///
    /// Returns `Ok(None)` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Store`] when the lookup fails.
    pub async fn find_project(&self, id: ProjectId) -> ProjectServiceResult<Option<Project>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Creates and stores a new project dated today.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when the name is blank or the store
    /// rejects the project.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> ProjectServiceResult<Project> {
        let project = Project::new(request.name, request.description, &*self.clock)?;
        self.repository.store(&project).await?;
        info!(project_id = %project.id(), name = project.name(), "project created");
        Ok(project)
    }

    /// Applies the requested changes to a stored project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Store`] wrapping
    /// [`BoardStoreError::NotFound`] when the project does not exist, or
    /// [`ProjectServiceError::Domain`] when the new name is blank.
    pub async fn update_project(
        &self,
        request: UpdateProjectRequest,
    ) -> ProjectServiceResult<Project> {
        let UpdateProjectRequest {
            id,
            name,
            description,
        } = request;
        let mut project = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BoardStoreError::NotFound(id))?;

        if let Some(new_name) = name {
            project.rename(new_name)?;
        }
        if let Some(new_description) = description {
            project.describe(new_description);
        }

        self.repository.update(&project).await?;
        info!(project_id = %id, "project updated");
        Ok(project)
    }

    /// Deletes a project; deleting an unknown project succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Store`] when the store fails.
    pub async fn delete_project(&self, id: ProjectId) -> ProjectServiceResult<()> {
        self.repository.delete(id).await?;
        info!(project_id = %id, "project deleted");
        Ok(())
    }

    /// Builds the board view of a project.
    ///
    /// An unknown project, or one without tasks, yields an empty board.
    /// Column order follows the order in which the row source returns
    /// statuses.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Store`] when the row source fails; the
    /// error is passed through unchanged.
    pub async fn get_project_aggregate(
        &self,
        id: ProjectId,
    ) -> ProjectServiceResult<BoardAggregate> {
        let records = self.rows.board_records(id).await?;
        let record_count = records.len();
        let board = aggregate(records);
        debug!(
            project_id = %id,
            records = record_count,
            columns = board.columns.len(),
            "project board aggregated"
        );
        Ok(board)
    }
}
