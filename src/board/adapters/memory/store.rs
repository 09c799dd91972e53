//! Thread-safe in-memory implementation of the board ports.

use crate::board::{
    domain::{BoardRecord, Project, ProjectId, Status, StatusId, Task},
    ports::{BoardRowSource, BoardStoreError, BoardStoreResult, ProjectRepository},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory store holding projects, statuses, and tasks.
///
/// Tasks are kept in insertion order, which is also the order in which the
/// row source yields them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    projects: Vec<Project>,
    statuses: HashMap<StatusId, Status>,
    tasks: Vec<Task>,
}

impl InMemoryBoardState {
    fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }
}

impl InMemoryBoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the lock is poisoned.
    pub fn insert_status(&self, status: Status) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        state.statuses.insert(status.id(), status);
        Ok(())
    }

    /// Adds a task. A task that already exists is replaced in place.
    ///
    /// The task's project and status are not checked here; the row source
    /// skips tasks whose status or project cannot be resolved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the lock is poisoned.
    pub fn insert_task(&self, task: Task) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        if let Some(stored) = state.tasks.iter_mut().find(|stored| stored.id() == task.id()) {
            *stored = task;
            return Ok(());
        }
        state.tasks.push(task);
        Ok(())
    }

    fn read(&self) -> BoardStoreResult<RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state.read().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> BoardStoreResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state.write().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl ProjectRepository for InMemoryBoardStore {
    async fn list(&self) -> BoardStoreResult<Vec<Project>> {
        Ok(self.read()?.projects.clone())
    }

    async fn find_by_id(&self, id: ProjectId) -> BoardStoreResult<Option<Project>> {
        Ok(self.read()?.project(id).cloned())
    }

    async fn store(&self, project: &Project) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        if state.project(project.id()).is_some() {
            return Err(BoardStoreError::DuplicateProject(project.id()));
        }
        state.projects.push(project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        let stored = state
            .projects
            .iter_mut()
            .find(|stored| stored.id() == project.id())
            .ok_or(BoardStoreError::NotFound(project.id()))?;
        *stored = project.clone();
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        state.projects.retain(|project| project.id() != id);
        state.tasks.retain(|task| task.project_id() != id);
        Ok(())
    }
}

#[async_trait]
impl BoardRowSource for InMemoryBoardStore {
    async fn board_records(&self, project_id: ProjectId) -> BoardStoreResult<Vec<BoardRecord>> {
        let state = self.read()?;
        let Some(project) = state.project(project_id) else {
            return Ok(Vec::new());
        };

        let records = state
            .tasks
            .iter()
            .filter(|task| task.project_id() == project_id)
            .filter_map(|task| {
                state.statuses.get(&task.status_id()).map(|status| BoardRecord {
                    project: project.clone(),
                    status: status.clone(),
                    task: task.clone(),
                })
            })
            .collect();
        Ok(records)
    }
}
