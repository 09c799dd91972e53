//! `PostgreSQL` implementation of the board ports.

use super::{
    models::{ProjectRow, StatusRow, TaskRow, joined_row_to_record},
    schema::{projects, statuses, tasks},
};
use crate::board::{
    domain::{BoardRecord, Project, ProjectId},
    ports::{BoardRowSource, BoardStoreError, BoardStoreResult, ProjectRepository},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed board store.
#[derive(Debug, Clone)]
pub struct PostgresBoardStore {
    pool: BoardPgPool,
}

impl PostgresBoardStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardStoreError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresBoardStore {
    async fn list(&self) -> BoardStoreResult<Vec<Project>> {
        debug!("listing projects");
        self.run_blocking(|connection| {
            let rows = projects::table
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(BoardStoreError::persistence)?;
            Ok(rows.into_iter().map(Project::from).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> BoardStoreResult<Option<Project>> {
        debug!(project_id = %id, "finding project");
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(BoardStoreError::persistence)?;
            Ok(row.map(Project::from))
        })
        .await
    }

    async fn store(&self, project: &Project) -> BoardStoreResult<()> {
        let project_id = project.id();
        let new_row = ProjectRow::from(project);
        debug!(project_id = %project_id, "storing project");

        self.run_blocking(move |connection| {
            diesel::insert_into(projects::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardStoreError::DuplicateProject(project_id)
                    }
                    _ => BoardStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, project: &Project) -> BoardStoreResult<()> {
        let project_id = project.id();
        let changes = ProjectRow::from(project);
        debug!(project_id = %project_id, "updating project");

        self.run_blocking(move |connection| {
            let target = projects::table.filter(projects::id.eq(project_id.into_inner()));
            let updated = diesel::update(target)
                .set(&changes)
                .execute(connection)
                .map_err(BoardStoreError::persistence)?;
            if updated == 0 {
                return Err(BoardStoreError::NotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> BoardStoreResult<()> {
        debug!(project_id = %id, "deleting project");
        self.run_blocking(move |connection| {
            diesel::delete(projects::table.filter(projects::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(BoardStoreError::persistence)?;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl BoardRowSource for PostgresBoardStore {
    async fn board_records(&self, project_id: ProjectId) -> BoardStoreResult<Vec<BoardRecord>> {
        debug!(project_id = %project_id, "loading board records");
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .inner_join(projects::table)
                .inner_join(statuses::table)
                .filter(projects::id.eq(project_id.into_inner()))
                .select((
                    ProjectRow::as_select(),
                    TaskRow::as_select(),
                    StatusRow::as_select(),
                ))
                .load::<(ProjectRow, TaskRow, StatusRow)>(connection)
                .map_err(BoardStoreError::persistence)?;
            Ok(rows.into_iter().map(joined_row_to_record).collect())
        })
        .await
    }
}
