//! Diesel row models for board persistence.

use super::schema::{projects, statuses, tasks};
use crate::board::domain::{
    BoardRecord, PersistedProjectData, PersistedTaskData, Project, ProjectId, Status, StatusId,
    Task, TaskId,
};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row and insert/update model for projects.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Creation date.
    pub created_at: NaiveDate,
}

/// Query result row for statuses.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StatusRow {
    /// Status identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
}

/// Query result row for tasks.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Current status.
    pub status_id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().into_inner(),
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            created_at: project.created_at(),
        }
    }
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self::from_persisted(PersistedProjectData {
            id: ProjectId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

impl From<StatusRow> for Status {
    fn from(row: StatusRow) -> Self {
        Self::from_persisted(StatusId::from_uuid(row.id), row.name)
    }
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self::from_persisted(PersistedTaskData {
            id: TaskId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            project_id: ProjectId::from_uuid(row.project_id),
            status_id: StatusId::from_uuid(row.status_id),
        })
    }
}

/// Converts one joined `(project, task, status)` tuple into a board record.
pub fn joined_row_to_record(
    (project, task, status): (ProjectRow, TaskRow, StatusRow),
) -> BoardRecord {
    BoardRecord {
        project: project.into(),
        status: status.into(),
        task: task.into(),
    }
}
