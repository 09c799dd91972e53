//! Folding flat join records into a board view.
//!
//! A row source returns one [`BoardRecord`] per task of a project, each
//! carrying full project, status, and task snapshots. [`aggregate`] groups
//! those records into columns keyed by status id.
//!
//! Column order is the order in which status ids are first seen in the
//! input. Relational joins do not guarantee row order, so the column order
//! of a board is only as stable as the row source that produced it.

use super::{Project, ProjectId, Status, StatusId, Task, TaskSummary};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the project x task x status inner join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRecord {
    /// Project snapshot.
    pub project: Project,
    /// Snapshot of the task's current status.
    pub status: Status,
    /// Task snapshot.
    pub task: Task,
}

/// A board column: one status and the tasks currently in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Status identifier keying the column.
    pub id: StatusId,
    /// Status display name, taken from the first record that named it.
    pub name: String,
    /// Tasks in arrival order.
    pub tasks: Vec<TaskSummary>,
}

impl BoardColumn {
    fn open(status: &Status) -> Self {
        Self {
            id: status.id(),
            name: status.name().to_owned(),
            tasks: Vec::new(),
        }
    }
}

/// Board view of a single project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardAggregate {
    /// Project name, or the empty string for a board built from no records.
    pub name: String,
    /// Columns in first-seen status order.
    pub columns: Vec<BoardColumn>,
}

impl BoardAggregate {
    /// Returns the board produced by an empty record set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the column for `status_id`, if any task referenced it.
    #[must_use]
    pub fn column(&self, status_id: StatusId) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.id == status_id)
    }

    /// Total number of task entries across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}

/// Builds a board from flat join records.
///
/// All records are expected to belong to one project; the board takes its
/// name from the first record. Records from other projects are not rejected
/// and are grouped like any other record, with a warning logged. Duplicate
/// records yield duplicate task entries.
#[must_use]
pub fn aggregate(records: impl IntoIterator<Item = BoardRecord>) -> BoardAggregate {
    let mut records = records.into_iter().peekable();
    let Some(first) = records.peek() else {
        return BoardAggregate::empty();
    };
    let project_id = first.project.id();
    let name = first.project.name().to_owned();

    let mut columns: Vec<BoardColumn> = Vec::new();
    let mut positions: HashMap<StatusId, usize> = HashMap::new();
    let mut foreign_projects: Vec<ProjectId> = Vec::new();

    for BoardRecord {
        project,
        status,
        task,
    } in records
    {
        if project.id() != project_id && !foreign_projects.contains(&project.id()) {
            foreign_projects.push(project.id());
        }

        let position = *positions.entry(status.id()).or_insert_with(|| {
            columns.push(BoardColumn::open(&status));
            columns.len() - 1
        });
        if let Some(column) = columns.get_mut(position) {
            column.tasks.push(TaskSummary::from(task));
        }
    }

    if !foreign_projects.is_empty() {
        tracing::warn!(
            project_id = %project_id,
            foreign_projects = ?foreign_projects,
            "board records span more than one project"
        );
    }

    BoardAggregate { name, columns }
}
