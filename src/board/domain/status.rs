//! Workflow statuses shared across projects.

use super::{BoardDomainError, StatusId};
use serde::{Deserialize, Serialize};

/// A workflow status; every distinct status referenced by a project's tasks
/// becomes one board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    id: StatusId,
    name: String,
}

impl Status {
    /// Creates a status with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyStatusName`] when the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyStatusName);
        }
        Ok(Self {
            id: StatusId::new(),
            name: trimmed.to_owned(),
        })
    }

    /// Reconstructs a status from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: StatusId, name: String) -> Self {
        Self { id, name }
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
