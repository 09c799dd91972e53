//! Project aggregate root.

use super::{BoardDomainError, ProjectId};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A project owning a set of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    created_at: NaiveDate,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted display name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creation date.
    pub created_at: NaiveDate,
}

impl Project {
    /// Creates a new project stamped with today's date from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id: ProjectId::new(),
            name: validated_name(name.into())?,
            description: description.into(),
            created_at: clock.utc().date_naive(),
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// Renames the project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is blank.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), BoardDomainError> {
        self.name = validated_name(name.into())?;
        Ok(())
    }

    /// Replaces the project description.
    pub fn describe(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

fn validated_name(raw: String) -> Result<String, BoardDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyProjectName);
    }
    Ok(trimmed.to_owned())
}
