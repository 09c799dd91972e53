//! Shared world state for board aggregation BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{BoardAggregate, ProjectId, Status},
    services::{ProjectService, ProjectServiceError},
};

/// Service type used by the BDD world.
pub type TestBoardService = ProjectService<InMemoryBoardStore, InMemoryBoardStore, DefaultClock>;

/// Scenario world for board aggregation behaviour tests.
pub struct BoardWorld {
    pub store: InMemoryBoardStore,
    pub service: TestBoardService,
    pub project_id: Option<ProjectId>,
    pub statuses: HashMap<String, Status>,
    pub last_board: Option<Result<BoardAggregate, ProjectServiceError>>,
}

impl BoardWorld {
    /// Creates a world backed by an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryBoardStore::new();
        let shared = Arc::new(store.clone());
        Self {
            store,
            service: ProjectService::new(shared.clone(), shared, Arc::new(DefaultClock)),
            project_id: None,
            statuses: HashMap::new(),
            last_board: None,
        }
    }

    /// Returns the board from the last request, failing if none succeeded.
    pub fn board(&self) -> Result<&BoardAggregate, eyre::Report> {
        self.last_board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing board result in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected board failure: {err}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated step argument into trimmed names.
pub fn names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
