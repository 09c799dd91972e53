//! Port contracts for project persistence and board retrieval.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod repository;

pub use repository::{BoardRowSource, BoardStoreError, BoardStoreResult, ProjectRepository};

#[cfg(test)]
pub use repository::{MockBoardRowSource, MockProjectRepository};
