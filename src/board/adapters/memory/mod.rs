//! In-memory board store for tests and local development.

mod store;

pub use store::InMemoryBoardStore;
