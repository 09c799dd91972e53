//! Project boards: projects, workflow statuses, tasks, and the board view.
//!
//! A board groups a project's tasks into one column per status. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the board aggregation in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
