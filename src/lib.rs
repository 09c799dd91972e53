//! Taskboard: project boards backed by a relational store.
//!
//! Projects own tasks, and every task sits in one workflow status. The crate
//! persists projects and builds the board view of a project: one column per
//! status, each holding the tasks currently in that status.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic, including board aggregation
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`board`]: Projects, statuses, tasks, and the board view
//! - [`config`]: Database settings read from the environment
//! - [`telemetry`]: Tracing subscriber installation

pub mod board;
pub mod config;
pub mod telemetry;
