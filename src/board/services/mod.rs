//! Application services for project management and board retrieval.

mod projects;

pub use projects::{
    CreateProjectRequest, ProjectService, ProjectServiceError, ProjectServiceResult,
    UpdateProjectRequest,
};
