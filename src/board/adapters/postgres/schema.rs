//! Diesel schema for board persistence.

diesel::table! {
    /// Projects owning tasks.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Display name.
        name -> Varchar,
        /// Free-form description.
        description -> Varchar,
        /// Creation date.
        created_at -> Date,
    }
}

diesel::table! {
    /// Workflow statuses shared across projects.
    statuses (id) {
        /// Status identifier.
        id -> Uuid,
        /// Display name.
        name -> Varchar,
    }
}

diesel::table! {
    /// Tasks referencing one project and one status.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        title -> Varchar,
        /// Task description.
        description -> Varchar,
        /// Current status.
        status_id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::joinable!(tasks -> statuses (status_id));

diesel::allow_tables_to_appear_in_same_query!(projects, statuses, tasks);
