//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::task::Filter;

/// Request to add a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    /// Task name, stored exactly as given
    pub name: String,
}

/// Request to rename a task.
#[derive(Debug, Clone, Deserialize)]
pub struct EditTaskRequest {
    pub name: String,
}

/// Request to change the current filter.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFilterRequest {
    /// One of `All`, `Active`, `Completed` (lowercase accepted)
    pub filter: String,
}

/// Current filter.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResponse {
    pub filter: Filter,
}

/// Query for listing tasks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Filter to apply for this request only; the current filter otherwise
    pub filter: Option<String>,
}

/// Query for the HTML page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Task to render in edit mode
    pub edit: Option<String>,
    /// Task that just left edit mode
    pub edited: Option<String>,
}

/// Single-field form used by the add, rename and filter controls.
#[derive(Debug, Clone, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub name: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Storage backend name
    pub storage: String,

    /// Whether tasks survive a restart
    pub persistent: bool,

    /// Number of tasks currently held
    pub task_count: usize,
}
