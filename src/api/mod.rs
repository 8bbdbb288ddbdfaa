//! HTTP surface for the task list.
//!
//! ## Page
//!
//! - `GET /` - The task list page (`?edit={id}`, `?edited={id}`)
//! - `POST /tasks` - Add a task (form field `name`)
//! - `POST /tasks/{id}/toggle` - Toggle completion
//! - `POST /tasks/{id}/edit` - Rename (form field `name`)
//! - `POST /tasks/{id}/delete` - Delete
//! - `POST /filter` - Select filter (form field `name`)
//!
//! ## JSON
//!
//! - `GET /api/health` - Health check
//! - `GET /api/tasks` - Visible tasks and heading (`?filter=`)
//! - `POST /api/tasks` - Add a task
//! - `PATCH /api/tasks/{id}` - Rename a task
//! - `DELETE /api/tasks/{id}` - Delete a task
//! - `POST /api/tasks/{id}/toggle` - Toggle completion
//! - `GET /api/filter` - Current filter
//! - `PUT /api/filter` - Select filter

mod filter;
pub mod page;
mod routes;
mod tasks;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;
