//! Task module - the task list, its filters, and derived views.
//!
//! - `task`: the `Task` record and identifier generation
//! - `store`: `TaskStore`, the single owner of the list
//! - `filter`: the closed set of filters and the selected one
//! - `view`: visible subset, summary heading, focus hints

mod filter;
mod store;
pub mod task;
pub mod view;

pub use filter::{Filter, FilterError, FilterState};
pub use store::{TaskStore, TASKS_KEY};
pub use task::{IdGenerator, Task, TaskId, UuidGenerator};
pub use view::{Focus, FocusTracker, TaskView};
