//! # Task List
//!
//! A to-do list served to the browser, with the list persisted in a
//! key-value store so it survives restarts.
//!
//! This library provides:
//! - `TaskStore`, the single owner of the ordered task list
//! - Filters (All / Active / Completed) and the derived page view
//! - Pluggable key-value storage (memory, JSON files, SQLite)
//! - An HTTP server with a server-rendered page and a JSON API
//!
//! ## Flow
//!
//! ```text
//!   form post / API call
//!          │
//!          ▼
//!   ┌─────────────┐   save("tasks")   ┌───────────────┐
//!   │  TaskStore  │ ────────────────▶ │ KeyValueStore │
//!   └──────┬──────┘                   └───────────────┘
//!          │
//!          ▼
//!   TaskView::compose(tasks, filter) ──▶ HTML / JSON
//! ```
//!
//! ## Modules
//! - `task`: Task records, the store, filters and views
//! - `storage`: Key-value backends
//! - `api`: HTTP routes

pub mod api;
pub mod config;
pub mod storage;
pub mod task;
pub mod util;

pub use config::Config;
pub use storage::{KeyValueStore, StorageError, StoreType};
pub use task::{Filter, FilterState, Task, TaskId, TaskStore, TaskView};
