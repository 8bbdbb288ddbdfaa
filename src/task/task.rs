//! Core Task type and identifier generation.
//!
//! # Invariants
//! - `id` is unique within a task list and never changes after creation
//! - Lookup and mutation compare tasks by `id` only

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a task.
///
/// # Properties
/// - No format is assumed beyond being a string
/// - Immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single to-do entry.
///
/// Serialized as `{"id": ..., "name": ..., "completed": ...}`, which is also the
/// persisted record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// User-editable label. Any string is accepted, including empty.
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a task that is not yet completed.
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// Supplier of fresh task identifiers.
pub trait IdGenerator: Send + Sync {
    /// Return a new opaque identifier. Collisions must be negligibly rare.
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_not_completed() {
        let task = Task::new(TaskId::from("a"), "Buy milk");
        assert_eq!(task.name, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn task_serializes_as_flat_record() {
        let task = Task {
            id: TaskId::from("todo-0"),
            name: "Eat".to_string(),
            completed: true,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "todo-0", "name": "Eat", "completed": true})
        );
    }

    #[test]
    fn missing_completed_defaults_to_false() {
        let task: Task = serde_json::from_str(r#"{"id":"x","name":"Sleep"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn uuid_generator_produces_distinct_ids() {
        let ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
