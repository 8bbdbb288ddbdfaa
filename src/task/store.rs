//! Task list ownership and write-through persistence.
//!
//! `TaskStore` is the only writer of the task list. Every mutating command
//! updates the in-memory list first and then saves the whole list under
//! [`TASKS_KEY`]. A failed save is returned to the caller but the in-memory
//! change stands; the in-memory list is authoritative.

use std::collections::HashSet;
use std::sync::Arc;

use super::{IdGenerator, Task, TaskId, UuidGenerator};
use crate::storage::{Result, SharedStore};

/// Storage key holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

pub struct TaskStore {
    tasks: Vec<Task>,
    storage: SharedStore,
    ids: Arc<dyn IdGenerator>,
}

impl TaskStore {
    /// Load the task list from storage using random UUID identifiers.
    pub async fn load(storage: SharedStore) -> Self {
        Self::load_with_ids(storage, Arc::new(UuidGenerator)).await
    }

    /// Load the task list from storage.
    ///
    /// A missing, unreadable or unparsable value yields an empty list.
    pub async fn load_with_ids(storage: SharedStore, ids: Arc<dyn IdGenerator>) -> Self {
        let tasks = match storage.load(TASKS_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Task>>(&bytes) {
                Ok(tasks) => dedupe_ids(tasks),
                Err(e) => {
                    tracing::warn!("Failed to parse stored task list: {}, starting empty", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::info!(
                    "No stored task list in {} store, starting empty",
                    storage.backend_name()
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read stored task list: {}, starting empty", e);
                Vec::new()
            }
        };
        tracing::info!("Loaded {} tasks", tasks.len());

        Self {
            tasks,
            storage,
            ids,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn storage(&self) -> &SharedStore {
        &self.storage
    }

    /// Append a new, not yet completed task. The name is stored as given.
    pub async fn add(&mut self, name: &str) -> Result<Task> {
        let id = self.fresh_id();
        let task = Task::new(id, name);
        tracing::debug!(id = %task.id, "Adding task");
        self.tasks.push(task.clone());
        self.persist().await?;
        Ok(task)
    }

    /// Remove the task with `id`. Unknown ids are ignored.
    pub async fn delete(&mut self, id: &TaskId) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        tracing::debug!(%id, removed = before != self.tasks.len(), "Deleting task");
        self.persist().await
    }

    /// Rename the task with `id`, keeping its completion state. Unknown ids are ignored.
    pub async fn edit(&mut self, id: &TaskId, new_name: &str) -> Result<()> {
        if let Some(task) = self.find_mut(id) {
            task.name = new_name.to_string();
            tracing::debug!(%id, "Renamed task");
        }
        self.persist().await
    }

    /// Flip completion of the task with `id`. Unknown ids are ignored.
    pub async fn toggle_completed(&mut self, id: &TaskId) -> Result<()> {
        if let Some(task) = self.find_mut(id) {
            task.completed = !task.completed;
            tracing::debug!(%id, completed = task.completed, "Toggled task");
        }
        self.persist().await
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new(self.ids.next_id());
            if self.get(&id).is_none() {
                return id;
            }
            tracing::warn!(%id, "Identifier collision, regenerating");
        }
    }

    async fn persist(&self) -> Result<()> {
        let data = serde_json::to_vec(&self.tasks)?;
        if let Err(e) = self.storage.save(TASKS_KEY, &data).await {
            tracing::error!("Failed to persist task list: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

/// Keep the first task for each id, in order.
fn dedupe_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let total = tasks.len();
    let unique: Vec<Task> = tasks
        .into_iter()
        .filter(|task| seen.insert(task.id.clone()))
        .collect();
    if unique.len() != total {
        tracing::warn!(
            "Dropped {} stored tasks with duplicate ids",
            total - unique.len()
        );
    }
    unique
}
