//! View derivation: the visible subset, its heading, and focus hints.
//!
//! Everything here is a pure function of the task list and the current
//! filter, except [`FocusTracker`], which remembers the list length seen at
//! the previous render.

use serde::Serialize;

use super::{Filter, Task, TaskId};

/// Tasks selected by `filter`, in list order.
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    let keep = filter.predicate();
    tasks.iter().filter(|task| keep(task)).collect()
}

/// `"<count> task(s) remaining"`.
///
/// `count` is the number of *visible* tasks, so under the Completed filter this
/// reports completed tasks as "remaining".
pub fn summary_heading(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{} {} remaining", count, noun)
}

/// Element that should receive keyboard focus after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    /// The list heading, after a task was deleted
    ListHeading,
    /// The rename input of a task that just entered edit mode
    EditField(TaskId),
    /// The Edit button of a task that just left edit mode
    EditButton(TaskId),
}

/// Composed view of the task list.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub filter: Filter,
    pub heading: String,
    pub tasks: Vec<Task>,
}

impl TaskView {
    pub fn compose(tasks: &[Task], filter: Filter) -> Self {
        let visible: Vec<Task> = visible_tasks(tasks, filter).into_iter().cloned().collect();
        Self {
            filter,
            heading: summary_heading(visible.len()),
            tasks: visible,
        }
    }
}

/// Remembers the task count between renders.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    previous_len: Option<usize>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current list length and report whether the heading should
    /// take focus, which happens when the list shrank by exactly one.
    pub fn observe(&mut self, len: usize) -> Option<Focus> {
        let previous = self.previous_len.replace(len);
        match previous {
            Some(prev) if prev.checked_sub(1) == Some(len) => Some(Focus::ListHeading),
            _ => None,
        }
    }
}

/// Focus for a render, given the list length and the edit-mode transition.
///
/// A task entering edit mode focuses its input and a task leaving it focuses
/// its Edit button. Either wins over the deletion hint.
pub fn focus_for_render(
    tracker: &mut FocusTracker,
    len: usize,
    editing: Option<&TaskId>,
    finished_editing: Option<&TaskId>,
) -> Option<Focus> {
    let deletion = tracker.observe(len);
    if let Some(id) = editing {
        return Some(Focus::EditField(id.clone()));
    }
    if let Some(id) = finished_editing {
        return Some(Focus::EditButton(id.clone()));
    }
    deletion
}
