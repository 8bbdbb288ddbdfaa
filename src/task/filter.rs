//! Task list filters.
//!
//! A filter is one of a closed set of named predicates. `FilterState` holds the
//! currently selected one and refuses to enter any state outside that set.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::Task;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter: {0}")]
    Unknown(String),
}

/// Which tasks are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters, in the order their controls are displayed.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Predicate selecting the tasks this filter shows. Total over all tasks.
    pub fn predicate(&self) -> fn(&Task) -> bool {
        match self {
            Filter::All => any_task,
            Filter::Active => is_active,
            Filter::Completed => is_completed,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        (self.predicate())(task)
    }
}

fn any_task(_: &Task) -> bool {
    true
}

fn is_active(task: &Task) -> bool {
    !task.completed
}

fn is_completed(task: &Task) -> bool {
    task.completed
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    /// Accepts the display names, plus their lowercase forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" | "all" => Ok(Filter::All),
            "Active" | "active" => Ok(Filter::Active),
            "Completed" | "completed" => Ok(Filter::Completed),
            other => Err(FilterError::Unknown(other.to_string())),
        }
    }
}

/// Currently selected filter. Defaults to `All`.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    current: Filter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Filter {
        self.current
    }

    /// Select a filter by name.
    ///
    /// Unknown names are rejected and the current filter is kept.
    pub fn set_filter(&mut self, name: &str) -> Result<Filter, FilterError> {
        let filter = name.parse::<Filter>()?;
        self.current = filter;
        Ok(filter)
    }

    pub fn predicate_for(filter: Filter) -> fn(&Task) -> bool {
        filter.predicate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn sample() -> Vec<Task> {
        vec![
            Task {
                id: TaskId::from("1"),
                name: "Eat".into(),
                completed: true,
            },
            Task::new(TaskId::from("2"), "Sleep"),
            Task::new(TaskId::from("3"), "Repeat"),
        ]
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(FilterState::new().current(), Filter::All);
    }

    #[test]
    fn all_accepts_every_task() {
        let all = FilterState::predicate_for(Filter::All);
        assert!(sample().iter().all(all));
    }

    #[test]
    fn active_and_completed_partition_the_list() {
        let tasks = sample();
        let active = FilterState::predicate_for(Filter::Active);
        let completed = FilterState::predicate_for(Filter::Completed);
        for task in &tasks {
            assert_ne!(active(task), completed(task), "task {} in both or neither", task.id);
        }
        let active_count = tasks.iter().filter(|t| active(t)).count();
        let completed_count = tasks.iter().filter(|t| completed(t)).count();
        assert_eq!(active_count + completed_count, tasks.len());
        assert_eq!(completed_count, 1);
    }

    #[test]
    fn set_filter_accepts_known_names() {
        let mut state = FilterState::new();
        assert_eq!(state.set_filter("Completed"), Ok(Filter::Completed));
        assert_eq!(state.current(), Filter::Completed);
        assert_eq!(state.set_filter("active"), Ok(Filter::Active));
        assert_eq!(state.current(), Filter::Active);
    }

    #[test]
    fn set_filter_rejects_unknown_and_keeps_state() {
        let mut state = FilterState::new();
        state.set_filter("Active").unwrap();
        let err = state.set_filter("Archived").unwrap_err();
        assert_eq!(err, FilterError::Unknown("Archived".to_string()));
        assert_eq!(state.current(), Filter::Active);
    }

    #[test]
    fn display_order_matches_controls() {
        let names: Vec<&str> = Filter::ALL.iter().map(Filter::as_str).collect();
        assert_eq!(names, ["All", "Active", "Completed"]);
    }
}
