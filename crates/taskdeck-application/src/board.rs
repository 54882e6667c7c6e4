//! Task board use case.
//!
//! Translates raw UI events into store operations and projects the store
//! into render rows. This is the single object a host shell holds for the
//! lifetime of the page session.

use std::str::FromStr;

use tracing::debug;

use taskdeck_core::{Priority, Result, TaskListRepository, TaskStore};
use taskdeck_infrastructure::JsonFileTaskRepository;

use crate::view::TaskRow;

/// Application facade over the task store.
pub struct TaskBoard {
    store: TaskStore,
}

impl TaskBoard {
    /// Opens a board over the given persistence adapter, loading whatever
    /// list it holds.
    pub fn open(repository: Box<dyn TaskListRepository>) -> Self {
        Self {
            store: TaskStore::open(repository),
        }
    }

    /// Opens a board over the default JSON file backend.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Box::new(JsonFileTaskRepository::new()?)))
    }

    /// Handles the add-task form submission.
    ///
    /// `priority` is the raw select-control value ("high" / "medium" /
    /// "low"). Whitespace-only text and unknown priority values add
    /// nothing and return `None`.
    pub fn submit(&mut self, text: &str, priority: &str) -> Option<TaskRow> {
        let priority = match Priority::from_str(priority) {
            Ok(priority) => priority,
            Err(_) => {
                debug!("submit: unknown priority value '{}', ignoring", priority);
                return None;
            }
        };
        self.store.create(text, priority).map(TaskRow::from_task)
    }

    /// Handles a click on a row's completion-toggle control.
    pub fn toggle(&mut self, id: &str) {
        self.store.toggle_complete(id);
    }

    /// Handles a click on a row's delete control.
    pub fn remove(&mut self, id: &str) {
        self.store.delete(id);
    }

    /// Rows in presentation order, ready for the renderer.
    pub fn rows(&self) -> Vec<TaskRow> {
        self.store.sorted_view().map(TaskRow::from_task).collect()
    }

    /// Number of tasks on the board.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the board has no tasks.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
