//! In-memory TaskListRepository implementation.
//!
//! Models a browser-style key-value store: string values under string
//! keys, with the task list serialized as JSON under one fixed key.
//! Cloning shares the underlying map, so two stores opened over clones
//! behave like two page loads over the same browser storage. Used in
//! tests and as a fallback when no file backend is available.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use taskdeck_core::{Result, Task, TaskListRepository, TaskdeckError};

use crate::dto::TaskListDocument;

/// Fixed key the task list document is stored under.
const TASK_LIST_KEY: &str = "tasks";

/// Shared in-memory key-value store.
#[derive(Clone, Default)]
pub struct MemoryTaskRepository {
    cells: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTaskRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes everything, like clearing browser storage. A cleared store
    /// loads as "no tasks yet".
    pub fn clear(&self) {
        self.cells.lock().unwrap().clear();
    }

    /// Overwrites the raw stored value (for corrupt-data tests).
    pub fn put_raw(&self, value: impl Into<String>) {
        self.cells
            .lock()
            .unwrap()
            .insert(TASK_LIST_KEY.to_string(), value.into());
    }
}

impl TaskListRepository for MemoryTaskRepository {
    fn load(&self) -> Result<Option<Vec<Task>>> {
        let cells = self.cells.lock().unwrap();
        let Some(raw) = cells.get(TASK_LIST_KEY) else {
            return Ok(None);
        };
        let document: TaskListDocument = serde_json::from_str(raw)
            .map_err(|e| TaskdeckError::serialization("JSON", e.to_string()))?;
        Ok(Some(document.into_tasks()))
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string(&TaskListDocument::from_tasks(tasks))
            .map_err(|e| TaskdeckError::serialization("JSON", e.to_string()))?;
        self.cells
            .lock()
            .unwrap()
            .insert(TASK_LIST_KEY.to_string(), raw);
        Ok(())
    }
}
