//! Stored-document shapes for the task list.
//!
//! The stored form is decoupled from the domain model so the on-disk
//! payload can stay compatible with the original browser payload
//! (camelCase keys, optional timestamp) without leaking those concerns
//! into `taskdeck-core`.

use serde::{Deserialize, Serialize};
use taskdeck_core::{Priority, Task};

/// One stored task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    /// Older payloads predate the timestamp field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// The whole stored document. Every save replaces it wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskListDocument {
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
            priority: task.priority,
            completed: task.completed,
            created_at: Some(task.created_at.clone()),
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            priority: record.priority,
            completed: record.completed,
            created_at: record.created_at.unwrap_or_default(),
        }
    }
}

impl TaskListDocument {
    /// Builds the document for a full-list save.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            tasks: tasks.iter().map(TaskRecord::from).collect(),
        }
    }

    /// Converts stored records back into domain tasks, preserving order.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks.into_iter().map(Task::from).collect()
    }
}
