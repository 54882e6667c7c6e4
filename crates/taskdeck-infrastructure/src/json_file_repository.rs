//! JSON file TaskListRepository implementation.
//!
//! Stores the whole task list as one JSON document at a fixed path,
//! mirroring how the original kept a serialized blob under one key in
//! browser storage.

use std::fs;
use std::path::{Path, PathBuf};

use taskdeck_core::{Result, Task, TaskListRepository, TaskdeckError};

use crate::config::StorageConfig;
use crate::dto::TaskListDocument;
use crate::paths::TaskdeckPaths;

/// File-backed task list repository.
///
/// Responsibilities:
/// - Read/write the task document at its path
/// - Convert between stored records and domain tasks via the DTO layer
///
/// Does NOT:
/// - Recover from malformed documents (the store decides what a failed
///   load means)
pub struct JsonFileTaskRepository {
    path: PathBuf,
}

impl JsonFileTaskRepository {
    /// Creates a repository at the default location, honoring an optional
    /// `config.toml` override.
    pub fn new() -> Result<Self> {
        let paths = TaskdeckPaths::new(None);
        let config = StorageConfig::load(&paths);
        Ok(Self {
            path: config.task_file(&paths)?,
        })
    }

    /// Creates a repository over a custom document path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The document path this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskListRepository for JsonFileTaskRepository {
    fn load(&self) -> Result<Option<Vec<Task>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| TaskdeckError::io(format!("failed to read task document: {}", e)))?;
        let document: TaskListDocument = serde_json::from_str(&raw)
            .map_err(|e| TaskdeckError::serialization("JSON", e.to_string()))?;
        Ok(Some(document.into_tasks()))
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TaskdeckError::io(format!("failed to create storage directory: {}", e))
            })?;
        }
        let document = TaskListDocument::from_tasks(tasks);
        let raw = serde_json::to_string_pretty(&document)
            .map_err(|e| TaskdeckError::serialization("JSON", e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| TaskdeckError::io(format!("failed to write task document: {}", e)))
    }
}
