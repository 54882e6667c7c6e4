//! Unified path management for taskdeck storage files.
//!
//! All file locations are resolved here so repositories and configuration
//! agree on where things live.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/taskdeck/          # Config directory
//! ├── config.toml              # Optional storage configuration
//! └── tasks.json               # Task list document (the fixed storage key)
//! ```

use std::path::{Path, PathBuf};

use taskdeck_core::{Result, TaskdeckError};

/// File name of the task list document. This plays the role of the fixed
/// key the original used in browser storage.
pub const TASK_FILE_NAME: &str = "tasks.json";

/// File name of the optional storage configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Path resolution for taskdeck files.
///
/// A base directory can be injected for tests; otherwise the platform
/// config directory is used.
pub struct TaskdeckPaths {
    base_dir: Option<PathBuf>,
}

impl TaskdeckPaths {
    /// Creates a resolver. Pass `Some(dir)` to root all files under a
    /// custom directory (used by tests), `None` for the platform default.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the taskdeck configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("taskdeck"))
            .ok_or_else(|| TaskdeckError::config("cannot determine config directory"))
    }

    /// Returns the path of the optional configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the path of the task list document.
    pub fn task_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(TASK_FILE_NAME))
    }
}
