//! Optional storage configuration.
//!
//! A `config.toml` in the taskdeck config directory can move the task
//! document elsewhere. Absent or unreadable configuration falls back to
//! defaults, matching the degrade-gracefully rule the rest of the
//! persistence layer follows.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use taskdeck_core::Result;

use crate::paths::{TASK_FILE_NAME, TaskdeckPaths};

/// Storage settings read from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the task document. Defaults to the config
    /// directory when unset.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Loads configuration from the resolver's config file.
    ///
    /// Missing files yield defaults. Malformed files are logged and also
    /// yield defaults; configuration problems never take the task list
    /// down with them.
    pub fn load(paths: &TaskdeckPaths) -> Self {
        let Ok(path) = paths.config_file() else {
            return Self::default();
        };
        let Ok(raw) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("malformed config at {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolves the task document path, honoring `storage_dir` when set.
    pub fn task_file(&self, paths: &TaskdeckPaths) -> Result<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.join(TASK_FILE_NAME)),
            None => paths.task_file(),
        }
    }
}
