//! Task list persistence trait.
//!
//! Defines the interface for persisting the task list as a whole.

use super::model::Task;
use crate::error::Result;

/// An abstract adapter over a key-value store holding the serialized task
/// list under one fixed key.
///
/// This trait decouples the store from the concrete storage mechanism
/// (JSON file, in-memory map, browser storage bridge). Persistence is
/// wholesale: `save` replaces the stored list, `load` reads it back in
/// full. There is no partial or incremental persistence.
pub trait TaskListRepository: Send + Sync {
    /// Loads the stored task list.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(tasks))`: A list was stored previously
    /// - `Ok(None)`: Nothing has been stored yet (same as a cleared store)
    /// - `Err(_)`: The backend is unavailable or the stored data is malformed
    fn load(&self) -> Result<Option<Vec<Task>>>;

    /// Replaces the stored task list with `tasks`.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: List saved successfully
    /// - `Err(_)`: Error occurred during save
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
