//! Domain layer for taskdeck.
//!
//! This crate owns the task list state and the rules that govern it:
//! creation-time validation, completion toggling, deletion, and the
//! presentation-order projection consumed by a renderer. Persistence is
//! abstracted behind [`task::TaskListRepository`] so any key-value backend
//! can be injected at construction.

pub mod error;
pub mod task;

// Re-export common error type
pub use error::{Result, TaskdeckError};
pub use task::{Priority, Task, TaskListRepository, TaskStore};
