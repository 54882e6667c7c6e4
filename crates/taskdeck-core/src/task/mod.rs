//! Task domain module.
//!
//! This module contains the task domain model, the persistence trait, the
//! presentation-order comparator, and the store that ties them together.
//!
//! # Module Structure
//!
//! - `model`: Core task domain models (`Task`, `Priority`)
//! - `sort`: Pure comparator for the presentation-order projection
//! - `repository`: Task list persistence trait
//! - `store`: In-memory task store with injected persistence

mod model;
pub mod repository;
pub mod sort;
mod store;

// Re-export public API
pub use model::{Priority, Task};
pub use repository::TaskListRepository;
pub use sort::presentation_cmp;
pub use store::TaskStore;
