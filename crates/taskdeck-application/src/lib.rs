//! Application layer for taskdeck.
//!
//! This crate sits at the renderer boundary: it wires the task store to a
//! persistence adapter and translates raw UI events (form submission,
//! button clicks) into store operations, handing back view models the
//! host renderer draws from.

pub mod board;
pub mod view;

pub use board::TaskBoard;
pub use view::{ContentStyle, ControlStyle, TaskRow};
