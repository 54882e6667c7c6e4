//! Presentation-order comparator.
//!
//! Ordering shown to the renderer is a view-time computation, never a
//! stored property: higher priority first, and within a priority level
//! incomplete tasks before completed ones. The comparator returns
//! `Ordering::Equal` for key ties so a stable sort preserves insertion
//! order among them.

use std::cmp::Ordering;

use super::model::Task;

/// Compares two tasks for presentation order.
///
/// Primary key is the priority rank (high = 0 sorts first), secondary key
/// is the completion flag (`false` sorts before `true`). Pure and
/// stateless, so sorting the same list twice yields the same sequence.
pub fn presentation_cmp(a: &Task, b: &Task) -> Ordering {
    (a.priority.rank(), a.completed).cmp(&(b.priority.rank(), b.completed))
}
