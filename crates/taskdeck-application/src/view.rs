//! Render models consumed by the host UI.
//!
//! Each task becomes one [`TaskRow`]. The row carries everything the
//! renderer needs verbatim: control labels, the priority label, and the
//! fixed style contracts for the delete control and the content region.

use taskdeck_core::Task;

/// Toggle-control label while the task is incomplete.
pub const COMPLETE_LABEL: &str = "完成";

/// Toggle-control label once the task is completed.
pub const UNCOMPLETE_LABEL: &str = "取消完成";

/// Inline style contract for a row control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlStyle {
    pub opacity: &'static str,
    pub text_decoration: &'static str,
}

impl ControlStyle {
    /// Style of the delete control.
    ///
    /// Fixed for every row: the delete affordance stays fully visible and
    /// un-struck no matter what the task's completion state is.
    pub fn delete_control() -> Self {
        Self {
            opacity: "1",
            text_decoration: "none",
        }
    }
}

/// Inline style contract for the task text region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStyle {
    pub overflow_wrap: &'static str,
    pub overflow: &'static str,
}

impl ContentStyle {
    /// Long text wraps inside the row instead of overflowing it
    /// horizontally.
    pub fn content_region() -> Self {
        Self {
            overflow_wrap: "break-word",
            overflow: "visible",
        }
    }
}

/// One rendered row of the task board.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: String,
    pub content: String,
    pub priority_label: &'static str,
    pub completed: bool,
    /// Label of the completion-toggle control for the current state.
    pub toggle_label: &'static str,
    pub delete_style: ControlStyle,
    pub content_style: ContentStyle,
}

impl TaskRow {
    /// Projects a task into its render model.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            content: task.text.clone(),
            priority_label: task.priority.label(),
            completed: task.completed,
            toggle_label: if task.completed {
                UNCOMPLETE_LABEL
            } else {
                COMPLETE_LABEL
            },
            delete_style: ControlStyle::delete_control(),
            content_style: ContentStyle::content_region(),
        }
    }
}
