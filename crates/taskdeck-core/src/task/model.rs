//! Task domain model.
//!
//! This module contains the core `Task` entity and the `Priority` value
//! object. Validation happens at construction time: a task can only exist
//! with non-empty, trimmed text.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Urgency level chosen when a task is created. Immutable afterwards.
///
/// The string form (`"high"` / `"medium"` / `"low"`) matches the values a
/// host select control submits, so `Priority::from_str` parses raw form
/// input directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric ordering key: high sorts before medium sorts before low.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Short label shown next to the task content.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Medium => "中",
            Priority::Low => "低",
        }
    }
}

/// A single to-do entry.
///
/// `id` is assigned once at creation and is the lookup key for toggle and
/// delete. `text` and `priority` never change after creation; `completed`
/// changes only through [`TaskStore::toggle_complete`].
///
/// [`TaskStore::toggle_complete`]: super::TaskStore::toggle_complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// A unique identifier for the task, stable for its lifetime.
    pub id: String,
    /// The task description, trimmed and non-empty.
    pub text: String,
    /// The urgency level chosen at creation.
    pub priority: Priority,
    /// Whether the task has been marked done.
    pub completed: bool,
    /// RFC 3339 creation timestamp. Metadata only, not an ordering key.
    pub created_at: String,
}

impl Task {
    /// Builds a task from raw form input.
    ///
    /// The text is trimmed first; if nothing remains, no task is produced
    /// and `None` is returned. New tasks always start incomplete.
    pub fn new(text: &str, priority: Priority) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            priority,
            completed: false,
            created_at: Utc::now().to_rfc3339(),
        })
    }
}
