//! Task model definition.

use serde::{Deserialize, Serialize};

/// One checkable unit of daily study work.
///
/// The id is derived from the day's date and the task's slot, so it stays
/// stable across sessions as long as the start date does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier, used as the key into completion state
    pub id: String,

    /// Short label shown in the checklist
    pub label: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Task {
    /// Creates a task without a description.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
        }
    }
}
