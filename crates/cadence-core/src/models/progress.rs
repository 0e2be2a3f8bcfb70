//! The learner's mutable progress state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Completion flags, daily submissions and generated feedback.
///
/// Serialized as a JSON object with the keys `completedTasks`,
/// `userOutputs` and `aiFeedback`. Keys that no longer match the curriculum
/// are kept as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    /// Task id to completion flag
    #[serde(default)]
    pub completed_tasks: BTreeMap<String, bool>,

    /// Day date to submitted text
    #[serde(default)]
    pub user_outputs: BTreeMap<String, String>,

    /// Day date to feedback text
    #[serde(default)]
    pub ai_feedback: BTreeMap<String, String>,
}

impl ProgressState {
    /// Flips the completion flag of `id`. An absent key counts as not done,
    /// so the first toggle marks the task complete.
    #[must_use]
    pub fn toggle_task(mut self, id: impl Into<String>) -> Self {
        let flag = self.completed_tasks.entry(id.into()).or_insert(false);
        *flag = !*flag;
        self
    }

    /// Replaces the submission for `date`. An empty string is stored as-is.
    #[must_use]
    pub fn set_output(mut self, date: impl Into<String>, text: impl Into<String>) -> Self {
        self.user_outputs.insert(date.into(), text.into());
        self
    }

    /// Replaces the feedback for `date`.
    #[must_use]
    pub fn set_feedback(mut self, date: impl Into<String>, text: impl Into<String>) -> Self {
        self.ai_feedback.insert(date.into(), text.into());
        self
    }

    /// Whether the task is done; absent ids are not.
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_tasks.get(id).copied().unwrap_or(false)
    }

    /// The submission for `date`, or `None` if nothing was written yet.
    pub fn output(&self, date: &str) -> Option<&str> {
        self.user_outputs.get(date).map(String::as_str)
    }

    /// The feedback for `date`, or `None` if none was produced yet.
    pub fn feedback(&self, date: &str) -> Option<&str> {
        self.ai_feedback.get(date).map(String::as_str)
    }

    /// Whether the state holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.completed_tasks.is_empty() && self.user_outputs.is_empty() && self.ai_feedback.is_empty()
    }
}
