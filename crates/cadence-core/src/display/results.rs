//! Result wrapper types for displaying the outcome of mutations.

use std::fmt;

use crate::{feedback::Feedback, models::Task};

/// Outcome of toggling a task.
pub struct TaskToggled<'a> {
    pub task: &'a Task,
    pub done: bool,
}

impl fmt::Display for TaskToggled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "x" } else { " " };
        writeln!(f, "- [{mark}] {}", self.task)?;
        writeln!(
            f,
            "Marked {} as {}.",
            self.task.id,
            if self.done { "done" } else { "not done" }
        )
    }
}

/// Outcome of saving a submission.
pub struct OutputSaved<'a> {
    pub date: &'a str,
    pub text: &'a str,
}

impl fmt::Display for OutputSaved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved output for {} ({} characters).",
            self.date,
            self.text.chars().count()
        )
    }
}

/// Outcome of a feedback request.
pub struct FeedbackResult<'a> {
    pub date: &'a str,
    pub feedback: &'a Feedback,
}

impl fmt::Display for FeedbackResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## AI Teacher Feedback · {}", self.date)?;
        writeln!(f)?;
        writeln!(f, "{}", self.feedback)
    }
}
