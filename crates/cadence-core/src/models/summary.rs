//! Progress summary types.

use serde::{Deserialize, Serialize};

/// Completion statistics over a set of tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Number of completed tasks
    pub completed: u32,
    /// Total number of tasks
    pub total: u32,
}

impl ProgressSummary {
    pub fn new(completed: u32, total: u32) -> Self {
        Self { completed, total }
    }

    /// Completion as a whole percentage, `round(100 * completed / total)`.
    /// An empty set reports 0.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.completed) * 100.0 / f64::from(self.total)).round() as u32
    }

    /// Tasks still open.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }
}

/// Completion statistics for one phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseProgress {
    /// Phase identifier
    pub phase_id: u8,
    /// Phase display name
    pub name: String,
    /// Completion over the phase's weeks
    pub summary: ProgressSummary,
}
