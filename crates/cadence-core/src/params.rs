//! Parameter structures for planner operations
//!
//! These structures are shared by every interface that drives a
//! [`crate::Planner`]. They carry no framework-specific derives; the CLI
//! defines its own clap wrappers and converts them with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│    Planner      │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Identifies a task by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRef {
    /// The task id, e.g. `2025-01-19-w1`
    pub id: String,
}

/// Identifies a study day by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRef {
    /// The day's calendar date
    pub date: Date,
}

/// Parameters for saving a day's submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetOutput {
    /// The day's calendar date
    pub date: Date,
    /// Submission text; may be empty
    pub text: String,
}

/// Parameters for choosing which week to show.
///
/// A phase takes precedence over a week number. With neither, the week that
/// contains `today` is chosen, falling back to week 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectWeek {
    /// Week number; clamped into 1..=23
    pub week: Option<u8>,
    /// Jump to the first week of this phase
    pub phase: Option<u8>,
    /// The current date
    pub today: Date,
}
