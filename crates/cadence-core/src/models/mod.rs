//! Data models for the curriculum and the learner's progress.
//!
//! The curriculum types ([`Task`], [`DailyPlan`], [`WeekPlan`], [`Phase`]) are
//! immutable once generated. [`ProgressState`] is the only mutable entity; its
//! mutators consume the old value and return the new one, and persisting the
//! result is left to the caller (see [`crate::store::ProgressStore`]).
//!
//! Display implementations for these models live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::ProgressState;
//!
//! let state = ProgressState::default()
//!     .toggle_task("2025-01-19-w1")
//!     .set_output("2025-01-19", "Listening 24/40, Reading 27/40");
//!
//! assert!(state.is_completed("2025-01-19-w1"));
//! assert_eq!(state.output("2025-01-19"), Some("Listening 24/40, Reading 27/40"));
//! assert_eq!(state.feedback("2025-01-19"), None);
//! ```

pub mod phase;
pub mod plan;
pub mod progress;
pub mod summary;
pub mod task;


pub use phase::{Phase, PhaseColor};
pub use plan::{DailyPlan, WeekPlan};
pub use progress::ProgressState;
pub use summary::{PhaseProgress, ProgressSummary};
pub use task::Task;
