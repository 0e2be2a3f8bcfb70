//! Display formatting for curriculum and progress.
//!
//! Every formatter produces markdown, which the CLI renders in the terminal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  View Wrappers  │    │   Formatted     │
//! │ (WeekPlan, ...) │───▶│ & Result Types  │───▶│    Output       │
//! │ + ProgressState │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Curriculum models know nothing about progress, so anything that shows
//! check marks or submissions goes through a view wrapper that borrows both.
//!
//! - [`views`]: [`WeekView`] and [`DayView`]
//! - [`collections`]: [`PhaseList`] and [`ProgressReport`]
//! - [`results`]: outcomes of mutations
//! - [`models`]: Display implementations for plain models
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::{
//!     curriculum::{generate_curriculum, DEFAULT_START_DATE},
//!     display::DayView,
//!     models::ProgressState,
//! };
//!
//! let curriculum = generate_curriculum(DEFAULT_START_DATE)?;
//! let day = &curriculum.week(1)?.daily_plans[0];
//! let state = ProgressState::default().toggle_task("2025-01-19-w1");
//!
//! let output = DayView::new(day, &state).to_string();
//! assert!(output.contains("[x] 剑10 T1 诊断"));
//! # Ok::<(), cadence_core::CadenceError>(())
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod views;

pub use collections::{PhaseList, ProgressReport};
pub use results::{FeedbackResult, OutputSaved, TaskToggled};
pub use views::{DayView, WeekView};
