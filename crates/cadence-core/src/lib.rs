//! Core library for the Cadence study planner.
//!
//! Cadence walks a learner through a fixed 23-week IELTS curriculum. This
//! crate holds the three parts of the system:
//!
//! - **Curriculum** ([`curriculum`]): the plan, generated deterministically
//!   from a start date
//! - **Progress** ([`models::ProgressState`], [`store`]): completion flags,
//!   daily submissions and feedback, persisted as one JSON file
//! - **Feedback** ([`feedback`]): a single call to a text generation service
//!   that degrades to a fixed message on failure
//!
//! [`Planner`] composes them for a host such as the CLI.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cadence_core::{
//!     feedback::{FeedbackGateway, GeminiConfig},
//!     params::{DayRef, SetOutput},
//!     PlannerBuilder,
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_state_file(Some("progress.json"))
//!     .build()
//!     .await?;
//!
//! let day = date(2025, 1, 19);
//! planner
//!     .set_output(&SetOutput {
//!         date: day,
//!         text: "Listening 24/40, Reading 27/40".to_string(),
//!     })
//!     .await?;
//!
//! let gateway = FeedbackGateway::gemini(
//!     GeminiConfig::default().with_api_key(std::env::var("GEMINI_API_KEY").ok()),
//! );
//! let feedback = planner.request_feedback(&gateway, &DayRef { date: day }).await?;
//! println!("{feedback}");
//! # Ok(())
//! # }
//! ```

pub mod curriculum;
pub mod display;
pub mod error;
pub mod feedback;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use curriculum::{generate_curriculum, Curriculum, WeekCursor};
pub use display::{DayView, PhaseList, ProgressReport, WeekView};
pub use error::{CadenceError, Result};
pub use feedback::{Feedback, FeedbackGateway, TextGenerator};
pub use models::{DailyPlan, Phase, ProgressState, ProgressSummary, Task, WeekPlan};
pub use params::{DayRef, SelectWeek, SetOutput, TaskRef};
pub use planner::{FeedbackTicket, Planner, PlannerBuilder};
pub use store::ProgressStore;
