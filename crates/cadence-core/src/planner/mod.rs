//! High-level planner API.
//!
//! [`Planner`] ties the three components together. It owns the generated
//! curriculum, the current [`ProgressState`], the store it is mirrored to and
//! the set of dates with a feedback request in flight.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │  ProgressState  │    │  ProgressStore  │
//! │ (progress_ops,  │───▶│  (pure mutator) │───▶│  (save after    │
//! │  feedback_ops)  │    │                 │    │   each change)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`progress_ops`]: Task toggles, submissions and feedback text
//! - [`feedback_ops`]: The feedback request flow with in-flight tracking
//! - [`view_handlers`]: Lookups that return display wrappers
//!
//! All mutation goes through `&mut self`, so there is never more than one
//! writer. The feedback call is the only operation that suspends.
//!
//! # Usage
//!
//! ```rust,no_run
//! use cadence_core::{params::TaskRef, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_state_file(Some("/tmp/cadence.json"))
//!     .build()
//!     .await?;
//!
//! let done = planner
//!     .toggle_task(&TaskRef { id: "2025-01-19-w1".to_string() })
//!     .await?;
//! assert!(done);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use tokio::task;

use crate::{
    curriculum::Curriculum,
    error::{Result, ResultExt},
    models::ProgressState,
    store::ProgressStore,
};

pub mod builder;
pub mod feedback_ops;
pub mod progress_ops;
pub mod view_handlers;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use feedback_ops::FeedbackTicket;

/// Main planner interface over the curriculum and the learner's progress.
pub struct Planner {
    pub(crate) curriculum: Curriculum,
    pub(crate) store: ProgressStore,
    pub(crate) state: ProgressState,
    pub(crate) pending: HashSet<String>,
}

impl Planner {
    pub(crate) fn new(curriculum: Curriculum, store: ProgressStore, state: ProgressState) -> Self {
        Self {
            curriculum,
            store,
            state,
            pending: HashSet::new(),
        }
    }

    /// The generated plan.
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    /// The current progress state.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// The store the state is mirrored to.
    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Applies a pure mutator to the state and writes the result out.
    pub(crate) async fn apply<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(ProgressState) -> ProgressState,
    {
        self.state = mutate(std::mem::take(&mut self.state));
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        let store = self.store.clone();
        let state = self.state.clone();

        task::spawn_blocking(move || store.save(&state))
            .await
            .with_context("Task join error")?
    }
}
