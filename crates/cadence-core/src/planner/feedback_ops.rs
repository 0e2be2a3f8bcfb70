//! Feedback requests with per-date in-flight tracking.
//!
//! A request is split into three steps so a host can keep its interface
//! responsive while the remote call runs:
//!
//! 1. [`Planner::begin_feedback`] checks the submission and marks the date
//!    as pending. A second request for the same date is refused until the
//!    first one completes.
//! 2. The caller runs [`FeedbackGateway::request_feedback`] with the ticket.
//! 3. [`Planner::complete_feedback`] stores the text, clears the pending
//!    mark and saves.
//!
//! Requests cannot be cancelled. A completed ticket is always written back,
//! even if the submission changed in the meantime.
//!
//! [`Planner::request_feedback`] runs all three steps in sequence.

use log::info;

use super::Planner;
use crate::{
    error::{CadenceError, Result},
    feedback::{is_submittable, Feedback, FeedbackGateway, MIN_OUTPUT_CHARS},
    params::DayRef,
};

/// A feedback request that has been admitted but not yet completed.
#[derive(Debug)]
#[must_use = "a ticket must be completed or its date stays pending"]
pub struct FeedbackTicket {
    date: String,
    output: String,
    prompt: String,
}

impl FeedbackTicket {
    /// The day's date key.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The submission as it was when the request began.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The day's required-output prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl Planner {
    /// Admits a feedback request for a day.
    ///
    /// # Errors
    ///
    /// - `CadenceError::DayNotFound` if no day is scheduled on the date
    /// - `CadenceError::InvalidInput` if the saved submission is missing or
    ///   shorter than five characters
    /// - `CadenceError::FeedbackPending` if a request for the date is
    ///   already in flight
    pub fn begin_feedback(&mut self, params: &DayRef) -> Result<FeedbackTicket> {
        let day = self
            .curriculum
            .day(params.date)
            .ok_or_else(|| CadenceError::DayNotFound {
                date: params.date.to_string(),
            })?;
        let date = day.key();

        let output = self.state.output(&date).unwrap_or_default();
        if !is_submittable(output) {
            return Err(CadenceError::invalid_input("output").with_reason(format!(
                "write at least {MIN_OUTPUT_CHARS} characters for {date} before requesting feedback"
            )));
        }

        if !self.pending.insert(date.clone()) {
            return Err(CadenceError::FeedbackPending { date });
        }

        Ok(FeedbackTicket {
            date,
            output: output.to_string(),
            prompt: day.output_required.clone(),
        })
    }

    /// Stores the result of an admitted request and clears its pending mark.
    ///
    /// # Errors
    ///
    /// Returns a file system error if saving fails. The pending mark is
    /// cleared regardless.
    pub async fn complete_feedback(
        &mut self,
        ticket: FeedbackTicket,
        feedback: &Feedback,
    ) -> Result<()> {
        self.pending.remove(&ticket.date);

        if feedback.is_fallback() {
            info!("Storing fallback feedback for {}", ticket.date);
        }
        let text = feedback.text().to_string();
        self.apply(|state| state.set_feedback(ticket.date, text)).await
    }

    /// Requests feedback for a day's submission and stores it.
    ///
    /// The gateway never fails; a service error arrives here as the fallback
    /// message and is stored like any other feedback.
    ///
    /// # Errors
    ///
    /// See [`Planner::begin_feedback`] and [`Planner::complete_feedback`].
    pub async fn request_feedback(
        &mut self,
        gateway: &FeedbackGateway,
        params: &DayRef,
    ) -> Result<Feedback> {
        let ticket = self.begin_feedback(params)?;
        let feedback = gateway
            .request_feedback(ticket.output(), ticket.prompt())
            .await;
        self.complete_feedback(ticket, &feedback).await?;
        Ok(feedback)
    }

    /// Whether a feedback request for the date is in flight.
    pub fn is_pending(&self, date: &str) -> bool {
        self.pending.contains(date)
    }
}
