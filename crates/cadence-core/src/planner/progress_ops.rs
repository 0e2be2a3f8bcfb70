//! Progress mutations. Each one validates its target against the
//! curriculum, applies the pure mutator and saves.

use log::debug;

use super::Planner;
use crate::{
    error::{CadenceError, Result},
    params::{DayRef, SetOutput, TaskRef},
};

impl Planner {
    /// Flips a task's completion flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::TaskNotFound` if the curriculum has no such
    /// task, or a file system error if saving fails.
    pub async fn toggle_task(&mut self, params: &TaskRef) -> Result<bool> {
        if self.curriculum.task(&params.id).is_none() {
            return Err(CadenceError::TaskNotFound {
                id: params.id.clone(),
            });
        }

        let id = params.id.clone();
        self.apply(|state| state.toggle_task(id)).await?;

        let done = self.state.is_completed(&params.id);
        debug!("Task {} is now {}", params.id, if done { "done" } else { "open" });
        Ok(done)
    }

    /// Saves the submission for a day, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::DayNotFound` if no day is scheduled on the
    /// date, or a file system error if saving fails.
    pub async fn set_output(&mut self, params: &SetOutput) -> Result<()> {
        let key = self.day_key(&DayRef { date: params.date })?;
        let text = params.text.clone();
        self.apply(|state| state.set_output(key, text)).await
    }

    /// Stores feedback text for a day, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::DayNotFound` if no day is scheduled on the
    /// date, or a file system error if saving fails.
    pub async fn set_feedback(&mut self, params: &DayRef, text: &str) -> Result<()> {
        let key = self.day_key(params)?;
        let text = text.to_string();
        self.apply(|state| state.set_feedback(key, text)).await
    }

    pub(crate) fn day_key(&self, params: &DayRef) -> Result<String> {
        self.curriculum
            .day(params.date)
            .map(|day| day.key())
            .ok_or_else(|| CadenceError::DayNotFound {
                date: params.date.to_string(),
            })
    }
}
