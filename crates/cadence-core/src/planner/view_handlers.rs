//! Read-only handlers that return display wrappers for the Planner.

use super::Planner;
use crate::{
    curriculum::WeekCursor,
    display::{DayView, PhaseList, ProgressReport, WeekView},
    error::{CadenceError, Result},
    models::{ProgressSummary, WeekPlan},
    params::{DayRef, SelectWeek},
};

impl Planner {
    /// Resolves which week to show.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::PhaseNotFound` for an unknown phase id.
    pub fn select_week(&self, params: &SelectWeek) -> Result<&WeekPlan> {
        let cursor = if let Some(id) = params.phase {
            let phase = self.curriculum.phase(id)?;
            WeekCursor::default().jump_to_phase(phase)
        } else if let Some(week) = params.week {
            WeekCursor::new(week)
        } else {
            self.curriculum
                .week_containing(params.today)
                .map_or_else(WeekCursor::default, |week| WeekCursor::new(week.week))
        };

        self.curriculum.week(cursor.week())
    }

    /// Handle showing a week with progress.
    ///
    /// # Errors
    ///
    /// See [`Planner::select_week`].
    pub fn week_view(&self, params: &SelectWeek) -> Result<WeekView<'_>> {
        let week = self.select_week(params)?;
        Ok(WeekView::new(
            week,
            self.curriculum.phase_for_week(week.week),
            &self.state,
        )
        .with_pending(&self.pending))
    }

    /// Handle showing one day with progress.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::DayNotFound` if no day is scheduled on the date.
    pub fn day_view(&self, params: &DayRef) -> Result<DayView<'_>> {
        let day = self
            .curriculum
            .day(params.date)
            .ok_or_else(|| CadenceError::DayNotFound {
                date: params.date.to_string(),
            })?;
        Ok(DayView::new(day, &self.state).with_pending(self.is_pending(&day.key())))
    }

    /// Completion across the whole curriculum.
    pub fn progress(&self) -> ProgressSummary {
        self.curriculum.progress(&self.state)
    }

    /// Overall and per-phase completion.
    pub fn progress_report(&self) -> ProgressReport {
        ProgressReport {
            overall: self.progress(),
            phases: self.curriculum.phase_progress(&self.state),
        }
    }

    /// All phases, highlighting the one containing `current_week`.
    pub fn phase_list(&self, current_week: Option<u8>) -> PhaseList<'_> {
        let list = PhaseList::new(self.curriculum.phases());
        match current_week {
            Some(week) => list.with_current_week(week),
            None => list,
        }
    }
}
