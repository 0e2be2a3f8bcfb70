//! Curriculum generation and lookups.
//!
//! [`generate_curriculum`] turns a start date into the full 23-week plan. The
//! result depends on nothing but the start date, so task ids stay stable
//! across restarts and saved progress keeps pointing at the same tasks.
//!
//! ```text
//! start date ──▶ week i: start + 7i .. start + 7i + 6
//!                  └─▶ day d: focus(week), tasks(week, d, date), output(week, d)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::curriculum::{generate_curriculum, DEFAULT_START_DATE};
//!
//! let curriculum = generate_curriculum(DEFAULT_START_DATE)?;
//! let first = &curriculum.week(1)?.daily_plans[0];
//!
//! assert_eq!(first.tasks[0].label, "剑10 T1 诊断");
//! assert_eq!(curriculum.weeks().len(), 23);
//! # Ok::<(), cadence_core::CadenceError>(())
//! ```

use jiff::{
    civil::{date, Date},
    ToSpan,
};

use crate::{
    error::{CadenceError, Result},
    models::{DailyPlan, Phase, PhaseProgress, ProgressState, ProgressSummary, Task, WeekPlan},
};

pub mod cursor;
pub mod phases;
mod templates;


pub use cursor::WeekCursor;
pub use phases::phases;

/// Number of weeks in the curriculum.
pub const WEEK_COUNT: u8 = 23;

/// Number of days in each week.
pub const DAYS_PER_WEEK: u8 = 7;

/// Start date the plan was authored for.
pub const DEFAULT_START_DATE: Date = date(2025, 1, 19);

/// The generated plan together with its phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    start_date: Date,
    weeks: Vec<WeekPlan>,
    phases: Vec<Phase>,
}

/// Generates the 23-week plan beginning on `start_date`.
///
/// # Errors
///
/// Returns `CadenceError::InvalidInput` if the plan would run past the last
/// representable date.
pub fn generate_curriculum(start_date: Date) -> Result<Curriculum> {
    let weeks = (1..=WEEK_COUNT)
        .map(|week| generate_week(start_date, week))
        .collect::<Result<Vec<_>>>()?;

    Ok(Curriculum {
        start_date,
        weeks,
        phases: phases(),
    })
}

fn generate_week(plan_start: Date, week: u8) -> Result<WeekPlan> {
    let offset = i64::from(week - 1) * i64::from(DAYS_PER_WEEK);
    let start_date = add_days(plan_start, offset)?;
    let end_date = add_days(start_date, i64::from(DAYS_PER_WEEK) - 1)?;

    let daily_plans = (0..usize::from(DAYS_PER_WEEK))
        .map(|day_index| {
            let date = add_days(start_date, day_index as i64)?;
            Ok(DailyPlan {
                date,
                day_number: day_index as u8 + 1,
                tasks: templates::tasks_for_day(week, day_index, date),
                output_required: templates::output_for_day(week, day_index).to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(WeekPlan {
        week,
        start_date,
        end_date,
        focus: templates::focus_for_week(week).to_string(),
        daily_plans,
    })
}

fn add_days(date: Date, days: i64) -> Result<Date> {
    date.checked_add(days.days()).map_err(|e| {
        CadenceError::invalid_input("start_date")
            .with_reason(format!("{date} + {days} days is out of range: {e}"))
    })
}

impl Curriculum {
    /// First day of the plan.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// All weeks in order.
    pub fn weeks(&self) -> &[WeekPlan] {
        &self.weeks
    }

    /// All phases in order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Looks up a week by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::WeekOutOfRange` outside 1..=23.
    pub fn week(&self, week: u8) -> Result<&WeekPlan> {
        self.weeks
            .iter()
            .find(|plan| plan.week == week)
            .ok_or(CadenceError::WeekOutOfRange { week })
    }

    /// Every day of the plan in date order.
    pub fn days(&self) -> impl Iterator<Item = &DailyPlan> {
        self.weeks.iter().flat_map(|week| week.daily_plans.iter())
    }

    /// The day scheduled on `date`, if any.
    pub fn day(&self, date: Date) -> Option<&DailyPlan> {
        self.days().find(|day| day.date == date)
    }

    /// The week whose date range contains `date`, if any.
    pub fn week_containing(&self, date: Date) -> Option<&WeekPlan> {
        self.weeks.iter().find(|week| week.contains(date))
    }

    /// Finds a task and the day it belongs to.
    pub fn task(&self, id: &str) -> Option<(&DailyPlan, &Task)> {
        self.days()
            .find_map(|day| day.tasks.iter().find(|task| task.id == id).map(|task| (day, task)))
    }

    /// Looks up a phase by id.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::PhaseNotFound` for an unknown id.
    pub fn phase(&self, id: u8) -> Result<&Phase> {
        self.phases
            .iter()
            .find(|phase| phase.id == id)
            .ok_or(CadenceError::PhaseNotFound { id })
    }

    /// The phase a week belongs to.
    pub fn phase_for_week(&self, week: u8) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.contains(week))
    }

    /// Number of tasks across the whole plan.
    pub fn total_tasks(&self) -> u32 {
        self.days().map(|day| day.tasks.len() as u32).sum()
    }

    /// Completion over the whole plan. Only ids that exist in this curriculum
    /// are counted.
    pub fn progress(&self, state: &ProgressState) -> ProgressSummary {
        summarize(self.weeks.iter(), state)
    }

    /// Completion for each phase, in phase order.
    pub fn phase_progress(&self, state: &ProgressState) -> Vec<PhaseProgress> {
        self.phases
            .iter()
            .map(|phase| PhaseProgress {
                phase_id: phase.id,
                name: phase.name.clone(),
                summary: summarize(
                    self.weeks.iter().filter(|week| phase.contains(week.week)),
                    state,
                ),
            })
            .collect()
    }

    /// Ids in `state` that do not match any task of this curriculum.
    pub fn orphaned_task_ids<'a>(&self, state: &'a ProgressState) -> Vec<&'a str> {
        state
            .completed_tasks
            .keys()
            .filter(|id| self.task(id).is_none())
            .map(String::as_str)
            .collect()
    }
}

fn summarize<'a>(weeks: impl Iterator<Item = &'a WeekPlan>, state: &ProgressState) -> ProgressSummary {
    let (completed, total) = weeks
        .flat_map(WeekPlan::tasks)
        .fold((0, 0), |(completed, total), task| {
            (completed + u32::from(state.is_completed(&task.id)), total + 1)
        });
    ProgressSummary::new(completed, total)
}
