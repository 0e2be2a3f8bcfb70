//! Views that combine curriculum records with progress state.

use std::{collections::HashSet, fmt};

use crate::{
    curriculum::WEEK_COUNT,
    feedback::is_submittable,
    models::{DailyPlan, Phase, ProgressState, ProgressSummary, WeekPlan},
};

/// One day with its check marks, submission and feedback.
pub struct DayView<'a> {
    day: &'a DailyPlan,
    state: &'a ProgressState,
    pending: bool,
}

impl<'a> DayView<'a> {
    pub fn new(day: &'a DailyPlan, state: &'a ProgressState) -> Self {
        Self {
            day,
            state,
            pending: false,
        }
    }

    /// Marks the day as having a feedback request in flight.
    pub fn with_pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Whether every task of the day is done.
    pub fn is_complete(&self) -> bool {
        self.day
            .tasks
            .iter()
            .all(|task| self.state.is_completed(&task.id))
    }

    fn feedback_action(&self, key: &str) -> Option<&'static str> {
        if self.pending {
            return Some("AI 老师批改中...");
        }
        let output = self.state.output(key)?;
        if !is_submittable(output) {
            return None;
        }
        Some(if self.state.feedback(key).is_some() {
            "再次请求反馈"
        } else {
            "获取导师点评"
        })
    }
}

impl fmt::Display for DayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.day.key();

        write!(f, "## D{} · {}", self.day.day_number, key)?;
        if self.is_complete() {
            write!(f, " · ✓ 核心任务达成")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for task in &self.day.tasks {
            let mark = if self.state.is_completed(&task.id) { "x" } else { " " };
            writeln!(f, "- [{mark}] {task}")?;
        }
        writeln!(f)?;

        writeln!(f, "**主动产出要求:** {}", self.day.output_required)?;
        writeln!(f)?;
        match self.state.output(&key) {
            None => writeln!(f, "_No output yet._")?,
            Some("") => writeln!(f, "_Empty submission._")?,
            Some(text) => {
                for line in text.lines() {
                    writeln!(f, "> {line}")?;
                }
            }
        }

        if let Some(action) = self.feedback_action(&key) {
            writeln!(f)?;
            writeln!(f, "_{action}_")?;
        }

        if let Some(feedback) = self.state.feedback(&key) {
            writeln!(f)?;
            writeln!(f, "### AI Teacher Feedback")?;
            writeln!(f)?;
            writeln!(f, "{feedback}")?;
        }

        Ok(())
    }
}

/// A full week with its phase and every day.
pub struct WeekView<'a> {
    week: &'a WeekPlan,
    phase: Option<&'a Phase>,
    state: &'a ProgressState,
    pending: Option<&'a HashSet<String>>,
}

impl<'a> WeekView<'a> {
    pub fn new(week: &'a WeekPlan, phase: Option<&'a Phase>, state: &'a ProgressState) -> Self {
        Self {
            week,
            phase,
            state,
            pending: None,
        }
    }

    /// Dates whose feedback request is in flight.
    pub fn with_pending(mut self, pending: &'a HashSet<String>) -> Self {
        self.pending = Some(pending);
        self
    }

    pub fn week(&self) -> &WeekPlan {
        self.week
    }

    pub fn phase(&self) -> Option<&Phase> {
        self.phase
    }

    /// Completion within this week only.
    pub fn summary(&self) -> ProgressSummary {
        let (completed, total) = self.week.tasks().fold((0, 0), |(completed, total), task| {
            (completed + u32::from(self.state.is_completed(&task.id)), total + 1)
        });
        ProgressSummary::new(completed, total)
    }
}

impl fmt::Display for WeekView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Week {} / {WEEK_COUNT}: {}", self.week.week, self.week.focus)?;
        writeln!(f)?;
        if let Some(phase) = self.phase {
            writeln!(f, "- Phase: {} · {}", phase.name, phase.goal)?;
        }
        writeln!(
            f,
            "- Dates: {} 至 {}",
            self.week.start_date, self.week.end_date
        )?;
        writeln!(f, "- Progress: {}", self.summary())?;

        for day in &self.week.daily_plans {
            let pending = self
                .pending
                .is_some_and(|pending| pending.contains(&day.key()));
            writeln!(f)?;
            write!(f, "{}", DayView::new(day, self.state).with_pending(pending))?;
        }
        Ok(())
    }
}
