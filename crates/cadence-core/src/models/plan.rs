//! Week and day plan definitions.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Task;

/// One day of the curriculum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Calendar date, unique within the curriculum
    pub date: Date,

    /// Position within its week (1..=7)
    pub day_number: u8,

    /// Ordered checklist for the day
    pub tasks: Vec<Task>,

    /// Prompt describing the free-text submission expected for the day
    pub output_required: String,
}

impl DailyPlan {
    /// The date as the string key used by progress state.
    pub fn key(&self) -> String {
        self.date.to_string()
    }
}

/// One week of the curriculum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    /// Week number (1..=23)
    pub week: u8,

    /// First day of the week
    pub start_date: Date,

    /// Last day of the week, six days after `start_date`
    pub end_date: Date,

    /// Human-readable theme of the week
    pub focus: String,

    /// Exactly seven days, in date order
    pub daily_plans: Vec<DailyPlan>,
}

impl WeekPlan {
    /// Returns true if `date` falls inside this week.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Iterates over every task of the week in display order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.daily_plans.iter().flat_map(|day| day.tasks.iter())
    }
}
