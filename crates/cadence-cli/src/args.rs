use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::cli::{DayArgs, FeedbackArgs, OutputArgs, ToggleArgs, WeekArgs};

/// Terminal planner for a 23-week IELTS study curriculum
///
/// Cadence shows each week's daily checklist and required output, records
/// which tasks are done and what was written for each day, and can ask a
/// language model for feedback on a day's output. Progress is kept in a
/// single JSON file.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the progress state file. Defaults to
    /// $XDG_DATA_HOME/cadence/ielts_study_state_v2.json
    #[arg(long, global = true, env = "CADENCE_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// First day of the plan (YYYY-MM-DD). Defaults to 2025-01-19
    #[arg(long, global = true, env = "CADENCE_START_DATE")]
    pub start_date: Option<Date>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadence CLI
///
/// Without a command, the current week is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show a week's plan and progress
    #[command(alias = "w")]
    Week(WeekArgs),
    /// Show a single day
    #[command(alias = "d")]
    Day(DayArgs),
    /// Mark a task done, or not done again
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Save the output written for a day
    #[command(alias = "o")]
    Output(OutputArgs),
    /// Ask the AI tutor for feedback on a day's output
    #[command(alias = "f")]
    Feedback(FeedbackArgs),
    /// Show overall and per-phase completion
    #[command(alias = "p")]
    Progress,
    /// List the study phases
    Phases,
}
