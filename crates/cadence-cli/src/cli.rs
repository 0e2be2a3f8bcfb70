//! Command-line argument wrappers and command handlers
//!
//! Each command has a clap argument struct that converts into the core
//! parameter type with `From`, keeping clap out of `cadence-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] owns the planner and the renderer and runs one command per
//! process.

use anyhow::{Context, Result};
use cadence_core::{
    curriculum::WeekCursor,
    display::{FeedbackResult, OutputSaved, TaskToggled},
    feedback::{
        gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL},
        FeedbackGateway, GeminiConfig,
    },
    params::{DayRef, SelectWeek, SetOutput, TaskRef},
    Planner,
};
use clap::Args;
use jiff::{civil::Date, Zoned};
use log::info;

use crate::{args::Commands, renderer::TerminalRenderer};

/// Show a week's plan
///
/// Without arguments the week containing today is shown, or week 1 when
/// today is outside the plan. Week numbers outside 1-23 are clamped.
#[derive(Args, Default)]
pub struct WeekArgs {
    /// Week number (1-23)
    #[arg(help = "Week number to show (1-23)")]
    pub week: Option<u8>,
    /// Jump to the first week of a phase
    #[arg(short, long, help = "Show the first week of this phase (1-4)")]
    pub phase: Option<u8>,
    /// Show the week after the selected one
    #[arg(long, conflicts_with = "prev", help = "Show the week after the selected one")]
    pub next: bool,
    /// Show the week before the selected one
    #[arg(long, help = "Show the week before the selected one")]
    pub prev: bool,
}

impl WeekArgs {
    fn into_params(self, today: Date) -> SelectWeek {
        SelectWeek {
            week: self.week,
            phase: self.phase,
            today,
        }
    }
}

/// Show a single day
#[derive(Args)]
pub struct DayArgs {
    /// Date of the day (YYYY-MM-DD)
    #[arg(help = "Date of the day to show (YYYY-MM-DD)")]
    pub date: Date,
}

impl From<DayArgs> for DayRef {
    fn from(val: DayArgs) -> Self {
        DayRef { date: val.date }
    }
}

/// Toggle a task
///
/// Task ids are shown next to each task, e.g. `2025-01-19-w1`.
#[derive(Args)]
pub struct ToggleArgs {
    /// Task id
    #[arg(help = "Id of the task to toggle, e.g. 2025-01-19-w1")]
    pub id: String,
}

impl From<ToggleArgs> for TaskRef {
    fn from(val: ToggleArgs) -> Self {
        TaskRef { id: val.id }
    }
}

/// Save a day's output
///
/// Replaces whatever was saved before. An empty string is a valid output.
#[derive(Args)]
pub struct OutputArgs {
    /// Date of the day (YYYY-MM-DD)
    #[arg(help = "Date of the day the output belongs to (YYYY-MM-DD)")]
    pub date: Date,
    /// Output text
    #[arg(help = "The output text; quote it to keep spaces and line breaks")]
    pub text: String,
}

impl From<OutputArgs> for SetOutput {
    fn from(val: OutputArgs) -> Self {
        SetOutput {
            date: val.date,
            text: val.text,
        }
    }
}

/// Request feedback on a day's output
///
/// The saved output must be at least five characters long. If the service
/// cannot be reached, a fixed apology is stored instead.
#[derive(Args)]
pub struct FeedbackArgs {
    /// Date of the day (YYYY-MM-DD)
    #[arg(help = "Date of the day whose output should be reviewed (YYYY-MM-DD)")]
    pub date: Date,
    /// API key for the generative language service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Model to ask
    #[arg(long, env = "CADENCE_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
    /// Base URL of the service
    #[arg(long, env = "CADENCE_API_BASE", default_value = DEFAULT_BASE_URL)]
    pub api_base: String,
}

impl From<&FeedbackArgs> for GeminiConfig {
    fn from(val: &FeedbackArgs) -> Self {
        let api_key = val
            .api_key
            .clone()
            .or_else(|| std::env::var("API_KEY").ok());
        GeminiConfig::default()
            .with_api_key(api_key)
            .with_model(val.model.as_str())
            .with_base_url(val.api_base.as_str())
    }
}

/// Runs commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Dispatches a single command. `None` shows the current week.
    pub async fn run(mut self, command: Option<Commands>) -> Result<()> {
        match command {
            Some(Commands::Week(args)) => self.show_week(args),
            Some(Commands::Day(args)) => self.show_day(&args.into()),
            Some(Commands::Toggle(args)) => self.toggle_task(&args.into()).await,
            Some(Commands::Output(args)) => self.set_output(&args.into()).await,
            Some(Commands::Feedback(args)) => self.request_feedback(&args).await,
            Some(Commands::Progress) => self.show_progress(),
            Some(Commands::Phases) => self.show_phases(),
            None => self.show_week(WeekArgs::default()),
        }
    }

    fn show_week(&self, args: WeekArgs) -> Result<()> {
        let (next, prev) = (args.next, args.prev);
        let selected = self.planner.select_week(&args.into_params(today()))?;

        let mut cursor = WeekCursor::new(selected.week);
        if next {
            cursor = cursor.next();
        } else if prev {
            cursor = cursor.previous();
        }

        let view = self.planner.week_view(&SelectWeek {
            week: Some(cursor.week()),
            phase: None,
            today: today(),
        })?;
        let accent = view.phase().map(|phase| phase.color);
        self.renderer.render_accented(&view.to_string(), accent)
    }

    fn show_day(&self, params: &DayRef) -> Result<()> {
        let view = self.planner.day_view(params)?;
        let accent = self
            .planner
            .curriculum()
            .week_containing(params.date)
            .and_then(|week| self.planner.curriculum().phase_for_week(week.week))
            .map(|phase| phase.color);
        self.renderer.render_accented(&view.to_string(), accent)
    }

    async fn toggle_task(&mut self, params: &TaskRef) -> Result<()> {
        let done = self.planner.toggle_task(params).await?;
        let (_, task) = self
            .planner
            .curriculum()
            .task(&params.id)
            .context("Toggled task disappeared from the curriculum")?;

        self.renderer.render(&TaskToggled { task, done }.to_string())?;
        self.renderer
            .render(&format!("Overall progress: {}\n", self.planner.progress()))
    }

    async fn set_output(&mut self, params: &SetOutput) -> Result<()> {
        self.planner.set_output(params).await?;
        self.renderer.render(
            &OutputSaved {
                date: &params.date.to_string(),
                text: &params.text,
            }
            .to_string(),
        )
    }

    async fn request_feedback(&mut self, args: &FeedbackArgs) -> Result<()> {
        let gateway = FeedbackGateway::gemini(GeminiConfig::from(args));
        let day = DayRef { date: args.date };

        info!("Requesting feedback for {}", day.date);
        let feedback = self.planner.request_feedback(&gateway, &day).await?;

        self.renderer.render(
            &FeedbackResult {
                date: &day.date.to_string(),
                feedback: &feedback,
            }
            .to_string(),
        )
    }

    fn show_progress(&self) -> Result<()> {
        self.renderer
            .render(&self.planner.progress_report().to_string())
    }

    fn show_phases(&self) -> Result<()> {
        let current = self
            .planner
            .select_week(&WeekArgs::default().into_params(today()))?
            .week;
        self.renderer
            .render(&self.planner.phase_list(Some(current)).to_string())
    }
}

fn today() -> Date {
    Zoned::now().date()
}
