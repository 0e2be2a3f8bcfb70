//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use log::info;
use tokio::task;

use super::Planner;
use crate::{
    curriculum::{generate_curriculum, DEFAULT_START_DATE},
    error::{CadenceError, Result, ResultExt},
    store::ProgressStore,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    state_file: Option<PathBuf>,
    start_date: Date,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            state_file: None,
            start_date: DEFAULT_START_DATE,
        }
    }

    /// Sets a custom state file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cadence/ielts_study_state_v2.json`
    pub fn with_state_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.state_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the first day of the plan. Defaults to 2025-01-19.
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = start_date;
        self
    }

    /// Generates the curriculum and loads saved progress.
    ///
    /// A missing or corrupt state file is not an error; the planner starts
    /// from an empty state.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::XdgDirectory` if no default path can be found,
    /// `CadenceError::FileSystem` if its directory cannot be created, and
    /// `CadenceError::InvalidInput` for an unusable start date.
    pub async fn build(self) -> Result<Planner> {
        let state_file = if let Some(path) = self.state_file {
            path
        } else {
            ProgressStore::default_path()?
        };

        if let Some(parent) = state_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CadenceError::file_system(parent, e))?;
        }

        let curriculum = generate_curriculum(self.start_date)?;
        let store = ProgressStore::new(&state_file);

        let loader = store.clone();
        let state = task::spawn_blocking(move || loader.load())
            .await
            .with_context("Task join error")?;

        info!(
            "Loaded progress from {} ({} completed tasks)",
            state_file.display(),
            curriculum.progress(&state).completed
        );

        Ok(Planner::new(curriculum, store, state))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
