//! Cadence CLI Application
//!
//! Command-line interface for the Cadence IELTS study planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use cadence_core::PlannerBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        state_file,
        start_date,
        no_color,
        command,
    } = Args::parse();

    let mut builder = PlannerBuilder::new().with_state_file(state_file);
    if let Some(start_date) = start_date {
        builder = builder.with_start_date(start_date);
    }
    let planner = builder
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cadence started");

    Cli::new(planner, renderer).run(command).await
}
