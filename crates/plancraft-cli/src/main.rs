//! Plancraft CLI Application
//!
//! Command-line interface for generating project plans and tracking their
//! progress.

mod args;
mod cli;
mod interactive;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use plancraft_core::PlannerBuilder;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Plancraft started");

    Cli::new(planner, renderer).run(command).await
}
