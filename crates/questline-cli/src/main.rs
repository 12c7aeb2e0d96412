//! Questline CLI Application
//!
//! Terminal front end for gamified learning paths: onboarding, the
//! dashboard, task toggles and the daily streak.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use questline_core::{SessionBuilder, TaskRef};
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        time_zone,
        today,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_database_path(database_file)
        .with_time_zone_name(time_zone)
        .with_today(today)
        .build()
        .context("Failed to open learning session")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Questline started");

    let mut cli = Cli::new(session, renderer);
    match command {
        Some(Start(args)) => cli.start(args),
        Some(Show) | None => cli.show(),
        Some(Task(args)) => cli.show_task(&TaskRef::from(args)),
        Some(Toggle(args)) => cli.toggle(&TaskRef::from(args)),
        Some(Priority(args)) => cli.toggle_priority(&TaskRef::from(args)),
        Some(Streak) => cli.streak(),
        Some(Reset) => cli.reset(),
        Some(Goals(args)) => cli.goals(&args),
    }
}
