use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::cli::{GoalsArgs, StartArgs, TaskArgs};

/// Gamified learning paths in the terminal
///
/// Onboard with your interests and a goal, load a generated learning path,
/// then complete tasks to earn XP, levels, module badges and a daily streak.
#[derive(Parser)]
#[command(version, about, name = "questline")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/questline/questline.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// IANA time zone deciding calendar days. Defaults to the system time
    /// zone
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    /// Calendar date (YYYY-MM-DD) to use as today for streak decisions
    #[arg(long, global = true)]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Questline CLI
///
/// Without a command the dashboard is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Onboard and begin a generated learning path
    Start(StartArgs),
    /// Show the dashboard
    #[command(alias = "s")]
    Show,
    /// Show details of a task
    Task(TaskArgs),
    /// Toggle whether a task is completed
    #[command(alias = "t")]
    Toggle(TaskArgs),
    /// Toggle the priority flag of a task
    #[command(alias = "p")]
    Priority(TaskArgs),
    /// Show the current daily streak
    Streak,
    /// Discard the learning path and streak
    Reset,
    /// List interests and suggested goals
    Goals(GoalsArgs),
}
