//! Command handlers and their clap argument wrappers.
//!
//! Each wrapper adds clap derives on top of a core parameter type and
//! converts into it with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use questline_core::{
    display::{Dashboard, GoalSuggestions, OperationStatus, StreakReport},
    params::{Onboarding, TaskRef},
    KeyValueStore, ResponseFile, Session, UserProfile,
};

use crate::renderer::TerminalRenderer;

/// Onboarding answers
#[derive(Args)]
pub struct OnboardingArgs {
    /// Your name, shown on the dashboard
    #[arg(long)]
    pub name: String,
    /// Topic of interest; repeat for several (see `questline goals`)
    #[arg(long = "interest", required = true)]
    pub interests: Vec<String>,
    /// Competency level: beginner, intermediate or advanced
    #[arg(long, default_value = "beginner")]
    pub competency: String,
    /// Primary learning goal
    #[arg(long)]
    pub goal: String,
}

impl From<OnboardingArgs> for Onboarding {
    fn from(val: OnboardingArgs) -> Self {
        Onboarding {
            name: val.name,
            interests: val.interests,
            competency: val.competency,
            goal: val.goal,
        }
    }
}

/// Begin a learning path from a saved generator response
#[derive(Args)]
pub struct StartArgs {
    #[command(flatten)]
    pub onboarding: OnboardingArgs,
    /// JSON file holding the generated path
    #[arg(long, help = "JSON file holding the generated learning path")]
    pub response: PathBuf,
}

/// Address a task by module and task ID
#[derive(Args)]
pub struct TaskArgs {
    /// ID of the module holding the task
    pub module_id: String,
    /// ID of the task
    pub task_id: String,
}

impl From<TaskArgs> for TaskRef {
    fn from(val: TaskArgs) -> Self {
        TaskRef {
            module_id: val.module_id,
            task_id: val.task_id,
        }
    }
}

/// Preview goal suggestions
#[derive(Args)]
pub struct GoalsArgs {
    /// Topic of interest; repeat for several
    #[arg(long = "interest")]
    pub interests: Vec<String>,
}

/// Runs CLI commands against a session.
pub struct Cli<S> {
    session: Session<S>,
    renderer: TerminalRenderer,
}

impl<S: KeyValueStore> Cli<S> {
    pub fn new(session: Session<S>, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Validates the onboarding answers and begins the generated path.
    pub fn start(&mut self, args: StartArgs) -> Result<()> {
        let profile = UserProfile::try_from(Onboarding::from(args.onboarding))
            .context("Invalid onboarding answers")?;
        let generator = ResponseFile::new(args.response);

        self.session
            .begin_with(profile, &generator)
            .context("Failed to begin learning path")?;
        self.show()
    }

    pub fn show(&self) -> Result<()> {
        match Dashboard::of(&self.session) {
            Some(dashboard) => self.renderer.render(&dashboard.to_string()),
            None => self.renderer.render(
                "No learning path yet. Run `questline start` to generate one.\n",
            ),
        }
    }

    pub fn show_task(&self, task: &TaskRef) -> Result<()> {
        let task = self.session.task(task).context("Failed to show task")?;
        self.renderer.render(&task.to_string())
    }

    /// Toggles completion and reports the streak and any badge earned.
    pub fn toggle(&mut self, task: &TaskRef) -> Result<()> {
        let toggle = self
            .session
            .on_task_completion_toggled(task)
            .context("Failed to toggle task")?;

        let mut output = toggle.to_string();
        if toggle.completed {
            let module = self.session.module(&task.module_id)?;
            if self.session.module_progress(&module.id)?.is_complete {
                output.push_str(&format!("Badge earned: {}\n", module.badge_name));
            }
        }
        self.renderer.render(&output)
    }

    pub fn toggle_priority(&mut self, task: &TaskRef) -> Result<()> {
        let priority = self
            .session
            .on_priority_toggled(task)
            .context("Failed to toggle priority")?;

        let message = if priority {
            format!("Task {} marked as priority", task.task_id)
        } else {
            format!("Task {} no longer a priority", task.task_id)
        };
        self.renderer
            .render_status(&OperationStatus::success(message))
    }

    pub fn streak(&mut self) -> Result<()> {
        let report = StreakReport {
            streak: self.session.streak(),
            state: self.session.streak_state(),
        };
        self.renderer.render(&report.to_string())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.session
            .on_path_replaced_or_reset()
            .context("Failed to reset learning path")?;
        self.renderer.render_status(&OperationStatus::success(
            "Learning path and streak discarded".to_string(),
        ))
    }

    pub fn goals(&self, args: &GoalsArgs) -> Result<()> {
        let suggestions = GoalSuggestions::for_interests(&args.interests);
        self.renderer.render(&suggestions.to_string())
    }
}
