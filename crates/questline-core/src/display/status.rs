//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::{
    session::TaskToggle,
    streak::{StreakChange, StreakState},
};

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

/// Reported streak together with the stored state behind it.
pub struct StreakReport {
    pub streak: u32,
    pub state: Option<StreakState>,
}

impl fmt::Display for StreakReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Streak")?;
        writeln!(f)?;
        writeln!(f, "- Current streak: {}", self.streak)?;
        match &self.state {
            Some(state) => writeln!(f, "- Last completion: {}", state.last_completion),
            None => writeln!(f, "- Last completion: never"),
        }
    }
}

impl fmt::Display for TaskToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.completed {
            "completed"
        } else {
            "not completed"
        };
        writeln!(f, "Marked task {} as {state}.", self.task.task_id)?;

        if let Some(update) = &self.streak {
            match update.change {
                StreakChange::Unchanged => {
                    writeln!(f, "Streak unchanged at {} today.", update.streak)?;
                }
                change => writeln!(f, "Streak {change}: {}", update.streak)?,
            }
        }
        Ok(())
    }
}
