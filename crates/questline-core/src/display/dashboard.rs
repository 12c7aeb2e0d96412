//! Dashboard view of a session.

use std::fmt;

use crate::{
    models::{LearningPath, UserProfile},
    progress::{aggregate, ProgressSummary},
    session::Session,
    store::KeyValueStore,
};

/// Wrapper type for displaying the learner's dashboard.
///
/// Shows the goal, level and XP progress, the streak when there is one, and
/// a card for every module in path order.
///
/// # Examples
///
/// ```rust
/// use questline_core::{display::Dashboard, models::LearningPath};
///
/// let path = LearningPath::default();
/// let output = Dashboard::new(None, &path, 0).to_string();
/// assert!(output.contains("- Level: 1"));
/// assert!(!output.contains("Streak"));
/// ```
pub struct Dashboard<'a> {
    pub profile: Option<&'a UserProfile>,
    pub path: &'a LearningPath,
    pub summary: ProgressSummary,
    pub streak: u32,
}

impl<'a> Dashboard<'a> {
    pub fn new(profile: Option<&'a UserProfile>, path: &'a LearningPath, streak: u32) -> Self {
        Self {
            profile,
            path,
            summary: aggregate(path),
            streak,
        }
    }

    /// Dashboard of the session's active path, if one exists.
    pub fn of<S: KeyValueStore>(session: &'a Session<S>) -> Option<Self> {
        session
            .path()
            .map(|path| Self::new(session.profile(), path, session.streak()))
    }
}

fn days(count: u32) -> &'static str {
    if count == 1 {
        "day"
    } else {
        "days"
    }
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.profile {
            Some(profile) => {
                writeln!(f, "# {}", profile.goal)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Welcome back, {}! Here is your learning journey.",
                    profile.name
                )?;
            }
            None => writeln!(f, "# Learning Path")?,
        }
        writeln!(f)?;

        write!(f, "{}", self.summary)?;
        if self.streak > 0 {
            writeln!(f, "- Streak: {} {}", self.streak, days(self.streak))?;
        }

        writeln!(f, "\n## Modules")?;
        writeln!(f)?;
        if self.path.modules.is_empty() {
            writeln!(f, "No modules in this path.")?;
        }
        for (index, module) in self.path.modules.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{module}")?;
        }

        Ok(())
    }
}
