//! Display implementations for domain models.
//!
//! Output is markdown: headings for structure, bullet lists for metadata.
//! A [`LearningModule`] renders as a card listing its tasks one per line,
//! while a [`LearningTask`] on its own renders the full detail view.

use std::fmt;

use crate::{
    models::{LearningModule, LearningTask, UserProfile, VideoReference},
    progress::{module_progress, ProgressSummary},
};

impl LearningTask {
    /// Markdown checkbox reflecting completion.
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    /// One-line form used inside module cards.
    fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} {} `{}` (+{} XP)",
            self.checkbox(),
            self.title,
            self.id,
            self.xp
        )?;
        if self.priority {
            write!(f, " [priority]")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.title, self.url)
    }
}

impl fmt::Display for LearningTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- XP: {}", self.xp)?;
        writeln!(f, "- Status: {}", self.status_label())?;
        if self.priority {
            writeln!(f, "- Priority: yes")?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if !self.youtube_references.is_empty() {
            writeln!(f)?;
            writeln!(f, "#### Suggested Videos")?;
            writeln!(f)?;
            for video in &self.youtube_references {
                writeln!(f, "- {video}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for LearningModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = module_progress(self);

        writeln!(f, "### {} ({})", self.title, self.id)?;
        writeln!(f)?;
        let badge_state = if progress.is_complete {
            "earned"
        } else {
            "locked"
        };
        writeln!(f, "- Badge: {} ({badge_state})", self.badge_name)?;
        writeln!(
            f,
            "- Tasks: {}/{} ({:.0}%)",
            progress.completed_task_count, progress.task_count, progress.progress_percent
        )?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        writeln!(f)?;
        if self.tasks.is_empty() {
            writeln!(f, "No tasks in this module.")?;
        } else {
            for task in &self.tasks {
                task.fmt_line(f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Level: {}", self.level)?;
        writeln!(
            f,
            "- XP: {} / {} ({:.0}%)",
            self.current_xp, self.total_xp, self.overall_progress_percent
        )?;
        writeln!(
            f,
            "- Level progress: {} / {} XP",
            self.xp_in_level, self.xp_for_next_level
        )
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Name: {}", self.name)?;
        writeln!(f, "- Competency: {}", self.competency)?;
        writeln!(f, "- Interests: {}", self.interests.join(", "))?;
        writeln!(f, "- Goal: {}", self.goal)
    }
}
