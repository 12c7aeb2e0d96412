//! Boundary to the external path generator.
//!
//! A generator turns a [`UserProfile`] into a structured curriculum. Its raw
//! output ([`GeneratedPath`]) carries no IDs or progress flags; normalizing
//! it with [`GeneratedPath::into_learning_path`] assigns IDs that are unique
//! within the path and starts every task uncompleted and unflagged.
//!
//! The generator itself lives outside this crate. [`ResponseFile`] reads a
//! response that a provider produced earlier, and any
//! `Fn(&UserProfile) -> Result<GeneratedPath>` closure works as a generator
//! too.

use std::{
    fs,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{QuestError, Result},
    models::{LearningModule, LearningPath, LearningTask, UserProfile, VideoReference},
};

/// A task as returned by the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTask {
    pub title: String,
    pub description: String,
    /// Suggested XP; generators are asked for 10-100 but anything goes
    pub xp: i64,
    #[serde(default)]
    pub youtube_references: Vec<VideoReference>,
}

/// A module as returned by the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedModule {
    pub title: String,
    pub description: String,
    pub badge_name: String,
    pub tasks: Vec<GeneratedTask>,
}

/// A complete generator response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedPath {
    pub modules: Vec<GeneratedModule>,
}

impl GeneratedTask {
    fn into_learning_task(self, id: String) -> LearningTask {
        let xp = u32::try_from(self.xp.max(0)).unwrap_or(u32::MAX);
        if i64::from(xp) != self.xp {
            warn!("Task '{}' had XP {} out of range, using {xp}", self.title, self.xp);
        }

        LearningTask {
            id,
            title: self.title,
            description: self.description,
            xp,
            completed: false,
            priority: false,
            youtube_references: self.youtube_references,
        }
    }
}

impl GeneratedPath {
    /// Normalizes the response into a fresh learning path.
    ///
    /// Module IDs are `mod-{m}-{millis}` and task IDs `task-{m}-{t}-{millis}`,
    /// where `m` and `t` are 0-based positions and `millis` is `issued_at` in
    /// Unix milliseconds. Order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::Timestamp;
    /// use questline_core::generate::parse_generated_path;
    ///
    /// let generated = parse_generated_path(
    ///     r#"{"modules":[{"title":"Basics","description":"Start here",
    ///        "badgeName":"Starter","tasks":[{"title":"Install","description":"rustup","xp":20}]}]}"#,
    /// )?;
    /// let path = generated.into_learning_path(Timestamp::from_millisecond(1_700_000_000_000)?);
    ///
    /// assert_eq!(path.modules[0].id, "mod-0-1700000000000");
    /// assert_eq!(path.modules[0].tasks[0].id, "task-0-0-1700000000000");
    /// assert!(!path.modules[0].tasks[0].completed);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn into_learning_path(self, issued_at: Timestamp) -> LearningPath {
        let stamp = issued_at.as_millisecond();

        let modules = self
            .modules
            .into_iter()
            .enumerate()
            .map(|(m, module)| LearningModule {
                id: format!("mod-{m}-{stamp}"),
                title: module.title,
                description: module.description,
                badge_name: module.badge_name,
                tasks: module
                    .tasks
                    .into_iter()
                    .enumerate()
                    .map(|(t, task)| task.into_learning_task(format!("task-{m}-{t}-{stamp}")))
                    .collect(),
            })
            .collect();

        LearningPath { modules }
    }
}

/// Parses a generator response.
///
/// # Errors
///
/// Returns `QuestError::Generation` when the text is not JSON, when the
/// `modules` array is missing, or when a module or task lacks a required
/// field.
pub fn parse_generated_path(response: &str) -> Result<GeneratedPath> {
    let value: Value = serde_json::from_str(response.trim())
        .map_err(|e| QuestError::generation(format!("Response is not valid JSON: {e}")))?;

    if !value.get("modules").is_some_and(Value::is_array) {
        return Err(QuestError::generation(
            "Invalid response structure: 'modules' array is missing",
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| QuestError::generation(format!("Invalid response structure: {e}")))
}

/// Produces a learning path for a learner.
pub trait PathGenerator {
    /// Generates a raw path for `profile`.
    fn generate(&self, profile: &UserProfile) -> Result<GeneratedPath>;
}

impl<F> PathGenerator for F
where
    F: Fn(&UserProfile) -> Result<GeneratedPath>,
{
    fn generate(&self, profile: &UserProfile) -> Result<GeneratedPath> {
        self(profile)
    }
}

/// A provider response saved to disk.
#[derive(Debug, Clone)]
pub struct ResponseFile {
    path: PathBuf,
}

impl ResponseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PathGenerator for ResponseFile {
    fn generate(&self, profile: &UserProfile) -> Result<GeneratedPath> {
        info!(
            "Loading generated path for {} from {}",
            profile.name,
            self.path.display()
        );

        let response = fs::read_to_string(&self.path).map_err(|source| QuestError::FileSystem {
            path: self.path.clone(),
            source,
        })?;
        parse_generated_path(&response)
    }
}
