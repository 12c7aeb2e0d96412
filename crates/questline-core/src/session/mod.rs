//! Learning session: the boundary between a front end and the core.
//!
//! A [`Session`] owns the key-value store, the learner profile, the active
//! learning path and the streak value reported to the user. Front ends call
//! the event methods in [`events`] when the user acts, and read the current
//! state through the accessors here.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Front end    │    │     Session     │    │  KeyValueStore  │
//! │  (CLI, tests)   │───▶│ events, streak, │───▶│ (SqliteStore,   │
//! │                 │    │ progress        │    │  MemoryStore)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use questline_core::{
//!     generate::parse_generated_path,
//!     models::{CompetencyLevel, UserProfile},
//!     params::TaskRef,
//!     store::MemoryStore,
//!     SessionBuilder,
//! };
//!
//! let mut session = SessionBuilder::new()
//!     .with_today(Some(date(2024, 1, 10)))
//!     .build_with_store(MemoryStore::new())?;
//!
//! let profile = UserProfile {
//!     name: "Ada".to_string(),
//!     interests: vec!["Web Development".to_string()],
//!     competency: CompetencyLevel::Beginner,
//!     goal: "Ship a portfolio site".to_string(),
//! };
//! let generated = parse_generated_path(
//!     r#"{"modules":[{"title":"HTML","description":"Markup","badgeName":"Tagger",
//!        "tasks":[{"title":"Hello page","description":"index.html","xp":100}]}]}"#,
//! )?;
//! session.begin_at(profile, generated, Timestamp::UNIX_EPOCH)?;
//!
//! let toggle = session.on_task_completion_toggled(&TaskRef::new("mod-0-0", "task-0-0-0"))?;
//! assert!(toggle.completed);
//! assert_eq!(session.streak(), 1);
//! assert_eq!(session.progress().current_xp, 100);
//! # Ok::<(), questline_core::QuestError>(())
//! ```

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{QuestError, Result},
    models::{LearningModule, LearningPath, LearningTask, UserProfile},
    params::TaskRef,
    progress::{self, ModuleProgress, ProgressSummary},
    store::KeyValueStore,
    streak::{StreakState, StreakTracker},
};

pub mod builder;
pub mod events;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use events::TaskToggle;

/// Storage key of the active learning path (JSON).
pub const PATH_KEY: &str = "questline_path";

/// Storage key of the learner profile (JSON).
pub const PROFILE_KEY: &str = "questline_profile";

/// A learner's session over a key-value store.
pub struct Session<S> {
    store: S,
    time_zone: TimeZone,
    today_override: Option<Date>,
    profile: Option<UserProfile>,
    path: Option<LearningPath>,
    streak: u32,
}

impl<S: KeyValueStore> Session<S> {
    /// Opens a session, loading any persisted path and profile and
    /// reconciling the stored streak with today's date.
    pub(crate) fn open(store: S, time_zone: TimeZone, today_override: Option<Date>) -> Result<Self> {
        let path = load_json(&store, PATH_KEY);
        let profile = load_json(&store, PROFILE_KEY);

        let mut session = Self {
            store,
            time_zone,
            today_override,
            profile,
            path,
            streak: 0,
        };

        let today = session.today();
        session.streak = session.tracker().initialize_on(today)?;
        Ok(session)
    }

    /// Date used for streak decisions: the configured override, or the
    /// current date in the session's time zone.
    pub fn today(&self) -> Date {
        self.today_override
            .unwrap_or_else(|| Timestamp::now().to_zoned(self.time_zone.clone()).date())
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Streak value reported to the user.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Persisted streak state, if any.
    pub fn streak_state(&mut self) -> Option<StreakState> {
        self.tracker().state()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn path(&self) -> Option<&LearningPath> {
        self.path.as_ref()
    }

    /// Path-wide progress; all zero when no path is active.
    pub fn progress(&self) -> ProgressSummary {
        self.path
            .as_ref()
            .map(progress::aggregate)
            .unwrap_or_default()
    }

    /// Looks up a module of the active path.
    pub fn module(&self, module_id: &str) -> Result<&LearningModule> {
        let path = self.path.as_ref().ok_or(QuestError::NoActivePath)?;
        path.module(module_id)
            .ok_or_else(|| QuestError::ModuleNotFound {
                id: module_id.to_string(),
            })
    }

    /// Completion metrics of a module of the active path.
    pub fn module_progress(&self, module_id: &str) -> Result<ModuleProgress> {
        self.module(module_id).map(progress::module_progress)
    }

    /// Looks up a task of the active path.
    pub fn task(&self, task: &TaskRef) -> Result<&LearningTask> {
        self.module(&task.module_id)?
            .task(&task.task_id)
            .ok_or_else(|| task_not_found(task))
    }

    /// Consumes the session, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn tracker(&mut self) -> StreakTracker<&mut S> {
        StreakTracker::new(&mut self.store).with_time_zone(self.time_zone.clone())
    }
}

fn task_not_found(task: &TaskRef) -> QuestError {
    QuestError::TaskNotFound {
        module_id: task.module_id.clone(),
        task_id: task.task_id.clone(),
    }
}

/// Reads a JSON value; unreadable or malformed values count as absent.
fn load_json<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Failed to read {key}, treating it as absent: {e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed {key}: {e}");
            None
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
