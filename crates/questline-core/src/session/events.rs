//! Handlers for user actions on a session.

use jiff::Timestamp;
use log::{debug, info};
use serde::Serialize;

use super::{task_not_found, to_json, Session, PATH_KEY, PROFILE_KEY};
use crate::{
    error::{QuestError, Result},
    generate::{GeneratedPath, PathGenerator},
    models::{LearningPath, LearningTask, UserProfile},
    params::TaskRef,
    store::KeyValueStore,
    streak::{advance, completion_entries, StreakUpdate},
};

/// Outcome of a completion toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskToggle {
    /// Module and task that were toggled
    pub task: TaskRef,

    /// Completed flag after the toggle
    pub completed: bool,

    /// Streak decision, present only when the task became completed
    pub streak: Option<StreakUpdate>,
}

fn find_task<'a>(path: &'a mut LearningPath, task: &TaskRef) -> Result<&'a mut LearningTask> {
    if path.module(&task.module_id).is_none() {
        return Err(QuestError::ModuleNotFound {
            id: task.module_id.clone(),
        });
    }
    path.task_mut(&task.module_id, &task.task_id)
        .ok_or_else(|| task_not_found(task))
}

/// Borrows owned entries in the shape `KeyValueStore::set_many` takes.
fn borrowed<'a>(entries: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    entries
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect()
}

impl<S: KeyValueStore> Session<S> {
    /// Replaces the active path with a freshly generated one, issued now.
    pub fn begin(&mut self, profile: UserProfile, generated: GeneratedPath) -> Result<&LearningPath> {
        self.begin_at(profile, generated, Timestamp::now())
    }

    /// Asks `generator` for a path and begins it. A failing generator leaves
    /// the current path and streak untouched.
    pub fn begin_with<G: PathGenerator + ?Sized>(
        &mut self,
        profile: UserProfile,
        generator: &G,
    ) -> Result<&LearningPath> {
        let generated = generator.generate(&profile)?;
        self.begin(profile, generated)
    }

    /// Replaces the active path, assigning IDs from `issued_at`.
    ///
    /// The normalized path and the profile are written over the old ones,
    /// then the streak is reset as for [`Session::on_path_replaced_or_reset`].
    /// If the write fails the previous path, profile and streak are kept.
    pub fn begin_at(
        &mut self,
        profile: UserProfile,
        generated: GeneratedPath,
        issued_at: Timestamp,
    ) -> Result<&LearningPath> {
        let path = generated.into_learning_path(issued_at);
        let path_json = to_json(&path)?;
        let profile_json = to_json(&profile)?;
        self.store.set_many(&[
            (PATH_KEY, path_json.as_str()),
            (PROFILE_KEY, profile_json.as_str()),
        ])?;
        self.tracker().reset()?;

        if self.path.is_some() {
            info!("Replaced the active learning path");
        }
        info!(
            "Began a path of {} modules for {}",
            path.modules.len(),
            profile.name
        );
        self.profile = Some(profile);
        self.streak = 0;
        Ok(self.path.insert(path))
    }

    /// Flips the completed flag of a task.
    ///
    /// When the task goes from not completed to completed the streak is
    /// decided first; completing again on the same day does not extend it.
    /// Un-completing a task never touches the streak. The path and any
    /// streak change are written in one batch, and the session only changes
    /// once that write succeeds.
    pub fn on_task_completion_toggled(&mut self, task: &TaskRef) -> Result<TaskToggle> {
        let today = self.today();
        let (path, completed) = self.flipped_path(task, |current| {
            current.completed = !current.completed;
            current.completed
        })?;

        let streak = if completed {
            Some(advance(self.tracker().state(), today))
        } else {
            None
        };

        let mut entries = vec![(PATH_KEY, to_json(&path)?)];
        if let Some(update) = &streak {
            entries.extend(completion_entries(update, today));
        }
        self.store.set_many(&borrowed(&entries))?;

        if let Some(update) = &streak {
            debug!("Streak {} at {} on {today}", update.change, update.streak);
            self.streak = update.streak;
        }
        self.path = Some(path);

        debug!(
            "Task {}/{} completed: {completed}",
            task.module_id, task.task_id
        );
        Ok(TaskToggle {
            task: task.clone(),
            completed,
            streak,
        })
    }

    /// Flips the priority flag of a task, returning the new value.
    pub fn on_priority_toggled(&mut self, task: &TaskRef) -> Result<bool> {
        let (path, priority) = self.flipped_path(task, |current| {
            current.priority = !current.priority;
            current.priority
        })?;

        self.store.set(PATH_KEY, &to_json(&path)?)?;
        self.path = Some(path);
        Ok(priority)
    }

    /// Resets the streak and discards the path and profile.
    pub fn on_path_replaced_or_reset(&mut self) -> Result<()> {
        self.tracker().reset()?;
        self.store.remove_many(&[PATH_KEY, PROFILE_KEY])?;

        if self.path.take().is_some() {
            info!("Discarded the active learning path");
        }
        self.profile = None;
        self.streak = 0;
        Ok(())
    }

    /// Copy of the active path with one task changed by `flip`, which
    /// returns the flag's new value.
    fn flipped_path<F>(&self, task: &TaskRef, flip: F) -> Result<(LearningPath, bool)>
    where
        F: FnOnce(&mut LearningTask) -> bool,
    {
        let mut path = self.path.clone().ok_or(QuestError::NoActivePath)?;
        let value = flip(find_task(&mut path, task)?);
        Ok((path, value))
    }
}
