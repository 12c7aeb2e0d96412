//! Learning path, module and task model definitions.

use serde::{Deserialize, Serialize};

/// A video suggested by the path generator for a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoReference {
    /// Title of the video
    pub title: String,

    /// Direct URL to the video
    pub url: String,
}

/// A single actionable task inside a module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LearningTask {
    /// Identifier unique within the path
    pub id: String,

    /// Brief title of the task
    pub title: String,

    /// What the task involves
    pub description: String,

    /// Experience points awarded on completion
    pub xp: u32,

    /// Whether the user has completed the task
    #[serde(default)]
    pub completed: bool,

    /// Whether the user flagged the task as a priority
    #[serde(default)]
    pub priority: bool,

    /// Suggested videos for the task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub youtube_references: Vec<VideoReference>,
}

/// A named group of tasks; completing every task earns the module's badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LearningModule {
    /// Identifier unique within the path
    pub id: String,

    /// Title of the module
    pub title: String,

    /// Short description of the module's content
    pub description: String,

    /// Badge awarded once all tasks are completed
    pub badge_name: String,

    /// Tasks in display order
    #[serde(default)]
    pub tasks: Vec<LearningTask>,
}

/// Root aggregate of a learning session. Module and task order is display
/// order and never changes after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LearningPath {
    /// Modules in display order
    #[serde(default)]
    pub modules: Vec<LearningModule>,
}

impl LearningPath {
    /// Looks up a module by ID.
    pub fn module(&self, module_id: &str) -> Option<&LearningModule> {
        self.modules.iter().find(|module| module.id == module_id)
    }

    /// Looks up a task by module and task ID.
    pub fn task(&self, module_id: &str, task_id: &str) -> Option<&LearningTask> {
        self.module(module_id)?.task(task_id)
    }

    /// Mutable lookup of a task by module and task ID.
    pub fn task_mut(&mut self, module_id: &str, task_id: &str) -> Option<&mut LearningTask> {
        self.modules
            .iter_mut()
            .find(|module| module.id == module_id)?
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
    }

    /// Iterates over every task in document order.
    pub fn tasks(&self) -> impl Iterator<Item = &LearningTask> {
        self.modules.iter().flat_map(|module| module.tasks.iter())
    }

    /// Returns true when the path has no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.tasks().next().is_none()
    }
}

impl LearningModule {
    /// Looks up a task of this module by ID.
    pub fn task(&self, task_id: &str) -> Option<&LearningTask> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}
