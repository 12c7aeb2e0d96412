//! XP, level and completion metrics derived from a learning path.
//!
//! Everything here is a pure function of a [`LearningPath`] snapshot. Tasks
//! whose ID already appeared earlier are skipped, so a malformed path can
//! never count the same task twice.

use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use crate::models::{LearningModule, LearningPath, LearningTask};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: u64 = 500;

/// Path-wide progress metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// XP of completed tasks
    pub current_xp: u64,

    /// XP of all tasks
    pub total_xp: u64,

    /// 1-based level reached with `current_xp`
    pub level: u64,

    /// XP earned inside the current level
    pub xp_in_level: u64,

    /// XP span of one level
    pub xp_for_next_level: u64,

    /// Share of total XP earned, within `[0, 100]`
    pub overall_progress_percent: f64,
}

/// Progress metrics of a single module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModuleProgress {
    /// Completed tasks in the module
    pub completed_task_count: usize,

    /// Tasks in the module
    pub task_count: usize,

    /// Share of tasks completed, within `[0, 100]`
    pub progress_percent: f64,

    /// True when the module has tasks and all of them are completed
    pub is_complete: bool,
}

impl ProgressSummary {
    /// Builds a summary from raw XP totals.
    pub fn from_xp(current_xp: u64, total_xp: u64) -> Self {
        Self {
            current_xp,
            total_xp,
            level: level_for(current_xp),
            xp_in_level: current_xp % XP_PER_LEVEL,
            xp_for_next_level: XP_PER_LEVEL,
            overall_progress_percent: percent(current_xp, total_xp),
        }
    }
}

impl Default for ProgressSummary {
    fn default() -> Self {
        Self::from_xp(0, 0)
    }
}

/// Level reached with `xp` points; a learner with no XP is level 1.
pub fn level_for(xp: u64) -> u64 {
    xp / XP_PER_LEVEL + 1
}

/// `part` as a percentage of `whole`, 0 when `whole` is 0.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (100.0 * part as f64 / whole as f64).clamp(0.0, 100.0)
}

/// Yields each task whose ID has not been seen yet.
fn distinct_tasks<'a, I>(tasks: I) -> impl Iterator<Item = &'a LearningTask>
where
    I: IntoIterator<Item = &'a LearningTask>,
{
    let mut seen = HashSet::new();
    tasks.into_iter().filter(move |&task| {
        let first = seen.insert(task.id.as_str());
        if !first {
            debug!("Skipping duplicate task ID {}", task.id);
        }
        first
    })
}

/// Aggregates XP and level metrics over the whole path.
///
/// # Examples
///
/// ```rust
/// use questline_core::{models::LearningPath, progress::aggregate};
///
/// let summary = aggregate(&LearningPath::default());
/// assert_eq!(summary.level, 1);
/// assert_eq!(summary.total_xp, 0);
/// assert_eq!(summary.overall_progress_percent, 0.0);
/// ```
pub fn aggregate(path: &LearningPath) -> ProgressSummary {
    let (current_xp, total_xp) =
        distinct_tasks(path.tasks()).fold((0u64, 0u64), |(current, total), task| {
            let xp = u64::from(task.xp);
            let earned = if task.completed { xp } else { 0 };
            (current + earned, total + xp)
        });

    ProgressSummary::from_xp(current_xp, total_xp)
}

/// Task completion metrics for one module.
pub fn module_progress(module: &LearningModule) -> ModuleProgress {
    let (completed_task_count, task_count) = distinct_tasks(&module.tasks)
        .fold((0usize, 0usize), |(completed, count), task| {
            (completed + usize::from(task.completed), count + 1)
        });

    ModuleProgress {
        completed_task_count,
        task_count,
        progress_percent: percent(completed_task_count as u64, task_count as u64),
        is_complete: task_count > 0 && completed_task_count == task_count,
    }
}
