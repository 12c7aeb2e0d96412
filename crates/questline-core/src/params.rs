//! Parameter structures shared by the library and its front ends.
//!
//! These carry raw user input without any CLI framework derives. Front ends
//! wrap them (the CLI adds clap derives) and convert with `.into()`.

use serde::{Deserialize, Serialize};

use crate::{
    error::{QuestError, Result},
    models::{CompetencyLevel, UserProfile},
};

/// Addresses one task inside one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// ID of the module holding the task
    pub module_id: String,

    /// ID of the task
    pub task_id: String,
}

impl TaskRef {
    pub fn new(module_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            task_id: task_id.into(),
        }
    }
}

/// Onboarding answers as entered by the learner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Onboarding {
    pub name: String,
    pub interests: Vec<String>,
    /// One of beginner, intermediate or advanced, in any case
    pub competency: String,
    pub goal: String,
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(QuestError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

impl TryFrom<Onboarding> for UserProfile {
    type Error = QuestError;

    fn try_from(onboarding: Onboarding) -> Result<Self> {
        let name = required("name", &onboarding.name)?;

        let interests: Vec<String> = onboarding
            .interests
            .iter()
            .map(|interest| interest.trim())
            .filter(|interest| !interest.is_empty())
            .map(str::to_string)
            .collect();
        if interests.is_empty() {
            return Err(
                QuestError::invalid_input("interests").with_reason("select at least one interest")
            );
        }

        let competency: CompetencyLevel = onboarding
            .competency
            .parse()
            .map_err(|reason| QuestError::invalid_input("competency").with_reason(reason))?;

        let goal = required("goal", &onboarding.goal)?;

        Ok(UserProfile {
            name,
            interests,
            competency,
            goal,
        })
    }
}
