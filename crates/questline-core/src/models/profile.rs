//! User profile captured during onboarding.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Self-assessed competency of the learner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CompetencyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CompetencyLevel {
    /// All levels in ascending order.
    pub const ALL: [CompetencyLevel; 3] = [
        CompetencyLevel::Beginner,
        CompetencyLevel::Intermediate,
        CompetencyLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompetencyLevel::Beginner => "Beginner",
            CompetencyLevel::Intermediate => "Intermediate",
            CompetencyLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for CompetencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(CompetencyLevel::Beginner),
            "intermediate" => Ok(CompetencyLevel::Intermediate),
            "advanced" => Ok(CompetencyLevel::Advanced),
            _ => Err(format!("Invalid competency level: {s}")),
        }
    }
}

impl fmt::Display for CompetencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The learner the path is generated for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Name shown on the dashboard
    pub name: String,

    /// Selected topics of interest, in selection order
    pub interests: Vec<String>,

    /// Self-assessed competency
    pub competency: CompetencyLevel,

    /// Primary learning goal
    pub goal: String,
}
