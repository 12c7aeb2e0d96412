//! Collection wrapper types for onboarding choices.

use std::fmt;

use crate::models::catalog::{suggested_goals, INTEREST_OPTIONS};

/// Interest catalog and the goals suggested for a selection of interests.
///
/// # Examples
///
/// ```rust
/// use questline_core::display::GoalSuggestions;
///
/// let output = GoalSuggestions::for_interests(&["Cybersecurity".to_string()]).to_string();
/// assert!(output.contains("## Suggested Goals"));
/// assert!(output.contains("- [x] Cybersecurity"));
/// ```
pub struct GoalSuggestions {
    pub interests: Vec<String>,
    pub goals: Vec<&'static str>,
}

impl GoalSuggestions {
    pub fn for_interests(interests: &[String]) -> Self {
        Self {
            interests: interests.to_vec(),
            goals: suggested_goals(interests),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }
}

impl fmt::Display for GoalSuggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Interests")?;
        writeln!(f)?;
        for option in INTEREST_OPTIONS {
            let mark = if self.interests.iter().any(|i| i == option) {
                "[x]"
            } else {
                "[ ]"
            };
            writeln!(f, "- {mark} {option}")?;
        }

        writeln!(f, "\n## Suggested Goals")?;
        writeln!(f)?;
        for goal in &self.goals {
            writeln!(f, "- {goal}")?;
        }
        Ok(())
    }
}
