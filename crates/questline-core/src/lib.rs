//! Core library for the Questline gamified learning path.
//!
//! A learner onboards with a [`UserProfile`], receives a generated
//! [`LearningPath`] of modules and tasks, and completes tasks to earn XP,
//! levels, module badges and a daily completion streak.
//!
//! - [`streak`]: the daily streak state machine over a key-value store
//! - [`progress`]: XP, level and completion metrics of a path
//! - [`session`]: the event boundary front ends drive
//! - [`generate`]: parsing and normalizing generated paths
//! - [`store`]: SQLite and in-memory key-value stores
//! - [`display`]: markdown output for terminals
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use questline_core::{
//!     display::Dashboard, generate::parse_generated_path, params::Onboarding,
//!     store::MemoryStore, SessionBuilder, TaskRef, UserProfile,
//! };
//!
//! let mut session = SessionBuilder::new()
//!     .with_today(Some(date(2024, 5, 1)))
//!     .build_with_store(MemoryStore::new())?;
//!
//! let profile = UserProfile::try_from(Onboarding {
//!     name: "Linus".to_string(),
//!     interests: vec!["Cloud Computing".to_string()],
//!     competency: "advanced".to_string(),
//!     goal: "Deploy a scalable web app on AWS".to_string(),
//! })?;
//! let generated = parse_generated_path(
//!     r#"{"modules":[{"title":"Containers","description":"Docker first",
//!        "badgeName":"Container Captain",
//!        "tasks":[{"title":"Write a Dockerfile","description":"Multi-stage","xp":80}]}]}"#,
//! )?;
//! let path = session.begin(profile, generated)?;
//! let module = &path.modules[0];
//! let task = TaskRef::new(module.id.clone(), module.tasks[0].id.clone());
//!
//! session.on_task_completion_toggled(&task)?;
//! assert_eq!(session.streak(), 1);
//!
//! let dashboard = Dashboard::of(&session).expect("path is active");
//! assert!(dashboard.to_string().contains("Container Captain (earned)"));
//! # Ok::<(), questline_core::QuestError>(())
//! ```

pub mod display;
pub mod error;
pub mod generate;
pub mod models;
pub mod params;
pub mod progress;
pub mod session;
pub mod store;
pub mod streak;

// Re-export commonly used types
pub use display::{Dashboard, GoalSuggestions, OperationStatus, StreakReport};
pub use error::{QuestError, Result};
pub use generate::{parse_generated_path, GeneratedPath, PathGenerator, ResponseFile};
pub use models::{CompetencyLevel, LearningModule, LearningPath, LearningTask, UserProfile};
pub use params::{Onboarding, TaskRef};
pub use progress::{aggregate, module_progress, ModuleProgress, ProgressSummary};
pub use session::{Session, SessionBuilder, TaskToggle};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use streak::{StreakChange, StreakState, StreakTracker, StreakUpdate};
