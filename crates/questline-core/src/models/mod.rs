//! Data models for learning paths and learners.
//!
//! A [`LearningPath`] owns an ordered list of [`LearningModule`]s, each owning
//! an ordered list of [`LearningTask`]s. Task and module IDs are assigned when
//! a generated path is normalized (see [`crate::generate`]) and are unique
//! within the path. Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use questline_core::models::{LearningModule, LearningPath, LearningTask};
//!
//! let path = LearningPath {
//!     modules: vec![LearningModule {
//!         id: "mod-0".to_string(),
//!         title: "Foundations".to_string(),
//!         description: "HTML and CSS basics".to_string(),
//!         badge_name: "Markup Maven".to_string(),
//!         tasks: vec![LearningTask {
//!             id: "task-0-0".to_string(),
//!             title: "Build a landing page".to_string(),
//!             description: "Semantic HTML only".to_string(),
//!             xp: 50,
//!             completed: false,
//!             priority: false,
//!             youtube_references: vec![],
//!         }],
//!     }],
//! };
//!
//! assert_eq!(path.task("mod-0", "task-0-0").map(|t| t.xp), Some(50));
//! assert!(path.task("mod-0", "missing").is_none());
//! ```

pub mod catalog;
pub mod path;
pub mod profile;


pub use path::{LearningModule, LearningPath, LearningTask, VideoReference};
pub use profile::{CompetencyLevel, UserProfile};
