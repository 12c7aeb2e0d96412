//! Display formatting for sessions and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types in this module add the context a particular view needs,
//! such as the learner's streak on the dashboard.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (path, profile) │───▶│ (Dashboard, ...)│───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`dashboard`]: The learner's dashboard
//! - [`collections`]: Interest catalog and goal suggestions
//! - [`status`]: Status lines, streak report and toggle outcomes
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use questline_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Learning path discarded".to_string());
//! assert_eq!(status.to_string(), "Success: Learning path discarded\n");
//! ```

pub mod collections;
pub mod dashboard;
pub mod models;
pub mod status;

pub use collections::GoalSuggestions;
pub use dashboard::Dashboard;
pub use status::{OperationStatus, StreakReport};
