use std::path::{Path, PathBuf};

use jiff::{civil::Date, tz::TimeZone};
use questline_core::{Session, SessionBuilder, SqliteStore};
use tempfile::TempDir;

/// Saved provider response with two modules and three tasks.
pub const RESPONSE: &str = include_str!("../fixtures/response.json");

/// Helper function to create a temporary database path
pub fn create_test_database() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    (temp_dir, db_path)
}

/// Opens a session over `db_path` pinned to `today` in UTC
pub fn open_session(db_path: &Path, today: Date) -> Session<SqliteStore> {
    SessionBuilder::new()
        .with_database_path(Some(db_path))
        .with_time_zone(TimeZone::UTC)
        .with_today(Some(today))
        .build()
        .expect("Failed to open session")
}
