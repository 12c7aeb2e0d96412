//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};

use jiff::{civil::Date, tz::TimeZone};

use super::Session;
use crate::{
    error::{QuestError, Result},
    store::{KeyValueStore, SqliteStore},
};

/// Builder for creating and configuring Session instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    database_path: Option<PathBuf>,
    time_zone: Option<TimeZone>,
    time_zone_name: Option<String>,
    today: Option<Date>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/questline/questline.db` or
    /// `~/.local/share/questline/questline.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the time zone deciding calendar days. Defaults to the system
    /// time zone.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self.time_zone_name = None;
        self
    }

    /// Sets the time zone by IANA name, resolved when building.
    pub fn with_time_zone_name<N: AsRef<str>>(mut self, name: Option<N>) -> Self {
        if let Some(name) = name {
            self.time_zone_name = Some(name.as_ref().to_string());
            self.time_zone = None;
        }
        self
    }

    /// Pins the date used for streak decisions instead of the wall clock.
    pub fn with_today(mut self, today: Option<Date>) -> Self {
        if today.is_some() {
            self.today = today;
        }
        self
    }

    /// Builds a session over the configured SQLite database.
    ///
    /// # Errors
    ///
    /// Returns `QuestError::FileSystem` if the database directory cannot be created
    /// Returns `QuestError::Configuration` if the time zone name is unknown
    /// Returns `QuestError::Database` if database initialization fails
    pub fn build(self) -> Result<Session<SqliteStore>> {
        let db_path = if let Some(path) = &self.database_path {
            path.clone()
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| QuestError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = SqliteStore::open(&db_path)?;
        self.build_with_store(store)
    }

    /// Builds a session over any key-value store.
    pub fn build_with_store<S: KeyValueStore>(self, store: S) -> Result<Session<S>> {
        let time_zone = self.resolve_time_zone()?;
        Session::open(store, time_zone, self.today)
    }

    fn resolve_time_zone(&self) -> Result<TimeZone> {
        if let Some(name) = &self.time_zone_name {
            // UTC resolves even without a time zone database on the host
            if name.eq_ignore_ascii_case("UTC") {
                return Ok(TimeZone::UTC);
            }
            return TimeZone::get(name).map_err(|e| QuestError::Configuration {
                message: format!("Unknown time zone '{name}': {e}"),
            });
        }
        Ok(self.time_zone.clone().unwrap_or_else(TimeZone::system))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("questline")
            .place_data_file("questline.db")
            .map_err(|e| QuestError::XdgDirectory(e.to_string()))
    }
}
