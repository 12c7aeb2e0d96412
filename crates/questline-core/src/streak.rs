//! Daily completion streak tracking.
//!
//! The streak counts consecutive calendar days on which at least one task was
//! completed. Its state lives in two storage keys: [`STREAK_KEY`] holds the
//! count as a decimal string and [`LAST_COMPLETION_KEY`] holds the day of the
//! last counted completion as an ISO-8601 date-time.
//!
//! All decisions are made on civil calendar dates. Wall-clock "today" is the
//! current instant seen in the tracker's time zone (the system zone unless
//! configured otherwise), and persisted timestamps that carry an offset are
//! converted into the same zone before their date is taken.
//!
//! | Days since last completion | [`StreakTracker::record_completion_on`] |
//! |----------------------------|-----------------------------------------|
//! | no prior completion        | streak becomes 1                        |
//! | 0                          | unchanged, nothing written              |
//! | 1                          | streak + 1                              |
//! | 2 or more, or negative     | streak restarts at 1                    |
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use questline_core::{store::MemoryStore, streak::StreakTracker};
//!
//! let mut tracker = StreakTracker::new(MemoryStore::new());
//!
//! assert_eq!(tracker.record_completion_on(date(2024, 1, 10))?.streak, 1);
//! assert_eq!(tracker.record_completion_on(date(2024, 1, 11))?.streak, 2);
//! assert_eq!(tracker.record_completion_on(date(2024, 1, 13))?.streak, 1);
//! # Ok::<(), questline_core::QuestError>(())
//! ```

use std::fmt;

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};
use log::{debug, warn};
use serde::Serialize;

use crate::{error::Result, store::KeyValueStore};

/// Storage key of the streak count.
pub const STREAK_KEY: &str = "questline_streak";

/// Storage key of the last completion date.
pub const LAST_COMPLETION_KEY: &str = "questline_last_completion";

/// Persisted streak state. Absent state is represented by `None` wherever
/// a `StreakState` is optional, so a count never exists without a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakState {
    /// Consecutive days counted so far
    pub count: u32,

    /// Calendar day of the last counted completion
    pub last_completion: Date,
}

impl StreakState {
    /// Parses the two stored values. Returns `None` when either is malformed.
    pub fn parse(count: &str, last_completion: &str, time_zone: &TimeZone) -> Option<Self> {
        Some(Self {
            count: count.trim().parse().ok()?,
            last_completion: parse_completion_date(last_completion, time_zone)?,
        })
    }
}

/// How a completion affected the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StreakChange {
    /// First completion ever recorded
    Started,
    /// Completion on the day after the last one
    Extended,
    /// Another completion on the same day
    Unchanged,
    /// Completion after a gap (or before the last one)
    Restarted,
}

/// Outcome of recording a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakUpdate {
    /// Streak after the completion
    pub streak: u32,

    /// What happened to the streak
    pub change: StreakChange,
}

impl StreakUpdate {
    /// Returns true when the update must be persisted.
    pub fn is_changed(&self) -> bool {
        self.change != StreakChange::Unchanged
    }
}

impl fmt::Display for StreakChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StreakChange::Started => "started",
            StreakChange::Extended => "extended",
            StreakChange::Unchanged => "unchanged",
            StreakChange::Restarted => "restarted",
        };
        write!(f, "{text}")
    }
}

/// Whole calendar days from `last` to `today`; negative when `today` is
/// earlier.
pub fn day_difference(last: Date, today: Date) -> i64 {
    // Any two valid dates are representable as a day span.
    today
        .since(last)
        .map_or(i64::MAX, |span| i64::from(span.get_days()))
}

/// Applies one completion on `today` to the prior state.
pub fn advance(prior: Option<StreakState>, today: Date) -> StreakUpdate {
    let Some(state) = prior else {
        return StreakUpdate {
            streak: 1,
            change: StreakChange::Started,
        };
    };

    match day_difference(state.last_completion, today) {
        0 => StreakUpdate {
            streak: state.count,
            change: StreakChange::Unchanged,
        },
        1 => StreakUpdate {
            streak: state.count.saturating_add(1),
            change: StreakChange::Extended,
        },
        _ => StreakUpdate {
            streak: 1,
            change: StreakChange::Restarted,
        },
    }
}

/// Returns true when more than one day passed since the last completion.
pub fn has_lapsed(state: &StreakState, today: Date) -> bool {
    day_difference(state.last_completion, today) > 1
}

/// Reads a stored completion date. Accepts offset-bearing timestamps
/// (converted into `time_zone`), civil date-times and bare dates.
pub fn parse_completion_date(raw: &str, time_zone: &TimeZone) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(time_zone.clone()).date());
    }
    if let Ok(datetime) = raw.parse::<DateTime>() {
        return Some(datetime.date());
    }
    raw.parse::<Date>().ok()
}

/// Formats a completion day for storage.
pub fn format_completion_date(date: Date) -> String {
    date.at(0, 0, 0, 0).to_string()
}

/// Storage entries that persist `update` for a completion on `today`.
/// Empty when the update leaves the streak unchanged.
pub fn completion_entries(update: &StreakUpdate, today: Date) -> Vec<(&'static str, String)> {
    if !update.is_changed() {
        return Vec::new();
    }
    vec![
        (STREAK_KEY, update.streak.to_string()),
        (LAST_COMPLETION_KEY, format_completion_date(today)),
    ]
}

/// Decides streak changes and persists them in a key-value store.
pub struct StreakTracker<S> {
    store: S,
    time_zone: TimeZone,
}

impl<S: KeyValueStore> StreakTracker<S> {
    /// Creates a tracker over `store` using the system time zone.
    pub fn new(store: S) -> Self {
        Self {
            store,
            time_zone: TimeZone::system(),
        }
    }

    /// Sets the time zone used for "today" and for stored timestamps.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Today's calendar date in the tracker's time zone.
    pub fn today(&self) -> Date {
        Timestamp::now().to_zoned(self.time_zone.clone()).date()
    }

    /// Current persisted state. Unreadable or malformed values count as
    /// absent.
    pub fn state(&self) -> Option<StreakState> {
        let count = self.read(STREAK_KEY)?;
        let last_completion = self.read(LAST_COMPLETION_KEY)?;

        let state = StreakState::parse(&count, &last_completion, &self.time_zone);
        if state.is_none() {
            warn!(
                "Ignoring malformed streak state (count: {count:?}, last completion: {last_completion:?})"
            );
        }
        state
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {key}, treating it as absent: {e}");
                None
            }
        }
    }

    /// Reconciles the stored streak with today's wall-clock date.
    pub fn initialize(&mut self) -> Result<u32> {
        let today = self.today();
        self.initialize_on(today)
    }

    /// Reconciles the stored streak with `today`.
    ///
    /// A streak whose last completion is more than one day old has lapsed:
    /// the stored count is rewritten to 0 and 0 is reported. Otherwise the
    /// stored count is reported and storage is left untouched.
    pub fn initialize_on(&mut self, today: Date) -> Result<u32> {
        let Some(state) = self.state() else {
            return Ok(0);
        };

        if has_lapsed(&state, today) {
            debug!(
                "Streak of {} lapsed (last completion {}, today {today})",
                state.count, state.last_completion
            );
            self.store.set(STREAK_KEY, "0")?;
            return Ok(0);
        }

        Ok(state.count)
    }

    /// Records a task completion at today's wall-clock date.
    pub fn record_completion(&mut self) -> Result<StreakUpdate> {
        let today = self.today();
        self.record_completion_on(today)
    }

    /// Records a task completion on `today`.
    ///
    /// Call this only when a task goes from not completed to completed.
    /// Repeated calls on the same day leave the streak and storage as they
    /// are.
    pub fn record_completion_on(&mut self, today: Date) -> Result<StreakUpdate> {
        let update = advance(self.state(), today);

        let entries = completion_entries(&update, today);
        if !entries.is_empty() {
            let entries: Vec<(&str, &str)> =
                entries.iter().map(|(key, value)| (*key, value.as_str())).collect();
            self.store.set_many(&entries)?;
        }

        debug!("Streak {} at {} on {today}", update.change, update.streak);
        Ok(update)
    }

    /// Clears both stored fields; the streak is 0 afterwards.
    pub fn reset(&mut self) -> Result<()> {
        self.store.remove_many(&[STREAK_KEY, LAST_COMPLETION_KEY])
    }

    /// Consumes the tracker, returning its store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
