//! Tests for the session module.

use jiff::{civil::date, Timestamp};

use super::*;
use crate::{
    generate::{GeneratedModule, GeneratedPath, GeneratedTask},
    models::CompetencyLevel,
    store::MemoryStore,
    streak::{StreakChange, LAST_COMPLETION_KEY, STREAK_KEY},
};

fn profile() -> UserProfile {
    UserProfile {
        name: "Ada".to_string(),
        interests: vec!["Game Development".to_string()],
        competency: CompetencyLevel::Beginner,
        goal: "Develop a 2D platformer game with a custom character.".to_string(),
    }
}

fn generated() -> GeneratedPath {
    let task = |title: &str, xp| GeneratedTask {
        title: title.to_string(),
        description: format!("{title} description"),
        xp,
        youtube_references: vec![],
    };

    GeneratedPath {
        modules: vec![
            GeneratedModule {
                title: "Engine basics".to_string(),
                description: "Get a window on screen".to_string(),
                badge_name: "Pixel Pioneer".to_string(),
                tasks: vec![task("Open a window", 50), task("Draw a sprite", 100)],
            },
            GeneratedModule {
                title: "Movement".to_string(),
                description: "Make the character move".to_string(),
                badge_name: "Jump Master".to_string(),
                tasks: vec![task("Gravity", 150)],
            },
        ],
    }
}

fn session_on(store: MemoryStore, today: Date) -> Session<MemoryStore> {
    SessionBuilder::new()
        .with_time_zone(TimeZone::UTC)
        .with_today(Some(today))
        .build_with_store(store)
        .expect("Failed to open session")
}

fn begun_session(today: Date) -> Session<MemoryStore> {
    let mut session = session_on(MemoryStore::new(), today);
    session
        .begin_at(profile(), generated(), Timestamp::UNIX_EPOCH)
        .expect("Failed to begin path");
    session
}

/// Memory store that can be switched to reject writes of the path key.
/// Batches are checked before anything is applied, like a transaction.
#[derive(Default)]
struct PathLockedStore {
    inner: MemoryStore,
    locked: bool,
}

impl PathLockedStore {
    fn check(&self, key: &str) -> Result<()> {
        if self.locked && key == PATH_KEY {
            return Err(QuestError::Configuration {
                message: format!("{key} is read-only"),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for PathLockedStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, _) in entries {
            self.check(key)?;
        }
        self.inner.set_many(entries)
    }
}

fn locked_session(today: Date) -> Session<PathLockedStore> {
    let mut session = SessionBuilder::new()
        .with_time_zone(TimeZone::UTC)
        .with_today(Some(today))
        .build_with_store(PathLockedStore::default())
        .expect("Failed to open session");
    session
        .begin_at(profile(), generated(), Timestamp::UNIX_EPOCH)
        .expect("Failed to begin path");
    session
}

fn first_task() -> TaskRef {
    TaskRef::new("mod-0-0", "task-0-0-0")
}

fn second_task() -> TaskRef {
    TaskRef::new("mod-0-0", "task-0-1-0")
}

#[test]
fn test_new_session_is_empty() {
    let session = session_on(MemoryStore::new(), date(2024, 1, 10));

    assert!(session.path().is_none());
    assert!(session.profile().is_none());
    assert_eq!(session.streak(), 0);
    assert_eq!(session.progress(), ProgressSummary::default());
}

#[test]
fn test_begin_persists_path_and_profile() {
    let session = begun_session(date(2024, 1, 10));

    let path = session.path().unwrap();
    assert_eq!(path.modules.len(), 2);
    assert_eq!(session.profile().unwrap().name, "Ada");

    let store = session.into_store();
    assert!(store.get(PATH_KEY).unwrap().unwrap().contains("badgeName"));
    assert!(store.get(PROFILE_KEY).unwrap().unwrap().contains("Ada"));
}

#[test]
fn test_completion_toggle_records_streak_once_per_day() {
    let mut session = begun_session(date(2024, 1, 10));

    let toggle = session.on_task_completion_toggled(&first_task()).unwrap();
    assert!(toggle.completed);
    assert_eq!(toggle.streak.unwrap().change, StreakChange::Started);
    assert_eq!(session.streak(), 1);

    let toggle = session.on_task_completion_toggled(&second_task()).unwrap();
    assert_eq!(toggle.streak.unwrap().change, StreakChange::Unchanged);
    assert_eq!(session.streak(), 1);

    assert_eq!(session.progress().current_xp, 150);
    assert_eq!(session.progress().total_xp, 300);
}

#[test]
fn test_uncompleting_does_not_touch_streak() {
    let mut session = begun_session(date(2024, 1, 10));

    session.on_task_completion_toggled(&first_task()).unwrap();
    let toggle = session.on_task_completion_toggled(&first_task()).unwrap();

    assert!(!toggle.completed);
    assert!(toggle.streak.is_none());
    assert_eq!(session.streak(), 1);
    assert_eq!(session.progress().current_xp, 0);
}

#[test]
fn test_streak_extends_across_reopened_sessions() {
    let mut session = begun_session(date(2024, 1, 10));
    session.on_task_completion_toggled(&first_task()).unwrap();

    let mut session = session_on(session.into_store(), date(2024, 1, 11));
    assert_eq!(session.streak(), 1);
    assert!(session.task(&first_task()).unwrap().completed);

    let toggle = session.on_task_completion_toggled(&second_task()).unwrap();
    assert_eq!(toggle.streak.unwrap().change, StreakChange::Extended);
    assert_eq!(session.streak(), 2);
}

#[test]
fn test_lapsed_streak_reports_zero_on_open() {
    let mut session = begun_session(date(2024, 1, 10));
    session.on_task_completion_toggled(&first_task()).unwrap();

    let mut session = session_on(session.into_store(), date(2024, 1, 13));
    assert_eq!(session.streak(), 0);
    assert_eq!(session.streak_state().unwrap().count, 0);

    let toggle = session.on_task_completion_toggled(&second_task()).unwrap();
    assert_eq!(toggle.streak.unwrap().change, StreakChange::Restarted);
    assert_eq!(session.streak(), 1);
}

#[test]
fn test_priority_toggle() {
    let mut session = begun_session(date(2024, 1, 10));

    assert!(session.on_priority_toggled(&second_task()).unwrap());
    assert!(session.task(&second_task()).unwrap().priority);
    assert!(!session.on_priority_toggled(&second_task()).unwrap());
    assert_eq!(session.streak(), 0);
}

#[test]
fn test_reset_discards_path_and_streak() {
    let mut session = begun_session(date(2024, 1, 10));
    session.on_task_completion_toggled(&first_task()).unwrap();

    session.on_path_replaced_or_reset().unwrap();

    assert!(session.path().is_none());
    assert!(session.profile().is_none());
    assert_eq!(session.streak(), 0);

    let store = session.into_store();
    assert!(store.is_empty());
}

#[test]
fn test_begin_replaces_previous_path_and_resets_streak() {
    let mut session = begun_session(date(2024, 1, 10));
    session.on_task_completion_toggled(&first_task()).unwrap();

    session
        .begin_at(profile(), generated(), Timestamp::from_second(60).unwrap())
        .unwrap();

    assert_eq!(session.streak(), 0);
    assert_eq!(session.progress().current_xp, 0);
    assert_eq!(session.path().unwrap().modules[0].id, "mod-0-60000");
    assert!(session.streak_state().is_none());
}

#[test]
fn test_failing_generator_keeps_current_path() {
    let mut session = begun_session(date(2024, 1, 10));
    session.on_task_completion_toggled(&first_task()).unwrap();

    let failing = |_: &UserProfile| -> Result<GeneratedPath> {
        Err(QuestError::generation("provider unavailable"))
    };
    assert!(session.begin_with(profile(), &failing).is_err());

    assert_eq!(session.streak(), 1);
    assert!(session.task(&first_task()).unwrap().completed);
}

#[test]
fn test_unknown_ids_are_errors_without_side_effects() {
    let mut session = begun_session(date(2024, 1, 10));

    let err = session
        .on_task_completion_toggled(&TaskRef::new("mod-9-0", "task-0-0-0"))
        .unwrap_err();
    assert!(matches!(err, QuestError::ModuleNotFound { .. }));

    let err = session
        .on_task_completion_toggled(&TaskRef::new("mod-0-0", "task-9-9-0"))
        .unwrap_err();
    assert!(matches!(err, QuestError::TaskNotFound { .. }));

    assert_eq!(session.streak(), 0);
    let store = session.into_store();
    assert_eq!(store.get(STREAK_KEY).unwrap(), None);
}

#[test]
fn test_actions_without_path_fail() {
    let mut session = session_on(MemoryStore::new(), date(2024, 1, 10));

    assert!(matches!(
        session.on_task_completion_toggled(&first_task()),
        Err(QuestError::NoActivePath)
    ));
    assert!(matches!(
        session.on_priority_toggled(&first_task()),
        Err(QuestError::NoActivePath)
    ));
    assert!(matches!(
        session.module_progress("mod-0-0"),
        Err(QuestError::NoActivePath)
    ));
}

#[test]
fn test_malformed_persisted_values_are_ignored() {
    let store = MemoryStore::from_iter([
        (PATH_KEY, "{not json"),
        (PROFILE_KEY, "[]"),
        (STREAK_KEY, "three"),
        (LAST_COMPLETION_KEY, "2024-01-09T00:00:00"),
    ]);

    let mut session = session_on(store, date(2024, 1, 10));

    assert!(session.path().is_none());
    assert!(session.profile().is_none());
    assert_eq!(session.streak(), 0);
    assert!(session.streak_state().is_none());
}

#[test]
fn test_module_progress_through_session() {
    let mut session = begun_session(date(2024, 1, 10));
    session.on_task_completion_toggled(&first_task()).unwrap();
    session.on_task_completion_toggled(&second_task()).unwrap();

    let progress = session.module_progress("mod-0-0").unwrap();
    assert!(progress.is_complete);
    assert_eq!(progress.completed_task_count, 2);

    let progress = session.module_progress("mod-1-0").unwrap();
    assert!(!progress.is_complete);
}

#[test]
fn test_unknown_time_zone_name_is_rejected() {
    let result = SessionBuilder::new()
        .with_time_zone_name(Some("Mars/Olympus_Mons"))
        .build_with_store(MemoryStore::new());

    assert!(matches!(result, Err(QuestError::Configuration { .. })));
}

#[test]
fn test_failed_completion_write_leaves_session_unchanged() {
    let mut session = locked_session(date(2024, 1, 10));
    session.store.locked = true;

    let result = session.on_task_completion_toggled(&first_task());

    assert!(matches!(result, Err(QuestError::Configuration { .. })));
    assert!(!session.task(&first_task()).unwrap().completed);
    assert_eq!(session.streak(), 0);
    assert_eq!(session.progress().current_xp, 0);

    let store = session.into_store().inner;
    assert_eq!(store.get(STREAK_KEY).unwrap(), None);
    assert_eq!(store.get(LAST_COMPLETION_KEY).unwrap(), None);
    let raw = store.get(PATH_KEY).unwrap().unwrap();
    let stored: LearningPath = serde_json::from_str(&raw).unwrap();
    assert!(!stored.task("mod-0-0", "task-0-0-0").unwrap().completed);
}

#[test]
fn test_completion_succeeds_once_writes_recover() {
    let mut session = locked_session(date(2024, 1, 10));
    session.store.locked = true;
    assert!(session.on_task_completion_toggled(&first_task()).is_err());

    session.store.locked = false;
    let toggle = session.on_task_completion_toggled(&first_task()).unwrap();

    assert!(toggle.completed);
    assert_eq!(toggle.streak.unwrap().change, StreakChange::Started);
    assert_eq!(session.streak(), 1);
    assert_eq!(session.progress().current_xp, 50);
}

#[test]
fn test_failed_priority_write_leaves_flag_unchanged() {
    let mut session = locked_session(date(2024, 1, 10));
    session.store.locked = true;

    assert!(session.on_priority_toggled(&first_task()).is_err());
    assert!(!session.task(&first_task()).unwrap().priority);
}

#[test]
fn test_failed_begin_write_keeps_previous_path_and_streak() {
    let mut session = locked_session(date(2024, 1, 10));
    session.on_task_completion_toggled(&first_task()).unwrap();
    session.store.locked = true;

    let mut newcomer = profile();
    newcomer.name = "Grace".to_string();
    let issued_at = Timestamp::from_second(60).unwrap();
    let result = session.begin_at(newcomer, generated(), issued_at);

    assert!(result.is_err());
    assert_eq!(session.profile().unwrap().name, "Ada");
    assert_eq!(session.path().unwrap().modules[0].id, "mod-0-0");
    assert_eq!(session.streak(), 1);
    assert!(session.task(&first_task()).unwrap().completed);

    let store = session.into_store().inner;
    assert_eq!(store.get(STREAK_KEY).unwrap().as_deref(), Some("1"));
    let raw = store.get(PROFILE_KEY).unwrap().unwrap();
    let stored: UserProfile = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.name, "Ada");
}
