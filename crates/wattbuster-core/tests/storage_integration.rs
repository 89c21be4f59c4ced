//! Integration tests for the file-backed store and typed app state.

use chrono::NaiveDate;
use wattbuster_core::storage::{DAILY_DATA_KEY, DAILY_ENERGY_KEY, THEME_KEY};
use wattbuster_core::{AppState, DailyRecordBuilder, FileStore, KeyValueStore, RawDay, RawEntry, Theme};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_tracked_day_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let record = DailyRecordBuilder::new().build(&RawDay::new(
        date("2024-02-10"),
        vec![RawEntry::new("netflix", 1.5), RawEntry::new("email", 0.5)],
    ));

    let mut state = AppState::new(FileStore::open_at(&path).unwrap());
    state.record_day(record.date, record.total_energy).unwrap();
    state.set_theme(Theme::Light).unwrap();

    let reopened = AppState::new(FileStore::open_at(&path).unwrap());
    assert_eq!(reopened.daily_energy(), Some(325));
    assert_eq!(reopened.daily_log().get(&date("2024-02-10")), Some(&325.0));
    assert_eq!(reopened.theme(), Some(Theme::Light));
}

#[test]
fn test_stored_format_is_plain_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut state = AppState::new(FileStore::open_at(&path).unwrap());
    state.record_day(date("2024-02-10"), 412.6).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[DAILY_ENERGY_KEY], "413");

    let log: serde_json::Value =
        serde_json::from_str(raw[DAILY_DATA_KEY].as_str().unwrap()).unwrap();
    assert_eq!(log["2024-02-10"], 412.6);
}

#[test]
fn test_hand_edited_values_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut store = FileStore::open_at(&path).unwrap();
    store.set(DAILY_ENERGY_KEY, "  640 ").unwrap();
    store.set(DAILY_DATA_KEY, "[]").unwrap();
    store.set(THEME_KEY, "dark").unwrap();

    let state = AppState::new(FileStore::open_at(&path).unwrap());
    assert_eq!(state.daily_energy(), Some(640));
    assert!(state.daily_log().is_empty());
    assert_eq!(state.theme(), Some(Theme::Dark));
}

#[test]
fn test_streak_from_persisted_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut state = AppState::new(FileStore::open_at(&path).unwrap());
    for (day, watts) in [("2024-01-01", 300.0), ("2024-01-02", 450.0), ("2024-01-03", 500.0)] {
        state.record_day(date(day), watts).unwrap();
    }
    assert_eq!(state.streak(500.0), 3);

    state.record_day(date("2024-01-04"), 501.0).unwrap();
    let state = AppState::new(FileStore::open_at(&path).unwrap());
    assert_eq!(state.streak(500.0), 0);
}

#[test]
fn test_remove_clears_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut store = FileStore::open_at(&path).unwrap();
    store.set(THEME_KEY, "light").unwrap();
    store.remove(THEME_KEY).unwrap();
    store.remove("never-set").unwrap();

    assert_eq!(FileStore::open_at(&path).unwrap().get(THEME_KEY), None);
}

#[test]
fn test_malformed_store_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut state = AppState::new(FileStore::open_at(&path).unwrap());
    assert_eq!(state.daily_energy(), None);
    assert_eq!(state.theme(), None);

    state.record_day(date("2024-02-10"), 300.0).unwrap();
    let reopened = AppState::new(FileStore::open_at(&path).unwrap());
    assert_eq!(reopened.daily_energy(), Some(300));
}
