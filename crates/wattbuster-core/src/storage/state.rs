//! Typed access to the well-known store keys.
//!
//! All reads are best-effort: a missing key means "no data yet" and a
//! malformed value is logged and treated the same way.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::store::KeyValueStore;
use crate::error::{Result, ValidationError};
use crate::stats::current_streak;

/// Latest daily total, as an integer wattage string.
pub const DAILY_ENERGY_KEY: &str = "wattbuster-daily-energy";
/// JSON object mapping ISO dates to daily totals.
pub const DAILY_DATA_KEY: &str = "wattbuster-daily-data";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ValidationError::InvalidValue {
                field: "theme".into(),
                message: format!("expected 'dark' or 'light', got '{other}'"),
            }),
        }
    }
}

/// Application state stored in a [`KeyValueStore`].
#[derive(Debug)]
pub struct AppState<S> {
    store: S,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// The last recorded daily total.
    pub fn daily_energy(&self) -> Option<u64> {
        let raw = self.store.get(DAILY_ENERGY_KEY)?;
        match raw.trim().parse::<u64>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(key = DAILY_ENERGY_KEY, value = %raw, "ignoring malformed stored value");
                None
            }
        }
    }

    pub fn set_daily_energy(&mut self, watts: f64) -> Result<()> {
        let value = watts.max(0.0).round() as u64;
        self.store.set(DAILY_ENERGY_KEY, &value.to_string())
    }

    /// Daily totals by date. Empty when nothing is stored.
    pub fn daily_log(&self) -> BTreeMap<NaiveDate, f64> {
        let Some(raw) = self.store.get(DAILY_DATA_KEY) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(log) => log,
            Err(e) => {
                warn!(key = DAILY_DATA_KEY, error = %e, "ignoring malformed daily log");
                BTreeMap::new()
            }
        }
    }

    /// Record `watts` for `date`, replacing an earlier value for that date,
    /// and make it the current daily energy.
    pub fn record_day(&mut self, date: NaiveDate, watts: f64) -> Result<()> {
        let mut log = self.daily_log();
        log.insert(date, watts);
        self.store.set(DAILY_DATA_KEY, &serde_json::to_string(&log)?)?;
        self.set_daily_energy(watts)
    }

    /// Consecutive most recent logged days at or under `goal`.
    pub fn streak(&self, goal: f64) -> u32 {
        current_streak(self.daily_log().into_values(), goal)
    }

    pub fn theme(&self) -> Option<Theme> {
        let raw = self.store.get(THEME_KEY)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(_) => {
                warn!(key = THEME_KEY, value = %raw, "ignoring malformed theme");
                None
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn absent_keys_mean_no_data() {
        let state = AppState::new(MemoryStore::new());
        assert_eq!(state.daily_energy(), None);
        assert!(state.daily_log().is_empty());
        assert_eq!(state.theme(), None);
        assert_eq!(state.streak(500.0), 0);
    }

    #[test]
    fn malformed_values_are_ignored() {
        let mut store = MemoryStore::new();
        store.set(DAILY_ENERGY_KEY, "lots").unwrap();
        store.set(DAILY_DATA_KEY, "{not json").unwrap();
        store.set(THEME_KEY, "neon").unwrap();

        let state = AppState::new(store);
        assert_eq!(state.daily_energy(), None);
        assert!(state.daily_log().is_empty());
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn record_day_updates_log_and_energy() {
        let mut state = AppState::new(MemoryStore::new());
        state.record_day(date("2024-01-01"), 420.4).unwrap();
        state.record_day(date("2024-01-02"), 300.0).unwrap();
        state.record_day(date("2024-01-01"), 450.0).unwrap();

        let log = state.daily_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[&date("2024-01-01")], 450.0);
        assert_eq!(state.daily_energy(), Some(450));
        assert_eq!(
            state.store().get(DAILY_ENERGY_KEY).as_deref(),
            Some("450")
        );
    }

    #[test]
    fn streak_counts_back_from_latest_date() {
        let mut state = AppState::new(MemoryStore::new());
        state.record_day(date("2024-01-04"), 200.0).unwrap();
        state.record_day(date("2024-01-01"), 400.0).unwrap();
        state.record_day(date("2024-01-03"), 300.0).unwrap();
        state.record_day(date("2024-01-02"), 600.0).unwrap();

        assert_eq!(state.streak(500.0), 2);
    }

    #[test]
    fn theme_toggle() {
        let mut state = AppState::new(MemoryStore::new());
        let next = state.theme().unwrap_or_default().toggled();
        state.set_theme(next).unwrap();
        assert_eq!(state.theme(), Some(Theme::Light));
        assert_eq!(state.store().get(THEME_KEY).as_deref(), Some("light"));
    }
}
