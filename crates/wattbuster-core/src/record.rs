//! Daily records and the builder that produces them.
//!
//! A [`DailyRecord`] is the normalized form of one day of user input:
//! every entry carries its computed energy and the day carries the sum.
//! Records are immutable once built; a new submission replaces the whole
//! [`RecordSequence`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::catalog::Activity;
use crate::error::{Result, ValidationError};

/// One `{activity, hours}` pair as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Activity id; unknown ids are tolerated
    pub activity: String,
    pub hours: f64,
}

impl RawEntry {
    pub fn new(activity: impl Into<String>, hours: f64) -> Self {
        Self {
            activity: activity.into(),
            hours,
        }
    }

    /// Check the entry against the catalog and the (0, 24] hours range.
    ///
    /// The builder never calls this; it is for callers that want to reject
    /// bad input before building.
    pub fn validate(&self) -> Result<Activity, ValidationError> {
        let activity: Activity = self.activity.parse()?;
        if !(self.hours > 0.0 && self.hours <= 24.0) {
            return Err(ValidationError::HoursOutOfRange {
                activity: self.activity.clone(),
                hours: self.hours,
            });
        }
        Ok(activity)
    }
}

impl std::str::FromStr for RawEntry {
    type Err = ValidationError;

    /// Parse `activity=hours`, e.g. `youtube=1.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (activity, hours) = s.split_once('=').ok_or_else(|| ValidationError::InvalidValue {
            field: "entry".into(),
            message: format!("expected activity=hours, got '{s}'"),
        })?;
        let hours = hours
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidValue {
                field: activity.trim().to_string(),
                message: format!("cannot parse '{}' as hours", hours.trim()),
            })?;
        Ok(RawEntry::new(activity.trim(), hours))
    }
}

/// One day of user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<RawEntry>,
}

impl RawDay {
    pub fn new(date: NaiveDate, entries: Vec<RawEntry>) -> Self {
        Self { date, entries }
    }
}

/// Energy attributed to one activity on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityEnergy {
    pub hours: f64,
    /// `watts_per_hour * hours`
    pub energy: f64,
}

/// Normalized record for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub activities: BTreeMap<Activity, ActivityEnergy>,
    /// Sum of `activities[*].energy`
    pub total_energy: f64,
}

impl DailyRecord {
    /// Energy for one activity on this day, 0 when absent.
    pub fn energy_for(&self, activity: Activity) -> f64 {
        self.activities.get(&activity).map_or(0.0, |a| a.energy)
    }

    pub fn total_hours(&self) -> f64 {
        self.activities.values().map(|a| a.hours).sum()
    }
}

/// Builds [`DailyRecord`]s from raw input using the activity catalog.
#[derive(Debug, Clone, Default)]
pub struct DailyRecordBuilder;

impl DailyRecordBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build one record. Entries with unknown activity ids are skipped.
    ///
    /// If the same activity appears more than once, its hours are summed
    /// into a single entry.
    pub fn build(&self, raw: &RawDay) -> DailyRecord {
        let mut hours_by_activity: BTreeMap<Activity, f64> = BTreeMap::new();

        for entry in &raw.entries {
            match Activity::from_id(&entry.activity) {
                Some(activity) => {
                    *hours_by_activity.entry(activity).or_insert(0.0) += entry.hours;
                }
                None => {
                    debug!(date = %raw.date, activity = %entry.activity, "skipping unknown activity");
                }
            }
        }

        let activities: BTreeMap<Activity, ActivityEnergy> = hours_by_activity
            .into_iter()
            .map(|(activity, hours)| {
                let energy = activity.watts_per_hour() * hours;
                (activity, ActivityEnergy { hours, energy })
            })
            .collect();

        let total_energy = activities.values().map(|a| a.energy).sum();

        DailyRecord {
            date: raw.date,
            activities,
            total_energy,
        }
    }

    /// Build every day and normalize them into a sequence.
    pub fn build_all(&self, days: &[RawDay]) -> RecordSequence {
        RecordSequence::from_records(days.iter().map(|d| self.build(d)).collect())
    }
}

/// Date-ordered sequence of daily records.
///
/// Construction sorts by date and keeps a single record per date; when
/// several records share a date, the one submitted last wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSequence {
    records: Vec<DailyRecord>,
}

impl RecordSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(mut records: Vec<DailyRecord>) -> Self {
        // Stable sort keeps submission order among equal dates.
        records.sort_by_key(|r| r.date);

        let mut normalized: Vec<DailyRecord> = Vec::with_capacity(records.len());
        for record in records {
            match normalized.last_mut() {
                Some(last) if last.date == record.date => {
                    warn!(date = %record.date, "duplicate date in submission, keeping the later entry");
                    *last = record;
                }
                _ => normalized.push(record),
            }
        }

        Self {
            records: normalized,
        }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last `days` records, or all of them when `days` is `None`.
    pub fn window(&self, days: Option<usize>) -> &[DailyRecord] {
        match days {
            Some(n) => &self.records[self.records.len().saturating_sub(n)..],
            None => &self.records,
        }
    }
}

/// Read raw days from a JSON file shaped as `[{"date": .., "entries": [..]}]`.
pub fn load_raw_days(path: &Path) -> Result<Vec<RawDay>> {
    let content = std::fs::read_to_string(path)?;
    let days: Vec<RawDay> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), days = days.len(), "loaded raw days");
    Ok(days)
}

/// Reject loaded days with hours outside (0, 24].
///
/// Unknown activity ids are left alone; the builder skips them.
pub fn validate_hours(days: &[RawDay]) -> Result<(), ValidationError> {
    for day in days {
        for entry in &day.entries {
            if !(entry.hours > 0.0 && entry.hours <= 24.0) {
                return Err(ValidationError::MalformedData(format!(
                    "{}: '{}' has {} hours, expected (0, 24]",
                    day.date, entry.activity, entry.hours
                )));
            }
        }
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn build_computes_energy_per_entry() {
        let raw = RawDay::new(
            date("2024-01-06"),
            vec![RawEntry::new("youtube", 2.0), RawEntry::new("email", 1.5)],
        );
        let record = DailyRecordBuilder::new().build(&raw);

        assert_eq!(record.energy_for(Activity::Youtube), 300.0);
        assert_eq!(record.energy_for(Activity::Email), 75.0);
        assert_eq!(record.total_energy, 375.0);
        assert_eq!(record.total_hours(), 3.5);
    }

    #[test]
    fn unknown_activity_contributes_nothing() {
        let raw = RawDay::new(
            date("2024-01-06"),
            vec![RawEntry::new("fax", 3.0), RawEntry::new("gaming", 1.0)],
        );
        let record = DailyRecordBuilder::new().build(&raw);

        assert_eq!(record.activities.len(), 1);
        assert_eq!(record.total_energy, 300.0);
    }

    #[test]
    fn repeated_activity_is_merged() {
        let raw = RawDay::new(
            date("2024-01-06"),
            vec![RawEntry::new("music", 1.0), RawEntry::new("music", 2.0)],
        );
        let record = DailyRecordBuilder::new().build(&raw);

        let music = record.activities[&Activity::Music];
        assert_eq!(music.hours, 3.0);
        assert_eq!(music.energy, 240.0);
        assert_eq!(record.total_energy, 240.0);
    }

    #[test]
    fn empty_day_has_zero_total() {
        let record = DailyRecordBuilder::new().build(&RawDay::new(date("2024-01-06"), vec![]));
        assert!(record.activities.is_empty());
        assert_eq!(record.total_energy, 0.0);
    }

    #[test]
    fn sequence_sorts_and_dedupes() {
        let builder = DailyRecordBuilder::new();
        let days = vec![
            RawDay::new(date("2024-01-03"), vec![RawEntry::new("email", 1.0)]),
            RawDay::new(date("2024-01-01"), vec![RawEntry::new("email", 2.0)]),
            RawDay::new(date("2024-01-03"), vec![RawEntry::new("email", 4.0)]),
        ];
        let seq = builder.build_all(&days);

        assert_eq!(seq.len(), 2);
        assert_eq!(seq.records()[0].date, date("2024-01-01"));
        assert_eq!(seq.records()[1].date, date("2024-01-03"));
        // later submission wins
        assert_eq!(seq.records()[1].total_energy, 200.0);
    }

    #[test]
    fn window_takes_last_n() {
        let builder = DailyRecordBuilder::new();
        let days: Vec<_> = (1..=10)
            .map(|d| RawDay::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap(), vec![]))
            .collect();
        let seq = builder.build_all(&days);

        let last7 = seq.window(Some(7));
        assert_eq!(last7.len(), 7);
        assert_eq!(last7[0].date, date("2024-01-04"));
        assert_eq!(seq.window(Some(30)).len(), 10);
        assert_eq!(seq.window(None).len(), 10);
        assert!(RecordSequence::new().window(Some(7)).is_empty());
    }

    #[test]
    fn raw_entry_parses_pairs() {
        let entry: RawEntry = "youtube=1.5".parse().unwrap();
        assert_eq!(entry, RawEntry::new("youtube", 1.5));
        assert!("youtube".parse::<RawEntry>().is_err());
        assert!("youtube=lots".parse::<RawEntry>().is_err());
    }

    #[test]
    fn raw_entry_validation() {
        assert_eq!(RawEntry::new("gaming", 2.0).validate().unwrap(), Activity::Gaming);
        assert!(RawEntry::new("gaming", 0.0).validate().is_err());
        assert!(RawEntry::new("gaming", 24.5).validate().is_err());
        assert!(RawEntry::new("gaming", 24.0).validate().is_ok());
        assert!(RawEntry::new("fax", 1.0).validate().is_err());
    }

    #[test]
    fn loaded_hours_must_be_in_range() {
        let ok = vec![RawDay::new(
            date("2024-01-06"),
            vec![RawEntry::new("gaming", 24.0), RawEntry::new("fax", 1.0)],
        )];
        assert!(validate_hours(&ok).is_ok());

        for hours in [-3.0, 0.0, 30.0, f64::NAN] {
            let bad = vec![RawDay::new(date("2024-01-06"), vec![RawEntry::new("email", hours)])];
            let err = validate_hours(&bad).unwrap_err();
            assert!(err.to_string().contains("malformed"));
        }
    }

    #[test]
    fn raw_days_deserialize_from_json() {
        let json = r#"[{"date": "2024-01-06", "entries": [{"activity": "youtube", "hours": 2}]}]"#;
        let days: Vec<RawDay> = serde_json::from_str(json).unwrap();
        assert_eq!(days[0].date, date("2024-01-06"));
        assert_eq!(days[0].entries[0].hours, 2.0);
    }

    #[test]
    fn record_serializes_activity_keys_as_ids() {
        let raw = RawDay::new(date("2024-01-06"), vec![RawEntry::new("videocalls", 1.0)]);
        let record = DailyRecordBuilder::new().build(&raw);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["activities"]["videocalls"]["energy"], 180.0);
        assert_eq!(json["date"], "2024-01-06");
    }
}
