//! Aggregation over a window of daily records.
//!
//! [`EnergyAnalyzer::aggregate`] is the single entry point the dashboard
//! uses: it windows the sequence and derives every metric in one pass over
//! the helpers in the sibling modules. Nothing here is cached; inputs are
//! small enough to recompute on every call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::breakdown::{self, ActivityShare, TopActivity, DEFAULT_TOP_ACTIVITIES};
use super::goal::{self, GoalAdherence, DEFAULT_DAILY_GOAL};
use super::recommendations::{self, Recommendation, RecommendationInput};
use super::trend::{self, Trend};
use super::weekday::{self, WeekdayAverage, WeeklyPattern};
use crate::error::ValidationError;
use crate::record::{DailyRecord, RecordSequence};

/// Dashboard period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "all")]
    All,
}

impl Period {
    pub fn window_days(&self) -> Option<usize> {
        match self {
            Period::Last7Days => Some(7),
            Period::All => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Last7Days => f.write_str("7d"),
            Period::All => f.write_str("all"),
        }
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7d" | "week" => Ok(Period::Last7Days),
            "all" => Ok(Period::All),
            other => Err(ValidationError::InvalidValue {
                field: "period".into(),
                message: format!("expected '7d' or 'all', got '{other}'"),
            }),
        }
    }
}

/// A day picked out by the efficiency comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_energy: f64,
}

/// Every metric the analytics dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub days_tracked: usize,
    pub total_energy: f64,
    /// 0 for an empty period
    pub daily_average: f64,
    /// Top activities with percentages of the displayed subset
    pub breakdown: Vec<ActivityShare>,
    pub top_activity: Option<TopActivity>,
    /// Seven entries, Monday first
    pub weekdays: Vec<WeekdayAverage>,
    pub weekly_pattern: WeeklyPattern,
    pub trend: Trend,
    pub goal: GoalAdherence,
    /// Lowest daily total; earliest date on ties
    pub most_efficient_day: Option<DaySummary>,
    /// Highest daily total; latest date on ties
    pub least_efficient_day: Option<DaySummary>,
    pub recommendations: Vec<Recommendation>,
}

/// Computes [`AggregationResult`]s.
#[derive(Debug, Clone)]
pub struct EnergyAnalyzer {
    /// Daily goal in watts used for adherence, streaks and advice
    pub daily_goal: f64,
    /// Size of the activity breakdown
    pub top_activities: usize,
}

impl Default for EnergyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl EnergyAnalyzer {
    /// Create an analyzer with the default 500 W goal and top-8 breakdown.
    pub fn new() -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL,
            top_activities: DEFAULT_TOP_ACTIVITIES,
        }
    }

    /// Create an analyzer with custom settings.
    pub fn with_settings(daily_goal: f64, top_activities: usize) -> Self {
        Self {
            daily_goal,
            top_activities,
        }
    }

    /// Aggregate the last `window_days` records, or all of them.
    pub fn aggregate(&self, sequence: &RecordSequence, window_days: Option<usize>) -> AggregationResult {
        self.aggregate_records(sequence.window(window_days))
    }

    pub fn aggregate_period(&self, sequence: &RecordSequence, period: Period) -> AggregationResult {
        self.aggregate(sequence, period.window_days())
    }

    /// Aggregate an already windowed, date-ordered slice.
    pub fn aggregate_records(&self, records: &[DailyRecord]) -> AggregationResult {
        let days_tracked = records.len();
        let total_energy: f64 = records.iter().map(|r| r.total_energy).sum();
        let daily_average = if days_tracked > 0 {
            total_energy / days_tracked as f64
        } else {
            0.0
        };

        let breakdown = breakdown::top_activities(records, self.top_activities);
        let top_activity = breakdown::top_activity(records, total_energy);

        let weekdays = weekday::weekday_averages(records);
        let weekly_pattern = weekday::weekly_pattern(&weekdays);

        let trend = trend::recent_trend(records);
        let goal = goal::goal_adherence(records, self.daily_goal);

        let most_efficient_day = records
            .iter()
            .min_by(|a, b| a.total_energy.total_cmp(&b.total_energy))
            .map(summary);
        let least_efficient_day = records
            .iter()
            .max_by(|a, b| a.total_energy.total_cmp(&b.total_energy))
            .map(summary);

        let recommendations = recommendations::recommend(RecommendationInput {
            daily_average,
            goal: &goal,
            top_activity: top_activity.as_ref(),
        });

        debug!(
            days = days_tracked,
            total_energy,
            recommendations = recommendations.len(),
            "aggregated energy records"
        );

        AggregationResult {
            days_tracked,
            total_energy,
            daily_average,
            breakdown,
            top_activity,
            weekdays,
            weekly_pattern,
            trend,
            goal,
            most_efficient_day,
            least_efficient_day,
            recommendations,
        }
    }
}

fn summary(record: &DailyRecord) -> DaySummary {
    DaySummary {
        date: record.date,
        total_energy: record.total_energy,
    }
}
