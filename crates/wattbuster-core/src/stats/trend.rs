//! Recent-vs-prior trend and the per-day trend series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::Activity;
use crate::record::DailyRecord;

/// Days in each half of the trend comparison.
pub const TREND_WINDOW: usize = 3;

/// Change between the mean of the last three days and the three before.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Fewer than six days, or the prior mean is zero
    NotAvailable,
    /// Percentage change, positive means usage went up
    Change(f64),
}

impl Trend {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Trend::NotAvailable => None,
            Trend::Change(p) => Some(*p),
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::NotAvailable => f.write_str("N/A"),
            Trend::Change(p) => {
                // Halves round toward positive infinity; the sign follows
                // the unrounded change.
                let rounded = (p + 0.5).floor() + 0.0;
                let sign = if *p > 0.0 { "+" } else { "" };
                write!(f, "{sign}{rounded}%")
            }
        }
    }
}

/// Compare the last three records against the three preceding them.
pub fn recent_trend(records: &[DailyRecord]) -> Trend {
    if records.len() < TREND_WINDOW * 2 {
        return Trend::NotAvailable;
    }

    let mean = |slice: &[DailyRecord]| -> f64 {
        slice.iter().map(|r| r.total_energy).sum::<f64>() / slice.len() as f64
    };

    let n = records.len();
    let recent = mean(&records[n - TREND_WINDOW..]);
    let prior = mean(&records[n - TREND_WINDOW * 2..n - TREND_WINDOW]);

    if prior == 0.0 {
        return Trend::NotAvailable;
    }

    Trend::Change((recent - prior) / prior * 100.0)
}

/// One point of the energy-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub energy: f64,
}

/// Daily energy for all activities, or for one when `activity` is set.
pub fn trend_series(records: &[DailyRecord], activity: Option<Activity>) -> Vec<TrendPoint> {
    records
        .iter()
        .map(|r| TrendPoint {
            date: r.date,
            energy: match activity {
                Some(a) => r.energy_for(a),
                None => r.total_energy,
            },
        })
        .collect()
}
