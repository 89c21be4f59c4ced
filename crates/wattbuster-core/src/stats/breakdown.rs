//! Per-activity energy breakdown.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::Activity;
use crate::record::DailyRecord;

/// Default number of activities shown in the breakdown.
pub const DEFAULT_TOP_ACTIVITIES: usize = 8;

/// One slice of the breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityShare {
    pub activity: Activity,
    pub display_name: String,
    /// Summed energy across the period
    pub energy: f64,
    /// Share of the displayed subset, rounded to a whole percent
    pub percentage: u32,
}

/// The activity with the largest summed energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopActivity {
    pub activity: Activity,
    pub energy: f64,
    /// Share of the period's total energy (0-100)
    pub share_of_total: f64,
}

/// Sum energy per activity across all records.
pub fn activity_totals(records: &[DailyRecord]) -> BTreeMap<Activity, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        for (activity, usage) in &record.activities {
            *totals.entry(*activity).or_insert(0.0) += usage.energy;
        }
    }
    totals
}

/// Activities sorted by summed energy, highest first.
///
/// Ties keep catalog order.
pub fn ranked(totals: &BTreeMap<Activity, f64>) -> Vec<(Activity, f64)> {
    let mut ranked: Vec<(Activity, f64)> = totals.iter().map(|(a, e)| (*a, *e)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Top `limit` activities with percentages relative to that subset.
///
/// Percentages are computed against the sum of the returned entries, not the
/// overall total, so the slices of a pie chart add up to roughly 100.
pub fn top_activities(records: &[DailyRecord], limit: usize) -> Vec<ActivityShare> {
    let top: Vec<(Activity, f64)> = ranked(&activity_totals(records))
        .into_iter()
        .take(limit)
        .collect();

    let subset_total: f64 = top.iter().map(|(_, e)| e).sum();

    top.into_iter()
        .map(|(activity, energy)| ActivityShare {
            activity,
            display_name: activity.display_name().to_string(),
            energy,
            percentage: if subset_total > 0.0 {
                (energy / subset_total * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect()
}

/// The single highest-energy activity, with its share of `total_energy`.
pub fn top_activity(records: &[DailyRecord], total_energy: f64) -> Option<TopActivity> {
    ranked(&activity_totals(records))
        .into_iter()
        .next()
        .map(|(activity, energy)| TopActivity {
            activity,
            energy,
            share_of_total: if total_energy > 0.0 {
                energy / total_energy * 100.0
            } else {
                0.0
            },
        })
}
