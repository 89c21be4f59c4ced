//! Daily goal adherence and the current streak.

use serde::{Deserialize, Serialize};

use crate::record::DailyRecord;

/// Daily energy goal in watts.
pub const DEFAULT_DAILY_GOAL: f64 = 500.0;

/// Streak length that earns the "energy saver" badge.
pub const BADGE_STREAK: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdherence {
    pub daily_goal: f64,
    /// Days with a total at or under the goal
    pub under_goal_days: u32,
    /// `under_goal_days / days * 100`, `None` for an empty period
    pub goal_percentage: Option<f64>,
    /// Consecutive most recent days at or under the goal
    pub current_streak: u32,
}

/// Count days at or under `goal` and the streak ending at the last record.
pub fn goal_adherence(records: &[DailyRecord], goal: f64) -> GoalAdherence {
    let under_goal_days = records.iter().filter(|r| r.total_energy <= goal).count() as u32;
    let goal_percentage = if records.is_empty() {
        None
    } else {
        Some(under_goal_days as f64 / records.len() as f64 * 100.0)
    };

    GoalAdherence {
        daily_goal: goal,
        under_goal_days,
        goal_percentage,
        current_streak: current_streak(records.iter().map(|r| r.total_energy), goal),
    }
}

/// Length of the run of totals at or under `goal`, counted backward from
/// the last value. Stops at the first value over the goal.
///
/// `totals` must be in date order, oldest first.
pub fn current_streak<I>(totals: I, goal: f64) -> u32
where
    I: DoubleEndedIterator<Item = f64>,
{
    totals.rev().take_while(|total| *total <= goal).count() as u32
}
