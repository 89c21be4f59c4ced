//! Threshold rules that turn period metrics into advice.

use serde::{Deserialize, Serialize};

use super::breakdown::TopActivity;
use super::goal::GoalAdherence;

/// Shown when no rule fires.
pub const PERFECT_MANAGEMENT_TITLE: &str = "Perfect Energy Management!";
pub const PERFECT_MANAGEMENT_MESSAGE: &str =
    "You're doing great with your digital energy usage. Keep it up!";

/// Average above `goal * HIGH_USAGE_FACTOR` raises an alert.
const HIGH_USAGE_FACTOR: f64 = 1.5;
/// Top activity share (percent of total) considered a concentration.
const CONCENTRATION_SHARE: f64 = 40.0;
const LOW_ADHERENCE: f64 = 30.0;
const HIGH_ADHERENCE: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Metrics the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    pub daily_average: f64,
    pub goal: &'a GoalAdherence,
    pub top_activity: Option<&'a TopActivity>,
}

/// Evaluate every rule; all matching recommendations are returned in rule
/// order. An empty list means nothing needs attention.
pub fn recommend(input: RecommendationInput<'_>) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let daily_goal = input.goal.daily_goal;

    if input.daily_average > daily_goal * HIGH_USAGE_FACTOR {
        recommendations.push(Recommendation {
            title: "High Energy Usage Alert".into(),
            description: format!(
                "Your daily average ({}W) is 50% above the recommended goal. Consider reducing high-energy activities.",
                input.daily_average.round()
            ),
            severity: Severity::High,
        });
    }

    if let Some(top) = input.top_activity {
        if top.share_of_total > CONCENTRATION_SHARE {
            recommendations.push(Recommendation {
                title: "Activity Concentration".into(),
                description: format!(
                    "{} accounts for {}% of your energy usage. Try diversifying your digital activities.",
                    top.activity.display_name(),
                    top.share_of_total.round()
                ),
                severity: Severity::Medium,
            });
        }
    }

    if let Some(pct) = input.goal.goal_percentage {
        if pct < LOW_ADHERENCE {
            recommendations.push(Recommendation {
                title: "Goal Achievement".into(),
                description: format!(
                    "You've only met your daily goal {}% of the time. Try setting smaller, achievable targets.",
                    pct.round()
                ),
                severity: Severity::Medium,
            });
        }

        if pct > HIGH_ADHERENCE {
            recommendations.push(Recommendation {
                title: "Great Progress!".into(),
                description: format!(
                    "You've met your daily goal {}% of the time. Consider setting a more ambitious target!",
                    pct.round()
                ),
                severity: Severity::Positive,
            });
        }
    }

    recommendations
}
