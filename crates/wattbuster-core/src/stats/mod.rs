//! Statistics module for WattBuster
//!
//! This module provides the analytics dashboard computations over a
//! sequence of daily records: totals and averages, per-activity breakdown,
//! weekday grouping, recent trend, goal adherence and recommendations.

mod aggregate;
mod breakdown;
mod goal;
mod recommendations;
mod trend;
mod weekday;

pub use aggregate::{AggregationResult, DaySummary, EnergyAnalyzer, Period};

pub use breakdown::{
    activity_totals, top_activities, top_activity, ActivityShare, TopActivity,
    DEFAULT_TOP_ACTIVITIES,
};

pub use goal::{current_streak, goal_adherence, GoalAdherence, BADGE_STREAK, DEFAULT_DAILY_GOAL};

pub use recommendations::{
    recommend, Recommendation, RecommendationInput, Severity, PERFECT_MANAGEMENT_MESSAGE,
    PERFECT_MANAGEMENT_TITLE,
};

pub use trend::{recent_trend, trend_series, Trend, TrendPoint, TREND_WINDOW};

pub use weekday::{
    short_name, weekday_averages, weekly_pattern, PatternKind, WeekdayAverage, WeeklyPattern, WEEK,
};
