//! Gauges derived from a single daily energy total.

use serde::{Deserialize, Serialize};

/// Energy that fully drains the virtual battery.
pub const DEFAULT_BATTERY_CAPACITY: f64 = 1000.0;

/// Grams of CO₂ per kWh.
pub const CO2_GRAMS_PER_KWH: f64 = 500.0;
/// Grams of CO₂ a tree absorbs, for the "trees" equivalent.
pub const CO2_GRAMS_PER_TREE: f64 = 22.0;
/// Grams of CO₂ per mile driven, for the "miles" equivalent.
pub const CO2_GRAMS_PER_MILE: f64 = 404.0;
/// Above this the reduction tips are shown.
pub const CO2_TIPS_THRESHOLD: f64 = 200.0;

pub const REDUCTION_TIPS: [&str; 8] = [
    "Use dark mode to reduce screen energy",
    "Turn off video in calls when not needed",
    "Download music/podcasts for offline listening",
    "Close unused browser tabs and apps",
    "Use WiFi instead of mobile data",
    "Set time limits for social media apps",
    "Make shopping lists to reduce browsing time",
    "Use audio-only content when possible",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryStatus {
    Healthy,
    Draining,
    Low,
    Critical,
}

impl BatteryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BatteryStatus::Healthy => "Battery Healthy",
            BatteryStatus::Draining => "Battery Draining",
            BatteryStatus::Low => "Low Battery",
            BatteryStatus::Critical => "Critical Battery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryGauge {
    /// Remaining charge, 0-100
    pub level: f64,
    /// Charge consumed, 0-100
    pub drain: f64,
    pub status: BatteryStatus,
}

/// Drain a virtual battery of `capacity` watts by `total_energy`.
pub fn battery(total_energy: f64, capacity: f64) -> BatteryGauge {
    let drain = if capacity > 0.0 {
        (total_energy * 100.0 / capacity).clamp(0.0, 100.0)
    } else {
        100.0
    };
    let level = (100.0 - drain).max(0.0);

    let status = if level > 60.0 {
        BatteryStatus::Healthy
    } else if level > 30.0 {
        BatteryStatus::Draining
    } else if level > 10.0 {
        BatteryStatus::Low
    } else {
        BatteryStatus::Critical
    };

    BatteryGauge {
        level,
        drain,
        status,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Footprint {
    pub grams: f64,
    pub impact: ImpactLevel,
    /// Trees needed to absorb the same amount
    pub trees: u32,
    /// Equivalent car driving
    pub miles: u32,
    pub show_tips: bool,
}

/// Carbon footprint of `total_energy` watts.
pub fn co2(total_energy: f64) -> Co2Footprint {
    let grams = co2_grams(total_energy);
    co2_for_grams(grams)
}

pub fn co2_grams(total_energy: f64) -> f64 {
    total_energy * CO2_GRAMS_PER_KWH / 1000.0
}

/// Classify an amount of CO₂. Used both for the final figure and for
/// every frame of the counter animation.
pub fn co2_for_grams(grams: f64) -> Co2Footprint {
    let impact = if grams < 100.0 {
        ImpactLevel::Low
    } else if grams < 300.0 {
        ImpactLevel::Medium
    } else {
        ImpactLevel::High
    };

    Co2Footprint {
        grams,
        impact,
        trees: (grams / CO2_GRAMS_PER_TREE).round() as u32,
        miles: (grams / CO2_GRAMS_PER_MILE).round() as u32,
        show_tips: grams > CO2_TIPS_THRESHOLD,
    }
}

/// Fixed share of the day's energy attributed to each time slot.
const HOURLY_PROFILE: [(&str, f64, &str); 8] = [
    ("8AM", 0.08, "Email & News"),
    ("10AM", 0.12, "Video Calls"),
    ("12PM", 0.15, "Social Media"),
    ("2PM", 0.10, "Music Streaming"),
    ("4PM", 0.18, "Online Shopping"),
    ("6PM", 0.20, "Video Streaming"),
    ("8PM", 0.12, "Gaming"),
    ("10PM", 0.05, "Podcasts"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySlot {
    pub hour: String,
    pub energy: f64,
    pub activity: String,
}

/// Spread a daily total over the eight bar-graph slots.
pub fn hourly_distribution(total_energy: f64) -> Vec<HourlySlot> {
    HOURLY_PROFILE
        .iter()
        .map(|(hour, share, activity)| HourlySlot {
            hour: hour.to_string(),
            energy: total_energy * share,
            activity: activity.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    /// Up to 60% of the goal
    Efficient,
    /// Up to 80%
    Moderate,
    /// Up to the goal
    AtLimit,
    Over,
}

impl ProgressTier {
    pub fn message(&self) -> &'static str {
        match self {
            ProgressTier::Efficient => "Great job! You're being energy efficient!",
            ProgressTier::Moderate => "Good progress, but there's room for improvement!",
            ProgressTier::AtLimit => "You've reached your daily limit. Try to reduce tomorrow!",
            ProgressTier::Over => "High energy usage detected! Time to go green!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub total_energy: f64,
    pub daily_goal: f64,
    /// Share of the goal used, clamped to 100
    pub percent: f64,
    pub tier: ProgressTier,
}

/// Progress of one day's total against the goal.
pub fn daily_progress(total_energy: f64, daily_goal: f64) -> DailyProgress {
    let ratio = if daily_goal > 0.0 {
        total_energy * 100.0 / daily_goal
    } else {
        f64::INFINITY
    };

    let tier = if ratio <= 60.0 {
        ProgressTier::Efficient
    } else if ratio <= 80.0 {
        ProgressTier::Moderate
    } else if ratio <= 100.0 {
        ProgressTier::AtLimit
    } else {
        ProgressTier::Over
    };

    DailyProgress {
        total_energy,
        daily_goal,
        percent: ratio.min(100.0),
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_levels() {
        let g = battery(0.0, DEFAULT_BATTERY_CAPACITY);
        assert_eq!(g.level, 100.0);
        assert_eq!(g.status, BatteryStatus::Healthy);

        let g = battery(850.0, DEFAULT_BATTERY_CAPACITY);
        assert_eq!(g.level, 15.0);
        assert_eq!(g.drain, 85.0);
        assert_eq!(g.status, BatteryStatus::Low);

        let g = battery(5000.0, DEFAULT_BATTERY_CAPACITY);
        assert_eq!(g.level, 0.0);
        assert_eq!(g.status, BatteryStatus::Critical);

        assert_eq!(battery(400.0, 1000.0).status, BatteryStatus::Draining);
        assert_eq!(battery(700.0, 1000.0).status, BatteryStatus::Low);
    }

    #[test]
    fn co2_figures() {
        let fp = co2(850.0);
        assert_eq!(fp.grams, 425.0);
        assert_eq!(fp.impact, ImpactLevel::High);
        assert_eq!(fp.trees, 19);
        assert_eq!(fp.miles, 1);
        assert!(fp.show_tips);

        let fp = co2(150.0);
        assert_eq!(fp.grams, 75.0);
        assert_eq!(fp.impact, ImpactLevel::Low);
        assert!(!fp.show_tips);

        assert_eq!(co2(400.0).impact, ImpactLevel::Medium);
    }

    #[test]
    fn hourly_distribution_covers_whole_day() {
        let slots = hourly_distribution(1000.0);
        assert_eq!(slots.len(), 8);
        let sum: f64 = slots.iter().map(|s| s.energy).sum();
        assert!((sum - 1000.0).abs() < 1e-9);
        assert_eq!(slots[5].hour, "6PM");
        assert_eq!(slots[5].energy, 200.0);
    }

    #[test]
    fn progress_tiers() {
        assert_eq!(daily_progress(300.0, 500.0).tier, ProgressTier::Efficient);
        assert_eq!(daily_progress(400.0, 500.0).tier, ProgressTier::Moderate);
        assert_eq!(daily_progress(500.0, 500.0).tier, ProgressTier::AtLimit);

        let over = daily_progress(900.0, 500.0);
        assert_eq!(over.tier, ProgressTier::Over);
        assert_eq!(over.percent, 100.0);
    }
}
