//! Visualization gauges.
//!
//! Pure derivations from a single daily energy total (battery drain, CO₂
//! footprint, hourly bar graph, daily progress) and the frame schedules
//! used to animate them.

pub mod animation;
mod gauges;

pub use animation::{Frame, Playback};
pub use gauges::{
    battery, co2, co2_for_grams, co2_grams, daily_progress, hourly_distribution, BatteryGauge,
    BatteryStatus, Co2Footprint, DailyProgress, HourlySlot, ImpactLevel, ProgressTier,
    DEFAULT_BATTERY_CAPACITY, REDUCTION_TIPS,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Which gauge the visualize screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationMode {
    #[default]
    Battery,
    Co2,
    Graph,
}

impl VisualizationMode {
    pub fn title(&self) -> &'static str {
        match self {
            VisualizationMode::Battery => "Battery Drain",
            VisualizationMode::Co2 => "CO₂ Counter",
            VisualizationMode::Graph => "Energy Graph",
        }
    }
}

impl fmt::Display for VisualizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizationMode::Battery => f.write_str("battery"),
            VisualizationMode::Co2 => f.write_str("co2"),
            VisualizationMode::Graph => f.write_str("graph"),
        }
    }
}

impl FromStr for VisualizationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "battery" => Ok(VisualizationMode::Battery),
            "co2" => Ok(VisualizationMode::Co2),
            "graph" => Ok(VisualizationMode::Graph),
            other => Err(ValidationError::InvalidValue {
                field: "mode".into(),
                message: format!("expected battery, co2 or graph, got '{other}'"),
            }),
        }
    }
}
