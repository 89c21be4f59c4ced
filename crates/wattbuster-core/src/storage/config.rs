//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - The daily energy goal
//! - Analytics defaults (period, breakdown size)
//! - Visualization defaults (mode, battery capacity, fallback energy)
//!
//! Configuration is stored at `~/.config/wattbuster/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::stats::{EnergyAnalyzer, Period, DEFAULT_DAILY_GOAL, DEFAULT_TOP_ACTIVITIES};
use crate::visualize::{VisualizationMode, DEFAULT_BATTERY_CAPACITY};

/// Goal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConfig {
    #[serde(default = "default_daily_watts")]
    pub daily_watts: f64,
}

/// Analytics dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_top_activities")]
    pub top_activities: usize,
    #[serde(default)]
    pub default_period: Period,
}

/// Visualization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizeConfig {
    /// Shown when no daily energy has been recorded yet
    #[serde(default = "default_fallback_energy")]
    pub fallback_energy: f64,
    #[serde(default = "default_battery_capacity")]
    pub battery_capacity: f64,
    #[serde(default)]
    pub default_mode: VisualizationMode,
    /// Play the gauge animation without `--animate`
    #[serde(default)]
    pub animate: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/wattbuster/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub goal: GoalConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub visualize: VisualizeConfig,
}

// Default functions
fn default_daily_watts() -> f64 {
    DEFAULT_DAILY_GOAL
}
fn default_top_activities() -> usize {
    DEFAULT_TOP_ACTIVITIES
}
fn default_fallback_energy() -> f64 {
    850.0
}
fn default_battery_capacity() -> f64 {
    DEFAULT_BATTERY_CAPACITY
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            daily_watts: default_daily_watts(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_activities: default_top_activities(),
            default_period: Period::default(),
        }
    }
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            fallback_energy: default_fallback_energy(),
            battery_capacity: default_battery_capacity(),
            default_mode: VisualizationMode::default(),
            animate: false,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                ),
                serde_json::Value::Number(_) => {
                    if let Ok(n) = value.parse::<u64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<f64>() {
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    } else {
                        return Err(invalid(format!("cannot parse '{value}' as number")));
                    }
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot replace a whole section".into()));
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit
    /// the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Analyzer configured with this goal and breakdown size.
    pub fn analyzer(&self) -> EnergyAnalyzer {
        EnergyAnalyzer::with_settings(self.goal.daily_watts, self.analytics.top_activities)
    }
}
