mod config;
mod state;
mod store;

pub use config::{AnalyticsConfig, Config, GoalConfig, VisualizeConfig};
pub use state::{AppState, Theme, DAILY_DATA_KEY, DAILY_ENERGY_KEY, THEME_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns `~/.config/wattbuster[-dev]/` based on WATTBUSTER_ENV.
///
/// Set WATTBUSTER_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WATTBUSTER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("wattbuster-dev")
    } else {
        base_dir.join("wattbuster")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
