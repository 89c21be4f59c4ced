//! # WattBuster Core Library
//!
//! This library provides the core logic for WattBuster, a tracker for the
//! electricity consumed by everyday digital activities. The `wattbuster-cli`
//! binary is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Catalog**: The fixed set of trackable activities and their wattages
//! - **Records**: Turning raw per-day hour entries into energy records
//! - **Stats**: Aggregation over a sequence of daily records
//! - **Visualize**: Battery, CO₂, graph and progress gauges for a daily total
//! - **Storage**: An injectable key-value store plus TOML configuration
//!
//! ## Key Components
//!
//! - [`DailyRecordBuilder`]: Raw entries to [`DailyRecord`]s
//! - [`EnergyAnalyzer`]: Dashboard aggregation over a [`RecordSequence`]
//! - [`AppState`]: Typed access to the persisted keys of a [`KeyValueStore`]
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod error;
pub mod record;
pub mod stats;
pub mod storage;
pub mod visualize;

pub use catalog::{Activity, ActivityDefinition, Category};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use record::{DailyRecord, DailyRecordBuilder, RawDay, RawEntry, RecordSequence};
pub use stats::{AggregationResult, EnergyAnalyzer, Period};
pub use storage::{AppState, Config, FileStore, KeyValueStore, MemoryStore, Theme};
pub use visualize::VisualizationMode;
