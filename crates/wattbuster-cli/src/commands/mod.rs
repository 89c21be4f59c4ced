pub mod analyze;
pub mod catalog;
pub mod config;
pub mod theme;
pub mod track;
pub mod visualize;
