//! Configuration loading and management for the attendance statistics engine.
//!
//! This module loads the categorization windows, holiday settings, public
//! holiday dates and aggregation settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Night work starts at minute {}", config.config().work_rules().night_start);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AggregationSettings, EngineConfig, HolidayFile, HolidaySettings, RulesFile, WorkRules,
};
