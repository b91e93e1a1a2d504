//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use chrono::Datelike;

use crate::error::{EngineError, EngineResult};
use crate::models::PublicHoliday;

use super::types::{EngineConfig, HolidayFile, RulesFile};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rules.yaml          # Work windows, holiday settings, aggregation settings
/// └── holidays/           # Optional
///     └── 2026.yaml       # Public holidays for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Standard day starts at minute {}", loader.config().work_rules().standard_start);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `rules.yaml` is missing, if any file contains
    /// invalid YAML, if the work rules are inconsistent, or if a holiday file
    /// lists a date outside its year.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules_path = path.join("rules.yaml");
        let rules = Self::load_yaml::<RulesFile>(&rules_path)?;
        rules
            .work_rules
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: rules_path.display().to_string(),
                message,
            })?;

        let holidays_dir = path.join("holidays");
        let public_holidays = Self::load_holidays(&holidays_dir)?;

        let config = EngineConfig::new(
            rules.work_rules,
            rules.holidays,
            rules.aggregation,
            public_holidays,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory, if present.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<PublicHoliday>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let holidays_dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<HolidayFile>(&path)?;
                if let Some(stray) = file.holidays.iter().find(|h| h.date.year() != file.year) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holiday '{}' on {} is outside year {}",
                            stray.name, stray.date, file.year
                        ),
                    });
                }
                holidays.extend(file.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let rules = loader.config().work_rules();
        assert_eq!(rules.standard_start, 540);
        assert_eq!(rules.standard_end, 1080);
        assert!(loader.config().holiday_settings().weekends_are_holidays);
        assert!(
            loader
                .config()
                .holiday_dates()
                .any(|d| d == NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rules.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_holidays_directory_is_optional() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "rules.yaml", "holidays:\n  weekends_are_holidays: false\n");

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert!(loader.config().public_holidays().is_empty());
        assert!(!loader.config().holiday_settings().weekends_are_holidays);
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "rules.yaml", "work_rules: [not, a, map");

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("rules.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_standard_window_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "rules.yaml",
            "work_rules:\n  standard_start: \"18:00\"\n  standard_end: \"09:00\"\n",
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("rules.yaml"));
                assert!(message.contains("standard_end"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_lunch_window_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "rules.yaml",
            "work_rules:\n  lunch_start: \"13:00\"\n  lunch_end: \"12:00\"\n",
        );

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_holiday_files_are_merged() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "rules.yaml", "{}\n");
        write(
            dir.path(),
            "holidays/2025.yaml",
            "year: 2025\nholidays:\n  - date: 2025-12-25\n    name: Christmas Day\n",
        );
        write(
            dir.path(),
            "holidays/2026.yaml",
            "year: 2026\nholidays:\n  - date: 2026-01-01\n    name: New Year's Day\n",
        );
        write(dir.path(), "holidays/README.txt", "ignored");

        let loader = ConfigLoader::load(dir.path()).unwrap();
        let dates: Vec<NaiveDate> = loader.config().holiday_dates().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_holiday_outside_file_year_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "rules.yaml", "{}\n");
        write(
            dir.path(),
            "holidays/2026.yaml",
            "year: 2026\nholidays:\n  - date: 2027-01-01\n    name: New Year's Day\n",
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("outside year 2026"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
