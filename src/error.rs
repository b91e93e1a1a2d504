//! Error types for the attendance statistics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while categorizing attendance
//! and maintaining monthly statistics.

use thiserror::Error;

/// The main error type for the attendance statistics engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An attendance record was missing a required field.
    #[error("Invalid attendance record field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A year/month pair did not name a calendar month.
    #[error("Invalid statistics period {year}-{month}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// The statistics store rejected a read or write.
    #[error("Statistics store error: {message}")]
    StoreError {
        /// A description of the store failure.
        message: String,
    },

    /// Aggregation failed for a single employee.
    #[error("Aggregation failed for employee '{employee_id}': {message}")]
    AggregationError {
        /// The employee whose group failed.
        employee_id: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/rules.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/rules.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_record_displays_field_and_message() {
        let error = EngineError::InvalidRecord {
            field: "employee_id".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid attendance record field 'employee_id': must not be empty"
        );
    }

    #[test]
    fn test_invalid_period_displays_year_and_month() {
        let error = EngineError::InvalidPeriod {
            year: 2026,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid statistics period 2026-13");
    }

    #[test]
    fn test_store_error_displays_message() {
        let error = EngineError::StoreError {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Statistics store error: connection refused"
        );
    }

    #[test]
    fn test_aggregation_error_displays_employee() {
        let error = EngineError::AggregationError {
            employee_id: "EMP001".to_string(),
            message: "worker panicked".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Aggregation failed for employee 'EMP001': worker panicked"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_store_error() -> EngineResult<()> {
            Err(EngineError::StoreError {
                message: "down".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_store_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
