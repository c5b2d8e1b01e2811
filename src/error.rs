//! Error types for the Payroll Schedule Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while generating pay-run dates.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payroll Schedule Engine.
///
/// All operations in the engine return this error type, so a batch caller
/// can record one payroll's failure and carry on with the next.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::error::EngineError;
///
/// let error = EngineError::InvalidConfiguration {
///     field: "date_value".to_string(),
///     message: "is required for fixed_date date type".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid configuration field 'date_value': is required for fixed_date date type"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

    /// A schedule configuration field is missing or out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A day-by-day scan exceeded its iteration cap.
    ///
    /// This is an internal invariant violation and is never retried.
    #[error("Scan for {operation} starting at {start} exceeded {limit} iterations")]
    UnboundedScan {
        /// The scan that overran (e.g. "previous business day").
        operation: String,
        /// The date the scan started from.
        start: NaiveDate,
        /// The iteration cap that was hit.
        limit: u32,
    },

    /// A holiday entry could not be parsed and was skipped.
    #[error("Malformed holiday entry '{entry}': {message}")]
    MalformedHoliday {
        /// A rendering of the raw entry.
        entry: String,
        /// A description of the parse problem.
        message: String,
    },

    /// Date arithmetic left the representable calendar range.
    #[error("Date out of range while computing {operation} from {date}")]
    DateOutOfRange {
        /// The date the arithmetic started from.
        date: NaiveDate,
        /// The operation that overflowed.
        operation: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidConfiguration`].
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`EngineError::DateOutOfRange`].
    pub fn out_of_range(date: NaiveDate, operation: impl Into<String>) -> Self {
        EngineError::DateOutOfRange {
            date,
            operation: operation.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/calendar.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calendar.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_configuration_names_the_field() {
        let error = EngineError::invalid_config("date_value", "must be between 0 and 6");
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'date_value': must be between 0 and 6"
        );
    }

    #[test]
    fn test_unbounded_scan_displays_operation_start_and_limit() {
        let error = EngineError::UnboundedScan {
            operation: "next business day".to_string(),
            start: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            limit: 31,
        };
        assert_eq!(
            error.to_string(),
            "Scan for next business day starting at 2025-12-01 exceeded 31 iterations"
        );
    }

    #[test]
    fn test_malformed_holiday_displays_entry_and_message() {
        let error = EngineError::MalformedHoliday {
            entry: "Boxing Day (2025-13-26)".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed holiday entry 'Boxing Day (2025-13-26)': input is out of range"
        );
    }

    #[test]
    fn test_date_out_of_range_displays_operation() {
        let error = EngineError::out_of_range(NaiveDate::MAX, "monthly advance");
        assert!(error.to_string().contains("monthly advance"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid() -> EngineResult<()> {
            Err(EngineError::invalid_config("periods", "must be at least 1"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
