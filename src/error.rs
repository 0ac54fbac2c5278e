//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during scheduling and
//! compliance evaluation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the roster engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/compliance.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/compliance.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A shift exceeds the daily maximum while strict compliance is enforced.
    ///
    /// Raised before any persistence attempt; the caller must refuse the save
    /// and surface both numbers to the user.
    #[error("Shift duration of {duration}h exceeds the maximum of {max}h; strict compliance is enforced")]
    MaxHoursExceeded {
        /// The attempted shift duration in hours.
        duration: Decimal,
        /// The configured daily maximum in hours.
        max: Decimal,
    },

    /// A compliance rule field holds an out-of-range value.
    #[error("Invalid compliance rule '{field}': {message}")]
    InvalidRule {
        /// The rule field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

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

    /// A request carried data that could not be interpreted.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of what was invalid.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_max_hours_exceeded_displays_both_numbers() {
        let error = RosterError::MaxHoursExceeded {
            duration: Decimal::from_str("11.5").unwrap(),
            max: Decimal::from_str("10").unwrap(),
        };
        let msg = error.to_string();
        assert!(msg.contains("11.5"));
        assert!(msg.contains("10"));
        assert!(msg.contains("strict"));
    }

    #[test]
    fn test_invalid_rule_displays_field_and_message() {
        let error = RosterError::InvalidRule {
            field: "maxDailyHours".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid compliance rule 'maxDailyHours': must not be negative"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = RosterError::ConfigNotFound {
            path: "/missing/compliance.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/compliance.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = RosterError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_request_displays_message() {
        let error = RosterError::InvalidRequest {
            message: "not an ISO year-week key: 2024-Q1".to_string(),
        };
        assert!(error.to_string().contains("2024-Q1"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RosterError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> RosterResult<()> {
            Err(RosterError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> RosterResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
