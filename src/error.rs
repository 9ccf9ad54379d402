//! Error types for the shift ledger engine.
//!
//! Only conditions that stop processing are errors. Recoverable problems met
//! while expanding schedules (unknown shift codes, malformed rows) are reported
//! as [`ProcessingWarning`](crate::models::ProcessingWarning) values instead.

use thiserror::Error;

/// The main error type for the shift ledger engine.
///
/// # Example
///
/// ```
/// use shift_ledger::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shift_rules.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/shift_rules.yaml"
/// );
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
        /// The path (or origin label) of the document that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule table entry holds a value the engine cannot use.
    #[error("Invalid shift rule '{code}': {message}")]
    InvalidRule {
        /// The shift code (or setting name) of the offending entry.
        code: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A schedule period could not be mapped to a calendar month.
    #[error("Invalid schedule period {year}-{month:02}")]
    InvalidPeriod {
        /// The schedule year.
        year: i32,
        /// The schedule month (expected 1-12).
        month: u32,
    },

    /// A settlement window ends before it starts.
    #[error("Invalid settlement window {start}..={end}")]
    InvalidWindow {
        /// The first month of the window.
        start: String,
        /// The last month of the window.
        end: String,
    },
}

impl EngineError {
    /// Returns true for errors raised while loading the rule table.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EngineError::ConfigNotFound { .. }
                | EngineError::ConfigParseError { .. }
                | EngineError::InvalidRule { .. }
        )
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
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
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
    fn test_invalid_rule_displays_code_and_message() {
        let error = EngineError::InvalidRule {
            code: "DTS".to_string(),
            message: "duration must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift rule 'DTS': duration must not be negative"
        );
    }

    #[test]
    fn test_invalid_period_pads_month() {
        let error = EngineError::InvalidPeriod {
            year: 2025,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid schedule period 2025-13");
    }

    #[test]
    fn test_invalid_window_displays_range() {
        let error = EngineError::InvalidWindow {
            start: "2025-06".to_string(),
            end: "2025-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid settlement window 2025-06..=2025-01"
        );
    }

    #[test]
    fn test_is_config_error() {
        assert!(
            EngineError::ConfigNotFound {
                path: "x".to_string()
            }
            .is_config_error()
        );
        assert!(
            EngineError::InvalidRule {
                code: "D".to_string(),
                message: "bad".to_string()
            }
            .is_config_error()
        );
        assert!(
            !EngineError::InvalidPeriod {
                year: 2025,
                month: 0
            }
            .is_config_error()
        );
    }

    #[test]
    fn test_error_is_debug() {
        let error = EngineError::ConfigNotFound {
            path: "/test".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigNotFound"));
    }
}
