//! Error types for the holiday engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rules or answering
//! holiday queries.

use thiserror::Error;

/// The main error type for the holiday engine.
///
/// # Example
///
/// ```
/// use holiday_jp::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/fixed_holidays.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/fixed_holidays.yaml"
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
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contains a record the engine cannot use.
    #[error("Invalid configuration in '{source_name}': {message}")]
    InvalidConfig {
        /// The configuration source holding the bad record.
        source_name: String,
        /// A description of what is wrong with the record.
        message: String,
    },

    /// An equinox constant table does not cover the requested year.
    #[error("Equinox table '{table}' does not cover year {year}")]
    EquinoxOutOfRange {
        /// The table that was consulted ("vernal" or "autumnal").
        table: String,
        /// The year that fell outside the table.
        year: i32,
    },

    /// Caller-supplied date text, timestamp or Julian day is not a valid date.
    #[error("Invalid date input '{input}': {message}")]
    InvalidDateInput {
        /// The rejected input, rendered as text.
        input: String,
        /// Why the input was rejected.
        message: String,
    },

    /// A listing key format name was not recognised.
    #[error("Unknown key format: {name}")]
    UnknownKeyFormat {
        /// The name that was not recognised.
        name: String,
    },
}

impl EngineError {
    /// Returns `true` for errors caused by the rule configuration rather than
    /// by caller input.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EngineError::ConfigNotFound { .. }
                | EngineError::ConfigParseError { .. }
                | EngineError::InvalidConfig { .. }
                | EngineError::EquinoxOutOfRange { .. }
        )
    }

    pub(crate) fn invalid_date(input: impl ToString, message: impl Into<String>) -> Self {
        EngineError::InvalidDateInput {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
