//! Error types for the overtime control engine.
//!
//! Earnings calculations never fail: malformed field text is replaced by
//! zero before any arithmetic runs. The errors here cover the parts of the
//! engine that touch the outside world, which today means configuration.

use thiserror::Error;

/// The main error type for the overtime control engine.
///
/// # Example
///
/// ```
/// use overtime_control::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/overtime_control.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/overtime_control.yaml"
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

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, in dotted form (e.g. `currency.decimal_places`).
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
