//! Error types for the Gratuity Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rules, computing a
//! gratuity, or emitting results.

use thiserror::Error;

/// The main error type for the Gratuity Engine.
///
/// # Example
///
/// ```
/// use gratuity_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "basic_salary".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'basic_salary': must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input value was outside the range the calculator accepts.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
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

    /// A configuration value was present but unusable.
    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting {
        /// The setting name.
        key: String,
        /// A description of the problem.
        message: String,
    },

    /// The tracing subscriber could not be installed.
    #[error("Telemetry error: {message}")]
    Telemetry {
        /// A description of the failure.
        message: String,
    },

    /// Writing output or binding a socket failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
