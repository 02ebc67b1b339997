//! Core error types for the Stackfolio analytics engine.
//!
//! The engine itself never fails on valid input: degenerate input yields neutral
//! results and numerical trouble falls back to simpler figures. Errors only arise at
//! the boundary, where raw records and settings are validated before use.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::projection::ProjectionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for purchase and goal records crossing the boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' must be greater than zero (got {value})")]
    NonPositive { field: String, value: String },

    #[error("Field '{field}' is outside the supported range (got {value})")]
    OutOfRange { field: String, value: String },

    #[error("Record #{index} is invalid: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
