//! Core error types for the aggregation pipeline.
//!
//! This module defines storage-agnostic error types. Store-specific errors
//! (I/O, JSON parsing of the artifacts) are converted to these types by the
//! storage layer.

use chrono::ParseError as ChronoParseError;
use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the aggregation pipeline.
///
/// Store errors are fatal for a run; validation errors are handled at record
/// granularity (skip and report) and only surface here when an entire input
/// cannot be used.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for the account store and the output artifact.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert its underlying errors (I/O, serde) into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The account store cannot be located. The previous output artifact is
    /// left untouched.
    #[error("Input artifact not found: {0}")]
    NotFound(String),

    /// The account store exists but could not be read.
    #[error("Failed to read account store: {0}")]
    ReadFailed(String),

    /// The account store is not a parseable document.
    #[error("Malformed store document: {0}")]
    Malformed(String),

    /// The output artifact could not be written or swapped into place.
    #[error("Failed to write portfolio document: {0}")]
    WriteFailed(String),
}

/// Validation errors for individual records and configuration values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
