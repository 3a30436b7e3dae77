//! Custom error types for Outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Store failures are kept distinct from empty query results: a range with no
//! records yields an empty dashboard, while an unreadable store surfaces as
//! [`OutlayError::Store`] so the caller can retry or reconfigure.

use thiserror::Error;

/// The main error type for Outlay operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// The record store could not be read or written
    #[error("Record store unavailable: {0}")]
    Store(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl OutlayError {
    /// Check if this is a store-connectivity error
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OutlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Outlay operations
pub type OutlayResult<T> = Result<T, OutlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutlayError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_store_error_is_distinct() {
        let err = OutlayError::Store("table unreadable".into());
        assert!(err.is_store());
        assert_eq!(
            err.to_string(),
            "Record store unavailable: table unreadable"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let outlay_err: OutlayError = io_err.into();
        assert!(matches!(outlay_err, OutlayError::Io(_)));
    }
}
