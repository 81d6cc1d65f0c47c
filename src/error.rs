//! Custom error types for cashboard
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cashboard operations
#[derive(Error, Debug)]
pub enum CashboardError {
    /// The key-value store could not be read or written
    #[error("Storage error: {0}")]
    Store(String),

    /// The stored payload is not valid JSON or does not match the record shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// A record's amount or date cannot be parsed for display
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid input when creating a record
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors (unknown locale, bad paths)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CashboardError {
    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is a storage error
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<serde_json::Error> for CashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for cashboard operations
pub type CashboardResult<T> = Result<T, CashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CashboardError::Store("connection refused".into());
        assert_eq!(err.to_string(), "Storage error: connection refused");

        let err = CashboardError::Format("bad amount".into());
        assert_eq!(err.to_string(), "Format error: bad amount");
    }

    #[test]
    fn test_error_kind_checks() {
        assert!(CashboardError::Decode("x".into()).is_decode());
        assert!(CashboardError::Format("x".into()).is_format());
        assert!(CashboardError::Store("x".into()).is_store());
        assert!(!CashboardError::Store("x".into()).is_decode());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CashboardError = io_err.into();
        assert!(matches!(err, CashboardError::Store(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CashboardError = json_err.into();
        assert!(matches!(err, CashboardError::Decode(_)));
    }
}
