//! Custom error types for costwise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for costwise operations
#[derive(Error, Debug)]
pub enum CostwiseError {
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

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The income denominator for percentage calculations is zero or negative.
    ///
    /// This is a value-level signal, never a panic: the original data path
    /// divided by an unset income and silently produced nonsense percentages,
    /// so every percentage computation validates its base first.
    #[error("Invalid income base: {0} (must be a positive amount)")]
    InvalidIncomeBase(Money),

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CostwiseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for income profiles
    pub fn profile_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income profile",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid-income-base error
    pub fn is_invalid_income_base(&self) -> bool {
        matches!(self, Self::InvalidIncomeBase(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CostwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CostwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for costwise operations
pub type CostwiseResult<T> = Result<T, CostwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CostwiseError::Validation("amount is negative".into());
        assert_eq!(err.to_string(), "Validation error: amount is negative");
    }

    #[test]
    fn test_not_found_error() {
        let err = CostwiseError::expense_not_found("exp-1a2b3c4d");
        assert_eq!(err.to_string(), "Expense not found: exp-1a2b3c4d");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_income_base_display() {
        let err = CostwiseError::InvalidIncomeBase(Money::zero());
        assert_eq!(
            err.to_string(),
            "Invalid income base: $0.00 (must be a positive amount)"
        );
        assert!(err.is_invalid_income_base());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CostwiseError = io_err.into();
        assert!(matches!(err, CostwiseError::Io(_)));
    }
}
