//! Error types for the pension core and for member loading
//!
//! The core never recovers from an error locally: every failure is a
//! deterministic consequence of the input and is returned to the caller as is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pension calculations
pub type PensionResult<T> = Result<T, PensionError>;

/// Errors raised by the pension calculators and the forecast engine
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PensionError {
    /// A numeric input violates its domain constraint
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Retirement age has no entry in the divisor table
    #[error("Retirement age {age} is outside the divisor table ({min_age}-{max_age})")]
    OutOfRange { age: u8, min_age: u8, max_age: u8 },

    /// A required field was never supplied to the input builder
    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl PensionError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        PensionError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        PensionError::MissingField {
            field: field.into(),
        }
    }

    /// Name of the offending field, if the error carries one
    pub fn field(&self) -> Option<&str> {
        match self {
            PensionError::InvalidInput { field, .. } | PensionError::MissingField { field } => {
                Some(field)
            }
            PensionError::OutOfRange { .. } => None,
        }
    }
}

/// Errors raised while reading members or configuration from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but failed validation
    #[error("Invalid record at line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: PensionError,
    },

    #[error(transparent)]
    Pension(#[from] PensionError),
}

/// Reject values that are negative or not finite
pub(crate) fn ensure_amount(field: &str, value: f64) -> PensionResult<()> {
    if !value.is_finite() {
        return Err(PensionError::invalid_input(field, value, "Amount must be finite"));
    }
    if value < 0.0 {
        return Err(PensionError::invalid_input(field, value, "Amount must not be negative"));
    }
    Ok(())
}

/// Reject growth rates below -100% or not finite
pub(crate) fn ensure_rate(field: &str, value: f64) -> PensionResult<()> {
    if !value.is_finite() || value < -1.0 {
        return Err(PensionError::invalid_input(
            field,
            value,
            "Rate must be a finite value of at least -1",
        ));
    }
    Ok(())
}

/// Reject contribution indices that are not strictly positive
pub(crate) fn ensure_index(field: &str, value: f64) -> PensionResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PensionError::invalid_input(
            field,
            value,
            "Contribution index must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_validation() {
        assert!(ensure_amount("salary", 0.0).is_ok());
        assert!(ensure_amount("salary", 1000.0).is_ok());
        assert!(ensure_amount("salary", -0.01).is_err());
        assert!(ensure_amount("salary", f64::NAN).is_err());
        assert!(ensure_amount("salary", f64::INFINITY).is_err());
    }

    #[test]
    fn test_rate_validation() {
        assert!(ensure_rate("growth", -1.0).is_ok());
        assert!(ensure_rate("growth", 0.0).is_ok());
        assert!(ensure_rate("growth", -1.5).is_err());
        assert!(ensure_rate("growth", f64::NAN).is_err());
    }

    #[test]
    fn test_error_field_and_message() {
        let err = PensionError::invalid_input("balance", -5.0, "Amount must not be negative");
        assert_eq!(err.field(), Some("balance"));
        assert_eq!(
            err.to_string(),
            "Invalid input for 'balance': -5 - Amount must not be negative"
        );

        let err = PensionError::OutOfRange { age: 16, min_age: 40, max_age: 70 };
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_error_serializes_tagged() {
        let err = PensionError::missing_field("current_age");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"type":"MissingField","details":{"field":"current_age"}}"#);
    }
}
