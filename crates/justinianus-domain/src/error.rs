//! Domain error types

use thiserror::Error;

/// Errors raised when constructing or validating domain values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Identifier could not be parsed as a UUID
    #[error("Invalid identifier '{value}': {reason}")]
    InvalidId {
        /// The rejected input
        value: String,
        /// Parser message
        reason: String,
    },

    /// A weight, strength or policy value fell outside [0, 1]
    #[error("{field} must be in [0, 1], got {value}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A deadline was built without an adjusted due date
    #[error("Deadline {0} has no adjusted due date")]
    MissingDueDate(String),

    /// A string did not name a known enum variant
    #[error("Invalid {kind}: {value}")]
    UnknownVariant {
        /// Which enum was being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// Policy thresholds are inconsistent with each other
    #[error("Invalid scoring policy: {0}")]
    InvalidPolicy(String),
}

/// Reject values that are non-finite or outside the unit interval
pub(crate) fn ensure_unit_interval(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::OutOfRange { field, value })
    }
}
