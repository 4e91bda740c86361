//! Error types for field validation.

use arm_id::IdError;
use thiserror::Error;

/// A single validation failure, always tagged with the field key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value had the wrong JSON type.
    #[error("expected {key} to be {expected}")]
    WrongType { key: String, expected: &'static str },

    /// The value was a string but not a valid resource ID of the expected kind.
    #[error("{key}: {source}")]
    InvalidResourceId { key: String, source: IdError },

    /// The value fell outside an inclusive range.
    ///
    /// `actual` is widened so JSON integers beyond `i64` are reported as-is.
    #[error("expected {key} to be in the range ({min} - {max}), got {actual}")]
    OutOfRange {
        key: String,
        min: i64,
        max: i64,
        actual: i128,
    },

    /// The value was not an exact multiple of the step.
    #[error("expected {key} to be divisible by {step}, got {actual}")]
    NotMultipleOf { key: String, step: i64, actual: i128 },

    /// The value did not match a required pattern.
    #[error("{key} {description}, got {actual:?}")]
    PatternMismatch {
        key: String,
        description: &'static str,
        actual: String,
    },

    /// The value was an empty string.
    #[error("expected {key} not to be an empty string")]
    Empty { key: String },

    /// The value was not a hyphenated UUID.
    #[error("expected {key} to be a valid UUID, got {actual:?}")]
    InvalidUuid { key: String, actual: String },
}

impl ValidationError {
    /// The field key this error is tagged with.
    pub fn key(&self) -> &str {
        match self {
            ValidationError::WrongType { key, .. }
            | ValidationError::InvalidResourceId { key, .. }
            | ValidationError::OutOfRange { key, .. }
            | ValidationError::NotMultipleOf { key, .. }
            | ValidationError::PatternMismatch { key, .. }
            | ValidationError::Empty { key }
            | ValidationError::InvalidUuid { key, .. } => key,
        }
    }

    /// Returns true if the value never reached the content checks.
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValidationError::WrongType { .. })
    }
}
