//! Error types for resource ID parsing.

use thiserror::Error;

use crate::Segment;

/// Errors that can occur when parsing a resource ID.
///
/// Positions are 1-based segment indexes, counted after leading slashes are
/// stripped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty (or contains nothing but slashes).
    #[error("{kind} ID cannot be empty")]
    Empty { kind: &'static str },

    /// A literal segment did not match the expected token.
    #[error("invalid {kind} ID: expected '{expected}' at position {position}, got '{actual}'")]
    UnexpectedSegment {
        kind: &'static str,
        position: usize,
        expected: &'static str,
        actual: String,
    },

    /// The ID ended before every required segment was seen.
    #[error("invalid {kind} ID: expected {expected} at position {position}, but the ID ended")]
    MissingSegment {
        kind: &'static str,
        position: usize,
        expected: Segment,
    },

    /// A variable segment was present but empty.
    #[error("invalid {kind} ID: value for '{field}' at position {position} is empty")]
    EmptySegment {
        kind: &'static str,
        position: usize,
        field: &'static str,
    },

    /// A value passed to a checked constructor contained a path separator.
    #[error("invalid {kind} ID: value for '{field}' contains '/': '{value}'")]
    SlashInValue {
        kind: &'static str,
        field: &'static str,
        value: String,
    },

    /// The ID matched completely but kept going.
    #[error("invalid {kind} ID: unexpected trailing segments '{extra}' at position {position}")]
    TrailingSegments {
        kind: &'static str,
        position: usize,
        extra: String,
    },

    /// A generic ID did not consist of key/value pairs.
    #[error("invalid resource ID: expected key/value pairs, got {count} segments")]
    OddSegmentCount { count: usize },

    /// A generic ID contained an empty key or value.
    #[error("invalid resource ID: empty key or value at position {position}")]
    EmptyValue { position: usize },

    /// A generic ID repeated a key.
    #[error("invalid resource ID: key '{key}' appears more than once")]
    DuplicateKey { key: String },

    /// A generic ID has no value for the requested key.
    #[error("resource ID has no '{key}' segment")]
    MissingKey { key: String },

    /// A kind slug that is not in the catalog.
    #[error("unknown resource kind '{0}'")]
    UnknownKind(String),

    /// A field name that the kind does not declare.
    #[error("{kind} ID has no field '{field}'")]
    UnknownField {
        kind: &'static str,
        field: &'static str,
    },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty { .. })
    }

    /// Returns true if this error indicates a literal segment mismatch.
    pub fn is_literal_mismatch(&self) -> bool {
        matches!(self, IdError::UnexpectedSegment { .. })
    }

    /// Returns the 1-based segment position the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            IdError::UnexpectedSegment { position, .. }
            | IdError::MissingSegment { position, .. }
            | IdError::EmptySegment { position, .. }
            | IdError::TrailingSegments { position, .. }
            | IdError::EmptyValue { position } => Some(*position),
            _ => None,
        }
    }
}
