//! Accumulated validation diagnostics.

use crate::ValidationError;

/// Warnings and errors produced by validating one field.
///
/// A single call may report several errors; callers collect them per field
/// rather than stopping at the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl Validation {
    /// A result with no diagnostics.
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    /// A result holding a single error.
    #[must_use]
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    /// Returns true if no errors were reported. Warnings do not count.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Appends the diagnostics of `other`.
    pub fn merge(&mut self, other: Validation) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    /// Splits into warnings on success or errors on failure.
    pub fn into_result(self) -> Result<Vec<String>, Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl From<ValidationError> for Validation {
    fn from(error: ValidationError) -> Self {
        Self::from_error(error)
    }
}
