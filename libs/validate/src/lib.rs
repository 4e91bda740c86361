//! # arm-validate
//!
//! Validators for provider configuration fields.
//!
//! A validator receives an untyped value and the key of the field it came
//! from, and returns every warning and error it found as a [`Validation`].
//! Errors carry the field key so that a configuration framework can attach
//! them to the right attribute.
//!
//! The resource ID adapter is the seam to `arm-id`: it checks that the value
//! is a string, parses it as the requested kind, and reports a single tagged
//! error on failure.

mod error;
mod result;
mod validators;

pub use error::ValidationError;
pub use result::Validation;
pub use validators::*;
