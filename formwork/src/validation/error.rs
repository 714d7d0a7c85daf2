//! Typed validation failures.

use thiserror::Error;

/// A single field-level validation failure.
///
/// The message is what gets shown next to the field, so the wording is
/// user-facing rather than diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The field is empty or still on its "unselected" sentinel.
    #[error("this field is required")]
    Required,
    /// Text shorter than the allowed minimum.
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    /// Text longer than the allowed maximum.
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    /// Numeric value below the allowed minimum.
    #[error("must be at least {min}")]
    TooSmall { min: f64 },
    /// Integer value outside the allowed range.
    #[error("must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },
    /// A consent checkbox that has to be ticked.
    #[error("the terms must be accepted")]
    MustAccept,
}
