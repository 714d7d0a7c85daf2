use super::ValidationError;

/// Information about a single field validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Field name (from the schema's `.field()` call).
    pub field: String,
    /// What went wrong.
    pub error: ValidationError,
}

/// Result of validating a record against a [`Schema`](super::Schema).
///
/// Each failing field contributes exactly one entry; absence of a field
/// means it is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ValidationReport {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationReport {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Look up the error for a named field (if any).
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.error)
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the name of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|e| e.field.as_str())
    }
}
