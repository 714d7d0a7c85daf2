//! Declarative record schema.

use super::result::{FieldError, ValidationReport};
use super::ValidationError;

/// Type alias for boxed field checks.
type Check<R> = Box<dyn Fn(&R) -> Result<(), ValidationError> + Send + Sync>;

struct SchemaField<R> {
    name: String,
    check: Check<R>,
}

/// A validation schema over a record type `R`.
///
/// Every check receives the whole record, so rules that depend on other
/// fields need no special machinery. Evaluating the schema is a pure
/// function of the record: no state is kept between runs.
pub struct Schema<R> {
    fields: Vec<SchemaField<R>>,
}

impl<R> Schema<R> {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a named field with its check.
    ///
    /// A field yields at most one error; compose multiple constraints
    /// with the chainable builders in [`rules`](super::rules), which keep
    /// the first failure.
    pub fn field(
        mut self,
        name: impl Into<String>,
        check: impl Fn(&R) -> Result<(), ValidationError> + Send + Sync + 'static,
    ) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            check: Box::new(check),
        });
        self
    }

    /// Run every field check against the record.
    pub fn validate(&self, record: &R) -> ValidationReport {
        let mut errors = Vec::new();

        for field in &self.fields {
            if let Err(error) = (field.check)(record) {
                errors.push(FieldError {
                    field: field.name.clone(),
                    error,
                });
            }
        }

        if errors.is_empty() {
            ValidationReport::Valid
        } else {
            ValidationReport::Invalid(errors)
        }
    }
}

impl<R> Default for Schema<R> {
    fn default() -> Self {
        Self::new()
    }
}
