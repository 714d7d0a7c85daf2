//! Record validation with per-field error reporting.
//!
//! A [`Schema`] is a list of named fields, each with a check that
//! receives the *whole* record. That makes cross-field rules ordinary
//! code: a field's check can branch on any other field's value.
//!
//! # Example
//!
//! ```ignore
//! let schema = Schema::new()
//!     .field("name", |r: &Signup| {
//!         rules::text(&r.name).required().min_chars(2).finish()
//!     })
//!     .field("terms", |r| rules::consent(r.terms).must_accept().finish());
//!
//! let report = schema.validate(&signup);
//! if report.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

mod error;
mod result;
pub mod rules;
mod schema;
mod validatable;

pub use error::ValidationError;
pub use result::{FieldError, ValidationReport};
pub use schema::Schema;
pub use validatable::{ErrorDisplay, Validatable, apply_error};
