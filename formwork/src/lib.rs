//! Reactive form state and validation for terminal applications.
//!
//! `formwork` provides the pieces a form screen is made of:
//!
//! - [`widgets`] — self-contained widget state handles (text input,
//!   checkbox, multi-select check group, dropdown select) that are cheap
//!   to clone and safe to read from async handlers,
//! - [`validation`] — a declarative, whole-record validation schema with
//!   typed error kinds and per-field error reporting,
//! - [`submit`] — the submission state machine that gates re-entry while
//!   a submission is in flight.
//!
//! Widgets own their values and their current validation error; the
//! schema is a pure function from a record snapshot to a report, so rules
//! on one field are free to read any other field.

pub mod submit;
pub mod validation;
pub mod widgets;

pub mod prelude {
    pub use crate::submit::{SubmitState, Submission};
    pub use crate::validation::{
        ErrorDisplay, FieldError, Schema, Validatable, ValidationError, ValidationReport,
        apply_error, rules,
    };
    pub use crate::widgets::{CheckGroup, Checkbox, Input, Select};
}
