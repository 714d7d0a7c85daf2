//! Writing validation results back onto widgets.

use super::ValidationError;

/// Where to display validation errors for a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Show the error message below the widget (default).
    #[default]
    Below,
    /// Show the error message inline, to the right of the widget.
    Inline,
    /// Widget only shows error styling, no message.
    None,
}

/// Trait for widgets that can carry a validation error.
///
/// The form applies a [`ValidationReport`](super::ValidationReport) by
/// setting or clearing the error on each bound widget; the view then
/// renders whatever the widget holds.
pub trait Validatable {
    /// Set a validation error on this widget.
    fn set_error(&self, msg: impl Into<String>);

    /// Clear the validation error.
    fn clear_error(&self);

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<String>;

    /// Check if the widget has a validation error.
    fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Get the error display mode.
    fn error_display(&self) -> ErrorDisplay;

    /// Set the error display mode.
    fn set_error_display(&self, display: ErrorDisplay);
}

/// Set or clear a widget's error from one report entry.
pub fn apply_error<W: Validatable>(widget: &W, error: Option<&ValidationError>) {
    match error {
        Some(error) => widget.set_error(error.to_string()),
        None => widget.clear_error(),
    }
}
