//! Select widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::{ErrorDisplay, Validatable};

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Internal state for a Select widget.
#[derive(Debug, Default)]
struct SelectInner {
    /// Currently selected index (None if nothing selected)
    selected: Option<usize>,
    /// Labels for the options
    options: Vec<String>,
    /// Placeholder text shown when nothing is selected
    placeholder: String,
    /// Validation error message (if any)
    error: Option<String>,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

/// A dropdown select widget with reactive state.
///
/// Closed, it shows the selected option or the placeholder. Opened, the
/// option list is navigated with a cursor; committing closes the
/// dropdown and updates the selection.
#[derive(Debug)]
pub struct Select {
    /// Unique identifier for this select instance
    id: SelectId,
    /// Internal state
    inner: Arc<RwLock<SelectInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Whether the dropdown is open
    is_open: Arc<AtomicBool>,
    /// Cursor position when open (for keyboard navigation)
    cursor: Arc<AtomicUsize>,
}

impl Select {
    /// Create a new select with no selection.
    pub fn new() -> Self {
        Self {
            id: SelectId::new(),
            inner: Arc::new(RwLock::new(SelectInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            is_open: Arc::new(AtomicBool::new(false)),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a select with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            id: SelectId::new(),
            inner: Arc::new(RwLock::new(SelectInner {
                placeholder: placeholder.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            is_open: Arc::new(AtomicBool::new(false)),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the selected index (None if nothing selected).
    pub fn selection(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| guard.selected)
    }

    /// Get the label of the selected option.
    pub fn selected_label(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .selected
                .and_then(|index| guard.options.get(index).cloned())
        })
    }

    /// Get the option labels.
    pub fn options(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Get the cursor position used while the dropdown is open.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the option labels, clearing the selection.
    pub fn set_options(&self, options: Vec<impl Into<String>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options.into_iter().map(Into::into).collect();
            guard.selected = None;
            self.cursor.store(0, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Select the option at `index`.
    pub fn select(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write()
            && index < guard.options.len()
        {
            guard.selected = Some(index);
            self.cursor.store(index, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the selection back to the placeholder.
    pub fn clear_selection(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.selected.is_some()
        {
            guard.selected = None;
            self.cursor.store(0, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dropdown control
    // -------------------------------------------------------------------------

    /// Open the dropdown, placing the cursor on the current selection.
    pub fn open(&self) {
        let start = self.selection().unwrap_or(0);
        self.cursor.store(start, Ordering::SeqCst);
        self.is_open.store(true, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Close the dropdown without changing the selection.
    pub fn close(&self) {
        self.is_open.store(false, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Move the open-dropdown cursor up.
    pub fn cursor_up(&self) {
        let cursor = self.cursor.load(Ordering::SeqCst);
        if cursor > 0 {
            self.cursor.store(cursor - 1, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the open-dropdown cursor down.
    pub fn cursor_down(&self) {
        let cursor = self.cursor.load(Ordering::SeqCst);
        let len = self.inner.read().map(|g| g.options.len()).unwrap_or(0);
        if cursor + 1 < len {
            self.cursor.store(cursor + 1, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Commit the option under the cursor and close the dropdown.
    pub fn commit(&self) {
        let cursor = self.cursor.load(Ordering::SeqCst);
        self.select(cursor);
        self.close();
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the select state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Validatable for Select {
    fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn error(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.error.clone())
    }

    fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }

    fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
        }
    }
}

impl Clone for Select {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            is_open: Arc::clone(&self.is_open),
            cursor: Arc::clone(&self.cursor),
        }
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}
