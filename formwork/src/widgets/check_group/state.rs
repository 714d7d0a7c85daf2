//! CheckGroup widget state.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::{ErrorDisplay, Validatable};

/// Unique identifier for a CheckGroup widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckGroupId(usize);

impl CheckGroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__check_group_{}", self.0)
    }
}

/// Internal state for a CheckGroup widget
#[derive(Debug)]
struct CheckGroupInner {
    /// Available option labels
    options: Vec<String>,
    /// Indices of the selected options
    selected: BTreeSet<usize>,
    /// Keyboard cursor within the options
    cursor: usize,
    /// Character to display when selected
    checked_char: char,
    /// Character to display when not selected
    unchecked_char: char,
    /// Validation error message (if any)
    error: Option<String>,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

impl Default for CheckGroupInner {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selected: BTreeSet::new(),
            cursor: 0,
            checked_char: '■',
            unchecked_char: '□',
            error: None,
            error_display: ErrorDisplay::default(),
        }
    }
}

/// A multi-select checkbox group with reactive state.
///
/// Any number of options can be selected at once; toggling an option
/// flips its membership in the selected set.
#[derive(Debug)]
pub struct CheckGroup {
    /// Unique identifier for this check group instance
    id: CheckGroupId,
    /// Internal state
    inner: Arc<RwLock<CheckGroupInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl CheckGroup {
    /// Create a new empty check group
    pub fn new() -> Self {
        Self {
            id: CheckGroupId::new(),
            inner: Arc::new(RwLock::new(CheckGroupInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a check group with options
    pub fn with_options(options: Vec<impl Into<String>>) -> Self {
        let group = Self::new();
        group.set_options(options);
        group
    }

    /// Get the unique ID for this check group
    pub fn id(&self) -> CheckGroupId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the option labels
    pub fn options(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.options.len())
            .unwrap_or(0)
    }

    /// Check if the group has no options
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the option at `index` is selected
    pub fn is_selected(&self, index: usize) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected.contains(&index))
            .unwrap_or(false)
    }

    /// Get the selected indices in ascending order
    pub fn selected_indices(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|guard| guard.selected.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of selected options
    pub fn selected_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.selected.len())
            .unwrap_or(0)
    }

    /// Get the keyboard cursor position
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    /// Get the selected indicator character
    pub fn checked_char(&self) -> char {
        self.inner
            .read()
            .map(|guard| guard.checked_char)
            .unwrap_or('■')
    }

    /// Get the unselected indicator character
    pub fn unchecked_char(&self) -> char {
        self.inner
            .read()
            .map(|guard| guard.unchecked_char)
            .unwrap_or('□')
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the option labels, clearing the selection and cursor
    pub fn set_options(&self, options: Vec<impl Into<String>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options.into_iter().map(Into::into).collect();
            guard.selected.clear();
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle membership of the option at `index` in the selected set
    pub fn toggle(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write()
            && index < guard.options.len()
        {
            if !guard.selected.remove(&index) {
                guard.selected.insert(index);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle the option under the keyboard cursor
    pub fn toggle_cursor(&self) {
        let cursor = self.cursor();
        self.toggle(cursor);
    }

    /// Select or deselect the option at `index`
    pub fn set_selected(&self, index: usize, selected: bool) {
        if let Ok(mut guard) = self.inner.write()
            && index < guard.options.len()
        {
            let changed = if selected {
                guard.selected.insert(index)
            } else {
                guard.selected.remove(&index)
            };
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Clear the selection
    pub fn clear_selection(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.selected.is_empty()
        {
            guard.selected.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the keyboard cursor up
    pub fn cursor_up(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            guard.cursor -= 1;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the keyboard cursor down
    pub fn cursor_down(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor + 1 < guard.options.len()
        {
            guard.cursor += 1;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the check group state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Validatable for CheckGroup {
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

impl Clone for CheckGroup {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for CheckGroup {
    fn default() -> Self {
        Self::new()
    }
}
