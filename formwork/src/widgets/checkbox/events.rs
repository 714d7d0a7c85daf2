//! Event handling for the Checkbox widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Checkbox;

impl Checkbox {
    /// Handle a key event while this checkbox is focused.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&self, key: &KeyEvent) -> bool {
        if !key.modifiers.is_empty() {
            return false;
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle();
                true
            }
            _ => false,
        }
    }
}
