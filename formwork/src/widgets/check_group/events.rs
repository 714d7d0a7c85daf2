//! Event handling for the CheckGroup widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::CheckGroup;

impl CheckGroup {
    /// Handle a key event while this check group is focused.
    ///
    /// Up/Down move the cursor between options, Space/Enter toggle the
    /// option under the cursor. Returns `true` if the key was consumed.
    pub fn handle_key(&self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Up => {
                self.cursor_up();
                true
            }
            KeyCode::Down => {
                self.cursor_down();
                true
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle_cursor();
                true
            }
            _ => false,
        }
    }
}
