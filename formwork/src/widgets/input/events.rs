//! Event handling for the Input widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Input;

impl Input {
    /// Handle a key event while this input is focused.
    ///
    /// Returns `true` if the key was consumed. Keys with ctrl/alt
    /// modifiers are left alone so application keybinds pass through.
    pub fn handle_key(&self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Backspace => {
                self.delete_char_before();
                true
            }
            KeyCode::Delete => {
                self.delete_char_at();
                true
            }
            KeyCode::Left => {
                self.cursor_left();
                true
            }
            KeyCode::Right => {
                self.cursor_right();
                true
            }
            KeyCode::Home => {
                self.cursor_home();
                true
            }
            KeyCode::End => {
                self.cursor_end();
                true
            }
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }
}
