//! Event handling for the Select widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Select;

impl Select {
    /// Handle a key event while this select is focused.
    ///
    /// Closed: Space/Enter open the dropdown. Open: Up/Down move the
    /// cursor, Space/Enter commit, Esc closes without committing.
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        if self.is_open() {
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
                    self.commit();
                    true
                }
                KeyCode::Esc => {
                    self.close();
                    true
                }
                _ => false,
            }
        } else {
            match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.open();
                    true
                }
                _ => false,
            }
        }
    }
}
