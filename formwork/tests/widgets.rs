//! Tests for widget state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use formwork::submit::{SubmitState, Submission};
use formwork::validation::Validatable;
use formwork::widgets::{CheckGroup, Checkbox, Input, Select};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_input_insert_and_delete() {
    let input = Input::new();
    input.insert_char('h');
    input.insert_char('i');
    assert_eq!(input.value(), "hi");
    assert_eq!(input.cursor(), 2);

    input.delete_char_before();
    assert_eq!(input.value(), "h");
    assert_eq!(input.cursor(), 1);
}

#[test]
fn test_input_cursor_stays_on_char_boundaries() {
    let input = Input::with_value("日本");
    assert_eq!(input.cursor(), 6); // byte offset past two 3-byte chars

    input.cursor_left();
    assert_eq!(input.cursor(), 3);
    input.cursor_left();
    assert_eq!(input.cursor(), 0);
    input.cursor_left(); // already at start
    assert_eq!(input.cursor(), 0);

    input.cursor_right();
    assert_eq!(input.cursor(), 3);
    input.insert_char('a');
    assert_eq!(input.value(), "日a本");
}

#[test]
fn test_input_delete_at_cursor() {
    let input = Input::with_value("abc");
    input.cursor_home();
    input.delete_char_at();
    assert_eq!(input.value(), "bc");

    input.cursor_end();
    input.delete_char_at(); // nothing after the cursor
    assert_eq!(input.value(), "bc");
}

#[test]
fn test_input_set_value_clears_error() {
    let input = Input::new();
    input.set_error("this field is required");
    assert!(input.has_error());

    input.set_value("Jane Doe");
    assert!(!input.has_error());
    assert_eq!(input.value(), "Jane Doe");
}

#[test]
fn test_input_key_handling() {
    let input = Input::new();
    assert!(input.handle_key(&key(KeyCode::Char('a'))));
    assert!(input.handle_key(&key(KeyCode::Char('b'))));
    assert!(input.handle_key(&key(KeyCode::Backspace)));
    assert_eq!(input.value(), "a");

    // Ctrl-modified keys pass through for app keybinds.
    let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert!(!input.handle_key(&ctrl_s));
    assert_eq!(input.value(), "a");
}

#[test]
fn test_checkbox_toggle() {
    let checkbox = Checkbox::with_label("Accept terms and conditions");
    assert!(!checkbox.is_checked());

    checkbox.toggle();
    assert!(checkbox.is_checked());

    assert!(checkbox.handle_key(&key(KeyCode::Char(' '))));
    assert!(!checkbox.is_checked());
}

#[test]
fn test_check_group_membership() {
    let group = CheckGroup::with_options(vec!["High", "Medium", "Low"]);
    assert_eq!(group.len(), 3);
    assert_eq!(group.selected_count(), 0);

    group.toggle(0);
    group.toggle(2);
    assert!(group.is_selected(0));
    assert!(!group.is_selected(1));
    assert_eq!(group.selected_indices(), vec![0, 2]);

    // Toggling twice restores the set.
    group.toggle(0);
    group.toggle(0);
    assert_eq!(group.selected_indices(), vec![0, 2]);

    // Out-of-range indices are ignored.
    group.toggle(7);
    assert_eq!(group.selected_count(), 2);
}

#[test]
fn test_check_group_cursor_navigation() {
    let group = CheckGroup::with_options(vec!["High", "Medium", "Low"]);

    assert!(group.handle_key(&key(KeyCode::Down)));
    assert_eq!(group.cursor(), 1);

    assert!(group.handle_key(&key(KeyCode::Char(' '))));
    assert!(group.is_selected(1));

    // Cursor clamps at both ends.
    group.cursor_down();
    group.cursor_down();
    assert_eq!(group.cursor(), 2);
    group.cursor_up();
    group.cursor_up();
    group.cursor_up();
    assert_eq!(group.cursor(), 0);
}

#[test]
fn test_select_placeholder_and_selection() {
    let select = Select::with_placeholder("Select ...");
    select.set_options(vec!["0", "1", "2", "3", "4", "5"]);

    assert_eq!(select.selection(), None);
    assert_eq!(select.selected_label(), None);

    select.select(3);
    assert_eq!(select.selection(), Some(3));
    assert_eq!(select.selected_label().as_deref(), Some("3"));

    select.clear_selection();
    assert_eq!(select.selection(), None);
}

#[test]
fn test_select_dropdown_commit() {
    let select = Select::new();
    select.set_options(vec!["0", "1", "2"]);

    assert!(!select.is_open());
    assert!(select.handle_key(&key(KeyCode::Enter)));
    assert!(select.is_open());

    assert!(select.handle_key(&key(KeyCode::Down)));
    assert!(select.handle_key(&key(KeyCode::Down)));
    assert!(select.handle_key(&key(KeyCode::Enter)));

    assert!(!select.is_open());
    assert_eq!(select.selection(), Some(2));
}

#[test]
fn test_select_escape_closes_without_committing() {
    let select = Select::new();
    select.set_options(vec!["0", "1", "2"]);
    select.select(1);

    select.open();
    select.cursor_down();
    assert!(select.handle_key(&key(KeyCode::Esc)));

    assert!(!select.is_open());
    assert_eq!(select.selection(), Some(1));

    // Esc while closed is not the select's business.
    assert!(!select.handle_key(&key(KeyCode::Esc)));
}

#[test]
fn test_select_open_starts_on_selection() {
    let select = Select::new();
    select.set_options(vec!["0", "1", "2", "3"]);
    select.select(2);

    select.open();
    assert_eq!(select.cursor(), 2);
}

#[test]
fn test_submission_state_machine() {
    let submission = Submission::new();
    assert_eq!(submission.state(), SubmitState::Idle);
    assert!(!submission.is_pending());

    assert!(submission.begin());
    assert!(submission.is_pending());

    // Re-entry is refused while pending.
    assert!(!submission.begin());
    assert!(submission.is_pending());

    submission.complete();
    assert!(submission.is_done());

    // A completed submission can be started again.
    assert!(submission.begin());
    assert!(submission.is_pending());

    submission.reset();
    assert!(submission.is_idle());
}

#[test]
fn test_submission_complete_requires_pending() {
    let submission = Submission::new();
    submission.complete();
    assert_eq!(submission.state(), SubmitState::Idle);
}

#[test]
fn test_widget_dirty_tracking() {
    let input = Input::new();
    input.clear_dirty();
    assert!(!input.is_dirty());

    input.insert_char('x');
    assert!(input.is_dirty());
    input.clear_dirty();
    assert!(!input.is_dirty());

    // Clones share state and dirty flags.
    let clone = input.clone();
    clone.set_value("shared");
    assert!(input.is_dirty());
    assert_eq!(input.value(), "shared");
}
