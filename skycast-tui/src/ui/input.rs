//! Keyboard event mapping (Input -> Action).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;

/// Map a key press to its action, if it has one.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}
