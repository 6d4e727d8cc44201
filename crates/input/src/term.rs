//! Terminal key translation.
//!
//! Maps `crossterm` key codes onto DOM `KeyboardEvent.code` strings so a
//! terminal host can feed the same [`KeyRegistry`](crate::KeyRegistry) as the
//! browser bridge. Letters map by position name (`'a'` and `'A'` are both
//! `KeyA`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const LETTER_CODES: [&str; 26] = [
    "KeyA", "KeyB", "KeyC", "KeyD", "KeyE", "KeyF", "KeyG", "KeyH", "KeyI", "KeyJ", "KeyK",
    "KeyL", "KeyM", "KeyN", "KeyO", "KeyP", "KeyQ", "KeyR", "KeyS", "KeyT", "KeyU", "KeyV",
    "KeyW", "KeyX", "KeyY", "KeyZ",
];

const DIGIT_CODES: [&str; 10] = [
    "Digit0", "Digit1", "Digit2", "Digit3", "Digit4", "Digit5", "Digit6", "Digit7", "Digit8",
    "Digit9",
];

/// DOM code for a terminal key, if it has one.
pub fn dom_code(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Char(' ') => Some("Space"),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            let i = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            Some(LETTER_CODES[i])
        }
        KeyCode::Char(c) if c.is_ascii_digit() => Some(DIGIT_CODES[(c as u8 - b'0') as usize]),
        KeyCode::Esc => Some("Escape"),
        KeyCode::Enter => Some("Enter"),
        KeyCode::Tab => Some("Tab"),
        KeyCode::Backspace => Some("Backspace"),
        KeyCode::Left => Some("ArrowLeft"),
        KeyCode::Right => Some("ArrowRight"),
        KeyCode::Up => Some("ArrowUp"),
        KeyCode::Down => Some("ArrowDown"),
        _ => None,
    }
}

/// Check if key should quit the host.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
