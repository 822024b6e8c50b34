//! Translation from crossterm key events to editor key events.

use crate::editor::{KeyCode, KeyEvent};
use crossterm::event::{KeyCode as TermKey, KeyEvent as TermKeyEvent, KeyModifiers};

/// Editor event for a terminal key, or `None` for keys the editor has no
/// notion of (function keys, media keys, ...).
pub fn translate_key(key: &TermKeyEvent) -> Option<KeyEvent> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let code = match key.code {
        TermKey::Enter => KeyCode::Enter,
        TermKey::Up => KeyCode::Up,
        TermKey::Down => KeyCode::Down,
        TermKey::Left => KeyCode::Left,
        TermKey::Right => KeyCode::Right,
        TermKey::Home => KeyCode::Home,
        TermKey::End => KeyCode::End,
        TermKey::Tab => KeyCode::Tab,
        TermKey::Backspace => KeyCode::Backspace,
        TermKey::Delete => KeyCode::Delete,
        TermKey::Esc => KeyCode::Esc,
        TermKey::Char(ch) if control => KeyCode::Char(ch.to_ascii_lowercase()),
        TermKey::Char(ch) => KeyCode::Char(ch),
        _ => return None,
    };
    // Alt-chords never insert text.
    if key.modifiers.contains(KeyModifiers::ALT) {
        return Some(KeyEvent {
            code,
            control,
            printable: None,
        });
    }
    Some(KeyEvent::new(code, control))
}
