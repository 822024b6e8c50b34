//! Key events and the binding table that maps them to editing actions.

use std::collections::HashMap;
use std::fmt;

/// Raw integer key codes as delivered by GUI toolkits.
///
/// Values below 128 are ASCII; navigation keys use the toolkit's
/// extended range.
pub mod codes {
    pub const BACKSPACE: u32 = 8;
    pub const TAB: u32 = 9;
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const DELETE: u32 = 127;
    pub const END: u32 = 312;
    pub const HOME: u32 = 313;
    pub const LEFT: u32 = 314;
    pub const UP: u32 = 315;
    pub const RIGHT: u32 = 316;
    pub const DOWN: u32 = 317;
}

/// Identity of a pressed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Enter,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    Backspace,
    Delete,
    Esc,
    /// A character key. Control chords use the lowercase letter.
    Char(char),
    /// Anything else, by raw code.
    Other(u32),
}

/// One key press delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub control: bool,
    /// Text the key would insert, if it is a plain printable character.
    pub printable: Option<char>,
}

impl KeyEvent {
    /// Build an event, deriving `printable` from the code.
    pub fn new(code: KeyCode, control: bool) -> Self {
        let printable = match code {
            KeyCode::Char(ch) if !control && !ch.is_control() => Some(ch),
            _ => None,
        };
        Self {
            code,
            control,
            printable,
        }
    }

    /// Unmodified key.
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, false)
    }

    /// A typed character.
    pub fn printable(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), false)
    }

    /// Ctrl + letter.
    pub fn ctrl(letter: char) -> Self {
        Self::new(KeyCode::Char(letter.to_ascii_lowercase()), true)
    }

    /// Normalise a raw toolkit key code.
    ///
    /// Control chords arrive as ASCII control codes 1..=26 (Ctrl-A is 1);
    /// they are mapped back to their letter. `printable` is only kept for
    /// unmodified, non-control characters.
    pub fn from_code(code: u32, control: bool, printable: Option<char>) -> Self {
        let key = match code {
            codes::ENTER => KeyCode::Enter,
            codes::TAB => KeyCode::Tab,
            codes::ESCAPE => KeyCode::Esc,
            1..=26 if control => match char::from_u32(u32::from(b'a') + code - 1) {
                Some(letter) => KeyCode::Char(letter),
                None => KeyCode::Other(code),
            },
            codes::BACKSPACE => KeyCode::Backspace,
            codes::DELETE => KeyCode::Delete,
            codes::HOME => KeyCode::Home,
            codes::END => KeyCode::End,
            codes::LEFT => KeyCode::Left,
            codes::RIGHT => KeyCode::Right,
            codes::UP => KeyCode::Up,
            codes::DOWN => KeyCode::Down,
            other => match char::from_u32(other) {
                Some(ch) if !ch.is_control() => KeyCode::Char(if control {
                    ch.to_ascii_lowercase()
                } else {
                    ch
                }),
                _ => KeyCode::Other(other),
            },
        };
        let mut event = Self::new(key, control);
        if event.printable.is_some() {
            event.printable = printable.filter(|ch| !ch.is_control()).or(event.printable);
        }
        event
    }

    fn chord(&self) -> KeyChord {
        KeyChord {
            code: self.code,
            control: self.control,
        }
    }
}

/// Exactly one of these runs per bound key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    Submit,
    HistoryPrevious,
    HistoryNext,
    LineStart,
    LineEnd,
    BackwardChar,
    ForwardChar,
    BackwardDeleteChar,
    DeleteChar,
    KillLine,
    Copy,
    Cut,
    Paste,
    FocusNext,
}

/// Key binding style requested at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Emacs,
    /// Accepted but has no effect yet.
    Other(String),
}

impl EditMode {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "emacs" => Self::Emacs,
            _ => Self::Other(raw.trim().to_string()),
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emacs => f.write_str("emacs"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct KeyChord {
    code: KeyCode,
    control: bool,
}

/// Table from (key, control) to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<KeyChord, EditAction>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::emacs()
    }
}

impl Keymap {
    /// Bindings for `mode`. Every mode currently resolves to Emacs.
    pub fn for_mode(mode: &EditMode) -> Self {
        if let EditMode::Other(name) = mode {
            tracing::debug!(mode = %name, "unsupported edit mode; using emacs bindings");
        }
        Self::emacs()
    }

    /// Emacs-style single-line bindings.
    pub fn emacs() -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
        };
        // Named keys act the same with or without Ctrl.
        for (code, action) in [
            (KeyCode::Enter, EditAction::Submit),
            (KeyCode::Up, EditAction::HistoryPrevious),
            (KeyCode::Down, EditAction::HistoryNext),
            (KeyCode::Home, EditAction::LineStart),
            (KeyCode::End, EditAction::LineEnd),
            (KeyCode::Left, EditAction::BackwardChar),
            (KeyCode::Right, EditAction::ForwardChar),
            (KeyCode::Backspace, EditAction::BackwardDeleteChar),
            (KeyCode::Delete, EditAction::DeleteChar),
            (KeyCode::Tab, EditAction::FocusNext),
        ] {
            keymap.bind(code, false, action);
            keymap.bind(code, true, action);
        }
        for (letter, action) in [
            ('a', EditAction::LineStart),
            ('e', EditAction::LineEnd),
            ('b', EditAction::BackwardChar),
            ('f', EditAction::ForwardChar),
            ('h', EditAction::BackwardDeleteChar),
            ('d', EditAction::DeleteChar),
            ('k', EditAction::KillLine),
            ('c', EditAction::Copy),
            ('x', EditAction::Cut),
            ('v', EditAction::Paste),
        ] {
            keymap.bind(KeyCode::Char(letter), true, action);
        }
        keymap
    }

    /// Add or replace one binding.
    pub fn bind(&mut self, code: KeyCode, control: bool, action: EditAction) {
        self.bindings.insert(KeyChord { code, control }, action);
    }

    /// Action bound to `event`, if any.
    pub fn lookup(&self, event: &KeyEvent) -> Option<EditAction> {
        self.bindings.get(&event.chord()).copied()
    }
}
