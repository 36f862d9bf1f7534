//! Input events delivered to the participant tree.
//!
//! Keys have a canonical string form (`"ctrl+c"`, `"shift+tab"`, `"esc"`,
//! `"G"`) used both for display and for configuring [`KeyBindings`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

mod bindings;

pub use bindings::{KeyBindings, NavKey};

/// Key codes for keyboard input.
///
/// A subset of crossterm's `KeyCode`, enough for pane navigation and the
/// built-in widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Control only.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };

    /// Check if any modifier is active.
    pub const fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// A key press: code plus modifiers, normalized.
///
/// Shift is folded into the code where the terminal already encodes it:
/// `Char('A')` carries no shift flag and Shift+Tab is always
/// [`KeyCode::BackTab`]. Two keys that print the same compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during the press.
    pub modifiers: KeyModifiers,
}

impl Key {
    /// Create a normalized key.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let code = match code {
            KeyCode::Tab if modifiers.shift => KeyCode::BackTab,
            other => other,
        };
        let shift = match code {
            KeyCode::Char(_) | KeyCode::BackTab => false,
            _ => modifiers.shift,
        };
        Self {
            code,
            modifiers: KeyModifiers { shift, ..modifiers },
        }
    }

    /// An unmodified character.
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    /// Ctrl + character.
    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// The character this key types, if it is an unmodified (or only
    /// shifted) printable character.
    pub const fn text(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.modifiers.control && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.control {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "f{n}"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Left => f.write_str("left"),
            KeyCode::Right => f.write_str("right"),
            KeyCode::Up => f.write_str("up"),
            KeyCode::Down => f.write_str("down"),
            KeyCode::Home => f.write_str("home"),
            KeyCode::End => f.write_str("end"),
            KeyCode::PageUp => f.write_str("pgup"),
            KeyCode::PageDown => f.write_str("pgdown"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::BackTab => f.write_str("shift+tab"),
            KeyCode::Delete => f.write_str("delete"),
            KeyCode::Insert => f.write_str("insert"),
            KeyCode::Esc => f.write_str("esc"),
        }
    }
}

/// Error returned when a key string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    /// The string was empty.
    #[error("empty key string")]
    Empty,
    /// The key name was not recognized.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

fn parse_code(name: &str) -> Option<KeyCode> {
    let code = match name {
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "enter" | "return" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "esc" | "escape" => KeyCode::Esc,
        _ => {
            let mut chars = name.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                (Some('f'), Some(_)) => name[1..]
                    .parse::<u8>()
                    .ok()
                    .filter(|n| (1..=12).contains(n))
                    .map(KeyCode::F),
                _ => None,
            };
        }
    };
    Some(code)
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseKeyError::Empty);
        }
        if s == " " {
            return Ok(Self::char(' '));
        }

        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers.control = true;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers.alt = true;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers.shift = true;
                rest = r;
            } else {
                break;
            }
        }

        parse_code(rest)
            .map(|code| Self::new(code, modifiers))
            .ok_or_else(|| ParseKeyError::UnknownKey(s.to_string()))
    }
}

/// A follow-up event scheduled by a participant and delivered back later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerEvent {
    /// Identifies the participant that scheduled it.
    pub target: u64,
    /// Participant-defined tag; stale tags are ignored by the target.
    pub tag: u64,
}

/// Events routed through the participant tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(Key),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Paste event (bracketed paste).
    Paste(String),

    /// A scheduled follow-up came due.
    Timer(TimerEvent),
}

impl Event {
    /// The key, if this is a key event.
    pub const fn as_key(&self) -> Option<&Key> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<KeyCode> for Event {
    fn from(code: KeyCode) -> Self {
        Self::Key(Key::from(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_canonical() {
        assert_eq!(Key::ctrl('c').to_string(), "ctrl+c");
        assert_eq!(Key::from(KeyCode::Tab).to_string(), "tab");
        assert_eq!(Key::from(KeyCode::BackTab).to_string(), "shift+tab");
        assert_eq!(Key::from(KeyCode::Esc).to_string(), "esc");
        assert_eq!(Key::char(' ').to_string(), "space");
        assert_eq!(Key::char('G').to_string(), "G");
        assert_eq!(Key::from(KeyCode::F(5)).to_string(), "f5");
    }

    #[test]
    fn test_shift_tab_normalizes() {
        let shifted = Key::new(
            KeyCode::BackTab,
            KeyModifiers {
                shift: true,
                ..KeyModifiers::NONE
            },
        );
        assert_eq!(shifted, Key::from(KeyCode::BackTab));
        assert_eq!(shifted.to_string(), "shift+tab");

        let tab = Key::new(
            KeyCode::Tab,
            KeyModifiers {
                shift: true,
                ..KeyModifiers::NONE
            },
        );
        assert_eq!(tab.code, KeyCode::BackTab);
    }

    #[test]
    fn test_parse() {
        assert_eq!("ctrl+c".parse::<Key>(), Ok(Key::ctrl('c')));
        assert_eq!("shift+tab".parse::<Key>(), Ok(Key::from(KeyCode::BackTab)));
        assert_eq!(" ".parse::<Key>(), Ok(Key::char(' ')));
        assert_eq!("space".parse::<Key>(), Ok(Key::char(' ')));
        assert_eq!("G".parse::<Key>(), Ok(Key::char('G')));
        assert_eq!("f12".parse::<Key>(), Ok(Key::from(KeyCode::F(12))));
        assert_eq!("+".parse::<Key>(), Ok(Key::char('+')));
    }

    #[test]
    fn test_parse_roundtrips_display() {
        for name in ["ctrl+c", "tab", "shift+tab", "enter", "esc", "space", "up", "a", "G", "f5"] {
            let key: Key = name.parse().unwrap();
            assert_eq!(key.to_string(), name);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Key>(), Err(ParseKeyError::Empty));
        assert_eq!(
            "hyper+x".parse::<Key>(),
            Err(ParseKeyError::UnknownKey("hyper+x".to_string()))
        );
        assert!("f13".parse::<Key>().is_err());
    }

    #[test]
    fn test_text() {
        assert_eq!(Key::char('x').text(), Some('x'));
        assert_eq!(Key::ctrl('x').text(), None);
        assert_eq!(Key::from(KeyCode::Enter).text(), None);
    }
}
