//! Navigation key bindings.

use super::{Key, KeyCode, ParseKeyError};

/// A navigation action handled by the active container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Stop the program.
    Quit,
    /// Focus the next focusable sibling.
    CycleForward,
    /// Focus the previous focusable sibling.
    CycleBackward,
    /// Descend into the focused child.
    Enter,
    /// Leave the current scope.
    Escape,
}

/// Keys mapped to navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Quit key (default: `ctrl+c`).
    pub quit: Key,
    /// Cycle-forward key (default: `tab`).
    pub cycle_forward: Key,
    /// Cycle-backward key (default: `shift+tab`).
    pub cycle_backward: Key,
    /// Enter key (default: `enter`).
    pub enter: Key,
    /// Escape key (default: `esc`).
    pub escape: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: Key::ctrl('c'),
            cycle_forward: Key::from(KeyCode::Tab),
            cycle_backward: Key::from(KeyCode::BackTab),
            enter: Key::from(KeyCode::Enter),
            escape: Key::from(KeyCode::Esc),
        }
    }
}

impl KeyBindings {
    /// Build bindings from canonical key strings.
    ///
    /// # Errors
    ///
    /// Returns the first key string that fails to parse.
    pub fn parse(
        quit: &str,
        cycle_forward: &str,
        cycle_backward: &str,
        enter: &str,
        escape: &str,
    ) -> Result<Self, ParseKeyError> {
        Ok(Self {
            quit: quit.parse()?,
            cycle_forward: cycle_forward.parse()?,
            cycle_backward: cycle_backward.parse()?,
            enter: enter.parse()?,
            escape: escape.parse()?,
        })
    }

    /// Map a key to its navigation action.
    ///
    /// Earlier bindings win when two actions share a key.
    pub fn classify(&self, key: &Key) -> Option<NavKey> {
        [
            (self.quit, NavKey::Quit),
            (self.cycle_forward, NavKey::CycleForward),
            (self.cycle_backward, NavKey::CycleBackward),
            (self.enter, NavKey::Enter),
            (self.escape, NavKey::Escape),
        ]
        .into_iter()
        .find_map(|(bound, nav)| (bound == *key).then_some(nav))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.quit.to_string(), "ctrl+c");
        assert_eq!(bindings.cycle_forward.to_string(), "tab");
        assert_eq!(bindings.cycle_backward.to_string(), "shift+tab");
        assert_eq!(bindings.enter.to_string(), "enter");
        assert_eq!(bindings.escape.to_string(), "esc");
    }

    #[test]
    fn test_classify() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.classify(&Key::ctrl('c')), Some(NavKey::Quit));
        assert_eq!(bindings.classify(&Key::from(KeyCode::Tab)), Some(NavKey::CycleForward));
        assert_eq!(bindings.classify(&Key::from(KeyCode::BackTab)), Some(NavKey::CycleBackward));
        assert_eq!(bindings.classify(&Key::from(KeyCode::Enter)), Some(NavKey::Enter));
        assert_eq!(bindings.classify(&Key::from(KeyCode::Esc)), Some(NavKey::Escape));
        assert_eq!(bindings.classify(&Key::char('c')), None);
    }

    #[test]
    fn test_parse_custom() {
        let bindings = KeyBindings::parse("q", "right", "left", "space", "backspace").unwrap();
        assert_eq!(bindings.classify(&Key::char('q')), Some(NavKey::Quit));
        assert_eq!(bindings.classify(&Key::from(KeyCode::Tab)), None);
        assert_eq!(bindings.classify(&Key::char(' ')), Some(NavKey::Enter));
    }

    #[test]
    fn test_parse_error() {
        let err = KeyBindings::parse("ctrl+c", "tab", "nope", "enter", "esc").unwrap_err();
        assert_eq!(err, ParseKeyError::UnknownKey("nope".to_string()));
    }
}
