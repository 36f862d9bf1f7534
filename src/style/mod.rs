//! Style primitives: colors, text modifiers and decorations.
//!
//! A [`Style`] is a sparse overlay: unset colors mean "inherit from whatever
//! is underneath". Decorations (borders and padding around a pane) live in
//! [`decoration`].

use bitflags::bitflags;

pub mod decoration;

pub use decoration::{BorderKind, Decoration, FrameSize, Padding};

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Muted gray used for hints and disabled content.
    pub const GRAY: Self = Self::new(128, 128, 128);
    /// Accent used for focused borders and cursors.
    pub const ACCENT: Self = Self::new(0, 175, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use panestack::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Foreground, background and modifiers applied to a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Style {
    /// Foreground color, `None` inherits.
    pub fg: Option<Rgb>,
    /// Background color, `None` inherits.
    pub bg: Option<Rgb>,
    /// Text modifiers, merged on patch.
    pub modifiers: Modifiers,
}

impl Style {
    /// The empty style: inherits everything.
    pub const RESET: Self = Self {
        fg: None,
        bg: None,
        modifiers: Modifiers::empty(),
    };

    /// Create an empty style.
    pub const fn new() -> Self {
        Self::RESET
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Add modifiers.
    #[must_use]
    pub fn add_modifier(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Shorthand for `add_modifier(Modifiers::BOLD)`.
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_modifier(Modifiers::BOLD)
    }

    /// Overlay `other` on top of `self`.
    ///
    /// Colors set in `other` win; modifiers are unioned.
    #[must_use]
    pub fn patch(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            modifiers: self.modifiers | other.modifiers,
        }
    }

    /// Check whether this style sets nothing.
    pub fn is_reset(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.modifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_u32(0xFF5500), Rgb::new(255, 85, 0));
        assert_eq!(format!("{:?}", Rgb::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn test_style_patch() {
        let base = Style::new().fg(Rgb::WHITE).bg(Rgb::BLACK);
        let over = Style::new().fg(Rgb::ACCENT).bold();
        let patched = base.patch(over);

        assert_eq!(patched.fg, Some(Rgb::ACCENT));
        assert_eq!(patched.bg, Some(Rgb::BLACK));
        assert!(patched.modifiers.contains(Modifiers::BOLD));
    }

    #[test]
    fn test_style_reset() {
        assert!(Style::RESET.is_reset());
        assert!(!Style::new().bold().is_reset());
    }
}
