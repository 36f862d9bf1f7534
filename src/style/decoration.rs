//! Pane decorations: border and padding drawn around a child's content.
//!
//! The layout engine needs exactly two things from a decoration: how many
//! cells it adds per axis ([`Decoration::frame_size`]) and how to wrap a
//! rendered block ([`Decoration::render`]).

use super::{Rgb, Style};
use crate::block::{Block, Cell};
use crate::layout::Direction;

/// Border line set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BorderKind {
    /// No border; adds no overhead.
    #[default]
    None,
    /// `┌─┐` single line.
    Plain,
    /// `╭─╮` single line, rounded corners.
    Rounded,
    /// `┏━┓` heavy line. Used to mark focus.
    Thick,
    /// `╔═╗` double line.
    Double,
    /// `+-+` ASCII only.
    Ascii,
}

struct BorderGlyphs {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl BorderKind {
    const fn glyphs(self) -> Option<BorderGlyphs> {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            Self::None => return None,
            Self::Plain => ("┌", "┐", "└", "┘", "─", "│"),
            Self::Rounded => ("╭", "╮", "╰", "╯", "─", "│"),
            Self::Thick => ("┏", "┓", "┗", "┛", "━", "┃"),
            Self::Double => ("╔", "╗", "╚", "╝", "═", "║"),
            Self::Ascii => ("+", "+", "+", "+", "-", "|"),
        };
        Some(BorderGlyphs {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        })
    }

    /// Cells the border takes on each side.
    #[inline]
    pub const fn thickness(self) -> u16 {
        match self {
            Self::None => 0,
            _ => 1,
        }
    }
}

/// Blank cells between the border and the content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Padding {
    /// Rows above the content.
    pub top: u16,
    /// Columns right of the content.
    pub right: u16,
    /// Rows below the content.
    pub bottom: u16,
    /// Columns left of the content.
    pub left: u16,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Padding in CSS order: top, right, bottom, left.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same padding on every side.
    pub const fn uniform(n: u16) -> Self {
        Self::new(n, n, n, n)
    }

    /// `vertical` rows above and below, `horizontal` columns left and right.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total columns.
    pub const fn horizontal(self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Total rows.
    pub const fn vertical(self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// Cells a decoration adds around content, per axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FrameSize {
    /// Columns added (left + right).
    pub horizontal: u16,
    /// Rows added (top + bottom).
    pub vertical: u16,
}

impl FrameSize {
    /// No overhead.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a frame size.
    pub const fn new(horizontal: u16, vertical: u16) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Overhead along `direction`.
    #[inline]
    pub const fn along(self, direction: Direction) -> u16 {
        match direction {
            Direction::Horizontal => self.horizontal,
            Direction::Vertical => self.vertical,
        }
    }

    /// Overhead perpendicular to `direction`.
    #[inline]
    pub const fn across(self, direction: Direction) -> u16 {
        self.along(direction.cross())
    }
}

/// Border, padding and colors drawn around a pane.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Decoration {
    /// Border line set.
    pub border: BorderKind,
    /// Space inside the border.
    pub padding: Padding,
    /// Base style for content and padding cells.
    pub style: Style,
    /// Style of the border glyphs, on top of `style`.
    pub border_style: Style,
}

impl Decoration {
    /// A decoration that draws nothing.
    pub const fn new() -> Self {
        Self {
            border: BorderKind::None,
            padding: Padding::ZERO,
            style: Style::RESET,
            border_style: Style::RESET,
        }
    }

    /// A decoration with the given border.
    pub const fn bordered(border: BorderKind) -> Self {
        Self::new().border(border)
    }

    /// Set the border.
    #[must_use]
    pub const fn border(mut self, border: BorderKind) -> Self {
        self.border = border;
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the base style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the border style.
    #[must_use]
    pub const fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Cells this decoration adds around its content.
    pub const fn frame_size(&self) -> FrameSize {
        let border = self.border.thickness() * 2;
        FrameSize::new(
            border.saturating_add(self.padding.horizontal()),
            border.saturating_add(self.padding.vertical()),
        )
    }

    /// The focus overlay: the same decoration with a thick, accented border.
    #[must_use]
    pub fn focused(&self) -> Self {
        Self {
            border: BorderKind::Thick,
            border_style: self.border_style.fg(Rgb::ACCENT),
            ..*self
        }
    }

    /// Wrap `content` in padding and border.
    ///
    /// With `width`, the padded area is forced to exactly that many columns
    /// (content cropped or padded to fit); otherwise the content keeps its
    /// own width. The result is `content + frame_size()` cells.
    pub fn render(&self, content: &Block, width: Option<u16>) -> Block {
        let frame = self.frame_size();
        let inner_width = width.map_or(content.width(), |w| {
            w.saturating_sub(self.padding.horizontal())
        });
        let inner_height = content.height();

        let outer_width = inner_width.saturating_add(frame.horizontal);
        let outer_height = inner_height.saturating_add(frame.vertical);

        let mut out = Block::new(outer_width, outer_height);
        let edge = self.border.thickness();
        out.blit(
            &content.fit(inner_width, inner_height),
            edge.saturating_add(self.padding.left),
            edge.saturating_add(self.padding.top),
        );
        out.fill_style(self.style);

        if let Some(glyphs) = self.border.glyphs() {
            self.draw_border(&mut out, &glyphs);
        }
        out
    }

    fn draw_border(&self, out: &mut Block, glyphs: &BorderGlyphs) {
        let (w, h) = (out.width(), out.height());
        if w == 0 || h == 0 {
            return;
        }
        let style = self.style.patch(self.border_style);
        let right = w - 1;
        let bottom = h - 1;

        for x in 1..right {
            out.set(x, 0, Cell::new(glyphs.horizontal, style));
            out.set(x, bottom, Cell::new(glyphs.horizontal, style));
        }
        for y in 1..bottom {
            out.set(0, y, Cell::new(glyphs.vertical, style));
            out.set(right, y, Cell::new(glyphs.vertical, style));
        }
        out.set(0, 0, Cell::new(glyphs.top_left, style));
        out.set(right, 0, Cell::new(glyphs.top_right, style));
        out.set(0, bottom, Cell::new(glyphs.bottom_left, style));
        out.set(right, bottom, Cell::new(glyphs.bottom_right, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Size;

    #[test]
    fn test_frame_size() {
        assert_eq!(Decoration::new().frame_size(), FrameSize::ZERO);
        assert_eq!(
            Decoration::bordered(BorderKind::Rounded).frame_size(),
            FrameSize::new(2, 2)
        );
        let padded = Decoration::bordered(BorderKind::Plain).padding(Padding::symmetric(1, 2));
        assert_eq!(padded.frame_size(), FrameSize::new(6, 4));
        assert_eq!(padded.frame_size().along(Direction::Horizontal), 6);
        assert_eq!(padded.frame_size().across(Direction::Horizontal), 4);
    }

    #[test]
    fn test_focused_adds_thick_border() {
        let base = Decoration::new();
        let focused = base.focused();
        assert_eq!(focused.border, BorderKind::Thick);
        assert_eq!(focused.frame_size(), FrameSize::new(2, 2));
        assert_ne!(base.frame_size(), focused.frame_size());

        let rounded = Decoration::bordered(BorderKind::Rounded);
        assert_eq!(rounded.focused().frame_size(), rounded.frame_size());
    }

    #[test]
    fn test_render_border() {
        let content = Block::from_text("hi", Style::RESET);
        let out = Decoration::bordered(BorderKind::Plain).render(&content, None);
        assert_eq!(out.size(), Size::new(4, 3));
        assert_eq!(out.lines(), vec!["┌──┐", "│hi│", "└──┘"]);
    }

    #[test]
    fn test_render_padding_and_width() {
        let content = Block::from_text("abc", Style::RESET);
        let deco = Decoration::bordered(BorderKind::Ascii).padding(Padding::symmetric(0, 1));
        let out = deco.render(&content, Some(4));
        assert_eq!(out.lines(), vec!["+----+", "| ab |", "+----+"]);
    }

    #[test]
    fn test_render_no_border_is_identity() {
        let content = Block::from_text("x\ny", Style::RESET);
        let out = Decoration::new().render(&content, None);
        assert_eq!(out, content);
    }
}
