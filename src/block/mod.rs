//! Block: a rectangular grid of styled cells.
//!
//! Every participant renders into a `Block` sized to its assigned extent.
//! Containers assemble sibling blocks with [`Block::join_horizontal`] and
//! [`Block::join_vertical`], and the runtime hands the root block to the
//! frame writer in [`output`].
//!
//! Cells are stored in row-major order (`index = y * width + x`). A wide
//! grapheme (CJK, most emoji) occupies its cell plus a continuation cell to
//! its right.

use crate::layout::Size;
use crate::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub mod output;

/// One terminal cell: a grapheme plus its style.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    symbol: String,
    style: Style,
    continuation: bool,
}

impl Cell {
    /// A space with no style.
    pub fn blank() -> Self {
        Self::new(" ", Style::RESET)
    }

    /// Create a cell holding `symbol`.
    pub fn new(symbol: &str, style: Style) -> Self {
        Self {
            symbol: symbol.to_string(),
            style,
            continuation: false,
        }
    }

    /// The trailing half of a wide grapheme.
    fn continuation(style: Style) -> Self {
        Self {
            symbol: String::new(),
            style,
            continuation: true,
        }
    }

    /// The grapheme shown in this cell.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The cell's style.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Replace the cell's style.
    pub const fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Check if this cell is covered by the wide grapheme to its left.
    pub const fn is_continuation(&self) -> bool {
        self.continuation
    }

    fn is_wide(&self) -> bool {
        !self.continuation && self.symbol.width() > 1
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// Display width of `text` in columns, ignoring control characters.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true)
        .filter(|g| !g.chars().any(char::is_control))
        .map(UnicodeWidthStr::width)
        .sum()
}

/// A rectangular grid of cells.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Block {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Block {
    /// Create a blank block of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::blank(); len],
        }
    }

    /// A 0x0 block.
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Create a blank block of the given size.
    pub fn with_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Build a block from multi-line text.
    ///
    /// The block is as wide as the widest line and one row per line.
    pub fn from_text(text: &str, style: Style) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        let mut block = Self::new(width, height);
        block.fill_style(style);
        for (y, line) in (0..height).zip(&lines) {
            block.set_str(0, y, line, style);
        }
        block
    }

    /// Build a block of exactly `size` from text, cropping and padding.
    pub fn from_text_sized(text: &str, size: Size, style: Style) -> Self {
        let mut block = Self::with_size(size);
        block.fill_style(style);
        for (y, line) in (0..size.height).zip(text.split('\n')) {
            block.set_str(0, y, line, style);
        }
        block
    }

    /// Get the block width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the block height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the block dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the block has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (x, y) coordinates to a linear index.
    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Get one row of cells.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// Write text at (x, y), stopping at the right edge.
    ///
    /// Control characters are skipped. A wide grapheme that would straddle
    /// the edge is not written. Returns the number of columns used.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        if y >= self.height {
            return 0;
        }
        let mut col = x;
        for grapheme in text.graphemes(true) {
            if grapheme.chars().any(char::is_control) {
                continue;
            }
            let Ok(width) = u16::try_from(grapheme.width()) else {
                break;
            };
            if width == 0 {
                continue;
            }
            if u32::from(col) + u32::from(width) > u32::from(self.width) {
                break;
            }
            let Some(idx) = self.index_of(col, y) else {
                break;
            };
            self.cells[idx] = Cell::new(grapheme, style);
            for extra in 1..usize::from(width) {
                self.cells[idx + extra] = Cell::continuation(style);
            }
            col += width;
        }
        col - x.min(col)
    }

    /// Put `style` underneath every cell: cell styles still win.
    pub fn fill_style(&mut self, style: Style) {
        for cell in &mut self.cells {
            cell.style = style.patch(cell.style);
        }
    }

    /// Put `style` on top of every cell.
    pub fn patch_style(&mut self, style: Style) {
        for cell in &mut self.cells {
            cell.style = cell.style.patch(style);
        }
    }

    /// Copy `src` into this block with its top-left corner at (x, y).
    ///
    /// Cells falling outside this block are dropped.
    pub fn blit(&mut self, src: &Self, x: u16, y: u16) {
        for sy in 0..src.height {
            let Some(ty) = y.checked_add(sy) else { break };
            if ty >= self.height {
                break;
            }
            for sx in 0..src.width {
                let Some(tx) = x.checked_add(sx) else { break };
                if tx >= self.width {
                    break;
                }
                if let (Some(from), Some(to)) = (src.index_of(sx, sy), self.index_of(tx, ty)) {
                    self.cells[to] = src.cells[from].clone();
                }
            }
        }
        self.repair_row_edges();
    }

    /// Crop or pad to exactly `width` x `height`.
    #[must_use]
    pub fn fit(&self, width: u16, height: u16) -> Self {
        if self.width == width && self.height == height {
            return self.clone();
        }
        let mut out = Self::new(width, height);
        out.blit(self, 0, 0);
        out
    }

    /// Crop or pad to exactly `size`.
    #[must_use]
    pub fn fit_size(&self, size: Size) -> Self {
        self.fit(size.width, size.height)
    }

    /// Blank out wide graphemes whose continuation was cropped away and
    /// continuations that lost their leading half.
    fn repair_row_edges(&mut self) {
        if self.width == 0 {
            return;
        }
        for y in 0..self.height {
            for x in 0..self.width {
                let Some(idx) = self.index_of(x, y) else { continue };
                let orphan_lead = self.cells[idx].is_wide()
                    && (x + 1 >= self.width || !self.cells[idx + 1].continuation);
                let orphan_tail =
                    self.cells[idx].continuation && (x == 0 || !self.cells[idx - 1].is_wide());
                if orphan_lead || orphan_tail {
                    let style = self.cells[idx].style;
                    self.cells[idx] = Cell::new(" ", style);
                }
            }
        }
    }

    /// Join blocks left to right, aligned to the top.
    ///
    /// The result is as tall as the tallest block; shorter blocks are
    /// padded with blank cells underneath.
    pub fn join_horizontal(blocks: &[Self]) -> Self {
        let width = blocks.iter().fold(0u16, |acc, b| acc.saturating_add(b.width));
        let height = blocks.iter().map(|b| b.height).max().unwrap_or(0);
        let mut out = Self::new(width, height);
        let mut x = 0u16;
        for block in blocks {
            out.blit(block, x, 0);
            x = x.saturating_add(block.width);
        }
        out
    }

    /// Join blocks top to bottom, aligned to the left.
    ///
    /// The result is as wide as the widest block; narrower blocks are
    /// padded with blank cells on the right.
    pub fn join_vertical(blocks: &[Self]) -> Self {
        let width = blocks.iter().map(|b| b.width).max().unwrap_or(0);
        let height = blocks.iter().fold(0u16, |acc, b| acc.saturating_add(b.height));
        let mut out = Self::new(width, height);
        let mut y = 0u16;
        for block in blocks {
            out.blit(block, 0, y);
            y = y.saturating_add(block.height);
        }
        out
    }

    /// Plain-text rows, styles dropped.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                self.row(y)
                    .iter()
                    .filter(|c| !c.continuation)
                    .map(Cell::symbol)
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Block")
            .field("size", &self.size())
            .field("lines", &self.lines())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Modifiers, Rgb};

    #[test]
    fn test_block_new_is_blank() {
        let block = Block::new(3, 2);
        assert_eq!(block.size(), Size::new(3, 2));
        assert_eq!(block.lines(), vec!["   ", "   "]);
    }

    #[test]
    fn test_from_text_measures_widest_line() {
        let block = Block::from_text("ab\nabcd", Style::RESET);
        assert_eq!(block.size(), Size::new(4, 2));
        assert_eq!(block.lines(), vec!["ab  ", "abcd"]);
    }

    #[test]
    fn test_from_text_sized_crops_and_pads() {
        let block = Block::from_text_sized("hello\nworld\nextra", Size::new(3, 4), Style::RESET);
        assert_eq!(block.lines(), vec!["hel", "wor", "ext", "   "]);
    }

    #[test]
    fn test_set_str_stops_at_edge() {
        let mut block = Block::new(4, 1);
        let used = block.set_str(1, 0, "xyz123", Style::RESET);
        assert_eq!(used, 3);
        assert_eq!(block.lines(), vec![" xyz"]);
    }

    #[test]
    fn test_wide_grapheme_uses_continuation() {
        let mut block = Block::new(4, 1);
        let used = block.set_str(0, 0, "日本", Style::RESET);
        assert_eq!(used, 4);
        assert!(block.get(1, 0).unwrap().is_continuation());
        assert_eq!(block.lines(), vec!["日本"]);
    }

    #[test]
    fn test_wide_grapheme_not_split_at_edge() {
        let mut block = Block::new(3, 1);
        block.set_str(0, 0, "日本", Style::RESET);
        assert_eq!(block.lines(), vec!["日 "]);
    }

    #[test]
    fn test_fit_crop_drops_half_wide_grapheme() {
        let block = Block::from_text("a日", Style::RESET);
        let cropped = block.fit(2, 1);
        assert_eq!(cropped.lines(), vec!["a "]);
    }

    #[test]
    fn test_join_horizontal_pads_height() {
        let a = Block::from_text("a\na", Style::RESET);
        let b = Block::from_text("bb", Style::RESET);
        let joined = Block::join_horizontal(&[a, b]);
        assert_eq!(joined.size(), Size::new(3, 2));
        assert_eq!(joined.lines(), vec!["abb", "a  "]);
    }

    #[test]
    fn test_join_vertical_pads_width() {
        let a = Block::from_text("aaa", Style::RESET);
        let gap = Block::new(0, 1);
        let b = Block::from_text("b", Style::RESET);
        let joined = Block::join_vertical(&[a, gap, b]);
        assert_eq!(joined.lines(), vec!["aaa", "   ", "b  "]);
    }

    #[test]
    fn test_fill_style_keeps_cell_colors() {
        let mut block = Block::new(2, 1);
        block.set_str(0, 0, "x", Style::new().fg(Rgb::ACCENT));
        block.fill_style(Style::new().fg(Rgb::WHITE).bg(Rgb::BLACK));

        let x = block.get(0, 0).unwrap().style();
        assert_eq!(x.fg, Some(Rgb::ACCENT));
        assert_eq!(x.bg, Some(Rgb::BLACK));
        assert_eq!(block.get(1, 0).unwrap().style().fg, Some(Rgb::WHITE));
    }

    #[test]
    fn test_patch_style_overrides() {
        let mut block = Block::from_text("x", Style::new().fg(Rgb::WHITE));
        block.patch_style(Style::new().fg(Rgb::ACCENT).add_modifier(Modifiers::REVERSED));
        let style = block.get(0, 0).unwrap().style();
        assert_eq!(style.fg, Some(Rgb::ACCENT));
        assert!(style.modifiers.contains(Modifiers::REVERSED));
    }

    #[test]
    fn test_display_width_ignores_controls() {
        assert_eq!(display_width("ab\tc"), 3);
        assert_eq!(display_width("日本"), 4);
    }
}
