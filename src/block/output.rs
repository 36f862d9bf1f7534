//! `FrameWriter`: turns successive root blocks into ANSI output.
//!
//! The first frame, and any frame whose size differs from the previous
//! one, is painted in full after a screen clear. Otherwise only rows that
//! changed are rewritten. SGR state is tracked across cells so unchanged
//! colors and modifiers are not re-emitted.
//!
//! All output is accumulated in one buffer and flushed with a single write.

use super::{Block, Cell};
use crate::style::{Modifiers, Rgb, Style};
use std::io::Write;

/// Last emitted terminal attributes.
#[derive(Debug, Clone, Copy, Default)]
struct SgrState {
    /// `None` when unknown (at startup).
    style: Option<Style>,
}

impl SgrState {
    /// Record that `\x1b[0m` was just written.
    const fn reset(&mut self) {
        self.style = Some(Style::RESET);
    }
}

/// Statistics for one written frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Whether the whole screen was repainted.
    pub full_redraw: bool,
    /// Number of rows rewritten.
    pub rows_written: u16,
}

/// Incremental ANSI renderer for [`Block`] frames.
#[derive(Debug, Default)]
pub struct FrameWriter {
    previous: Option<Block>,
    state: SgrState,
    data: Vec<u8>,
}

impl FrameWriter {
    /// Create a writer with no previous frame.
    pub fn new() -> Self {
        Self {
            previous: None,
            state: SgrState::default(),
            data: Vec::with_capacity(4096),
        }
    }

    /// Force a full repaint on the next frame.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Build the output for `next` and return it.
    ///
    /// The returned bytes are valid until the next call.
    pub fn render(&mut self, next: &Block) -> (&[u8], FrameStats) {
        self.data.clear();
        let mut stats = FrameStats::default();

        let previous = self.previous.take().filter(|p| p.size() == next.size());
        if previous.is_none() {
            stats.full_redraw = true;
            self.data.extend_from_slice(b"\x1b[0m\x1b[2J");
            self.state.reset();
        }

        for y in 0..next.height() {
            let unchanged = previous.as_ref().is_some_and(|p| p.row(y) == next.row(y));
            if unchanged {
                continue;
            }
            self.write_row(next.row(y), y);
            stats.rows_written += 1;
        }

        if stats.rows_written > 0 {
            self.data.extend_from_slice(b"\x1b[0m");
            self.state.reset();
        }

        self.previous = Some(next.clone());
        (&self.data, stats)
    }

    /// Render `next` and flush it to `writer` in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_to<W: Write>(&mut self, next: &Block, writer: &mut W) -> std::io::Result<FrameStats> {
        let (bytes, stats) = self.render(next);
        if !bytes.is_empty() {
            writer.write_all(bytes)?;
            writer.flush()?;
        }
        Ok(stats)
    }

    fn write_row(&mut self, row: &[Cell], y: u16) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{};1H", u32::from(y) + 1);
        for cell in row.iter().filter(|c| !c.is_continuation()) {
            self.apply_style(cell.style());
            self.data.extend_from_slice(cell.symbol().as_bytes());
        }
    }

    fn apply_style(&mut self, next: Style) {
        if self.state.style == Some(next) {
            return;
        }
        let current = match self.state.style {
            // Removing a modifier needs a full reset, which also clears colors.
            Some(current) if current.modifiers.difference(next.modifiers).is_empty() => current,
            _ => {
                self.data.extend_from_slice(b"\x1b[0m");
                Style::RESET
            }
        };

        if current.fg != next.fg {
            match next.fg {
                Some(color) => emit_color(&mut self.data, 38, color),
                None => self.data.extend_from_slice(b"\x1b[39m"),
            }
        }
        if current.bg != next.bg {
            match next.bg {
                Some(color) => emit_color(&mut self.data, 48, color),
                None => self.data.extend_from_slice(b"\x1b[49m"),
            }
        }
        let added = next.modifiers.difference(current.modifiers);
        emit_modifiers(&mut self.data, added);

        self.state.style = Some(next);
    }
}

fn emit_color(output: &mut Vec<u8>, base: u8, color: Rgb) {
    let _ = write!(output, "\x1b[{base};2;{};{};{}m", color.r, color.g, color.b);
}

fn emit_modifiers(output: &mut Vec<u8>, added: Modifiers) {
    const CODES: [(Modifiers, &[u8]); 6] = [
        (Modifiers::BOLD, b"\x1b[1m"),
        (Modifiers::DIM, b"\x1b[2m"),
        (Modifiers::ITALIC, b"\x1b[3m"),
        (Modifiers::UNDERLINE, b"\x1b[4m"),
        (Modifiers::REVERSED, b"\x1b[7m"),
        (Modifiers::STRIKETHROUGH, b"\x1b[9m"),
    ];
    for (flag, code) in CODES {
        if added.contains(flag) {
            output.extend_from_slice(code);
        }
    }
}
