//! Line Editor: single-line edit buffer with a cursor.
//!
//! Not a participant on its own; [`Table`](super::Table) uses one for cell
//! editing and [`TextEditor`](super::TextEditor) keeps one per line.

use crate::block::{display_width, Block};
use crate::input::{Key, KeyCode};
use crate::style::Style;

/// Editable text plus a cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    /// Current text content.
    content: String,
    /// Cursor position as a byte offset on a char boundary.
    cursor: usize,
    /// Maximum number of chars, 0 = unlimited.
    char_limit: usize,
}

impl LineEditor {
    /// Create an empty editor.
    pub const fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            char_limit: 0,
        }
    }

    /// Create an editor holding `text`, cursor at the end.
    pub fn with_value(text: &str) -> Self {
        let mut editor = Self::new();
        editor.set_value(text);
        editor
    }

    /// Limit the number of chars that can be typed.
    #[must_use]
    pub const fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    /// Get the current text.
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Replace the text, moving the cursor to the end.
    ///
    /// Control characters are dropped.
    pub fn set_value(&mut self, text: &str) {
        self.content = text.chars().filter(|c| !c.is_control()).collect();
        self.cursor = self.content.len();
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Check if the editor is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor byte offset.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> usize {
        display_width(&self.content[..self.cursor])
    }

    /// Check if the cursor is at the start.
    pub const fn at_start(&self) -> bool {
        self.cursor == 0
    }

    /// Check if the cursor is at the end.
    pub fn at_end(&self) -> bool {
        self.cursor == self.content.len()
    }

    fn has_room(&self) -> bool {
        self.char_limit == 0 || self.content.chars().count() < self.char_limit
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() || !self.has_room() {
            return;
        }
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert text at the cursor, skipping control characters.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.content[..self.cursor]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to start.
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn cursor_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Place the cursor at the last char boundary not past `column`.
    pub fn set_cursor_column(&mut self, column: usize) {
        let mut used = 0;
        self.cursor = 0;
        for (idx, c) in self.content.char_indices() {
            let w = display_width(&self.content[idx..idx + c.len_utf8()]);
            if used + w > column {
                return;
            }
            used += w;
            self.cursor = idx + c.len_utf8();
        }
    }

    /// Split at the cursor: keep the head, return the tail as a new editor
    /// with its cursor at the start.
    pub fn split_off(&mut self) -> Self {
        let tail = self.content.split_off(self.cursor);
        Self {
            content: tail,
            cursor: 0,
            char_limit: self.char_limit,
        }
    }

    /// Append text at the end without moving the cursor.
    pub fn append(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Apply an editing key. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        if let Some(c) = key.text() {
            self.insert_char(c);
            return true;
        }
        match key.code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(),
            KeyCode::Home => self.cursor_home(),
            KeyCode::End => self.cursor_end(),
            _ => return false,
        }
        true
    }

    /// Render one row `width` columns wide, scrolled so the cursor stays
    /// visible. With `cursor_style`, the cursor cell is drawn in it.
    pub fn render(&self, width: u16, style: Style, cursor_style: Option<Style>) -> Block {
        let mut block = Block::new(width, 1);
        block.fill_style(style);
        if width == 0 {
            return block;
        }

        // Columns before the cursor that are scrolled out of view.
        let cursor_col = self.cursor_column();
        let scroll = (cursor_col + 1).saturating_sub(usize::from(width));

        let mut col = 0usize;
        let mut x = 0u16;
        for (idx, c) in self.content.char_indices() {
            let s = &self.content[idx..idx + c.len_utf8()];
            let w = display_width(s);
            if col >= scroll {
                let cell_style = match cursor_style {
                    Some(cs) if idx == self.cursor => cs,
                    _ => style,
                };
                if block.set_str(x, 0, s, cell_style) == 0 && w > 0 {
                    break;
                }
                x = x.saturating_add(super::to_u16(w));
            }
            col += w;
        }

        if let Some(cs) = cursor_style {
            if self.at_end() && x < width {
                block.set_str(x, 0, " ", cs);
            }
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Modifiers, Rgb};

    #[test]
    fn test_insert_and_backspace() {
        let mut editor = LineEditor::new();
        editor.insert_char('H');
        editor.insert_char('i');
        assert_eq!(editor.value(), "Hi");
        assert_eq!(editor.cursor(), 2);

        editor.backspace();
        assert_eq!(editor.value(), "H");
    }

    #[test]
    fn test_cursor_movement() {
        let mut editor = LineEditor::with_value("Hello");
        editor.cursor_left();
        assert_eq!(editor.cursor(), 4);
        editor.cursor_home();
        assert!(editor.at_start());
        editor.cursor_right();
        assert_eq!(editor.cursor(), 1);
        editor.cursor_end();
        assert!(editor.at_end());
    }

    #[test]
    fn test_multibyte() {
        let mut editor = LineEditor::with_value("héllo");
        editor.cursor_home();
        editor.cursor_right();
        editor.cursor_right();
        assert_eq!(editor.cursor(), 3);
        editor.backspace();
        assert_eq!(editor.value(), "hllo");
        editor.delete();
        assert_eq!(editor.value(), "hlo");
    }

    #[test]
    fn test_char_limit() {
        let mut editor = LineEditor::new().with_char_limit(3);
        editor.insert_str("abcdef");
        assert_eq!(editor.value(), "abc");
    }

    #[test]
    fn test_handle_key() {
        let mut editor = LineEditor::new();
        assert!(editor.handle_key(&Key::char('x')));
        assert!(editor.handle_key(&Key::from(KeyCode::Left)));
        assert!(editor.handle_key(&Key::char('y')));
        assert_eq!(editor.value(), "yx");
        assert!(!editor.handle_key(&Key::ctrl('x')));
        assert!(!editor.handle_key(&Key::from(KeyCode::Enter)));
    }

    #[test]
    fn test_split_and_append() {
        let mut editor = LineEditor::with_value("hello");
        editor.set_cursor_column(2);
        let tail = editor.split_off();
        assert_eq!(editor.value(), "he");
        assert_eq!(tail.value(), "llo");
        assert!(tail.at_start());

        editor.append(tail.value());
        assert_eq!(editor.value(), "hello");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_set_cursor_column_clamps() {
        let mut editor = LineEditor::with_value("日本");
        editor.set_cursor_column(3);
        assert_eq!(editor.cursor_column(), 2);
        editor.set_cursor_column(100);
        assert!(editor.at_end());
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let editor = LineEditor::with_value("abcdefgh");
        let block = editor.render(4, Style::RESET, None);
        assert_eq!(block.lines(), vec!["fgh "]);

        let mut editor = editor;
        editor.cursor_home();
        let block = editor.render(4, Style::RESET, None);
        assert_eq!(block.lines(), vec!["abcd"]);
    }

    #[test]
    fn test_render_cursor_cell() {
        let cursor = Style::new().bg(Rgb::ACCENT).add_modifier(Modifiers::REVERSED);
        let mut editor = LineEditor::with_value("ab");
        editor.cursor_left();
        let block = editor.render(5, Style::RESET, Some(cursor));
        assert_eq!(block.get(1, 0).unwrap().style(), cursor);
        assert_eq!(block.get(0, 0).unwrap().style(), Style::RESET);
    }
}
