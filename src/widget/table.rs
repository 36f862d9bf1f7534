//! Table Widget: bordered grid with in-place cell editing.
//!
//! The header row is selectable (and editable when the table allows it).
//! Column widths are split equally across the assigned width; values that
//! do not fit are truncated with `...`.

use super::{to_u16, truncate, Action, Context, LineEditor, Participant};
use crate::block::Block;
use crate::input::{Event, KeyCode};
use crate::layout::{FocusState, Size};
use crate::style::{Modifiers, Rgb, Style};
use tracing::debug;

/// Top border, header, separator, bottom border and status line.
const CHROME_ROWS: u16 = 5;
/// Width given to columns before the first size assignment.
const MIN_INITIAL_WIDTH: usize = 10;
/// Longest value the cell editor accepts.
const EDIT_CHAR_LIMIT: usize = 500;

/// Colors for the table widget.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Header cells.
    pub header: Style,
    /// Editable body cells.
    pub cell: Style,
    /// The selected cell.
    pub selected: Style,
    /// The cell being edited.
    pub edit: Style,
    /// Cursor inside the cell being edited.
    pub edit_cursor: Style,
    /// Cells that cannot be edited.
    pub uneditable: Style,
    /// Grid lines.
    pub border: Style,
    /// Status line.
    pub status: Style,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            header: Style::new().fg(Rgb::ACCENT).bold(),
            cell: Style::RESET,
            selected: Style::new().bg(Rgb::new(88, 88, 88)),
            edit: Style::new().fg(Rgb::WHITE).bg(Rgb::new(0, 0, 95)),
            edit_cursor: Style::new().fg(Rgb::WHITE).bg(Rgb::new(0, 0, 95)).add_modifier(Modifiers::REVERSED),
            uneditable: Style::new().fg(Rgb::GRAY),
            border: Style::RESET,
            status: Style::new().fg(Rgb::GRAY),
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// Cell text.
    pub value: String,
    /// Whether the cell can be edited.
    pub editable: bool,
}

impl TableCell {
    /// Create a cell.
    pub fn new(value: impl Into<String>, editable: bool) -> Self {
        Self {
            value: value.into(),
            editable,
        }
    }
}

/// Cell being edited: row (`None` = header) and column.
type CellRef = (Option<usize>, usize);

/// A bordered, navigable, editable table.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<TableCell>,
    rows: Vec<Vec<TableCell>>,
    size: Size,
    col_widths: Vec<usize>,
    /// `None` selects the header row.
    selected_row: Option<usize>,
    selected_col: usize,
    editing: Option<CellRef>,
    editor: LineEditor,
    scroll_offset: usize,
    allow_add_rows: bool,
    config: TableConfig,
}

impl Table {
    /// Create a table with the given headers and no rows.
    pub fn new<I, S>(headers: I, editable_headers: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<TableCell> = headers
            .into_iter()
            .map(|h| TableCell::new(h, editable_headers))
            .collect();
        let col_widths = headers
            .iter()
            .map(|h| crate::block::display_width(&h.value).max(MIN_INITIAL_WIDTH))
            .collect();
        Self {
            headers,
            rows: Vec::new(),
            size: Size::ZERO,
            col_widths,
            selected_row: Some(0),
            selected_col: 0,
            editing: None,
            editor: LineEditor::new(),
            scroll_offset: 0,
            allow_add_rows: false,
            config: TableConfig::default(),
        }
    }

    /// Allow `n` to append and `d` to delete rows.
    #[must_use]
    pub const fn with_add_rows(mut self, allow: bool) -> Self {
        self.allow_add_rows = allow;
        self
    }

    /// Use custom colors.
    #[must_use]
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a row. Cells without an entry in `editable` are editable.
    ///
    /// Returns `false` and ignores the row if its length does not match the
    /// header count.
    pub fn add_row<S: AsRef<str>>(&mut self, cells: &[S], editable: &[bool]) -> bool {
        if cells.len() != self.headers.len() {
            return false;
        }
        let row = cells
            .iter()
            .enumerate()
            .map(|(i, c)| TableCell::new(c.as_ref(), editable.get(i).copied().unwrap_or(true)))
            .collect::<Vec<_>>();
        if self.size == Size::ZERO {
            for (width, cell) in self.col_widths.iter_mut().zip(&row) {
                *width = (*width).max(crate::block::display_width(&cell.value));
            }
        }
        self.rows.push(row);
        true
    }

    /// Header cells.
    pub fn headers(&self) -> &[TableCell] {
        &self.headers
    }

    /// Body rows.
    pub fn rows(&self) -> &[Vec<TableCell>] {
        &self.rows
    }

    /// Selected row (`None` = header) and column.
    pub const fn selected(&self) -> (Option<usize>, usize) {
        (self.selected_row, self.selected_col)
    }

    /// Whether a cell is being edited.
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Current column content widths.
    pub fn col_widths(&self) -> &[usize] {
        &self.col_widths
    }

    /// Index of the first visible body row.
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn cell(&self, (row, col): CellRef) -> Option<&TableCell> {
        match row {
            None => self.headers.get(col),
            Some(r) => self.rows.get(r)?.get(col),
        }
    }

    fn cell_mut(&mut self, (row, col): CellRef) -> Option<&mut TableCell> {
        match row {
            None => self.headers.get_mut(col),
            Some(r) => self.rows.get_mut(r)?.get_mut(col),
        }
    }

    fn visible_rows(&self) -> usize {
        usize::from(self.size.height.saturating_sub(CHROME_ROWS).max(1))
    }

    fn adjust_scroll(&mut self) {
        let Some(row) = self.selected_row else {
            self.scroll_offset = 0;
            return;
        };
        let visible = self.visible_rows();
        if row < self.scroll_offset {
            self.scroll_offset = row;
        }
        if row >= self.scroll_offset + visible {
            self.scroll_offset = row + 1 - visible;
        }
    }

    fn add_empty_row(&mut self) {
        let row = vec![TableCell::new("", true); self.headers.len()];
        self.rows.push(row);
        self.selected_row = Some(self.rows.len() - 1);
        self.adjust_scroll();
    }

    fn delete_selected_row(&mut self) {
        let Some(row) = self.selected_row.filter(|&r| r < self.rows.len()) else {
            return;
        };
        self.rows.remove(row);
        if row >= self.rows.len() && row > 0 {
            self.selected_row = Some(row - 1);
        }
        if self.rows.is_empty() {
            self.selected_row = Some(0);
        }
        self.adjust_scroll();
    }

    fn start_edit(&mut self) {
        let target = (self.selected_row, self.selected_col);
        let Some(cell) = self.cell(target).filter(|c| c.editable) else {
            return;
        };
        self.editor = LineEditor::with_value(&cell.value).with_char_limit(EDIT_CHAR_LIMIT);
        self.editing = Some(target);
        debug!(row = ?target.0, col = target.1, "table edit start");
    }

    fn save_edit(&mut self) {
        if let Some(target) = self.editing.take() {
            let value = self.editor.value().trim().to_string();
            if let Some(cell) = self.cell_mut(target) {
                cell.value = value;
            }
        }
    }

    fn cancel_edit(&mut self) {
        self.editing = None;
    }

    fn update_editing(&mut self, event: &Event, cx: &Context<'_>) {
        match event {
            Event::Key(key) if *key == cx.bindings.escape => self.cancel_edit(),
            Event::Key(key) if *key == cx.bindings.enter => self.save_edit(),
            Event::Key(key) => {
                self.editor.handle_key(key);
            }
            Event::Paste(text) => self.editor.insert_str(text),
            _ => {}
        }
    }

    fn status_text(&self) -> String {
        if self.is_editing() {
            return "[EDIT MODE] Enter=Save Esc=Cancel".to_string();
        }
        let row = self.selected_row.map_or(0, |r| r + 1);
        let mut text = format!("↑↓←→=Navigate Enter/e/Space=Edit | Row {row}/{}", self.rows.len());
        if self.allow_add_rows {
            text.push_str(" | n=New d=Delete");
        }
        text
    }

    fn rule(&self, left: &str, mid: &str, right: &str) -> String {
        let segments: Vec<String> = self.col_widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    }

    fn cell_style(&self, target: CellRef, cell: &TableCell) -> Style {
        let selected = (self.selected_row, self.selected_col) == target;
        match target.0 {
            None if selected && !self.is_editing() => self.config.selected,
            None => self.config.header,
            Some(_) if !cell.editable => self.config.uneditable,
            Some(_) if selected => self.config.selected,
            Some(_) => self.config.cell,
        }
    }

    fn render_row(&self, block: &mut Block, y: u16, row: Option<usize>, cells: &[TableCell]) {
        let border = self.config.border;
        block.set_str(0, y, "│", border);
        let mut x = 1u16;
        for (col, (cell, &width)) in cells.iter().zip(&self.col_widths).enumerate() {
            let target = (row, col);
            let padded = to_u16(width + 2);
            if self.editing == Some(target) {
                let edit = self.editor.render(to_u16(width), self.config.edit, Some(self.config.edit_cursor));
                block.set_str(x, y, &" ".repeat(width + 2), self.config.edit);
                block.blit(&edit, x + 1, y);
            } else {
                let style = self.cell_style(target, cell);
                block.set_str(x, y, &" ".repeat(width + 2), style);
                block.set_str(x + 1, y, &truncate(&cell.value, width), style);
            }
            x = x.saturating_add(padded);
            block.set_str(x, y, "│", border);
            x = x.saturating_add(1);
        }
    }
}

impl Participant for Table {
    fn set_size(&mut self, size: Size) {
        self.size = size;
        let cols = self.col_widths.len();
        if cols > 0 {
            let border_chars = 2 + (cols - 1);
            let padding = cols * 2;
            let available = usize::from(size.width)
                .saturating_sub(border_chars + padding)
                .max(cols);
            let base = available / cols;
            let remainder = available % cols;
            for (i, width) in self.col_widths.iter_mut().enumerate() {
                *width = (base + usize::from(i < remainder)).max(1);
            }
        }
        self.adjust_scroll();
    }

    fn focus_state(&self) -> FocusState {
        FocusState::Interactive
    }

    fn on_blur(&mut self) {
        self.cancel_edit();
    }

    fn update(&mut self, event: &Event, cx: &mut Context<'_>) -> Option<Action> {
        if self.is_editing() {
            self.update_editing(event, cx);
            return None;
        }

        let Event::Key(key) = event else {
            return None;
        };
        if *key == cx.bindings.enter {
            self.start_edit();
            return None;
        }

        match (key.code, key.text()) {
            (KeyCode::Up, _) | (_, Some('k')) => {
                self.selected_row = self.selected_row.and_then(|r| r.checked_sub(1));
                self.adjust_scroll();
            }
            (KeyCode::Down, _) | (_, Some('j')) => {
                let next = self.selected_row.map_or(0, |r| r + 1);
                if next < self.rows.len() {
                    self.selected_row = Some(next);
                    self.adjust_scroll();
                }
            }
            (KeyCode::Left, _) | (_, Some('h')) => {
                self.selected_col = self.selected_col.saturating_sub(1);
            }
            (KeyCode::Right, _) | (_, Some('l')) => {
                if self.selected_col + 1 < self.headers.len() {
                    self.selected_col += 1;
                }
            }
            (_, Some('n')) if self.allow_add_rows => self.add_empty_row(),
            (_, Some('d')) if self.allow_add_rows => self.delete_selected_row(),
            (_, Some('e' | ' ')) => self.start_edit(),
            _ => {}
        }
        None
    }

    fn view(&self) -> Block {
        let mut block = Block::with_size(self.size);
        let border = self.config.border;

        block.set_str(0, 0, &self.rule("┌", "┬", "┐"), border);
        self.render_row(&mut block, 1, None, &self.headers);
        block.set_str(0, 2, &self.rule("├", "┼", "┤"), border);

        let mut y = 3u16;
        let visible = self.rows.iter().enumerate().skip(self.scroll_offset).take(self.visible_rows());
        for (index, row) in visible {
            self.render_row(&mut block, y, Some(index), row);
            y = y.saturating_add(1);
        }
        block.set_str(0, y, &self.rule("└", "┴", "┘"), border);

        let status_y = y.saturating_add(1).max(self.size.height.saturating_sub(1));
        block.set_str(0, status_y, &self.status_text(), self.config.status);
        block
    }
}
