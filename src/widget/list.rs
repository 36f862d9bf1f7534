//! List Widget: scrollable list with single or multi-select.
//!
//! Keys once focused: `up`/`k`, `down`/`j`, `g`/`G` move the cursor,
//! `space` or the enter binding toggles the item under the cursor, `a`
//! selects all (when the limit allows), `A` clears and `?` toggles the help
//! line.

use super::{to_u16, truncate, Action, Context, Participant};
use crate::block::{display_width, Block};
use crate::input::{Event, KeyCode};
use crate::layout::{FocusState, Size};
use crate::style::{Rgb, Style};

/// Rows taken by the title and the blank line under it.
const TITLE_ROWS: u16 = 2;
/// Rows taken by the blank line above the help text and the text itself.
const HELP_ROWS: u16 = 2;

/// Colors for the list widget.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Unselected item, cursor elsewhere.
    pub normal: Style,
    /// Item under the cursor.
    pub cursor: Style,
    /// Selected item.
    pub selected: Style,
    /// Selected item under the cursor.
    pub selected_cursor: Style,
    /// Title line.
    pub title: Style,
    /// Help line.
    pub help: Style,
}

impl Default for ListConfig {
    fn default() -> Self {
        let green = Rgb::new(0, 200, 80);
        Self {
            normal: Style::RESET,
            cursor: Style::new().fg(Rgb::BLACK).bg(Rgb::ACCENT).bold(),
            selected: Style::new().fg(green),
            selected_cursor: Style::new().fg(Rgb::BLACK).bg(green).bold(),
            title: Style::new().fg(Rgb::new(215, 95, 255)).bold(),
            help: Style::new().fg(Rgb::GRAY),
        }
    }
}

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Display text.
    pub value: String,
    /// Whether the item is selected.
    pub selected: bool,
}

impl ListItem {
    /// Create an unselected item.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected: false,
        }
    }
}

/// A scrollable, selectable list.
#[derive(Debug, Clone)]
pub struct List {
    items: Vec<ListItem>,
    size: Size,
    cursor: usize,
    scroll_offset: usize,
    /// 0 = unlimited, 1 = single select, n = at most n.
    max_selections: usize,
    title: String,
    show_help: bool,
    config: ListConfig,
}

impl List {
    /// Create a list with the given items, no title and no selection limit.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(ListItem::new).collect(),
            size: Size::ZERO,
            cursor: 0,
            scroll_offset: 0,
            max_selections: 0,
            title: String::new(),
            show_help: true,
            config: ListConfig::default(),
        }
    }

    /// Set the title shown above the items.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Limit selections: 0 unlimited, 1 single select, n at most n.
    #[must_use]
    pub const fn with_max_selections(mut self, max: usize) -> Self {
        self.max_selections = max;
        self
    }

    /// Show or hide the help line.
    #[must_use]
    pub const fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Use custom colors.
    #[must_use]
    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    /// Append an item.
    pub fn add_item(&mut self, value: impl Into<String>) {
        self.items.push(ListItem::new(value));
    }

    /// All items.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Values of the selected items, in list order.
    pub fn selected_values(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.value.as_str())
            .collect()
    }

    /// Deselect everything.
    pub fn clear_selections(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    /// Index of the item under the cursor.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible item.
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Whether the help line is shown.
    pub const fn help_visible(&self) -> bool {
        self.show_help
    }

    fn selected_count(&self) -> usize {
        self.items.iter().filter(|i| i.selected).count()
    }

    fn title_rows(&self) -> u16 {
        if self.title.is_empty() {
            0
        } else {
            TITLE_ROWS
        }
    }

    fn help_rows(&self) -> u16 {
        if self.show_help {
            HELP_ROWS
        } else {
            0
        }
    }

    /// Number of item rows that fit, never less than one.
    fn visible_rows(&self) -> usize {
        let rows = self
            .size
            .height
            .saturating_sub(self.title_rows())
            .saturating_sub(self.help_rows());
        usize::from(rows.max(1))
    }

    fn adjust_scroll(&mut self) {
        let visible = self.visible_rows();
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        if self.cursor >= self.scroll_offset + visible {
            self.scroll_offset = self.cursor + 1 - visible;
        }
    }

    fn move_to(&mut self, index: usize) {
        self.cursor = index.min(self.items.len().saturating_sub(1));
        self.adjust_scroll();
    }

    fn toggle(&mut self, index: usize) {
        let count = self.selected_count();
        let max = self.max_selections;
        let Some(item) = self.items.get(index) else {
            return;
        };

        if item.selected {
            self.items[index].selected = false;
        } else if max == 1 {
            self.clear_selections();
            self.items[index].selected = true;
        } else if max == 0 || count < max {
            self.items[index].selected = true;
        }
    }

    fn select_all(&mut self) {
        if self.max_selections == 0 || self.max_selections >= self.items.len() {
            for item in &mut self.items {
                item.selected = true;
            }
        }
    }

    fn help_text(&self) -> String {
        let count = self.selected_count();
        match self.max_selections {
            1 => format!("↑↓=Move Space/Enter=Select ?=Help | Selected: {count}"),
            0 => format!("↑↓=Move Space=Toggle a/A=All/None g/G=Top/Bottom ?=Help | {count} selected"),
            max => format!("↑↓=Move Space=Toggle a/A=All/None ?=Help | {count}/{max} selected"),
        }
    }

    fn render_item(&self, block: &mut Block, y: u16, index: usize, item: &ListItem) {
        let at_cursor = index == self.cursor;
        let (style, prefix, pad) = match (at_cursor, item.selected) {
            (true, true) => (self.config.selected_cursor, "▶ ✓ ", 1),
            (true, false) => (self.config.cursor, "▶ ", 1),
            (false, true) => (self.config.selected, "  ✓ ", 1),
            (false, false) => (self.config.normal, "    ", 2),
        };

        let width = usize::from(self.size.width);
        let max_text = width.saturating_sub(display_width(prefix) + pad * 2);
        let text = truncate(&item.value, max_text);

        block.set_str(0, y, &" ".repeat(width), style);
        let x = block.set_str(to_u16(pad), y, prefix, style);
        block.set_str(to_u16(pad).saturating_add(x), y, &text, style);
    }
}

impl Participant for List {
    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.adjust_scroll();
    }

    fn focus_state(&self) -> FocusState {
        FocusState::Interactive
    }

    fn update(&mut self, event: &Event, cx: &mut Context<'_>) -> Option<Action> {
        let Event::Key(key) = event else {
            return None;
        };

        if *key == cx.bindings.enter {
            self.toggle(self.cursor);
            return None;
        }

        match (key.code, key.text()) {
            (KeyCode::Up, _) | (_, Some('k')) => {
                if self.cursor > 0 {
                    self.move_to(self.cursor - 1);
                }
            }
            (KeyCode::Down, _) | (_, Some('j')) => {
                if self.cursor + 1 < self.items.len() {
                    self.move_to(self.cursor + 1);
                }
            }
            (_, Some('g')) => self.move_to(0),
            (_, Some('G')) => self.move_to(self.items.len().saturating_sub(1)),
            (_, Some(' ')) => self.toggle(self.cursor),
            (_, Some('a')) => self.select_all(),
            (_, Some('A')) => self.clear_selections(),
            (_, Some('?')) => {
                self.show_help = !self.show_help;
                self.adjust_scroll();
            }
            _ => {}
        }
        None
    }

    fn view(&self) -> Block {
        let mut block = Block::with_size(self.size);
        let mut y = 0u16;

        if !self.title.is_empty() {
            block.set_str(2, y, &self.title, self.config.title);
            y += TITLE_ROWS;
        }

        let visible = self.visible_rows();
        let items = self.items.iter().enumerate().skip(self.scroll_offset).take(visible);
        for (row, (index, item)) in items.enumerate() {
            self.render_item(&mut block, y.saturating_add(to_u16(row)), index, item);
        }
        y = y.saturating_add(to_u16(visible));

        if self.show_help {
            block.set_str(2, y.saturating_add(1), &self.help_text(), self.config.help);
        }
        block
    }
}
