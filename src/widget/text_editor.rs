//! Text Editor: multi-line editing area.
//!
//! Inactive until the enter binding is pressed. While active, printable
//! keys edit the text and a blinking cursor is driven by scheduled timer
//! events; each activation bumps a generation counter so blink timers from
//! earlier activations are recognized and dropped.

use super::{to_u16, Action, Context, LineEditor, Participant};
use crate::block::Block;
use crate::input::{Event, KeyCode, TimerEvent};
use crate::layout::{FocusState, Size};
use crate::style::{Modifiers, Rgb, Style};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Cursor blink half-period.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

const DEFAULT_PLACEHOLDER: &str = "Type something...";

static NEXT_TARGET: AtomicU64 = AtomicU64::new(1);

/// Colors for the text editor.
#[derive(Debug, Clone)]
pub struct TextEditorConfig {
    /// Text.
    pub text: Style,
    /// Placeholder shown while empty and inactive.
    pub placeholder: Style,
    /// Line number gutter.
    pub line_number: Style,
    /// Cursor cell while visible.
    pub cursor: Style,
}

impl Default for TextEditorConfig {
    fn default() -> Self {
        Self {
            text: Style::RESET,
            placeholder: Style::new().fg(Rgb::GRAY),
            line_number: Style::new().fg(Rgb::GRAY),
            cursor: Style::new().add_modifier(Modifiers::REVERSED),
        }
    }
}

/// Multi-line text editor.
#[derive(Debug, Clone)]
pub struct TextEditor {
    lines: Vec<LineEditor>,
    /// Line holding the cursor.
    row: usize,
    active: bool,
    placeholder: String,
    show_line_numbers: bool,
    /// Bumped on every activation change; blink timers carry it as tag.
    generation: u64,
    cursor_visible: bool,
    target: u64,
    scroll_offset: usize,
    size: Size,
    config: TextEditorConfig,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor {
    /// Create an empty, inactive editor.
    pub fn new() -> Self {
        Self {
            lines: vec![LineEditor::new()],
            row: 0,
            active: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            show_line_numbers: false,
            generation: 0,
            cursor_visible: false,
            target: NEXT_TARGET.fetch_add(1, Ordering::Relaxed),
            scroll_offset: 0,
            size: Size::ZERO,
            config: TextEditorConfig::default(),
        }
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Show a line number gutter.
    #[must_use]
    pub const fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Start with the given text.
    #[must_use]
    pub fn with_value(mut self, text: &str) -> Self {
        self.set_value(text);
        self
    }

    /// Use custom colors.
    #[must_use]
    pub fn with_config(mut self, config: TextEditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Full text, lines joined with `\n`.
    pub fn value(&self) -> String {
        self.lines
            .iter()
            .map(LineEditor::value)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the text. The cursor moves to the end.
    pub fn set_value(&mut self, text: &str) {
        self.lines = split_lines(text).map(LineEditor::with_value).collect();
        self.row = self.lines.len() - 1;
        self.adjust_scroll();
    }

    /// Check if the editor holds no text.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Check if editing is active.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Cursor line and display column.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.current().cursor_column())
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the blinking cursor is currently drawn.
    pub const fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Timer target identifying this editor's blink events.
    pub const fn target(&self) -> u64 {
        self.target
    }

    /// First visible line.
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn current(&self) -> &LineEditor {
        &self.lines[self.row]
    }

    fn current_mut(&mut self) -> &mut LineEditor {
        &mut self.lines[self.row]
    }

    fn blink(&self) -> Action {
        Action::Schedule {
            delay: BLINK_INTERVAL,
            event: Event::Timer(TimerEvent {
                target: self.target,
                tag: self.generation,
            }),
        }
    }

    fn activate(&mut self) -> Action {
        self.active = true;
        self.generation += 1;
        self.cursor_visible = true;
        debug!(target_id = self.target, generation = self.generation, "text editor active");
        self.blink()
    }

    fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.generation += 1;
            self.cursor_visible = false;
            debug!(target_id = self.target, "text editor inactive");
        }
    }

    fn gutter_width(&self) -> usize {
        if self.show_line_numbers {
            self.lines.len().to_string().len().max(3) + 1
        } else {
            0
        }
    }

    fn adjust_scroll(&mut self) {
        let visible = usize::from(self.size.height.max(1));
        if self.row < self.scroll_offset {
            self.scroll_offset = self.row;
        }
        if self.row >= self.scroll_offset + visible {
            self.scroll_offset = self.row + 1 - visible;
        }
    }

    fn newline(&mut self) {
        let tail = self.current_mut().split_off();
        self.row += 1;
        self.lines.insert(self.row, tail);
    }

    fn join_previous(&mut self) {
        let line = self.lines.remove(self.row);
        self.row -= 1;
        let prev = self.current_mut();
        prev.cursor_end();
        prev.append(line.value());
    }

    fn join_next(&mut self) {
        let next = self.lines.remove(self.row + 1);
        self.current_mut().append(next.value());
    }

    fn move_vertical(&mut self, down: bool) {
        let target = if down {
            self.row + 1
        } else {
            match self.row.checked_sub(1) {
                Some(row) => row,
                None => return,
            }
        };
        if target >= self.lines.len() {
            return;
        }
        let column = self.current().cursor_column();
        self.row = target;
        self.current_mut().set_cursor_column(column);
    }

    fn paste(&mut self, text: &str) {
        for (i, segment) in split_lines(text).enumerate() {
            if i > 0 {
                self.newline();
            }
            self.current_mut().insert_str(segment);
        }
    }

    fn edit(&mut self, event: &Event, cx: &Context<'_>) -> Option<Action> {
        match event {
            Event::Timer(timer) => {
                if timer.target != self.target || timer.tag != self.generation {
                    return None;
                }
                self.cursor_visible = !self.cursor_visible;
                return Some(self.blink());
            }
            Event::Paste(text) => self.paste(text),
            Event::Key(key) if *key == cx.bindings.escape => self.deactivate(),
            Event::Key(key) if *key == cx.bindings.enter => self.newline(),
            Event::Key(key) => match key.code {
                KeyCode::Up => self.move_vertical(false),
                KeyCode::Down => self.move_vertical(true),
                KeyCode::Backspace if self.current().at_start() && self.row > 0 => {
                    self.join_previous();
                }
                KeyCode::Delete if self.current().at_end() && self.row + 1 < self.lines.len() => {
                    self.join_next();
                }
                KeyCode::Left if self.current().at_start() && self.row > 0 => {
                    self.row -= 1;
                    self.current_mut().cursor_end();
                }
                KeyCode::Right if self.current().at_end() && self.row + 1 < self.lines.len() => {
                    self.row += 1;
                    self.current_mut().cursor_home();
                }
                _ => {
                    self.current_mut().handle_key(key);
                }
            },
            Event::Resize { .. } => {}
        }
        self.adjust_scroll();
        None
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

impl Participant for TextEditor {
    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.adjust_scroll();
    }

    fn focus_state(&self) -> FocusState {
        FocusState::Interactive
    }

    fn on_blur(&mut self) {
        self.deactivate();
    }

    fn update(&mut self, event: &Event, cx: &mut Context<'_>) -> Option<Action> {
        if self.active {
            return self.edit(event, cx);
        }
        match event {
            Event::Key(key) if *key == cx.bindings.enter => Some(self.activate()),
            _ => None,
        }
    }

    fn view(&self) -> Block {
        let mut block = Block::with_size(self.size);
        let gutter = self.gutter_width();
        let text_width = self.size.width.saturating_sub(to_u16(gutter));

        if self.is_empty() && !self.active {
            if gutter > 0 {
                block.set_str(0, 0, &format!("{:>1$} ", 1, gutter - 1), self.config.line_number);
            }
            block.set_str(to_u16(gutter), 0, &self.placeholder, self.config.placeholder);
            return block;
        }

        let visible = self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(usize::from(self.size.height));
        for (y, (index, line)) in visible.enumerate() {
            let y = to_u16(y);
            if gutter > 0 {
                let number = format!("{:>1$} ", index + 1, gutter - 1);
                block.set_str(0, y, &number, self.config.line_number);
            }
            let row = if self.active && index == self.row {
                let cursor = self.cursor_visible.then_some(self.config.cursor);
                line.render(text_width, self.config.text, cursor)
            } else {
                Block::from_text_sized(line.value(), Size::new(text_width, 1), self.config.text)
            };
            block.blit(&row, to_u16(gutter), y);
        }
        block
    }
}
