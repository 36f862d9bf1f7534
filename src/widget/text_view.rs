//! Text View: static, non-focusable text.

use super::{Action, Context, Participant};
use crate::block::Block;
use crate::input::Event;
use crate::layout::{FocusState, Size};
use crate::style::{Decoration, Style};

/// Static text cropped to its assigned size.
#[derive(Debug, Clone, Default)]
pub struct TextView {
    text: String,
    style: Style,
    size: Size,
}

impl TextView {
    /// Create a text view.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::RESET,
            size: Size::ZERO,
        }
    }

    /// Set the text style.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Participant for TextView {
    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn focus_state(&self) -> FocusState {
        FocusState::NotFocusable
    }

    fn on_focus(&mut self, base: &Decoration) -> (Decoration, Option<Action>) {
        (*base, None)
    }

    fn update(&mut self, _event: &Event, _cx: &mut Context<'_>) -> Option<Action> {
        None
    }

    fn view(&self) -> Block {
        Block::from_text_sized(&self.text, self.size, self.style)
    }
}
