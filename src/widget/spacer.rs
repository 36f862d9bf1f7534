//! Spacer: blank filler.

use super::{Action, Context, Participant};
use crate::block::Block;
use crate::input::Event;
use crate::layout::{FocusState, Size};
use crate::style::Style;

/// Empty pane that only takes up space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacer {
    style: Style,
    size: Size,
}

impl Spacer {
    /// Create a spacer.
    pub const fn new() -> Self {
        Self {
            style: Style::RESET,
            size: Size::ZERO,
        }
    }

    /// Fill with a style (usually a background color).
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Participant for Spacer {
    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn focus_state(&self) -> FocusState {
        FocusState::NotFocusable
    }

    fn update(&mut self, _event: &Event, _cx: &mut Context<'_>) -> Option<Action> {
        None
    }

    fn view(&self) -> Block {
        let mut block = Block::with_size(self.size);
        block.fill_style(self.style);
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacer_is_blank() {
        let mut spacer = Spacer::new();
        spacer.set_size(Size::new(3, 2));
        assert_eq!(spacer.view().lines(), vec!["   ", "   "]);
        assert_eq!(spacer.focus_state(), FocusState::NotFocusable);
    }
}
