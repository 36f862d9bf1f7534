//! Participant trait: the contract every pane satisfies.
//!
//! Containers and leaf widgets alike accept a size, report how they take
//! part in focus navigation, react to gaining and losing focus, process
//! input and render a block matching their last assigned size.

use crate::block::Block;
use crate::input::{Event, KeyBindings};
use crate::layout::{FocusStack, FocusState, Size};
use crate::style::Decoration;
use std::time::Duration;

/// Follow-up returned from event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Stop the program.
    Quit,
    /// Deliver `event` back to the tree after `delay`.
    ///
    /// Fire-and-forget: there is no cancellation, receivers drop events
    /// they no longer care about.
    Schedule {
        /// Time to wait before delivery.
        delay: Duration,
        /// The event to deliver.
        event: Event,
    },
}

/// Shared state threaded through event handling.
#[derive(Debug)]
pub struct Context<'a> {
    /// The focus stack of the running root.
    pub focus: &'a mut FocusStack,
    /// Navigation key bindings.
    pub bindings: &'a KeyBindings,
}

impl<'a> Context<'a> {
    /// Create a context.
    pub fn new(focus: &'a mut FocusStack, bindings: &'a KeyBindings) -> Self {
        Self { focus, bindings }
    }
}

/// A pane that can be laid out, focused and rendered.
pub trait Participant {
    /// Assign the inner content size.
    fn set_size(&mut self, size: Size);

    /// How this participant takes part in focus navigation.
    fn focus_state(&self) -> FocusState;

    /// Called when this participant gains focus.
    ///
    /// Returns the decoration to draw while focused, derived from `base`,
    /// and an optional follow-up.
    fn on_focus(&mut self, base: &Decoration) -> (Decoration, Option<Action>) {
        (base.focused(), None)
    }

    /// Called when this participant loses focus. Any editing or
    /// interaction mode should be released here.
    fn on_blur(&mut self) {}

    /// Process one event.
    fn update(&mut self, event: &Event, cx: &mut Context<'_>) -> Option<Action>;

    /// Render to a block of the last assigned size.
    fn view(&self) -> Block;
}
