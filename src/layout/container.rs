//! Container: an ordered row or column of decorated children.
//!
//! A container owns its children, sizes them with the [`solver`], keeps
//! track of which child holds focus and renders them joined along its main
//! axis. When it is the active scope on the [`FocusStack`] it interprets
//! navigation keys; otherwise it forwards every event to its focused child.
//!
//! [`solver`]: super::solver

use super::node::Node;
use super::solver::{solve, SizeMode, Sizing};
use super::{Direction, FocusState, Size};
use crate::block::Block;
use crate::input::{Event, NavKey};
use crate::style::Decoration;
use crate::widget::{Action, Context, Participant};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a container on the focus stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocate a fresh, process-unique id.
    pub fn next() -> Self {
        Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A child slot: the participant plus its sizing and decorations.
#[derive(Debug)]
pub struct ChildEntry {
    model: Node,
    mode: SizeMode,
    gap: u16,
    base: Decoration,
    current: Decoration,
}

impl ChildEntry {
    fn new(model: Node, mode: SizeMode, decoration: Decoration, gap: u16) -> Self {
        Self {
            model,
            mode,
            gap,
            base: decoration,
            current: decoration,
        }
    }

    /// The owned participant.
    pub const fn model(&self) -> &Node {
        &self.model
    }

    /// The owned participant, mutably.
    pub fn model_mut(&mut self) -> &mut Node {
        &mut self.model
    }

    /// Main-axis sizing rule.
    pub const fn mode(&self) -> SizeMode {
        self.mode
    }

    /// Blank cells after this child.
    pub const fn gap(&self) -> u16 {
        self.gap
    }

    /// Decoration assigned at construction.
    pub const fn base(&self) -> &Decoration {
        &self.base
    }

    /// Decoration currently drawn.
    pub const fn current(&self) -> &Decoration {
        &self.current
    }

    fn sizing(&self) -> Sizing {
        Sizing::new(self.mode, self.gap, self.current.frame_size())
    }

    /// Apply a decoration. Returns whether its frame size changed.
    fn set_decoration(&mut self, decoration: Decoration) -> bool {
        let changed = self.current.frame_size() != decoration.frame_size();
        self.current = decoration;
        changed
    }

    /// Blur the participant and restore the base decoration.
    fn blur(&mut self) -> bool {
        self.model.on_blur();
        let base = self.base;
        self.set_decoration(base)
    }
}

/// A row or column of children.
#[derive(Debug)]
pub struct Container {
    id: ContainerId,
    direction: Direction,
    children: Vec<ChildEntry>,
    size: Size,
    focused: Option<usize>,
}

impl Container {
    /// Create an empty container.
    pub fn new(direction: Direction) -> Self {
        Self {
            id: ContainerId::next(),
            direction,
            children: Vec::new(),
            size: Size::ZERO,
            focused: None,
        }
    }

    /// Create an empty left-to-right container.
    pub fn horizontal() -> Self {
        Self::new(Direction::Horizontal)
    }

    /// Create an empty top-to-bottom container.
    pub fn vertical() -> Self {
        Self::new(Direction::Vertical)
    }

    /// This container's focus-stack identity.
    pub const fn id(&self) -> ContainerId {
        self.id
    }

    /// The main axis.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Last assigned outer size.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Index of the focused child.
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// All children in order.
    pub fn children(&self) -> &[ChildEntry] {
        &self.children
    }

    /// Get a child entry.
    pub fn child(&self, index: usize) -> Option<&ChildEntry> {
        self.children.get(index)
    }

    /// Get a child entry mutably.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut ChildEntry> {
        self.children.get_mut(index)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child taking a weighted share of leftover space.
    ///
    /// Layout is not recomputed until the next size change.
    pub fn add_weighted(&mut self, model: impl Into<Node>, weight: f64, decoration: Decoration, gap: u16) {
        self.children.push(ChildEntry::new(
            model.into(),
            SizeMode::Weighted(weight),
            decoration,
            gap,
        ));
    }

    /// Append a child with a fixed main-axis inner extent.
    ///
    /// Layout is not recomputed until the next size change.
    pub fn add_static(&mut self, model: impl Into<Node>, size: u16, decoration: Decoration, gap: u16) {
        self.children.push(ChildEntry::new(
            model.into(),
            SizeMode::Static(size),
            decoration,
            gap,
        ));
    }

    /// Builder form of [`Container::add_weighted`].
    #[must_use]
    pub fn with_weighted(mut self, model: impl Into<Node>, weight: f64, decoration: Decoration, gap: u16) -> Self {
        self.add_weighted(model, weight, decoration, gap);
        self
    }

    /// Builder form of [`Container::add_static`].
    #[must_use]
    pub fn with_static(mut self, model: impl Into<Node>, size: u16, decoration: Decoration, gap: u16) -> Self {
        self.add_static(model, size, decoration, gap);
        self
    }

    fn relayout(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let sizing: Vec<Sizing> = self.children.iter().map(ChildEntry::sizing).collect();
        let sizes = solve(self.direction, self.size, &sizing);
        debug!(container = self.id.0, size = ?self.size, "relayout");
        for (entry, size) in self.children.iter_mut().zip(sizes) {
            entry.model.set_size(size);
        }
    }

    fn is_focusable(&self, index: usize) -> bool {
        self.children
            .get(index)
            .is_some_and(|c| c.model.focus_state() != FocusState::NotFocusable)
    }

    /// Focus the first child that is not [`FocusState::NotFocusable`].
    pub fn focus_first(&mut self) -> Option<Action> {
        let index = (0..self.children.len()).find(|&i| self.is_focusable(i))?;
        self.focus_child(index)
    }

    /// Move focus to the child at `index`.
    ///
    /// Out-of-range indices are ignored. Layout is recomputed when either
    /// the previous child's restored decoration or the new child's focus
    /// decoration changes a frame size.
    pub fn focus_child(&mut self, index: usize) -> Option<Action> {
        if index >= self.children.len() {
            return None;
        }

        let mut frame_changed = false;
        if let Some(previous) = self.focused.filter(|&p| p != index) {
            if let Some(entry) = self.children.get_mut(previous) {
                frame_changed |= entry.blur();
            }
        }

        self.focused = Some(index);
        let entry = &mut self.children[index];
        let (decoration, action) = entry.model.on_focus(&entry.base);
        frame_changed |= entry.set_decoration(decoration);
        debug!(container = self.id.0, index, frame_changed, "focus child");

        if frame_changed {
            self.relayout();
        }
        action
    }

    /// Focus the next focusable child, wrapping around.
    pub fn cycle_forward(&mut self) -> Option<Action> {
        let len = self.children.len();
        if len == 0 {
            return None;
        }
        let start = self.focused.unwrap_or(0);
        let mut next = start;
        loop {
            next = (next + 1) % len;
            if self.is_focusable(next) {
                return self.focus_child(next);
            }
            if next == start {
                return None;
            }
        }
    }

    /// Focus the previous focusable child, wrapping around.
    pub fn cycle_backward(&mut self) -> Option<Action> {
        let len = self.children.len();
        if len == 0 {
            return None;
        }
        let start = self.focused.unwrap_or(0);
        let mut prev = start;
        loop {
            prev = (prev + len - 1) % len;
            if self.is_focusable(prev) {
                return self.focus_child(prev);
            }
            if prev == start {
                return None;
            }
        }
    }

    fn enter(&mut self, event: &Event, cx: &mut Context<'_>) -> Option<Action> {
        let entry = self.children.get_mut(self.focused?)?;
        let state = entry.model.focus_state();

        if let Node::Container(child) = &mut entry.model {
            if state != FocusState::NotFocusable {
                cx.focus.push(child.id);
                debug!(parent = self.id.0, child = child.id.0, "enter container");
                return child.focus_first();
            }
        }
        if state == FocusState::Interactive {
            return entry.model.update(event, cx);
        }
        None
    }

    fn escape(&mut self, cx: &mut Context<'_>) {
        let Some(popped) = cx.focus.pop() else {
            return;
        };
        debug_assert_eq!(popped, self.id);
        debug!(container = self.id.0, "escape");

        let changed = self
            .focused
            .and_then(|i| self.children.get_mut(i))
            .is_some_and(ChildEntry::blur);
        if changed {
            self.relayout();
        }
    }

    fn forward(&mut self, event: &Event, cx: &mut Context<'_>) -> Option<Action> {
        let entry = self.children.get_mut(self.focused?)?;
        entry.model.update(event, cx)
    }
}

impl Participant for Container {
    fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.relayout();
        }
    }

    fn focus_state(&self) -> FocusState {
        if (0..self.children.len()).any(|i| self.is_focusable(i)) {
            FocusState::Focusable
        } else {
            FocusState::NotFocusable
        }
    }

    fn on_focus(&mut self, base: &Decoration) -> (Decoration, Option<Action>) {
        (base.focused(), None)
    }

    fn on_blur(&mut self) {
        let changed = self
            .focused
            .and_then(|i| self.children.get_mut(i))
            .is_some_and(ChildEntry::blur);
        if changed {
            self.relayout();
        }
    }

    fn update(&mut self, event: &Event, cx: &mut Context<'_>) -> Option<Action> {
        if !cx.focus.is_active(self.id) {
            return self.forward(event, cx);
        }

        if let Event::Key(key) = event {
            match cx.bindings.classify(key) {
                Some(NavKey::Quit) => return Some(Action::Quit),
                Some(NavKey::CycleForward) => return self.cycle_forward(),
                Some(NavKey::CycleBackward) => return self.cycle_backward(),
                Some(NavKey::Enter) => return self.enter(event, cx),
                Some(NavKey::Escape) => {
                    self.escape(cx);
                    return None;
                }
                None => {}
            }
        }
        self.forward(event, cx)
    }

    fn view(&self) -> Block {
        let Some(last) = self.children.len().checked_sub(1) else {
            return Block::with_size(self.size);
        };

        let mut parts = Vec::with_capacity(self.children.len() * 2);
        for (i, entry) in self.children.iter().enumerate() {
            parts.push(entry.current.render(&entry.model.view(), None));
            if i < last && entry.gap > 0 {
                parts.push(match self.direction {
                    Direction::Horizontal => Block::new(entry.gap, 0),
                    Direction::Vertical => Block::new(0, entry.gap),
                });
            }
        }

        let joined = match self.direction {
            Direction::Horizontal => Block::join_horizontal(&parts),
            Direction::Vertical => Block::join_vertical(&parts),
        };
        joined.fit_size(self.size)
    }
}
