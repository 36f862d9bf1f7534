//! Root: the top-level container and the focus stack it anchors.

use super::{Container, Direction, FocusStack, Node, Size};
use crate::block::Block;
use crate::input::{Event, KeyBindings};
use crate::style::Decoration;
use crate::widget::{Action, Context, Participant};
use tracing::debug;

/// The top of a participant tree.
///
/// Owns the outermost [`Container`], which is registered as the bottom of
/// the focus stack at construction time and therefore can never be
/// escaped from.
#[derive(Debug)]
pub struct Root {
    inner: Container,
    focus: FocusStack,
    bindings: KeyBindings,
    size: Size,
}

impl Root {
    /// Create a root with default key bindings.
    pub fn new(direction: Direction) -> Self {
        Self::with_bindings(direction, KeyBindings::default())
    }

    /// Create a root with custom key bindings.
    pub fn with_bindings(direction: Direction, bindings: KeyBindings) -> Self {
        Self::from_container(Container::new(direction), bindings)
    }

    /// Wrap an already populated container.
    pub fn from_container(inner: Container, bindings: KeyBindings) -> Self {
        let focus = FocusStack::with_root(inner.id());
        Self {
            inner,
            focus,
            bindings,
            size: Size::ZERO,
        }
    }

    /// Append a weighted child to the inner container.
    pub fn add_weighted(&mut self, model: impl Into<Node>, weight: f64, decoration: Decoration, gap: u16) {
        self.inner.add_weighted(model, weight, decoration, gap);
    }

    /// Append a static child to the inner container.
    pub fn add_static(&mut self, model: impl Into<Node>, size: u16, decoration: Decoration, gap: u16) {
        self.inner.add_static(model, size, decoration, gap);
    }

    /// The inner container.
    pub const fn container(&self) -> &Container {
        &self.inner
    }

    /// The inner container, mutably.
    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.inner
    }

    /// The focus stack.
    pub const fn focus(&self) -> &FocusStack {
        &self.focus
    }

    /// Navigation key bindings.
    pub const fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Last assigned size.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Assign the terminal size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.inner.set_size(size);
    }

    /// Acquire initial focus.
    pub fn init(&mut self) -> Option<Action> {
        debug!(children = self.inner.len(), "root init");
        self.inner.focus_first()
    }

    /// Process one event.
    ///
    /// Resize events are consumed here; everything else is routed into the
    /// tree through the inner container.
    pub fn update(&mut self, event: &Event) -> Option<Action> {
        if let Event::Resize { width, height } = *event {
            self.set_size(Size::new(width, height));
            return None;
        }
        let mut cx = Context::new(&mut self.focus, &self.bindings);
        self.inner.update(event, &mut cx)
    }

    /// Render the whole tree at the assigned size.
    pub fn view(&self) -> Block {
        self.inner.view().fit_size(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyCode};
    use crate::layout::FocusState;
    use crate::style::BorderKind;
    use crate::widget::{List, TextView};

    fn sample_root() -> Root {
        let mut root = Root::new(Direction::Vertical);
        root.add_static(TextView::new("header"), 1, Decoration::new(), 0);
        let body = Container::horizontal()
            .with_weighted(List::new(["one", "two"]), 1.0, Decoration::bordered(BorderKind::Rounded), 1)
            .with_weighted(List::new(["three"]), 1.0, Decoration::bordered(BorderKind::Rounded), 0);
        root.add_weighted(body, 1.0, Decoration::new(), 0);
        root
    }

    #[test]
    fn test_root_registers_on_stack() {
        let root = Root::new(Direction::Horizontal);
        assert_eq!(root.focus().depth(), 1);
        assert!(root.focus().is_active(root.container().id()));
    }

    #[test]
    fn test_resize_sets_size() {
        let mut root = sample_root();
        let action = root.update(&Event::Resize {
            width: 40,
            height: 12,
        });
        assert!(action.is_none());
        assert_eq!(root.size(), Size::new(40, 12));
        assert_eq!(root.container().size(), Size::new(40, 12));
        assert_eq!(root.view().size(), Size::new(40, 12));
    }

    #[test]
    fn test_init_focuses_first_focusable() {
        let mut root = sample_root();
        root.set_size(Size::new(40, 12));
        root.init();
        assert_eq!(root.container().focused(), Some(1));
        assert_eq!(root.container().child(1).unwrap().model().focus_state(), FocusState::Focusable);
    }

    #[test]
    fn test_enter_escape_through_root() {
        let mut root = sample_root();
        root.set_size(Size::new(40, 12));
        root.init();

        root.update(&Event::Key(Key::from(KeyCode::Enter)));
        assert_eq!(root.focus().depth(), 2);

        root.update(&Event::Key(Key::from(KeyCode::Esc)));
        assert_eq!(root.focus().depth(), 1);
        assert!(root.focus().is_active(root.container().id()));

        root.update(&Event::Key(Key::from(KeyCode::Esc)));
        assert_eq!(root.focus().depth(), 1);
    }

    #[test]
    fn test_quit() {
        let mut root = sample_root();
        assert_eq!(root.update(&Event::Key(Key::ctrl('c'))), Some(Action::Quit));
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = KeyBindings::parse("q", "tab", "shift+tab", "enter", "esc").unwrap();
        let mut root = Root::with_bindings(Direction::Horizontal, bindings);
        assert_eq!(root.update(&Event::Key(Key::char('q'))), Some(Action::Quit));
        assert_eq!(root.update(&Event::Key(Key::ctrl('c'))), None);
    }
}
