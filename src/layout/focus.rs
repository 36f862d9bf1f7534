//! Focus stack: the chain of container scopes the user has entered.
//!
//! The top of the stack is the active scope; only that container handles
//! navigation keys. Entering a child container pushes it, escape pops it.
//! The root scope at index 0 is never popped.

use super::ContainerId;
use tracing::debug;

/// How a participant takes part in focus navigation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum FocusState {
    /// Skipped by cycling.
    #[default]
    NotFocusable,
    /// Can be highlighted but does not consume enter.
    Focusable,
    /// Can be highlighted and receives the enter key.
    Interactive,
}

/// Ordered stack of entered container scopes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusStack {
    scopes: Vec<ContainerId>,
}

impl FocusStack {
    /// Create an empty stack.
    pub const fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Create a stack holding only `root`.
    pub fn with_root(root: ContainerId) -> Self {
        Self { scopes: vec![root] }
    }

    /// Enter a scope. Always appends.
    pub fn push(&mut self, id: ContainerId) {
        self.scopes.push(id);
        debug!(?id, depth = self.scopes.len(), "focus push");
    }

    /// Leave the current scope.
    ///
    /// Returns `None` and leaves the stack unchanged when it holds one
    /// scope or fewer.
    pub fn pop(&mut self) -> Option<ContainerId> {
        if self.scopes.len() <= 1 {
            return None;
        }
        let id = self.scopes.pop();
        debug!(?id, depth = self.scopes.len(), "focus pop");
        id
    }

    /// The active scope.
    pub fn current(&self) -> Option<ContainerId> {
        self.scopes.last().copied()
    }

    /// Check whether `id` is the active scope.
    pub fn is_active(&self, id: ContainerId) -> bool {
        self.current() == Some(id)
    }

    /// Number of scopes on the stack.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Check whether `id` is anywhere on the stack.
    pub fn contains(&self, id: ContainerId) -> bool {
        self.scopes.contains(&id)
    }

    /// Check if the stack holds no scopes.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let (a, b, c) = (ContainerId::next(), ContainerId::next(), ContainerId::next());
        let mut stack = FocusStack::with_root(a);
        stack.push(b);
        stack.push(c);

        assert_eq!(stack.depth(), 3);
        assert!(stack.is_active(c));
        assert!(!stack.is_active(b));
        assert!(stack.contains(b));

        assert_eq!(stack.pop(), Some(c));
        assert_eq!(stack.pop(), Some(b));
        assert_eq!(stack.current(), Some(a));
    }

    #[test]
    fn test_root_never_popped() {
        let root = ContainerId::next();
        let mut stack = FocusStack::with_root(root);
        for _ in 0..3 {
            assert_eq!(stack.pop(), None);
        }
        assert_eq!(stack.depth(), 1);
        assert!(stack.is_active(root));
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = FocusStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.current(), None);
        assert!(!stack.is_active(ContainerId::next()));
    }

    #[test]
    fn test_push_is_unconditional() {
        let a = ContainerId::next();
        let mut stack = FocusStack::with_root(a);
        stack.push(a);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop(), Some(a));
    }

    #[test]
    fn test_stacks_are_independent() {
        let (a, b) = (ContainerId::next(), ContainerId::next());
        let mut first = FocusStack::with_root(a);
        let second = FocusStack::with_root(a);
        first.push(b);
        assert!(first.is_active(b));
        assert!(second.is_active(a));
    }
}
