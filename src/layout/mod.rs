//! Layout module: weighted pane layout and the focus stack.
//!
//! A tree of [`Container`]s arranges participants along a main axis. Sizes
//! are recomputed when a container is resized or when a child's decoration
//! overhead changes, never on every event. The [`Root`] owns the top-level
//! container and the [`FocusStack`] that decides which container interprets
//! navigation keys.

mod container;
mod focus;
mod node;
mod root;
mod size;
pub mod solver;

pub use container::{ChildEntry, Container, ContainerId};
pub use focus::{FocusStack, FocusState};
pub use node::Node;
pub use root::Root;
pub use size::{Direction, Size};
pub use solver::{solve, SizeMode, Sizing};
