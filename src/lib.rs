//! # Panestack
//!
//! Nested, focus-aware pane layouts for terminal applications.
//!
//! A tree of [`Container`]s divides the terminal along one axis at a time.
//! Every child is sized either by a fixed number of cells or by a weight
//! sharing what is left, and every child may carry a border and padding.
//! Keyboard focus moves between siblings with tab/shift-tab, descends into
//! nested containers with enter and climbs back out with esc.
//!
//! ## Core Concepts
//!
//! - **Size solver**: statics first, then weighted shares of the rest
//! - **Focus stack**: the path of containers that currently own navigation
//! - **Participants**: anything that can be sized, focused and rendered
//! - **Actor runtime**: input and timer threads feeding one event loop
//!
//! ## Example
//!
//! ```rust
//! use panestack::{BorderKind, Decoration, Direction, Root, Size, TextView};
//!
//! let mut root = Root::new(Direction::Vertical);
//! root.add_static(TextView::new("header"), 1, Decoration::new(), 0);
//! root.add_weighted(TextView::new("body"), 1.0, Decoration::bordered(BorderKind::Plain), 0);
//! root.set_size(Size::new(20, 6));
//! root.init();
//!
//! let frame = root.view();
//! assert_eq!(frame.lines()[0].trim_end(), "header");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod block;
pub mod error;
pub mod input;
pub mod layout;
pub mod runtime;
pub mod style;
pub mod widget;

// Re-exports for convenience
pub use block::{Block, Cell};
pub use error::{Error, Result};
pub use input::{Event, Key, KeyBindings, KeyCode, KeyModifiers, TimerEvent};
pub use layout::{Container, ContainerId, Direction, FocusStack, FocusState, Node, Root, Size, SizeMode, Sizing};
pub use runtime::{Program, ProgramConfig};
pub use style::{BorderKind, Decoration, Modifiers, Padding, Rgb, Style};
pub use widget::{Action, Context, List, Participant, Spacer, Table, TextEditor, TextView};
