//! Node: the closed set of participants a container can hold.

use super::{Container, FocusState, Size};
use crate::block::Block;
use crate::input::Event;
use crate::style::Decoration;
use crate::widget::{Action, Context, List, Participant, Spacer, Table, TextEditor, TextView};

/// A child participant.
///
/// Built-in widgets are dispatched statically; anything else goes through
/// [`Node::Custom`].
pub enum Node {
    /// A nested container.
    Container(Container),
    /// Static text.
    TextView(TextView),
    /// Blank filler.
    Spacer(Spacer),
    /// Selectable list.
    List(List),
    /// Editable table.
    Table(Table),
    /// Multi-line text editor.
    TextEditor(TextEditor),
    /// A user-defined participant.
    Custom(Box<dyn Participant>),
}

macro_rules! dispatch {
    ($self:expr, $node:ident => $body:expr) => {
        match $self {
            Node::Container($node) => $body,
            Node::TextView($node) => $body,
            Node::Spacer($node) => $body,
            Node::List($node) => $body,
            Node::Table($node) => $body,
            Node::TextEditor($node) => $body,
            Node::Custom($node) => $body,
        }
    };
}

impl Node {
    /// The nested container, if this node is one.
    pub const fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }

    /// The nested container, mutably.
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Variant name, for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Container(_) => "container",
            Self::TextView(_) => "text_view",
            Self::Spacer(_) => "spacer",
            Self::List(_) => "list",
            Self::Table(_) => "table",
            Self::TextEditor(_) => "text_editor",
            Self::Custom(_) => "custom",
        }
    }
}

impl Participant for Node {
    fn set_size(&mut self, size: Size) {
        dispatch!(self, node => node.set_size(size));
    }

    fn focus_state(&self) -> FocusState {
        dispatch!(self, node => node.focus_state())
    }

    fn on_focus(&mut self, base: &Decoration) -> (Decoration, Option<Action>) {
        dispatch!(self, node => node.on_focus(base))
    }

    fn on_blur(&mut self) {
        dispatch!(self, node => node.on_blur());
    }

    fn update(&mut self, event: &Event, cx: &mut Context<'_>) -> Option<Action> {
        dispatch!(self, node => node.update(event, cx))
    }

    fn view(&self) -> Block {
        dispatch!(self, node => node.view())
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Container(c) => f.debug_tuple("Container").field(c).finish(),
            other => f.write_str(other.kind()),
        }
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}

impl From<TextView> for Node {
    fn from(view: TextView) -> Self {
        Self::TextView(view)
    }
}

impl From<Spacer> for Node {
    fn from(spacer: Spacer) -> Self {
        Self::Spacer(spacer)
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<TextEditor> for Node {
    fn from(editor: TextEditor) -> Self {
        Self::TextEditor(editor)
    }
}

impl From<Box<dyn Participant>> for Node {
    fn from(participant: Box<dyn Participant>) -> Self {
        Self::Custom(participant)
    }
}
