use crate::ast::Node;
use crate::ast::NodeKind;
use crate::token::JsxToken;
use crate::SourcePosition;

/// A node that has been opened but not yet completed: its kind and start
/// position are fixed, its end is not.
///
/// Created by [`ParserCore::create_node`](crate::ParserCore::create_node)
/// the instant a construct's leading token is recognized, and turned into a
/// [`Node`] exactly once by
/// [`ParserCore::complete_node`](crate::ParserCore::complete_node).
#[derive(Clone, Debug, PartialEq)]
#[must_use = "an opened node must be completed"]
pub struct OpenNode {
    kind: NodeKind,
    start: SourcePosition,
}

impl OpenNode {
    pub(crate) fn new(kind: NodeKind, start: SourcePosition) -> Self {
        Self { kind, start }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn start(&self) -> &SourcePosition {
        &self.start
    }

    pub(crate) fn into_start(self) -> SourcePosition {
        self.start
    }
}

/// Where an opened node takes its start position from.
#[derive(Clone, Copy, Debug)]
pub enum NodeStart<'a> {
    /// An explicit position.
    Position(&'a SourcePosition),
    /// The start of a token.
    Token(&'a JsxToken<'a>),
    /// The start of another node.
    Node(&'a Node),
    /// The start of the first node of a sequence. An empty sequence falls
    /// back to [`NodeStart::Current`].
    FirstOf(&'a [Node]),
    /// The start of the scanner's current token (or the end of the last
    /// consumed token when the input is exhausted).
    Current,
}
