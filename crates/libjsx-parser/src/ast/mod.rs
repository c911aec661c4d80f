//! The AST produced by the parser.
//!
//! The node model is deliberately uniform: every node is a [`Node`] holding
//! a [`JsxSourceSpan`] and a [`NodeData`], a closed tagged enum with one
//! variant per [`NodeKind`]. Kind-specific child slots are plain owned
//! fields, so the tree is strict (no sharing, no cycles) and
//! pattern-matching over `NodeData` is exhaustive.
//!
//! Nodes go through a two-step lifecycle driven by
//! [`ParserCore`](crate::ParserCore): a rule opens an [`OpenNode`] when it
//! recognizes a construct's leading token (fixing the start position) and
//! completes it into a `Node` once its children are parsed (fixing the end
//! position).
//!
//! # Example
//!
//! ```rust
//! use libjsx_parser::ast::NodeKind;
//! use libjsx_parser::JsxParser;
//!
//! let node = JsxParser::new("<a.b c=\"d\" />").parse_expression().unwrap();
//! assert_eq!(node.kind(), NodeKind::JsxElement);
//! assert_eq!(node.to_source(None), "<a.b c=\"d\" />");
//! ```
//!
//! [`JsxSourceSpan`]: crate::JsxSourceSpan

mod ast_node;
mod node;
mod node_data;
mod node_kind;
mod open_node;

pub use ast_node::AstNode;
pub use node::ChildSlot;
pub use node::Node;
pub use node_data::LiteralValue;
pub use node_data::NodeData;
pub use node_kind::NodeKind;
pub use open_node::NodeStart;
pub use open_node::OpenNode;
