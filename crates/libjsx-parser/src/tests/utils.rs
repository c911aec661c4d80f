//! Various test utils.

use crate::ast::Node;
use crate::ast::NodeData;
use crate::JsxParseError;
use crate::JsxParser;
use crate::JsxParserConfig;

/// Parses `source` as a single expression, panicking with a detailed
/// diagnostic on failure.
pub fn parse(source: &str) -> Node {
    match JsxParser::new(source).parse_expression() {
        Ok(node) => {
            assert_spans_nested(&node);
            node
        },
        Err(error) => panic!(
            "failed to parse `{source}`:\n{}",
            error.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source`, expecting a hard error.
pub fn parse_error(source: &str) -> JsxParseError {
    parse_error_with_config(source, JsxParserConfig::default())
}

/// Parses `source` with `config`, expecting a hard error.
pub fn parse_error_with_config(source: &str, config: JsxParserConfig) -> JsxParseError {
    match JsxParser::with_config(source, config).parse_expression() {
        Ok(node) => panic!("expected `{source}` to fail, got {node:#?}"),
        Err(error) => error,
    }
}

/// Asserts that every node in the tree starts before it ends and that every
/// child's span lies within its parent's span.
pub fn assert_spans_nested(node: &Node) {
    assert!(
        node.start() <= node.end(),
        "{} ends before it starts",
        node.kind(),
    );
    for (slot, child_slot) in node.child_slots() {
        for child in child_slot.nodes() {
            assert!(
                node.span.contains(&child.span),
                "{}.{slot} ({:?}) escapes its parent ({:?})",
                node.kind(),
                child.span.byte_span(),
                node.span.byte_span(),
            );
            assert_spans_nested(child);
        }
    }
}

/// The source text covered by `node`.
pub fn text_of<'a>(node: &Node, source: &'a str) -> &'a str {
    node.span
        .byte_span()
        .slice(source)
        .expect("node span lies within the source")
}

/// `(start, end)` byte offsets of `node`.
pub fn offsets(node: &Node) -> (usize, usize) {
    (node.start().byte_offset(), node.end().byte_offset())
}

/// The children of a `JSXElement` or `JSXFragment`.
pub fn children_of(node: &Node) -> Option<&[Node]> {
    match &node.data {
        NodeData::JsxElement { children, .. } | NodeData::JsxFragment { children, .. } => {
            children.as_deref()
        },
        other => panic!("expected an element or fragment, got {}", other.kind()),
    }
}

/// The opening element of a `JSXElement`.
pub fn opening_of(node: &Node) -> &Node {
    match &node.data {
        NodeData::JsxElement { opening_element, .. } => opening_element,
        other => panic!("expected JSXElement, got {}", other.kind()),
    }
}

/// The attributes of a `JSXElement`'s opening element.
pub fn attributes_of(node: &Node) -> &[Node] {
    match &opening_of(node).data {
        NodeData::JsxOpeningElement { attributes, .. } => {
            attributes.as_deref().unwrap_or_default()
        },
        other => panic!("expected JSXOpeningElement, got {}", other.kind()),
    }
}

/// The name text of a JSX name node (`a`, `ns:a`, `a.b.c`).
pub fn name_text(node: &Node) -> String {
    node.jsx_name_text()
        .unwrap_or_else(|| panic!("{} is not a JSX name", node.kind()))
}
