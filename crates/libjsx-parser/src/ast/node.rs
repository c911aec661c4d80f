use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::NodeData;
use crate::ast::NodeKind;
use crate::JsxSourceSpan;
use crate::SourcePosition;
use inherent::inherent;

/// A completed AST node: a kind-specific [`NodeData`] plus the source span
/// it covers.
///
/// Nodes are only ever produced by
/// [`ParserCore::complete_node`](crate::ParserCore::complete_node), which
/// fixes the end position exactly once. Every node exclusively owns its
/// children, so the AST is a strict tree, and each child's span lies within
/// its parent's span.
///
/// `PartialEq` compares spans as well as contents. For the structural
/// equality used to match closing tags against opening tags see
/// [`is_same_jsx_name`](Self::is_same_jsx_name).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub data: NodeData,
    #[serde(flatten)]
    pub span: JsxSourceSpan,
}

/// One named child slot of a [`Node`], as returned by
/// [`Node::child_slots`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChildSlot<'a> {
    /// A slot holding exactly one node.
    Single(&'a Node),
    /// An ordered list of nodes.
    List(&'a [Node]),
    /// An optional slot (or list) with nothing in it.
    Absent,
}

impl<'a> ChildSlot<'a> {
    /// The nodes held in this slot, in source order.
    pub fn nodes(self) -> &'a [Node] {
        match self {
            ChildSlot::Single(node) => std::slice::from_ref(node),
            ChildSlot::List(nodes) => nodes,
            ChildSlot::Absent => &[],
        }
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    /// Position of the node's first character.
    pub fn start(&self) -> &SourcePosition {
        &self.span.start_inclusive
    }

    /// Position immediately after the node's last character.
    pub fn end(&self) -> &SourcePosition {
        &self.span.end_exclusive
    }

    /// Returns this node's named child slots in source order.
    ///
    /// Leaf kinds return an empty list. Optional slots that are empty are
    /// reported as [`ChildSlot::Absent`] rather than omitted.
    pub fn child_slots(&self) -> Vec<(&'static str, ChildSlot<'_>)> {
        fn single(node: &Node) -> ChildSlot<'_> {
            ChildSlot::Single(node)
        }
        fn optional(node: &Option<Box<Node>>) -> ChildSlot<'_> {
            node.as_deref().map_or(ChildSlot::Absent, ChildSlot::Single)
        }
        fn optional_list(nodes: &Option<Vec<Node>>) -> ChildSlot<'_> {
            nodes.as_deref().map_or(ChildSlot::Absent, ChildSlot::List)
        }

        match &self.data {
            NodeData::JsxFragment {
                opening_fragment,
                closing_fragment,
                children,
            } => vec![
                ("openingFragment", single(opening_fragment)),
                ("children", optional_list(children)),
                ("closingFragment", single(closing_fragment)),
            ],
            NodeData::JsxElement {
                opening_element,
                closing_element,
                children,
            } => vec![
                ("openingElement", single(opening_element)),
                ("children", optional_list(children)),
                ("closingElement", optional(closing_element)),
            ],
            NodeData::JsxOpeningElement { name, attributes, .. } => vec![
                ("name", single(name)),
                ("attributes", optional_list(attributes)),
            ],
            NodeData::JsxClosingElement { name } => vec![("name", single(name))],
            NodeData::JsxNamespacedName { namespace, name } => vec![
                ("namespace", single(namespace)),
                ("name", single(name)),
            ],
            NodeData::JsxMemberExpression { object, property }
            | NodeData::MemberExpression { object, property, .. } => vec![
                ("object", single(object)),
                ("property", single(property)),
            ],
            NodeData::JsxAttribute { name, value } => vec![
                ("name", single(name)),
                ("value", optional(value)),
            ],
            NodeData::JsxSpreadAttribute { argument }
            | NodeData::UnaryExpression { argument, .. } => {
                vec![("argument", single(argument))]
            },
            NodeData::JsxExpressionContainer { expression }
            | NodeData::JsxSpreadChild { expression } => {
                vec![("expression", single(expression))]
            },
            NodeData::BinaryExpression { left, right, .. }
            | NodeData::LogicalExpression { left, right, .. } => vec![
                ("left", single(left)),
                ("right", single(right)),
            ],
            NodeData::CallExpression { callee, arguments } => vec![
                ("callee", single(callee)),
                ("arguments", ChildSlot::List(arguments)),
            ],
            NodeData::JsxOpeningFragment
            | NodeData::JsxClosingFragment
            | NodeData::JsxIdentifier { .. }
            | NodeData::JsxEmptyExpression
            | NodeData::JsxText { .. }
            | NodeData::Identifier { .. }
            | NodeData::Literal { .. } => vec![],
        }
    }

    /// Structural equality of JSX names, used to check that a closing tag
    /// matches its opening tag.
    ///
    /// - `JSXIdentifier`s are equal iff their name text is equal.
    /// - `JSXNamespacedName`s are equal iff their namespaces and names are
    ///   pairwise equal.
    /// - `JSXMemberExpression`s are equal iff their objects and properties
    ///   are pairwise equal.
    ///
    /// Spans are ignored. Nodes of different kinds, or of kinds that are not
    /// JSX names, are never equal.
    pub fn is_same_jsx_name(&self, other: &Node) -> bool {
        match (&self.data, &other.data) {
            (
                NodeData::JsxIdentifier { name: a },
                NodeData::JsxIdentifier { name: b },
            ) => a == b,
            (
                NodeData::JsxNamespacedName { namespace: ns_a, name: a },
                NodeData::JsxNamespacedName { namespace: ns_b, name: b },
            ) => ns_a.is_same_jsx_name(ns_b) && a.is_same_jsx_name(b),
            (
                NodeData::JsxMemberExpression { object: obj_a, property: a },
                NodeData::JsxMemberExpression { object: obj_b, property: b },
            ) => obj_a.is_same_jsx_name(obj_b) && a.is_same_jsx_name(b),
            _ => false,
        }
    }

    /// Renders a JSX name as it is written (`a`, `ns:a`, `a.b.c`), or `None`
    /// if this node is not a JSX name.
    pub fn jsx_name_text(&self) -> Option<String> {
        match &self.data {
            NodeData::JsxIdentifier { name } => Some(name.clone()),
            NodeData::JsxNamespacedName { namespace, name } => Some(format!(
                "{}:{}",
                namespace.jsx_name_text()?,
                name.jsx_name_text()?,
            )),
            NodeData::JsxMemberExpression { object, property } => Some(format!(
                "{}.{}",
                object.jsx_name_text()?,
                property.jsx_name_text()?,
            )),
            _ => None,
        }
    }

    /// Writes a normalized rendering of this node (single spaces, binary
    /// operations fully parenthesized).
    fn append_synthetic(&self, sink: &mut String) {
        match &self.data {
            NodeData::JsxFragment { children, .. } => {
                sink.push_str("<>");
                for child in children.iter().flatten() {
                    child.append_synthetic(sink);
                }
                sink.push_str("</>");
            },
            NodeData::JsxOpeningFragment => sink.push_str("<>"),
            NodeData::JsxClosingFragment => sink.push_str("</>"),
            NodeData::JsxElement {
                opening_element,
                closing_element,
                children,
            } => {
                opening_element.append_synthetic(sink);
                for child in children.iter().flatten() {
                    child.append_synthetic(sink);
                }
                if let Some(closing_element) = closing_element {
                    closing_element.append_synthetic(sink);
                }
            },
            NodeData::JsxOpeningElement {
                name,
                attributes,
                self_closing,
            } => {
                sink.push('<');
                name.append_synthetic(sink);
                for attribute in attributes.iter().flatten() {
                    sink.push(' ');
                    attribute.append_synthetic(sink);
                }
                sink.push_str(if *self_closing { " />" } else { ">" });
            },
            NodeData::JsxClosingElement { name } => {
                sink.push_str("</");
                name.append_synthetic(sink);
                sink.push('>');
            },
            NodeData::JsxIdentifier { name } | NodeData::Identifier { name } => {
                sink.push_str(name);
            },
            NodeData::JsxNamespacedName { namespace, name } => {
                namespace.append_synthetic(sink);
                sink.push(':');
                name.append_synthetic(sink);
            },
            NodeData::JsxMemberExpression { object, property } => {
                object.append_synthetic(sink);
                sink.push('.');
                property.append_synthetic(sink);
            },
            NodeData::JsxAttribute { name, value } => {
                name.append_synthetic(sink);
                if let Some(value) = value {
                    sink.push('=');
                    value.append_synthetic(sink);
                }
            },
            NodeData::JsxSpreadAttribute { argument: inner }
            | NodeData::JsxSpreadChild { expression: inner } => {
                sink.push_str("{...");
                inner.append_synthetic(sink);
                sink.push('}');
            },
            NodeData::JsxExpressionContainer { expression } => {
                sink.push('{');
                expression.append_synthetic(sink);
                sink.push('}');
            },
            NodeData::JsxEmptyExpression => {},
            NodeData::JsxText { raw, .. } | NodeData::Literal { raw, .. } => {
                sink.push_str(raw);
            },
            NodeData::UnaryExpression { operator, argument, .. } => {
                sink.push_str(operator);
                argument.append_synthetic(sink);
            },
            NodeData::BinaryExpression { operator, left, right }
            | NodeData::LogicalExpression { operator, left, right } => {
                sink.push('(');
                left.append_synthetic(sink);
                sink.push(' ');
                sink.push_str(operator);
                sink.push(' ');
                right.append_synthetic(sink);
                sink.push(')');
            },
            NodeData::MemberExpression {
                object,
                property,
                computed,
            } => {
                object.append_synthetic(sink);
                if *computed {
                    sink.push('[');
                    property.append_synthetic(sink);
                    sink.push(']');
                } else {
                    sink.push('.');
                    property.append_synthetic(sink);
                }
            },
            NodeData::CallExpression { callee, arguments } => {
                callee.append_synthetic(sink);
                sink.push('(');
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        sink.push_str(", ");
                    }
                    argument.append_synthetic(sink);
                }
                sink.push(')');
            },
        }
    }
}

#[inherent]
impl AstNode for Node {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => self.append_synthetic(sink),
        }
    }

    pub fn to_source(&self, source: Option<&str>) -> String;
}
