use std::fmt;

/// The closed set of node kinds the parser produces.
///
/// Every [`NodeData`](crate::ast::NodeData) variant has exactly one
/// corresponding kind. `Display` renders the ESTree type name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    JsxFragment,
    JsxOpeningFragment,
    JsxClosingFragment,
    JsxElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxIdentifier,
    JsxNamespacedName,
    JsxMemberExpression,
    JsxAttribute,
    JsxSpreadAttribute,
    JsxExpressionContainer,
    JsxSpreadChild,
    JsxEmptyExpression,
    JsxText,
    Identifier,
    Literal,
    UnaryExpression,
    BinaryExpression,
    LogicalExpression,
    MemberExpression,
    CallExpression,
}

impl NodeKind {
    /// The ESTree `type` name of this kind (e.g. `"JSXElement"`).
    pub fn estree_name(self) -> &'static str {
        match self {
            NodeKind::JsxFragment => "JSXFragment",
            NodeKind::JsxOpeningFragment => "JSXOpeningFragment",
            NodeKind::JsxClosingFragment => "JSXClosingFragment",
            NodeKind::JsxElement => "JSXElement",
            NodeKind::JsxOpeningElement => "JSXOpeningElement",
            NodeKind::JsxClosingElement => "JSXClosingElement",
            NodeKind::JsxIdentifier => "JSXIdentifier",
            NodeKind::JsxNamespacedName => "JSXNamespacedName",
            NodeKind::JsxMemberExpression => "JSXMemberExpression",
            NodeKind::JsxAttribute => "JSXAttribute",
            NodeKind::JsxSpreadAttribute => "JSXSpreadAttribute",
            NodeKind::JsxExpressionContainer => "JSXExpressionContainer",
            NodeKind::JsxSpreadChild => "JSXSpreadChild",
            NodeKind::JsxEmptyExpression => "JSXEmptyExpression",
            NodeKind::JsxText => "JSXText",
            NodeKind::Identifier => "Identifier",
            NodeKind::Literal => "Literal",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::LogicalExpression => "LogicalExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::CallExpression => "CallExpression",
        }
    }

    /// Returns `true` for the kinds that can name a JSX element or
    /// attribute (`JSXIdentifier`, `JSXNamespacedName`,
    /// `JSXMemberExpression`).
    pub fn is_jsx_name(self) -> bool {
        matches!(
            self,
            NodeKind::JsxIdentifier
                | NodeKind::JsxNamespacedName
                | NodeKind::JsxMemberExpression,
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.estree_name())
    }
}
