use crate::ast::Node;
use crate::ast::NodeKind;

/// Kind-specific contents of a [`Node`]: its named child slots and scalar
/// attributes.
///
/// Child slots are `Box<Node>` (always present), `Option<Box<Node>>`
/// (may be absent) or a list. The JSX `children` and `attributes` lists are
/// `None` rather than empty when there is nothing in them.
///
/// Serializes as an ESTree node body: a `"type"` tag plus camel-cased
/// fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum NodeData {
    #[serde(rename = "JSXFragment")]
    JsxFragment {
        opening_fragment: Box<Node>,
        closing_fragment: Box<Node>,
        children: Option<Vec<Node>>,
    },

    #[serde(rename = "JSXOpeningFragment")]
    JsxOpeningFragment,

    #[serde(rename = "JSXClosingFragment")]
    JsxClosingFragment,

    /// `<name ...>children</name>` or `<name ... />`. Self-closing elements
    /// have neither `closing_element` nor `children`.
    #[serde(rename = "JSXElement")]
    JsxElement {
        opening_element: Box<Node>,
        closing_element: Option<Box<Node>>,
        children: Option<Vec<Node>>,
    },

    #[serde(rename = "JSXOpeningElement")]
    JsxOpeningElement {
        name: Box<Node>,
        attributes: Option<Vec<Node>>,
        self_closing: bool,
    },

    #[serde(rename = "JSXClosingElement")]
    JsxClosingElement {
        name: Box<Node>,
    },

    #[serde(rename = "JSXIdentifier")]
    JsxIdentifier {
        name: String,
    },

    /// `namespace:name`. Both parts are `JSXIdentifier`s.
    #[serde(rename = "JSXNamespacedName")]
    JsxNamespacedName {
        namespace: Box<Node>,
        name: Box<Node>,
    },

    /// `object.property` in a tag name. `object` is a `JSXIdentifier` or a
    /// nested `JSXMemberExpression`.
    #[serde(rename = "JSXMemberExpression")]
    JsxMemberExpression {
        object: Box<Node>,
        property: Box<Node>,
    },

    #[serde(rename = "JSXAttribute")]
    JsxAttribute {
        name: Box<Node>,
        value: Option<Box<Node>>,
    },

    #[serde(rename = "JSXSpreadAttribute")]
    JsxSpreadAttribute {
        argument: Box<Node>,
    },

    #[serde(rename = "JSXExpressionContainer")]
    JsxExpressionContainer {
        expression: Box<Node>,
    },

    #[serde(rename = "JSXSpreadChild")]
    JsxSpreadChild {
        expression: Box<Node>,
    },

    /// The (zero-width) contents of `{}`.
    #[serde(rename = "JSXEmptyExpression")]
    JsxEmptyExpression,

    #[serde(rename = "JSXText")]
    JsxText {
        value: String,
        raw: String,
    },

    Identifier {
        name: String,
    },

    Literal {
        value: LiteralValue,
        raw: String,
    },

    UnaryExpression {
        operator: String,
        prefix: bool,
        argument: Box<Node>,
    },

    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    LogicalExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
    },

    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
}

impl NodeData {
    /// Returns the kind tag of this data.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::JsxFragment { .. } => NodeKind::JsxFragment,
            NodeData::JsxOpeningFragment => NodeKind::JsxOpeningFragment,
            NodeData::JsxClosingFragment => NodeKind::JsxClosingFragment,
            NodeData::JsxElement { .. } => NodeKind::JsxElement,
            NodeData::JsxOpeningElement { .. } => NodeKind::JsxOpeningElement,
            NodeData::JsxClosingElement { .. } => NodeKind::JsxClosingElement,
            NodeData::JsxIdentifier { .. } => NodeKind::JsxIdentifier,
            NodeData::JsxNamespacedName { .. } => NodeKind::JsxNamespacedName,
            NodeData::JsxMemberExpression { .. } => NodeKind::JsxMemberExpression,
            NodeData::JsxAttribute { .. } => NodeKind::JsxAttribute,
            NodeData::JsxSpreadAttribute { .. } => NodeKind::JsxSpreadAttribute,
            NodeData::JsxExpressionContainer { .. } => NodeKind::JsxExpressionContainer,
            NodeData::JsxSpreadChild { .. } => NodeKind::JsxSpreadChild,
            NodeData::JsxEmptyExpression => NodeKind::JsxEmptyExpression,
            NodeData::JsxText { .. } => NodeKind::JsxText,
            NodeData::Identifier { .. } => NodeKind::Identifier,
            NodeData::Literal { .. } => NodeKind::Literal,
            NodeData::UnaryExpression { .. } => NodeKind::UnaryExpression,
            NodeData::BinaryExpression { .. } => NodeKind::BinaryExpression,
            NodeData::LogicalExpression { .. } => NodeKind::LogicalExpression,
            NodeData::MemberExpression { .. } => NodeKind::MemberExpression,
            NodeData::CallExpression { .. } => NodeKind::CallExpression,
        }
    }
}

/// The decoded value of a `Literal` node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}
