//! Tests for parsing JSX attributes and spread attributes.

use crate::ast::LiteralValue;
use crate::ast::Node;
use crate::ast::NodeData;
use crate::ast::NodeKind;
use crate::tests::utils::attributes_of;
use crate::tests::utils::name_text;
use crate::tests::utils::offsets;
use crate::tests::utils::parse;
use crate::tests::utils::parse_error;
use crate::tests::utils::text_of;
use crate::JsxParseErrorKind;

/// Splits a `JSXAttribute` into its name and optional value.
fn name_and_value(attribute: &Node) -> (&Node, Option<&Node>) {
    match &attribute.data {
        NodeData::JsxAttribute { name, value } => (name, value.as_deref()),
        other => panic!("expected JSXAttribute, got {}", other.kind()),
    }
}

fn unexpected(found: &str) -> JsxParseErrorKind {
    JsxParseErrorKind::UnexpectedToken {
        found: found.to_string(),
    }
}

// =============================================================================
// Plain attributes
// =============================================================================

/// Verifies that an attribute without `=` has no value.
#[test]
fn boolean_attribute_has_no_value() {
    let node = parse("<input disabled />");
    let attributes = attributes_of(&node);

    assert_eq!(attributes.len(), 1);
    let (name, value) = name_and_value(&attributes[0]);
    assert_eq!(name_text(name), "disabled");
    assert!(value.is_none());
    assert_eq!(offsets(&attributes[0]), (7, 15));
}

/// Verifies that a string attribute value is a `Literal` whose value has
/// its quotes removed.
#[test]
fn string_attribute() {
    let source = r#"<a b="c" />"#;
    let node = parse(source);
    let (name, value) = name_and_value(&attributes_of(&node)[0]);
    let value = value.expect("attribute value");

    assert_eq!(name_text(name), "b");
    assert_eq!(
        value.data,
        NodeData::Literal {
            value: LiteralValue::String("c".to_string()),
            raw: r#""c""#.to_string(),
        },
    );
    assert_eq!(text_of(value, source), r#""c""#);
    assert_eq!(offsets(&attributes_of(&node)[0]), (3, 8));
}

/// Verifies that single-quoted attribute strings work too.
#[test]
fn single_quoted_string_attribute() {
    let node = parse("<a b='it works' />");
    let (_, value) = name_and_value(&attributes_of(&node)[0]);
    let NodeData::Literal { value, .. } = &value.expect("value").data else {
        panic!("expected Literal");
    };
    assert_eq!(value, &LiteralValue::String("it works".to_string()));
}

/// Verifies that JSX attribute strings may span lines.
#[test]
fn multi_line_string_attribute() {
    let node = parse("<a b=\"x\ny\" />");
    let (_, value) = name_and_value(&attributes_of(&node)[0]);
    let value = value.expect("value");
    let NodeData::Literal { value: literal, .. } = &value.data else {
        panic!("expected Literal");
    };

    assert_eq!(literal, &LiteralValue::String("x\ny".to_string()));
    assert_eq!(value.end().line(), 1);
}

/// Verifies that attributes are kept in source order.
#[test]
fn multiple_attributes_in_order() {
    let node = parse(r#"<a first second="2" third={3} />"#);
    let names: Vec<_> = attributes_of(&node)
        .iter()
        .map(|attribute| name_text(name_and_value(attribute).0))
        .collect();

    assert_eq!(names, vec!["first", "second", "third"]);
}

/// Verifies that attribute names may be namespaced.
#[test]
fn namespaced_attribute_name() {
    let node = parse(r##"<use xlink:href="#a" />"##);
    let (name, _) = name_and_value(&attributes_of(&node)[0]);

    assert_eq!(name.kind(), NodeKind::JsxNamespacedName);
    assert_eq!(name_text(name), "xlink:href");
}

/// Verifies that attribute names are never member chains.
#[test]
fn member_attribute_name_is_an_error() {
    let error = parse_error("<a b.c />");
    assert_eq!(error.kind(), &unexpected("."));
}

// =============================================================================
// Expression containers
// =============================================================================

/// Verifies that `b={expr}` produces an expression container.
#[test]
fn expression_container_attribute() {
    let node = parse("<a b={1} />");
    let (_, value) = name_and_value(&attributes_of(&node)[0]);
    let value = value.expect("value");
    let NodeData::JsxExpressionContainer { expression } = &value.data else {
        panic!("expected JSXExpressionContainer, got {}", value.kind());
    };

    assert_eq!(offsets(value), (5, 8));
    assert_eq!(
        expression.data,
        NodeData::Literal {
            value: LiteralValue::Number(1.0),
            raw: "1".to_string(),
        },
    );
    assert_eq!(offsets(expression), (6, 7));
}

/// Verifies that an attribute container may not be empty.
#[test]
fn empty_attribute_container_is_an_error() {
    let error = parse_error("<a b={} />");
    assert_eq!(error.kind(), &unexpected("}"));
}

/// Verifies that the container is lexed in ordinary mode (`x-y` is a
/// subtraction) while the following attribute is lexed in JSX mode
/// (`data-z` is one name).
#[test]
fn lexing_mode_switches_around_containers() {
    let node = parse(r#"<a b={x-y} data-z="1" />"#);
    let attributes = attributes_of(&node);
    assert_eq!(attributes.len(), 2);

    let (_, value) = name_and_value(&attributes[0]);
    let NodeData::JsxExpressionContainer { expression } = &value.expect("value").data else {
        panic!("expected JSXExpressionContainer");
    };
    let NodeData::BinaryExpression { operator, .. } = &expression.data else {
        panic!("expected BinaryExpression, got {}", expression.kind());
    };
    assert_eq!(operator, "-");

    let (name, _) = name_and_value(&attributes[1]);
    assert_eq!(name_text(name), "data-z");
}

// =============================================================================
// Element and fragment values
// =============================================================================

/// Verifies that an element may be used directly as an attribute value.
#[test]
fn element_attribute_value() {
    let node = parse("<a b=<C/> />");
    let (_, value) = name_and_value(&attributes_of(&node)[0]);
    let value = value.expect("value");

    assert_eq!(value.kind(), NodeKind::JsxElement);
    assert_eq!(offsets(value), (5, 9));
    assert_eq!(offsets(&node), (0, 12));
}

/// Verifies that a fragment may be used directly as an attribute value.
#[test]
fn fragment_attribute_value() {
    let node = parse("<a b=<></> />");
    let (_, value) = name_and_value(&attributes_of(&node)[0]);
    let value = value.expect("value");

    assert_eq!(value.kind(), NodeKind::JsxFragment);
    assert_eq!(offsets(value), (5, 10));
}

/// Verifies that `=` must be followed by a value.
#[test]
fn missing_attribute_value() {
    let error = parse_error("<a b= />");
    assert_eq!(error.kind(), &unexpected("/"));
}

// =============================================================================
// Spread attributes
// =============================================================================

/// Verifies that `{...expr}` produces a spread attribute.
#[test]
fn spread_attribute() {
    let node = parse("<a {...props} />");
    let attribute = &attributes_of(&node)[0];
    let NodeData::JsxSpreadAttribute { argument } = &attribute.data else {
        panic!("expected JSXSpreadAttribute, got {}", attribute.kind());
    };

    assert_eq!(offsets(attribute), (3, 13));
    assert_eq!(
        argument.data,
        NodeData::Identifier {
            name: "props".to_string(),
        },
    );
    assert_eq!(offsets(argument), (7, 12));
}

/// Verifies that spread and plain attributes can be mixed.
#[test]
fn spread_between_attributes() {
    let node = parse(r#"<a x="1" {...rest} y />"#);
    let kinds: Vec<_> = attributes_of(&node).iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::JsxAttribute,
            NodeKind::JsxSpreadAttribute,
            NodeKind::JsxAttribute,
        ],
    );
}

/// Verifies that a brace in attribute position must start a spread.
#[test]
fn brace_without_spread_is_an_error() {
    let error = parse_error("<a {b} />");
    assert_eq!(error.kind(), &unexpected("b"));
}

/// Verifies that a spread attribute requires an argument.
#[test]
fn spread_attribute_requires_argument() {
    let error = parse_error("<a {...} />");
    assert_eq!(error.kind(), &unexpected("}"));
}
