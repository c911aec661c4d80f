//! Tests for parsing JSX children: text, expression containers, and nested
//! elements.

use crate::ast::NodeData;
use crate::ast::NodeKind;
use crate::tests::utils::children_of;
use crate::tests::utils::offsets;
use crate::tests::utils::parse;
use crate::tests::utils::parse_error;
use crate::tests::utils::text_of;
use crate::JsxParseErrorKind;

/// Verifies that text and expression containers alternate as children.
#[test]
fn text_and_expression_children() {
    let source = "<a>Hello {name}!</a>";
    let node = parse(source);
    let children = children_of(&node).expect("children");

    assert_eq!(children.len(), 3);
    assert_eq!(text_of(&children[0], source), "Hello ");
    assert_eq!(offsets(&children[1]), (9, 15));
    assert_eq!(text_of(&children[2], source), "!");

    let NodeData::JsxExpressionContainer { expression } = &children[1].data else {
        panic!("expected JSXExpressionContainer, got {}", children[1].kind());
    };
    assert_eq!(
        expression.data,
        NodeData::Identifier {
            name: "name".to_string(),
        },
    );
    assert_eq!(offsets(expression), (10, 14));
}

/// Verifies that whitespace and line breaks in text are preserved
/// verbatim in both `value` and `raw`.
#[test]
fn text_preserves_whitespace() {
    let node = parse("<a>\n  some text\n</a>");
    let children = children_of(&node).expect("children");

    assert_eq!(
        children[0].data,
        NodeData::JsxText {
            value: "\n  some text\n".to_string(),
            raw: "\n  some text\n".to_string(),
        },
    );
    assert_eq!(children[0].start().line(), 0);
    assert_eq!(children[0].end().line(), 2);
}

/// Verifies that characters that are punctuators elsewhere are plain text
/// in child position.
#[test]
fn punctuation_in_text() {
    let source = "<a>1 > 0 && 'quoted'; // not a comment</a>";
    let node = parse(source);
    let children = children_of(&node).expect("children");

    assert_eq!(children.len(), 1);
    assert_eq!(
        text_of(&children[0], source),
        "1 > 0 && 'quoted'; // not a comment",
    );
}

/// Verifies that a container holding only a comment is an empty expression
/// positioned right after the `{`.
#[test]
fn comment_only_container() {
    let node = parse("<a>{/* c */}</a>");
    let children = children_of(&node).expect("children");
    let NodeData::JsxExpressionContainer { expression } = &children[0].data else {
        panic!("expected JSXExpressionContainer");
    };

    assert_eq!(expression.kind(), NodeKind::JsxEmptyExpression);
    assert_eq!(offsets(expression), (4, 4));
    assert_eq!(offsets(&children[0]), (3, 12));
}

/// Verifies that an element inside a container is parsed by the expression
/// grammar.
#[test]
fn element_inside_container() {
    let node = parse("<a>{<b/>}</a>");
    let children = children_of(&node).expect("children");
    let NodeData::JsxExpressionContainer { expression } = &children[0].data else {
        panic!("expected JSXExpressionContainer");
    };

    assert_eq!(expression.kind(), NodeKind::JsxElement);
    assert_eq!(offsets(expression), (4, 8));
}

/// Verifies the common conditional-rendering pattern `{cond && <b/>}`.
#[test]
fn conditional_element_inside_container() {
    let node = parse("<a>{ok && <b>yes</b>}</a>");
    let children = children_of(&node).expect("children");
    let NodeData::JsxExpressionContainer { expression } = &children[0].data else {
        panic!("expected JSXExpressionContainer");
    };
    let NodeData::LogicalExpression { operator, right, .. } = &expression.data else {
        panic!("expected LogicalExpression, got {}", expression.kind());
    };

    assert_eq!(operator, "&&");
    assert_eq!(right.kind(), NodeKind::JsxElement);
}

/// Verifies that a call with an element argument works inside a container
/// and that the text after the container is still JSX text.
#[test]
fn call_inside_container_followed_by_text() {
    let source = "<ul>{items.map(render)} total</ul>";
    let node = parse(source);
    let children = children_of(&node).expect("children");

    assert_eq!(children.len(), 2);
    let NodeData::JsxExpressionContainer { expression } = &children[0].data else {
        panic!("expected JSXExpressionContainer");
    };
    assert_eq!(expression.kind(), NodeKind::CallExpression);
    assert_eq!(text_of(&children[1], source), " total");
}

/// Verifies that elements, fragments and text mix freely as children.
#[test]
fn mixed_children() {
    let node = parse("<a>x<b/><>y</>{z}</a>");
    let kinds: Vec<_> = children_of(&node)
        .expect("children")
        .iter()
        .map(|child| child.kind())
        .collect();

    assert_eq!(
        kinds,
        vec![
            NodeKind::JsxText,
            NodeKind::JsxElement,
            NodeKind::JsxFragment,
            NodeKind::JsxExpressionContainer,
        ],
    );
}

/// Verifies that an unclosed container is a hard error. Inside the
/// container `<` is the less-than operator, so the error is at the `/`.
#[test]
fn unclosed_container() {
    let error = parse_error("<a>{x</a>");
    assert_eq!(
        error.kind(),
        &JsxParseErrorKind::UnexpectedToken {
            found: "/".to_string(),
        },
    );
    assert_eq!(error.span().start_inclusive.byte_offset(), 6);
}

/// Verifies that an unterminated comment inside a container is reported as
/// an end-of-input error.
#[test]
fn unterminated_comment_in_container() {
    let error = parse_error("<a>{/* c </a>");
    assert_eq!(error.kind(), &JsxParseErrorKind::UnexpectedEof);
}
