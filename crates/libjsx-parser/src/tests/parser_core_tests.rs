//! Tests for the generic `ParserCore` machinery: node lifecycle, errors,
//! recursion accounting and the `ParserHost` combinators.

use crate::ast::Node;
use crate::ast::NodeData;
use crate::ast::NodeKind;
use crate::ast::NodeStart;
use crate::token::JsxTokenKind;
use crate::token_source::JsxScanner;
use crate::token_source::StrJsxScanner;
use crate::BinaryKind;
use crate::JsxParseError;
use crate::JsxParseErrorKind;
use crate::JsxParserConfig;
use crate::ParserCore;
use crate::ParserHost;
use crate::RuleResult;
use crate::Separator;
use crate::SourcePosition;

type TestCore<'src> = ParserCore<'src, StrJsxScanner<'src>>;

fn core_for(source: &str) -> TestCore<'_> {
    ParserCore::new(StrJsxScanner::new(source), JsxParserConfig::default())
}

/// A minimal rule: one ordinary identifier.
fn identifier<'src>(core: &mut TestCore<'src>) -> RuleResult<Node> {
    let is_identifier = core
        .scanner_mut()
        .current_token()
        .is_some_and(|token| matches!(token.kind, JsxTokenKind::Identifier(_)));
    if !is_identifier {
        return Ok(None);
    }
    let Some(token) = core.scanner_mut().advance() else {
        return Ok(None);
    };
    let open = core.create_node(NodeKind::Identifier, NodeStart::Token(&token));
    let name = token.raw_text().to_string();
    Ok(Some(core.complete_node(open, NodeData::Identifier { name }, None)))
}

fn identifier_name(node: &Node) -> &str {
    match &node.data {
        NodeData::Identifier { name } => name,
        other => panic!("expected Identifier, got {}", other.kind()),
    }
}

fn unexpected(found: &str) -> JsxParseErrorKind {
    JsxParseErrorKind::UnexpectedToken {
        found: found.to_string(),
    }
}

// =============================================================================
// char_separated_list_of
// =============================================================================

/// Verifies that items and the separators before them are collected in
/// order.
#[test]
fn separated_list() {
    let mut core = core_for("a, b, c");
    let items = core
        .char_separated_list_of(identifier, Separator::Single(","))
        .expect("list parses");

    let names: Vec<_> = items.iter().map(|item| identifier_name(&item.item)).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(items[0].separator.is_none());
    assert_eq!(
        items[1].separator.as_ref().map(|token| token.raw_text()),
        Some(","),
    );
    assert!(core.scanner_mut().at_end());
}

/// Verifies that zero matches is an empty list, not an error.
#[test]
fn separated_list_empty() {
    let mut core = core_for("");
    let items = core
        .char_separated_list_of(identifier, Separator::Single(","))
        .expect("empty list parses");
    assert!(items.is_empty());
}

/// Verifies that a trailing separator at end of input is a hard error.
#[test]
fn separated_list_dangling_separator_at_eof() {
    let mut core = core_for("a,");
    let error = core
        .char_separated_list_of(identifier, Separator::Single(","))
        .unwrap_err();

    assert_eq!(error.kind(), &JsxParseErrorKind::UnexpectedEof);
    assert_eq!(error.span().start_inclusive.byte_offset(), 2);
}

/// Verifies that a separator followed by a non-item is a hard error at the
/// non-item.
#[test]
fn separated_list_dangling_separator_before_token() {
    let mut core = core_for("a, )");
    let error = core
        .char_separated_list_of(identifier, Separator::Single(","))
        .unwrap_err();

    assert_eq!(error.kind(), &unexpected(")"));
    assert_eq!(error.message(), "unexpected token `)`");
    assert_eq!(error.span().start_inclusive.byte_offset(), 3);
}

/// Verifies that the list ends (without consuming) at the first token that
/// is not a separator.
#[test]
fn separated_list_stops_at_non_separator() {
    let mut core = core_for("a b");
    let items = core
        .char_separated_list_of(identifier, Separator::Single(","))
        .expect("list parses");

    assert_eq!(items.len(), 1);
    let current = core.scanner_mut().current_token().map(|token| token.raw_text().to_string());
    assert_eq!(current.as_deref(), Some("b"));
}

/// Verifies that with several separators the matched one is reported.
#[test]
fn separated_list_one_of() {
    let mut core = core_for("a + b - c");
    let items = core
        .char_separated_list_of(identifier, Separator::OneOf(&["+", "-"]))
        .expect("list parses");

    let separators: Vec<_> = items
        .iter()
        .map(|item| item.separator.as_ref().map(|token| token.raw_text().to_string()))
        .collect();
    assert_eq!(
        separators,
        vec![None, Some("+".to_string()), Some("-".to_string())],
    );
}

// =============================================================================
// recursive_expression
// =============================================================================

/// Verifies that a single operand is returned without a binary wrapper.
#[test]
fn recursive_expression_single_operand() {
    let mut core = core_for("a");
    let node = core
        .recursive_expression(identifier, Separator::OneOf(&["+", "-"]), BinaryKind::Binary)
        .expect("parses")
        .expect("matches");
    assert_eq!(node.kind(), NodeKind::Identifier);
}

/// Verifies left-associative folding and the resulting spans.
#[test]
fn recursive_expression_folds_left() {
    let mut core = core_for("a - b - c");
    let node = core
        .recursive_expression(identifier, Separator::OneOf(&["+", "-"]), BinaryKind::Binary)
        .expect("parses")
        .expect("matches");

    let NodeData::BinaryExpression { operator, left, right } = &node.data else {
        panic!("expected BinaryExpression, got {}", node.kind());
    };
    assert_eq!(operator, "-");
    assert_eq!(identifier_name(right), "c");
    assert_eq!((node.start().byte_offset(), node.end().byte_offset()), (0, 9));

    assert_eq!(left.kind(), NodeKind::BinaryExpression);
    assert_eq!((left.start().byte_offset(), left.end().byte_offset()), (0, 5));
}

/// Verifies that `BinaryKind::Logical` builds logical expressions.
#[test]
fn recursive_expression_logical() {
    let mut core = core_for("a && b");
    let node = core
        .recursive_expression(identifier, Separator::Single("&&"), BinaryKind::Logical)
        .expect("parses")
        .expect("matches");

    assert_eq!(node.kind(), NodeKind::LogicalExpression);
}

/// Verifies that no operands is a soft no-match.
#[test]
fn recursive_expression_no_operands() {
    let mut core = core_for("");
    let result = core
        .recursive_expression(identifier, Separator::Single("+"), BinaryKind::Binary)
        .expect("no hard error");
    assert!(result.is_none());
}

/// Verifies that an operator without a right operand is a hard error.
#[test]
fn recursive_expression_missing_right_operand() {
    let mut core = core_for("a +");
    let error = core
        .recursive_expression(identifier, Separator::Single("+"), BinaryKind::Binary)
        .unwrap_err();
    assert_eq!(error.kind(), &JsxParseErrorKind::UnexpectedEof);
}

// =============================================================================
// Errors
// =============================================================================

/// Verifies the generic error for an ordinary unexpected token.
#[test]
fn error_unexpected_token() {
    let mut core = core_for("  )");
    let error = core.error(None, None);

    assert_eq!(error.kind(), &unexpected(")"));
    assert_eq!(error.span().start_inclusive.byte_offset(), 2);
    assert_eq!(error.span().end_exclusive.byte_offset(), 3);
}

/// Verifies that an explicit position overrides the token's span.
#[test]
fn error_at_explicit_position() {
    let mut core = core_for("a b");
    let position = SourcePosition::new(0, 1, Some(1), 1);
    let error = core.error(None, Some(position));

    assert_eq!(error.kind(), &unexpected("a"));
    assert_eq!(error.span().start_inclusive.byte_offset(), 1);
    assert_eq!(error.span().end_exclusive.byte_offset(), 1);
}

/// Verifies that an explicit message yields an `InvalidSyntax` error.
#[test]
fn error_with_message() {
    let mut core = core_for("a");
    let error = core.error(Some("something is wrong here"), None);

    assert_eq!(error.kind(), &JsxParseErrorKind::InvalidSyntax);
    assert_eq!(error.message(), "something is wrong here");
    assert_eq!(error.span().end_exclusive.byte_offset(), 1);
}

/// Verifies that an error token's message is surfaced as a lexer error.
#[test]
fn error_from_lexer_error_token() {
    let mut core = core_for("3in");
    let error = core.error(None, None);

    assert_eq!(error.kind(), &JsxParseErrorKind::LexerError);
    assert_eq!(error.message(), "invalid numeric literal `3in`");
}

/// Verifies that an invalid character is described in the error.
#[test]
fn error_from_invalid_character() {
    let mut core = core_for("€");
    let error = core.error(None, None);

    assert_eq!(error.kind(), &JsxParseErrorKind::LexerError);
    assert_eq!(error.message(), "unexpected character `€`");
}

/// Verifies that an unterminated comment reads as an end-of-input error.
#[test]
fn error_in_unterminated_comment() {
    let mut core = core_for("a /* never closed");
    core.scanner_mut().advance();
    let error = core.error(None, None);

    assert_eq!(error.kind(), &JsxParseErrorKind::UnexpectedEof);
    assert_eq!(error.message(), "unexpected end of input");
}

/// Verifies that `expect` consumes a match and errors otherwise.
#[test]
fn expect_punctuator() {
    let mut core = core_for("( x");
    let token = core.expect("(").expect("`(` is present");
    assert!(token.is_punctuator("("));

    let error = core.expect(")").unwrap_err();
    assert_eq!(error.kind(), &unexpected("x"));
}

// =============================================================================
// Node lifecycle
// =============================================================================

/// Verifies each way of fixing a node's start position.
#[test]
fn create_node_start_sources() {
    let mut core = core_for("  a b");

    let open = core.create_node(NodeKind::Identifier, NodeStart::Current);
    assert_eq!(open.start().byte_offset(), 2);
    let open = core.create_node(NodeKind::Identifier, NodeStart::FirstOf(&[]));
    assert_eq!(open.start().byte_offset(), 2);

    let a = identifier(&mut core).expect("parses").expect("matches");
    let b = identifier(&mut core).expect("parses").expect("matches");
    let open = core.create_node(NodeKind::Identifier, NodeStart::Node(&b));
    assert_eq!(open.start().byte_offset(), 4);
    let nodes = [a, b];
    let open = core.create_node(NodeKind::Identifier, NodeStart::FirstOf(&nodes));
    assert_eq!(open.start().byte_offset(), 2);

    let position = SourcePosition::new(0, 3, Some(3), 3);
    let open = core.create_node(NodeKind::Identifier, NodeStart::Position(&position));
    assert_eq!(open.start().byte_offset(), 3);
}

/// Verifies that at end of input the current position is the end of the
/// last consumed token.
#[test]
fn create_node_at_end_of_input() {
    let mut core = core_for("ab  ");
    core.scanner_mut().advance();

    let open = core.create_node(NodeKind::JsxEmptyExpression, NodeStart::Current);
    assert_eq!(open.start().byte_offset(), 2);
}

/// Verifies that `complete_node` ends at the last consumed token by default
/// and at an explicit end otherwise.
#[test]
fn complete_node_end() {
    let mut core = core_for("a b");
    let open = core.create_node(NodeKind::Identifier, NodeStart::Current);
    core.scanner_mut().advance();
    core.scanner_mut().advance();
    let node = core.complete_node(
        open,
        NodeData::Identifier {
            name: "a".to_string(),
        },
        None,
    );
    assert_eq!(node.end().byte_offset(), 3);

    let open = core.create_node(NodeKind::JsxEmptyExpression, NodeStart::Current);
    let end = open.start().clone();
    let node = core.complete_node(open, NodeData::JsxEmptyExpression, Some(end));
    assert_eq!(node.start(), node.end());
}

// =============================================================================
// Lexing mode
// =============================================================================

/// Verifies that `with_jsx_mode` restores the previous mode after an error.
#[test]
fn jsx_mode_restored_after_error() {
    let mut core = core_for("a");
    let result: Result<(), JsxParseError> = core.with_jsx_mode(true, |core| {
        assert!(core.scanner().jsx_mode());
        Err(core.error(Some("boom"), None))
    });

    assert!(result.is_err());
    assert!(!core.scanner().jsx_mode());
}

/// Verifies that nested mode switches unwind in order.
#[test]
fn jsx_mode_nesting() {
    let mut core = core_for("a");
    core.with_jsx_mode(true, |core| {
        core.with_jsx_mode(false, |core| {
            assert!(!core.scanner().jsx_mode());
        });
        assert!(core.scanner().jsx_mode());
    });
    assert!(!core.scanner().jsx_mode());
}

/// Verifies that the same text is re-lexed according to the mode.
#[test]
fn jsx_mode_changes_tokenization() {
    let mut core = core_for("data-id");

    let jsx_kind = core.with_jsx_mode(true, |core| {
        core.scanner_mut().current_token().map(|token| token.kind.clone())
    });
    assert_eq!(jsx_kind, Some(JsxTokenKind::jsx_identifier_borrowed("data-id")));

    let kind = core.scanner_mut().current_token().map(|token| token.kind.clone());
    assert_eq!(kind, Some(JsxTokenKind::identifier_borrowed("data")));
}

// =============================================================================
// Recursion depth
// =============================================================================

/// Verifies that the depth limit is enforced and that the counter is
/// balanced.
#[test]
fn recursion_limit() {
    let config = JsxParserConfig {
        max_recursion_depth: 2,
        ..JsxParserConfig::default()
    };
    let mut core = ParserCore::new(StrJsxScanner::new("x"), config);

    core.enter_recursion().expect("depth 1");
    core.enter_recursion().expect("depth 2");
    let error = core.enter_recursion().unwrap_err();
    assert_eq!(
        error.kind(),
        &JsxParseErrorKind::RecursionLimitExceeded { limit: 2 },
    );
    assert_eq!(error.message(), "maximum nesting depth exceeded");
    assert_eq!(core.recursion_depth(), 2);

    core.exit_recursion();
    core.exit_recursion();
    assert_eq!(core.recursion_depth(), 0);
}

/// Verifies that `with_recursion_guard` counts one level around its
/// closure, restores the depth on success and on error, and refuses to run
/// the closure past the limit.
#[test]
fn with_recursion_guard_balances_depth() {
    let config = JsxParserConfig {
        max_recursion_depth: 1,
        ..JsxParserConfig::default()
    };
    let mut core = ParserCore::new(StrJsxScanner::new("x"), config);

    let depth = core
        .with_recursion_guard(|core| Ok(core.recursion_depth()))
        .expect("within the limit");
    assert_eq!(depth, 1);
    assert_eq!(core.recursion_depth(), 0);

    let error = core
        .with_recursion_guard(|core| -> Result<(), JsxParseError> {
            Err(core.error(Some("inner failure"), None))
        })
        .unwrap_err();
    assert_eq!(error.message(), "inner failure");
    assert_eq!(core.recursion_depth(), 0);

    let mut ran_nested = false;
    let error = core
        .with_recursion_guard(|core| {
            core.with_recursion_guard(|_| {
                ran_nested = true;
                Ok(())
            })
        })
        .unwrap_err();
    assert!(!ran_nested);
    assert_eq!(
        error.kind(),
        &JsxParseErrorKind::RecursionLimitExceeded { limit: 1 },
    );
    assert_eq!(core.recursion_depth(), 0);
}
