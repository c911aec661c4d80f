//! The expression grammar injected into [`JsxParser`].
//!
//! JSX only defines where expressions may appear (`{ ... }` containers,
//! spread attributes and children); what an expression *is* is left to an
//! [`ExpressionGrammar`]. [`BasicExpressionGrammar`] is a small but complete
//! precedence ladder, every level of which is a
//! [`recursive_expression`](ParserHost::recursive_expression) over the next
//! one:
//!
//! | Level          | Operators                 | Node                 |
//! |----------------|---------------------------|----------------------|
//! | logical or     | `\|\|` `??`               | `LogicalExpression`  |
//! | logical and    | `&&`                      | `LogicalExpression`  |
//! | equality       | `===` `!==` `==` `!=`     | `BinaryExpression`   |
//! | relational     | `<=` `>=` `<` `>`         | `BinaryExpression`   |
//! | additive       | `+` `-`                   | `BinaryExpression`   |
//! | multiplicative | `*` `/` `%`               | `BinaryExpression`   |
//! | unary          | prefix `!` `-` `+` `~`    | `UnaryExpression`    |
//! | call / member  | `.name` `[expr]` `(args)` | `MemberExpression`, `CallExpression` |
//! | primary        | identifiers, literals, `( expr )`, JSX | |

use crate::ast::LiteralValue;
use crate::ast::Node;
use crate::ast::NodeData;
use crate::ast::NodeKind;
use crate::ast::NodeStart;
use crate::token::JsxToken;
use crate::token::JsxTokenKind;
use crate::token_source::JsxScanner;
use crate::unquote_literal_string;
use crate::BinaryKind;
use crate::JsxParseError;
use crate::JsxParser;
use crate::ParserCore;
use crate::ParserHost;
use crate::RuleResult;
use crate::Separator;

/// The general expression grammar, called wherever JSX embeds an
/// expression.
///
/// Implementations must follow the [`RuleResult`] contract: return
/// `Ok(None)` without consuming anything when no expression starts at the
/// current token.
pub trait ExpressionGrammar: Sized {
    fn parse_assignment_expression<'src, S: JsxScanner<'src>>(
        parser: &mut JsxParser<'src, S, Self>,
    ) -> RuleResult<Node>;
}

/// The default [`ExpressionGrammar`]. See the module documentation for the
/// supported operators.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicExpressionGrammar;

type BasicParser<'src, S> = JsxParser<'src, S, BasicExpressionGrammar>;

impl ExpressionGrammar for BasicExpressionGrammar {
    fn parse_assignment_expression<'src, S: JsxScanner<'src>>(
        parser: &mut BasicParser<'src, S>,
    ) -> RuleResult<Node> {
        parse_logical_or(parser)
    }
}

fn parse_logical_or<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    parser.recursive_expression(
        parse_logical_and,
        Separator::OneOf(&["||", "??"]),
        BinaryKind::Logical,
    )
}

fn parse_logical_and<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    parser.recursive_expression(
        parse_equality,
        Separator::Single("&&"),
        BinaryKind::Logical,
    )
}

fn parse_equality<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    parser.recursive_expression(
        parse_relational,
        Separator::OneOf(&["===", "!==", "==", "!="]),
        BinaryKind::Binary,
    )
}

fn parse_relational<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    parser.recursive_expression(
        parse_additive,
        Separator::OneOf(&["<=", ">=", "<", ">"]),
        BinaryKind::Binary,
    )
}

fn parse_additive<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    parser.recursive_expression(
        parse_multiplicative,
        Separator::OneOf(&["+", "-"]),
        BinaryKind::Binary,
    )
}

fn parse_multiplicative<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    parser.recursive_expression(
        parse_unary,
        Separator::OneOf(&["*", "/", "%"]),
        BinaryKind::Binary,
    )
}

fn parse_unary<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    let Some(operator) = parser
        .core
        .scanner_mut()
        .consume_one_of(&["!", "-", "+", "~"])
    else {
        return parse_call_member(parser);
    };

    let Some(argument) = parser.with_recursion_guard(parse_unary)? else {
        return Err(parser.core.error(None, None));
    };

    let open = parser
        .core
        .create_node(NodeKind::UnaryExpression, NodeStart::Token(&operator));
    Ok(Some(parser.core.complete_node(
        open,
        NodeData::UnaryExpression {
            operator: operator.raw_text().to_string(),
            prefix: true,
            argument: Box::new(argument),
        },
        None,
    )))
}

/// Parses a primary expression followed by any number of `.name`, `[expr]`
/// and `(args)` suffixes.
fn parse_call_member<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    let Some(mut object) = parse_primary(parser)? else {
        return Ok(None);
    };

    loop {
        let scanner = parser.core.scanner_mut();
        if scanner.consume(".").is_some() {
            let Some(property) = parse_identifier(&mut parser.core) else {
                return Err(parser.core.error(None, None));
            };
            object = complete_member(&mut parser.core, object, property, false);
        } else if scanner.consume("[").is_some() {
            let property = parser.with_recursion_guard(parse_computed_property)?;
            object = complete_member(&mut parser.core, object, property, true);
        } else if scanner.consume("(").is_some() {
            let arguments = parser.with_recursion_guard(parse_arguments)?;
            let open = parser
                .core
                .create_node(NodeKind::CallExpression, NodeStart::Node(&object));
            object = parser.core.complete_node(
                open,
                NodeData::CallExpression {
                    callee: Box::new(object),
                    arguments,
                },
                None,
            );
        } else {
            return Ok(Some(object));
        }
    }
}

/// Parses `expr ]` after a consumed `[`.
fn parse_computed_property<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> Result<Node, JsxParseError> {
    let property = parser.parse_required_expression()?;
    parser.core.expect("]")?;
    Ok(property)
}

/// Parses `args )` after a consumed `(`.
fn parse_arguments<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> Result<Vec<Node>, JsxParseError> {
    let arguments = parser
        .char_separated_list_of(
            BasicExpressionGrammar::parse_assignment_expression,
            Separator::Single(","),
        )?
        .into_iter()
        .map(|argument| argument.item)
        .collect();
    parser.core.expect(")")?;
    Ok(arguments)
}

fn complete_member<'src, S: JsxScanner<'src>>(
    core: &mut ParserCore<'src, S>,
    object: Node,
    property: Node,
    computed: bool,
) -> Node {
    let open = core.create_node(NodeKind::MemberExpression, NodeStart::Node(&object));
    core.complete_node(
        open,
        NodeData::MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed,
        },
        None,
    )
}

fn parse_primary<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> RuleResult<Node> {
    let Some(kind) = parser
        .core
        .scanner_mut()
        .current_token()
        .map(|token| token.kind.clone())
    else {
        return Ok(None);
    };

    match kind {
        JsxTokenKind::Identifier(_) => Ok(parse_identifier(&mut parser.core)),
        kind if kind.is_literal() => {
            let Some(token) = parser.core.scanner_mut().advance() else {
                return Ok(None);
            };
            Ok(literal_node(&mut parser.core, &token))
        },
        JsxTokenKind::Punctuator("(") => {
            parser.with_recursion_guard(parse_parenthesized).map(Some)
        },
        JsxTokenKind::Punctuator("<") if parser.core.config().jsx => {
            if let Some(fragment) = parser.parse_jsx_fragment()? {
                return Ok(Some(fragment));
            }
            parser.parse_jsx_element()
        },
        _ => Ok(None),
    }
}

/// Parses `( expression )`, returning the inner expression itself.
fn parse_parenthesized<'src, S: JsxScanner<'src>>(
    parser: &mut BasicParser<'src, S>,
) -> Result<Node, JsxParseError> {
    parser.core.expect("(")?;
    let expression = parser.parse_required_expression()?;
    parser.core.expect(")")?;
    Ok(expression)
}

/// Consumes an ordinary identifier token and turns it into an `Identifier`
/// node.
fn parse_identifier<'src, S: JsxScanner<'src>>(
    core: &mut ParserCore<'src, S>,
) -> Option<Node> {
    let is_identifier = core
        .scanner_mut()
        .current_token()
        .is_some_and(|token| matches!(token.kind, JsxTokenKind::Identifier(_)));
    if !is_identifier {
        return None;
    }

    let token = core.scanner_mut().advance()?;
    let open = core.create_node(NodeKind::Identifier, NodeStart::Token(&token));
    let name = token.raw_text().to_string();
    Some(core.complete_node(open, NodeData::Identifier { name }, None))
}

/// Turns an already-consumed literal token into a `Literal` node, or returns
/// `None` if `token` is not a literal.
///
/// String values are decoded with [`unquote_literal_string`].
pub(crate) fn literal_node<'src, S: JsxScanner<'src>>(
    core: &mut ParserCore<'src, S>,
    token: &JsxToken<'src>,
) -> Option<Node> {
    let raw = token.raw_text();
    let value = match &token.kind {
        JsxTokenKind::StringLiteral(_) => LiteralValue::String(unquote_literal_string(raw)),
        JsxTokenKind::NumericLiteral(_) => LiteralValue::Number(numeric_value(raw)),
        JsxTokenKind::True => LiteralValue::Boolean(true),
        JsxTokenKind::False => LiteralValue::Boolean(false),
        JsxTokenKind::Null => LiteralValue::Null,
        _ => return None,
    };

    let open = core.create_node(NodeKind::Literal, NodeStart::Token(token));
    Some(core.complete_node(
        open,
        NodeData::Literal {
            value,
            raw: raw.to_string(),
        },
        Some(token.span.end_exclusive.clone()),
    ))
}

/// The value of a numeric literal's raw text (`"0x1F"`, `"1_000"`,
/// `".5e3"`). Unparseable text is `NaN`.
fn numeric_value(raw: &str) -> f64 {
    let digits: String = raw.chars().filter(|&c| c != '_').collect();
    let radix = match digits.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return digits.parse().unwrap_or(f64::NAN),
    };
    u64::from_str_radix(&digits[2..], radix)
        .map(|value| value as f64)
        .unwrap_or(f64::NAN)
}
