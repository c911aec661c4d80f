//! Generic recursive-descent machinery shared by every grammar rule.
//!
//! [`ParserCore`] owns the scanner and provides the node lifecycle
//! ([`create_node`](ParserCore::create_node) /
//! [`complete_node`](ParserCore::complete_node)), structured hard errors
//! ([`error`](ParserCore::error)) and recursion-depth accounting.
//!
//! [`ParserHost`] is implemented by anything that wraps a `ParserCore`
//! (the core itself, and [`JsxParser`](crate::JsxParser)). Its provided
//! methods are the combinators that take grammar rules as closures over the
//! host: [`char_separated_list_of`](ParserHost::char_separated_list_of),
//! [`recursive_expression`](ParserHost::recursive_expression), the
//! depth-counted [`with_recursion_guard`](ParserHost::with_recursion_guard)
//! and the scoped lexing-mode switch
//! [`with_jsx_mode`](ParserHost::with_jsx_mode).
//!
//! # Rule results
//!
//! Every grammar rule returns a [`RuleResult`]:
//!
//! - `Ok(Some(node))`: the construct was parsed.
//! - `Ok(None)`: soft no-match. The construct is absent at the current
//!   position and nothing was consumed; the caller may try alternatives.
//! - `Err(error)`: hard error. A construct had begun and could not be
//!   completed; parsing of the whole unit is abandoned.
//!
//! A rule that has consumed any token never returns `Ok(None)`.

use crate::ast::Node;
use crate::ast::NodeData;
use crate::ast::NodeKind;
use crate::ast::NodeStart;
use crate::ast::OpenNode;
use crate::token::JsxToken;
use crate::token::JsxTokenKind;
use crate::token_source::JsxScanner;
use crate::JsxParseError;
use crate::JsxParseErrorKind;
use crate::JsxParserConfig;
use crate::JsxSourceSpan;
use crate::SourcePosition;
use std::marker::PhantomData;

/// Remaining stack below which [`ParserHost::with_recursion_guard`] moves
/// onto a fresh heap-allocated segment. Must exceed the stack used by one
/// recursion level in an unoptimized build.
const STACK_RED_ZONE: usize = 512 * 1024;

/// Size of each heap-allocated stack segment.
const STACK_SEGMENT_SIZE: usize = 4 * 1024 * 1024;

/// Outcome of a grammar rule: match, soft no-match, or hard error.
pub type RuleResult<T> = Result<Option<T>, JsxParseError>;

/// The separator (or set of interchangeable separators) accepted between
/// list items by [`ParserHost::char_separated_list_of`].
#[derive(Clone, Copy, Debug)]
pub enum Separator<'a> {
    /// A single punctuator, e.g. `","`.
    Single(&'a str),
    /// Any one of a set of punctuators, e.g. `["+", "-"]`.
    OneOf(&'a [&'a str]),
}

/// An item matched by [`ParserHost::char_separated_list_of`], paired with
/// the separator token that came before it.
///
/// Pairing with the preceding separator (rather than the following one)
/// means the first item has none and no item carries a trailing separator,
/// which the list never accepts anyway.
#[derive(Clone, Debug, PartialEq)]
pub struct SeparatedItem<'src, T> {
    /// The separator between the previous item and this one (`None` for the
    /// first item).
    pub separator: Option<JsxToken<'src>>,
    pub item: T,
}

/// Which node kind [`ParserHost::recursive_expression`] builds for each
/// fold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryKind {
    /// `BinaryExpression` (arithmetic, comparison, ...).
    Binary,
    /// `LogicalExpression` (`&&`, `||`, `??`).
    Logical,
}

impl BinaryKind {
    fn node_kind(self) -> NodeKind {
        match self {
            BinaryKind::Binary => NodeKind::BinaryExpression,
            BinaryKind::Logical => NodeKind::LogicalExpression,
        }
    }

    fn node_data(self, operator: String, left: Node, right: Node) -> NodeData {
        let left = Box::new(left);
        let right = Box::new(right);
        match self {
            BinaryKind::Binary => NodeData::BinaryExpression { operator, left, right },
            BinaryKind::Logical => NodeData::LogicalExpression { operator, left, right },
        }
    }
}

/// Parse state shared by all grammar rules: the scanner, configuration
/// and recursion depth.
///
/// # Type Parameters
///
/// - `'src`: the lifetime of the source text
/// - `S`: the scanner producing tokens
pub struct ParserCore<'src, S: JsxScanner<'src>> {
    scanner: S,

    config: JsxParserConfig,

    /// Current nesting depth of recursive rules.
    ///
    /// Incremented on entry to nested JSX elements and fragments, and to
    /// parenthesized, unary, computed-member and call expressions;
    /// decremented on exit.
    recursion_depth: usize,

    _source: PhantomData<&'src str>,
}

impl<'src, S: JsxScanner<'src>> ParserCore<'src, S> {
    pub fn new(scanner: S, config: JsxParserConfig) -> Self {
        Self {
            scanner,
            config,
            recursion_depth: 0,
            _source: PhantomData,
        }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn scanner_mut(&mut self) -> &mut S {
        &mut self.scanner
    }

    pub fn config(&self) -> &JsxParserConfig {
        &self.config
    }

    /// Consumes the core, returning its scanner.
    pub fn into_scanner(self) -> S {
        self.scanner
    }

    // =========================================================================
    // Node lifecycle
    // =========================================================================

    /// Opens a node of `kind`, fixing its start position.
    pub fn create_node(&mut self, kind: NodeKind, start: NodeStart<'_>) -> OpenNode {
        let start = match start {
            NodeStart::Position(position) => position.clone(),
            NodeStart::Token(token) => token.span.start_inclusive.clone(),
            NodeStart::Node(node) => node.start().clone(),
            NodeStart::FirstOf([first, ..]) => first.start().clone(),
            NodeStart::FirstOf([]) | NodeStart::Current => self.current_position(),
        };
        OpenNode::new(kind, start)
    }

    /// Completes an opened node with its contents, fixing its end position.
    ///
    /// `end` defaults to the end of the most recently consumed token.
    pub fn complete_node(
        &self,
        open: OpenNode,
        data: NodeData,
        end: Option<SourcePosition>,
    ) -> Node {
        debug_assert_eq!(
            open.kind(),
            data.kind(),
            "complete_node: node opened as {} completed as {}",
            open.kind(),
            data.kind(),
        );
        let end = end.unwrap_or_else(|| self.scanner.last_end_position());
        let start = open.into_start();
        debug_assert!(
            start <= end,
            "complete_node: node ends (byte {}) before it starts (byte {})",
            end.byte_offset(),
            start.byte_offset(),
        );
        Node {
            data,
            span: self.make_span(start, end),
        }
    }

    /// The start of the current token, or the end of the last consumed token
    /// if the input is exhausted.
    pub fn current_position(&mut self) -> SourcePosition {
        match self.scanner.current_token() {
            Some(token) => token.span.start_inclusive.clone(),
            None => self.scanner.last_end_position(),
        }
    }

    pub fn make_span(&self, start: SourcePosition, end: SourcePosition) -> JsxSourceSpan {
        match self.scanner.file_path() {
            Some(path) => JsxSourceSpan::with_file(start, end, path.to_path_buf()),
            None => JsxSourceSpan::new(start, end),
        }
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Returns `true` if the current token is the punctuator `punct`.
    pub fn current_is(&mut self, punct: &str) -> bool {
        self.scanner
            .current_token()
            .is_some_and(|token| token.is_punctuator(punct))
    }

    /// Returns `true` if the token after the current one is the punctuator
    /// `punct`.
    pub fn peek_is(&mut self, punct: &str) -> bool {
        self.scanner
            .peek_token()
            .is_some_and(|token| token.is_punctuator(punct))
    }

    /// Consumes the punctuator `punct`, or fails with the generic
    /// unexpected-token error.
    pub fn expect(&mut self, punct: &str) -> Result<JsxToken<'src>, JsxParseError> {
        match self.scanner.consume(punct) {
            Some(token) => Ok(token),
            None => Err(self.error(None, None)),
        }
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Builds a hard syntax error.
    ///
    /// With an explicit `message` the error is `InvalidSyntax` at `position`
    /// (or at the current token). Without one the error describes what was
    /// found instead:
    ///
    /// - "unexpected end of input" if the input is exhausted, or if skipping
    ///   trivia fails (an unterminated comment)
    /// - the scanner's own message for an `Error` token
    /// - "unexpected token `<raw>`" otherwise
    ///
    /// The returned error must be propagated (`return Err(...)`); it is
    /// never a value a rule can continue with.
    pub fn error(
        &mut self,
        message: Option<&str>,
        position: Option<SourcePosition>,
    ) -> JsxParseError {
        let error = match message {
            Some(message) => {
                let span = match position {
                    Some(position) => self.make_span(position.clone(), position),
                    None => self.current_span(),
                };
                JsxParseError::new(message, span, JsxParseErrorKind::InvalidSyntax)
            },
            None => self.unexpected_error(position),
        };
        log::debug!("hard parse error: {}", error.format_oneline());
        error
    }

    fn unexpected_error(&mut self, position: Option<SourcePosition>) -> JsxParseError {
        let found = match self.scanner.skip_trivia(false) {
            Some(_) => self
                .scanner
                .current_token()
                .map(|token| (token.span.clone(), token.kind.clone())),
            None => None,
        };

        let Some((token_span, kind)) = found else {
            let position = position.unwrap_or_else(|| self.scanner.last_end_position());
            return JsxParseError::new(
                "unexpected end of input",
                self.make_span(position.clone(), position),
                JsxParseErrorKind::UnexpectedEof,
            );
        };

        let span = match position {
            Some(position) => self.make_span(position.clone(), position),
            None => token_span,
        };
        match kind {
            JsxTokenKind::Error { message, .. } => {
                JsxParseError::new(message, span, JsxParseErrorKind::LexerError)
            },
            kind => {
                let found = kind.raw_text().to_string();
                JsxParseError::new(
                    format!("unexpected token `{found}`"),
                    span,
                    JsxParseErrorKind::UnexpectedToken { found },
                )
            },
        }
    }

    /// The current token's span, or a zero-width span after the last
    /// consumed token.
    fn current_span(&mut self) -> JsxSourceSpan {
        match self.scanner.current_token() {
            Some(token) => token.span.clone(),
            None => {
                let end = self.scanner.last_end_position();
                self.make_span(end.clone(), end)
            },
        }
    }

    // =========================================================================
    // Recursion depth
    // =========================================================================

    /// Checks recursion depth and returns an error if the limit is
    /// exceeded. On success, increments the depth counter; the caller
    /// must call `exit_recursion()` when done (grammar rules go through
    /// [`ParserHost::with_recursion_guard`], which guarantees this).
    pub fn enter_recursion(&mut self) -> Result<(), JsxParseError> {
        let limit = self.config.max_recursion_depth;
        if self.recursion_depth >= limit {
            let span = self.current_span();
            let error = JsxParseError::new(
                "maximum nesting depth exceeded",
                span,
                JsxParseErrorKind::RecursionLimitExceeded { limit },
            );
            log::debug!("hard parse error: {}", error.format_oneline());
            return Err(error);
        }
        self.recursion_depth += 1;
        Ok(())
    }

    /// Decrements the recursion depth counter.
    pub fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    pub fn recursion_depth(&self) -> usize {
        self.recursion_depth
    }
}

/// A parser built around a [`ParserCore`].
///
/// The provided methods are the grammar combinators. They take rules as
/// closures over the host so that a rule can itself call any other rule of
/// the host.
pub trait ParserHost<'src> {
    type Scanner: JsxScanner<'src>;

    fn core(&self) -> &ParserCore<'src, Self::Scanner>;

    fn core_mut(&mut self) -> &mut ParserCore<'src, Self::Scanner>;

    /// Applies `rule` repeatedly, consuming one separator between successive
    /// matches.
    ///
    /// Zero matches is a valid (empty) result. A separator that is not
    /// followed by a match is a hard error: `a,` never yields a truncated
    /// list. Each item is paired with the separator token that preceded it,
    /// so callers of [`Separator::OneOf`] know which operator joined each
    /// pair of items.
    fn char_separated_list_of<T>(
        &mut self,
        mut rule: impl FnMut(&mut Self) -> RuleResult<T>,
        separator: Separator<'_>,
    ) -> Result<Vec<SeparatedItem<'src, T>>, JsxParseError>
    where
        Self: Sized,
    {
        let mut items = Vec::new();
        let mut pending_separator = None;

        loop {
            match rule(self)? {
                Some(item) => items.push(SeparatedItem {
                    separator: pending_separator.take(),
                    item,
                }),
                None if pending_separator.is_some() => {
                    return Err(self.core_mut().error(None, None));
                },
                None => break,
            }

            let scanner = self.core_mut().scanner_mut();
            pending_separator = match separator {
                Separator::Single(punct) => scanner.consume(punct),
                Separator::OneOf(puncts) => scanner.consume_one_of(puncts),
            };
            if pending_separator.is_none() {
                break;
            }
        }

        Ok(items)
    }

    /// Parses a left-associative chain of `rule` operands joined by
    /// `operators`.
    ///
    /// A single operand is returned unchanged, with no binary node around
    /// it. With more operands, each fold's left side is the previous fold
    /// (or the first operand), its operator the separator matched before the
    /// right operand, and its span runs from the leftmost operand's start to
    /// the scanner position right after the right operand was consumed
    /// (so `a + (b)` covers the closing parenthesis).
    fn recursive_expression(
        &mut self,
        mut rule: impl FnMut(&mut Self) -> RuleResult<Node>,
        operators: Separator<'_>,
        kind: BinaryKind,
    ) -> RuleResult<Node>
    where
        Self: Sized,
    {
        let operand = |host: &mut Self| -> RuleResult<(Node, SourcePosition)> {
            let Some(node) = rule(host)? else {
                return Ok(None);
            };
            let end = host.core().scanner().last_end_position();
            Ok(Some((node, end)))
        };
        let mut operands = self.char_separated_list_of(operand, operators)?.into_iter();
        let Some(first) = operands.next() else {
            return Ok(None);
        };

        let (mut folded, _) = first.item;
        for SeparatedItem { separator, item: (right, end) } in operands {
            let operator = separator
                .map(|token| token.raw_text().to_string())
                .unwrap_or_default();
            let core = self.core_mut();
            let open = core.create_node(kind.node_kind(), NodeStart::Node(&folded));
            folded = core.complete_node(open, kind.node_data(operator, folded, right), Some(end));
        }

        Ok(Some(folded))
    }

    /// Runs `f` one recursion level deeper.
    ///
    /// Fails with `RecursionLimitExceeded` instead of running `f` once
    /// [`JsxParserConfig::max_recursion_depth`] is reached. Every recursive
    /// cycle of the grammar passes through here, so this is also where the
    /// stack is grown onto the heap when the remaining space runs low: a
    /// single level can span the whole operator ladder, and unoptimized
    /// builds would otherwise overflow well inside the limit.
    fn with_recursion_guard<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, JsxParseError>,
    ) -> Result<T, JsxParseError>
    where
        Self: Sized,
    {
        self.core_mut().enter_recursion()?;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || f(self));
        self.core_mut().exit_recursion();
        result
    }

    /// Runs `f` with JSX lexing mode set to `enabled`, restoring the previous
    /// mode afterwards.
    ///
    /// Hard errors are plain return values, so the previous mode is restored
    /// on every path out of `f`.
    fn with_jsx_mode<T>(&mut self, enabled: bool, f: impl FnOnce(&mut Self) -> T) -> T
    where
        Self: Sized,
    {
        let previous = self.core().scanner().jsx_mode();
        self.core_mut().scanner_mut().set_jsx_mode(enabled);
        let result = f(self);
        self.core_mut().scanner_mut().set_jsx_mode(previous);
        result
    }
}

impl<'src, S: JsxScanner<'src>> ParserHost<'src> for ParserCore<'src, S> {
    type Scanner = S;

    fn core(&self) -> &ParserCore<'src, S> {
        self
    }

    fn core_mut(&mut self) -> &mut ParserCore<'src, S> {
        self
    }
}
