//! The public parser entry point.
//!
//! [`JsxParser`] couples a [`ParserCore`] with the JSX grammar rules (see
//! `jsx_grammar.rs`) and an injected [`ExpressionGrammar`] that handles
//! everything embedded in `{ ... }` containers.
//!
//! # Error Handling
//!
//! Parsing stops at the first hard error: there is no partial-AST recovery.
//! Errors carry a span, a categorized [`JsxParseErrorKind`] and notes, and
//! can be rendered with
//! [`format_detailed`](crate::JsxParseError::format_detailed).
//!
//! [`JsxParseErrorKind`]: crate::JsxParseErrorKind

use crate::ast::Node;
use crate::token_source::JsxScanner;
use crate::token_source::StrJsxScanner;
use crate::BasicExpressionGrammar;
use crate::ExpressionGrammar;
use crate::JsxParseError;
use crate::JsxParserConfig;
use crate::ParserCore;
use crate::ParserHost;
use std::marker::PhantomData;
use std::path::Path;

/// A recursive-descent parser for JSX-bearing expressions.
///
/// # Type Parameters
///
/// - `S`: the scanner (defaults to [`StrJsxScanner`])
/// - `G`: the expression grammar invoked inside expression containers and
///   attribute values (defaults to [`BasicExpressionGrammar`])
///
/// # Example
///
/// ```rust
/// use libjsx_parser::ast::NodeKind;
/// use libjsx_parser::JsxParser;
///
/// let node = JsxParser::new("<>hello {name}</>").parse_expression().unwrap();
/// assert_eq!(node.kind(), NodeKind::JsxFragment);
/// ```
pub struct JsxParser<
    'src,
    S: JsxScanner<'src> = StrJsxScanner<'src>,
    G: ExpressionGrammar = BasicExpressionGrammar,
> {
    pub(crate) core: ParserCore<'src, S>,
    _grammar: PhantomData<G>,
}

impl<'src> JsxParser<'src> {
    /// Creates a new parser from a string-like source, with the default
    /// configuration.
    ///
    /// Accepts any type that can be referenced as a `str`,
    /// including `&str`, `&String`, and `&Cow<str>`.
    pub fn new<T: AsRef<str> + ?Sized>(source: &'src T) -> Self {
        Self::with_config(source, JsxParserConfig::default())
    }

    /// Creates a new parser from a string-like source.
    pub fn with_config<T: AsRef<str> + ?Sized>(
        source: &'src T,
        config: JsxParserConfig,
    ) -> Self {
        Self::from_scanner(StrJsxScanner::new(source.as_ref()), config)
    }

    /// Creates a new parser whose spans (and therefore error messages)
    /// carry `path`.
    pub fn with_file_path<T: AsRef<str> + ?Sized>(
        source: &'src T,
        path: &'src Path,
        config: JsxParserConfig,
    ) -> Self {
        Self::from_scanner(
            StrJsxScanner::with_file_path(source.as_ref(), path),
            config,
        )
    }
}

impl<'src, S: JsxScanner<'src>, G: ExpressionGrammar> JsxParser<'src, S, G> {
    /// Creates a new parser from a scanner.
    pub fn from_scanner(scanner: S, config: JsxParserConfig) -> Self {
        Self {
            core: ParserCore::new(scanner, config),
            _grammar: PhantomData,
        }
    }

    /// Parses the whole input as a single expression.
    ///
    /// Fails if the input is empty or if anything but trivia follows the
    /// expression.
    pub fn parse_expression(mut self) -> Result<Node, JsxParseError> {
        let Some(node) = G::parse_assignment_expression(&mut self)? else {
            return Err(self.core.error(None, None));
        };
        if !self.core.scanner_mut().at_end() {
            return Err(self.core.error(None, None));
        }
        log::trace!("parsed {} spanning {:?}", node.kind(), node.span.byte_span());
        Ok(node)
    }
}

impl<'src, S: JsxScanner<'src>, G: ExpressionGrammar> ParserHost<'src>
    for JsxParser<'src, S, G>
{
    type Scanner = S;

    fn core(&self) -> &ParserCore<'src, S> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ParserCore<'src, S> {
        &mut self.core
    }
}
