//! A JSX parsing library: the recursive-descent core of an ECMAScript-family
//! parser extended with the JSX grammar.
//!
//! The crate is organized leaves-first:
//!
//! - [`token`] / [`token_source`]: tokens and the [`JsxScanner`] interface
//!   the parser consumes, plus [`StrJsxScanner`], a zero-copy scanner over
//!   `&str` with a JSX lexing mode.
//! - [`ast`]: the node model ([`Node`](ast::Node), [`NodeKind`](ast::NodeKind),
//!   [`NodeData`](ast::NodeData)), serializable as ESTree JSON.
//! - [`ParserCore`] / [`ParserHost`]: node lifecycle, structured hard errors
//!   and the list / binary-operator combinators.
//! - [`JsxParser`]: the JSX grammar (fragments, elements, names, attributes,
//!   children) on top of an injected [`ExpressionGrammar`].
//! - [`unquote_literal_string`] / [`quote_literal_string`]: string-literal
//!   escape transcoding.
//!
//! # Example
//!
//! ```rust
//! use libjsx_parser::JsxParser;
//! use libjsx_parser::JsxParseErrorKind;
//!
//! let node = JsxParser::new("<a.b.c></a.b.c>").parse_expression().unwrap();
//! assert_eq!(node.end().byte_offset(), 15);
//!
//! let error = JsxParser::new("<a.b.c></a.b.d>").parse_expression().unwrap_err();
//! assert!(matches!(error.kind(), JsxParseErrorKind::MismatchedClosingTag { .. }));
//! ```
//!
//! [`JsxScanner`]: token_source::JsxScanner
//! [`StrJsxScanner`]: token_source::StrJsxScanner

pub mod ast;
mod byte_span;
mod expression_grammar;
mod jsx_error_note;
mod jsx_error_note_kind;
mod jsx_grammar;
mod jsx_parse_error;
mod jsx_parse_error_kind;
mod jsx_parser;
mod jsx_parser_config;
mod jsx_source_span;
mod literal_transcoder;
mod parser_core;
mod source_position;
pub mod token;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use expression_grammar::BasicExpressionGrammar;
pub use expression_grammar::ExpressionGrammar;
pub use jsx_error_note::JsxErrorNote;
pub use jsx_error_note::JsxErrorNotes;
pub use jsx_error_note_kind::JsxErrorNoteKind;
pub use jsx_parse_error::JsxParseError;
pub use jsx_parse_error_kind::JsxParseErrorKind;
pub use jsx_parser::JsxParser;
pub use jsx_parser_config::JsxParserConfig;
pub use jsx_source_span::JsxSourceSpan;
pub use literal_transcoder::quote_literal_string;
pub use literal_transcoder::unquote_literal_string;
pub use parser_core::BinaryKind;
pub use parser_core::ParserCore;
pub use parser_core::ParserHost;
pub use parser_core::RuleResult;
pub use parser_core::SeparatedItem;
pub use parser_core::Separator;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
