/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `notes` field of `JsxParseError`.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `JsxParseError.message`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsxParseErrorKind {
    /// A construct had begun and the next token cannot continue it.
    ///
    /// # Example
    /// ```text
    /// <a b=></a>
    ///      ^ unexpected token `>`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// Raw source text of the token that was found.
        found: String,
    },

    /// The input ended while a construct was still open.
    ///
    /// # Example
    /// ```text
    /// <a>text
    ///        ^ unexpected end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A closing tag whose name is not structurally equal to the name of the
    /// element it closes.
    ///
    /// # Example
    /// ```text
    /// <a.b.c></a.b.d>
    ///          ^^^^^ closing tag does not match opening tag
    /// ```
    #[error("mismatched closing tag: `</{closing}>` closes `<{opening}>`")]
    MismatchedClosingTag {
        /// Rendered name of the opening tag (e.g. `"a.b.c"`).
        opening: String,
        /// Rendered name of the closing tag (e.g. `"a.b.d"`).
        closing: String,
    },

    /// The scanner produced an error token (unterminated string or comment,
    /// invalid character). The scanner's message is preserved in the parent
    /// `JsxParseError`'s `message` field.
    #[error("lexer error")]
    LexerError,

    /// Nesting went deeper than the configured maximum.
    #[error("recursion limit of {limit} exceeded")]
    RecursionLimitExceeded {
        /// The configured maximum nesting depth.
        limit: usize,
    },

    /// A syntax error raised with an explicit message that fits no other
    /// category.
    #[error("invalid syntax")]
    InvalidSyntax,
}
