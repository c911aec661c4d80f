use std::borrow::Cow;

/// The kind of a JSX/ECMAScript token.
///
/// Literal values (`NumericLiteral`, `StringLiteral`, `JsxText`) store only
/// the raw source text; decoding happens in the parser (see
/// [`unquote_literal_string`](crate::unquote_literal_string)).
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrJsxScanner` borrows
/// string slices directly from the source text using `Cow::Borrowed`.
///
/// # Lexing Modes
///
/// `Identifier` is only produced in ordinary script mode and `JsxIdentifier`
/// only in JSX mode (where `-` may appear inside the name, as in
/// `data-id`). `JsxText` is only produced on explicit request by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum JsxTokenKind<'src> {
    /// Any punctuator or operator (`<`, `/`, `>`, `{`, `...`, `===`, ...).
    Punctuator(&'static str),

    /// An ordinary identifier or keyword other than `true`/`false`/`null`.
    Identifier(Cow<'src, str>),

    /// An identifier lexed in JSX mode.
    JsxIdentifier(Cow<'src, str>),

    /// Raw source text of a string literal, including quotes.
    StringLiteral(Cow<'src, str>),

    /// Raw source text of a numeric literal (e.g. `"42"`, `"0xff"`).
    NumericLiteral(Cow<'src, str>),

    /// A run of JSX text between tags (whitespace included).
    JsxText(Cow<'src, str>),

    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,

    /// A lexer error. The parser turns it into a hard error carrying
    /// `message`.
    Error {
        /// The offending source text.
        raw: Cow<'src, str>,
        /// A human-readable error message.
        message: String,
    },
}

impl<'src> JsxTokenKind<'src> {
    /// Create an `Identifier` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn identifier_borrowed(s: &'src str) -> Self {
        JsxTokenKind::Identifier(Cow::Borrowed(s))
    }

    /// Create a `JsxIdentifier` token from a borrowed string slice.
    #[inline]
    pub fn jsx_identifier_borrowed(s: &'src str) -> Self {
        JsxTokenKind::JsxIdentifier(Cow::Borrowed(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(raw: &'src str, message: impl Into<String>) -> Self {
        JsxTokenKind::Error {
            raw: Cow::Borrowed(raw),
            message: message.into(),
        }
    }

    /// Returns the raw source text of this token.
    pub fn raw_text(&self) -> &str {
        match self {
            JsxTokenKind::Punctuator(p) => *p,
            JsxTokenKind::Identifier(s)
            | JsxTokenKind::JsxIdentifier(s)
            | JsxTokenKind::StringLiteral(s)
            | JsxTokenKind::NumericLiteral(s)
            | JsxTokenKind::JsxText(s) => s.as_ref(),
            JsxTokenKind::True => "true",
            JsxTokenKind::False => "false",
            JsxTokenKind::Null => "null",
            JsxTokenKind::Error { raw, .. } => raw.as_ref(),
        }
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, JsxTokenKind::Error { .. })
    }

    /// Returns `true` if this token is a literal value (string, number,
    /// boolean or null).
    pub fn is_literal(&self) -> bool {
        match self {
            JsxTokenKind::StringLiteral(_)
            | JsxTokenKind::NumericLiteral(_)
            | JsxTokenKind::True
            | JsxTokenKind::False
            | JsxTokenKind::Null => true,

            JsxTokenKind::Punctuator(_)
            | JsxTokenKind::Identifier(_)
            | JsxTokenKind::JsxIdentifier(_)
            | JsxTokenKind::JsxText(_)
            | JsxTokenKind::Error { .. } => false,
        }
    }
}
