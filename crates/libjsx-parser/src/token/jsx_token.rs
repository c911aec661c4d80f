use crate::token::JsxTokenKind;
use crate::token::JsxTriviaToken;
use crate::JsxSourceSpan;
use smallvec::SmallVec;

/// Type alias for trivia storage. Uses SmallVec to avoid heap allocation
/// for the common case of 0-2 comments per token.
pub type JsxTriviaTokenVec = SmallVec<[JsxTriviaToken; 2]>;

/// A JSX token with location (span) information and an ordered list of any
/// preceding trivia (comments).
#[derive(Clone, Debug, PartialEq)]
pub struct JsxToken<'src> {
    /// The kind of token (including Error for lexer errors).
    pub kind: JsxTokenKind<'src>,

    /// Comments that precede this token.
    pub preceding_trivia: JsxTriviaTokenVec,

    /// The source location span of this token.
    pub span: JsxSourceSpan,
}

impl<'src> JsxToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: JsxTokenKind<'src>, span: JsxSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }

    /// Returns `true` if this token is the punctuator `punct`.
    pub fn is_punctuator(&self, punct: &str) -> bool {
        matches!(self.kind, JsxTokenKind::Punctuator(p) if p == punct)
    }

    /// Returns the token's source text (what an "unexpected token" error
    /// quotes).
    pub fn raw_text(&self) -> &str {
        self.kind.raw_text()
    }
}
