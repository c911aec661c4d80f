use crate::JsxSourceSpan;

/// A "trivia token" is a token that doesn't affect parsing but is still
/// preserved (e.g. for tooling use).
///
/// Comments are attached to the following token as "preceding trivia", so
/// the parser never has to skip them explicitly.
#[derive(Clone, Debug, PartialEq)]
pub enum JsxTriviaToken {
    /// A `// ...` comment, extending to the end of the line.
    LineComment {
        /// The comment text (excluding the leading `//`).
        value: String,
        /// The source location of the comment.
        span: JsxSourceSpan,
    },

    /// A `/* ... */` comment, possibly spanning several lines.
    BlockComment {
        /// The comment text (excluding the `/*` and `*/` delimiters).
        value: String,
        /// The source location of the comment.
        span: JsxSourceSpan,
    },
}
