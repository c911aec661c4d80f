use crate::token::JsxToken;
use crate::SourcePosition;
use std::path::Path;

/// The scanner interface consumed by the parser.
///
/// A scanner turns source text into [`JsxToken`]s on demand. It owns the
/// only mutable state shared between grammar rules: the cursor (where the
/// last consumed token ended) and the lexing-mode flag. Both belong to the
/// parsing call stack; rules that change the mode restore it on every exit
/// path (see `ParserHost::with_jsx_mode`).
///
/// Implementors must guarantee that a token requested after
/// [`set_jsx_mode`](Self::set_jsx_mode) or [`rewind`](Self::rewind) is
/// lexed in the mode current at the time of the request, i.e. lookahead
/// buffered under a different mode is discarded.
///
/// [`StrJsxScanner`](crate::token_source::StrJsxScanner) is the `&str`
/// implementation shipped with this crate.
///
/// # Lifetime Parameter
///
/// `'src` is the lifetime of the source text that tokens may borrow from.
pub trait JsxScanner<'src> {
    /// Opaque position snapshot produced by [`checkpoint`](Self::checkpoint).
    type Checkpoint: Clone;

    /// Returns the next unconsumed token without consuming it, or `None`
    /// when the input is exhausted.
    fn current_token(&mut self) -> Option<&JsxToken<'src>>;

    /// Returns the token after [`current_token`](Self::current_token)
    /// without consuming anything.
    fn peek_token(&mut self) -> Option<&JsxToken<'src>>;

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Option<JsxToken<'src>>;

    /// Consumes the current token if it is the punctuator `punct`.
    ///
    /// This is a no-op returning `None` on mismatch.
    fn consume(&mut self, punct: &str) -> Option<JsxToken<'src>> {
        if self.current_token().is_some_and(|t| t.is_punctuator(punct)) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes the current token if it is any of the punctuators in
    /// `puncts`.
    fn consume_one_of(&mut self, puncts: &[&str]) -> Option<JsxToken<'src>> {
        let matched = self
            .current_token()
            .is_some_and(|t| puncts.iter().any(|p| t.is_punctuator(p)));
        if matched { self.advance() } else { None }
    }

    /// Snapshots the scanner position.
    ///
    /// The JSX rules themselves never need this: fragments, elements and
    /// closing tags are told apart with [`peek_token`](Self::peek_token).
    /// It is available to expression grammars that must look further ahead
    /// than two tokens before committing to a construct.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Restores a position previously returned by
    /// [`checkpoint`](Self::checkpoint).
    fn rewind(&mut self, checkpoint: Self::Checkpoint);

    /// Returns `true` if JSX lexing mode is enabled.
    fn jsx_mode(&self) -> bool;

    /// Enables or disables JSX lexing mode.
    fn set_jsx_mode(&mut self, enabled: bool);

    /// Re-scans the input after the last consumed token as a run of JSX
    /// text (up to the next `<` or `{`), making it the current token.
    ///
    /// Returns `None` (leaving the scanner untouched) if the run is empty.
    fn retokenize_current_as_jsx_text(&mut self) -> Option<&JsxToken<'src>>;

    /// Skips whitespace and comments after the last consumed token.
    ///
    /// Returns the number of bytes skipped, or `None` if trivia could not be
    /// skipped (an unterminated comment) or if `required` is set and there
    /// was no trivia to skip.
    fn skip_trivia(&mut self, required: bool) -> Option<usize>;

    /// Returns `true` when no tokens remain.
    fn at_end(&mut self) -> bool {
        self.current_token().is_none()
    }

    /// Returns the end position of the most recently consumed token (the
    /// start of input if nothing was consumed yet).
    fn last_end_position(&self) -> SourcePosition;

    /// The file the source text was read from, if known.
    fn file_path(&self) -> Option<&Path> {
        None
    }
}
