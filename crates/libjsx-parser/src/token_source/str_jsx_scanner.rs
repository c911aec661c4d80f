//! A [`JsxScanner`] that lexes from a `&str` input.
//!
//! This scanner implements zero-copy lexing: token values borrow directly
//! from the source string using `Cow::Borrowed`.
//!
//! # Features
//!
//! - **Two lexing modes**: ordinary script tokens, or JSX tokens (dashed
//!   identifiers, escape-free multi-line strings, single-character
//!   punctuators). Switching modes discards buffered lookahead.
//! - **On-demand JSX text**: the parser asks for a text run explicitly via
//!   [`JsxScanner::retokenize_current_as_jsx_text`].
//! - **Dual column tracking**: reports both UTF-8 character positions (for
//!   display) and UTF-16 code unit positions (for LSP compatibility).
//! - **Comment preservation**: `//` and `/* */` comments are captured as
//!   trivia on the following token.
//! - **Error tokens**: invalid characters and unterminated literals produce
//!   `Error` tokens instead of panicking.
//!
//! # Usage
//!
//! ```rust
//! use libjsx_parser::token_source::JsxScanner;
//! use libjsx_parser::token_source::StrJsxScanner;
//!
//! let mut scanner = StrJsxScanner::new("a + b");
//! while let Some(token) = scanner.advance() {
//!     println!("{:?}", token.kind);
//! }
//! // Output:
//! // Identifier("a")
//! // Punctuator("+")
//! // Identifier("b")
//! ```

use crate::token::JsxToken;
use crate::token::JsxTokenKind;
use crate::token::JsxTriviaToken;
use crate::token::JsxTriviaTokenVec;
use crate::token_source::JsxScanner;
use crate::JsxSourceSpan;
use crate::SourcePosition;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::path::Path;

/// Punctuators recognized in ordinary script mode, longest first so that a
/// linear scan yields the longest match.
const PUNCTUATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=",
    "??=", "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "**", "<<", ">>", "{",
    "}", "(", ")", "[", "]", ";", ",", "<", ">", "+", "-", "*", "/", "%",
    "&", "|", "^", "!", "~", "?", ":", "=", ".", "@", "#",
];

/// Lexing position: byte offset plus the line/column bookkeeping needed to
/// produce [`SourcePosition`]s.
#[derive(Clone, Debug, PartialEq)]
struct LexCursor {
    byte_offset: usize,
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    /// Whether the previous character was `\r`, so that `\r\n` counts as a
    /// single line break.
    last_char_was_cr: bool,
}

impl LexCursor {
    fn start_of_input() -> Self {
        Self {
            byte_offset: 0,
            line: 0,
            col_utf8: 0,
            col_utf16: 0,
            last_char_was_cr: false,
        }
    }

    fn position(&self) -> SourcePosition {
        SourcePosition::new(
            self.line,
            self.col_utf8,
            Some(self.col_utf16),
            self.byte_offset,
        )
    }
}

/// Position snapshot of a [`StrJsxScanner`].
#[derive(Clone, Debug)]
pub struct StrJsxScannerCheckpoint {
    cursor: LexCursor,
    last_end_position: SourcePosition,
}

/// A lookahead token together with the cursor just past it.
#[derive(Debug)]
struct BufferedToken<'src> {
    token: JsxToken<'src>,
    cursor_after: LexCursor,
}

/// A [`JsxScanner`] that lexes from a `&str` input.
///
/// Tokens are lexed lazily into a small lookahead buffer (at most two
/// tokens: current and peeked). The buffer is discarded whenever the lexing
/// mode changes or the scanner is rewound.
///
/// See module documentation for details.
pub struct StrJsxScanner<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Optional file path for error messages and spans.
    file_path: Option<&'src Path>,

    /// Where the last consumed token ended (plus any trivia explicitly
    /// skipped since).
    cursor: LexCursor,

    /// End position of the most recently consumed token.
    last_end_position: SourcePosition,

    /// Whether JSX lexing mode is enabled.
    jsx_mode: bool,

    /// Unconsumed lookahead tokens, lexed in the current mode.
    buffer: VecDeque<BufferedToken<'src>>,
}

impl<'src> StrJsxScanner<'src> {
    /// Creates a new scanner over a string slice, in ordinary script mode.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            file_path: None,
            cursor: LexCursor::start_of_input(),
            last_end_position: SourcePosition::start_of_input(),
            jsx_mode: false,
            buffer: VecDeque::new(),
        }
    }

    /// Creates a new scanner with an associated file path.
    ///
    /// The file path is included in token spans for error reporting.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn lexer_at(&self, cursor: LexCursor) -> Lexer<'src> {
        Lexer {
            source: self.source,
            file_path: self.file_path,
            jsx_mode: self.jsx_mode,
            cursor,
            pending_trivia: JsxTriviaTokenVec::new(),
        }
    }

    /// Fill the buffer to ensure it has at least `count` unconsumed
    /// tokens (fewer if the input runs out).
    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            let from = match self.buffer.back() {
                Some(buffered) => buffered.cursor_after.clone(),
                None => self.cursor.clone(),
            };
            let mut lexer = self.lexer_at(from);
            match lexer.next_token() {
                Some(token) => self.buffer.push_back(BufferedToken {
                    token,
                    cursor_after: lexer.cursor,
                }),
                None => break,
            }
        }
    }
}

impl<'src> JsxScanner<'src> for StrJsxScanner<'src> {
    type Checkpoint = StrJsxScannerCheckpoint;

    fn current_token(&mut self) -> Option<&JsxToken<'src>> {
        self.ensure_buffer_has(1);
        self.buffer.front().map(|buffered| &buffered.token)
    }

    fn peek_token(&mut self) -> Option<&JsxToken<'src>> {
        self.ensure_buffer_has(2);
        self.buffer.get(1).map(|buffered| &buffered.token)
    }

    fn advance(&mut self) -> Option<JsxToken<'src>> {
        self.ensure_buffer_has(1);
        let buffered = self.buffer.pop_front()?;
        self.cursor = buffered.cursor_after;
        self.last_end_position = buffered.token.span.end_exclusive.clone();
        Some(buffered.token)
    }

    fn checkpoint(&self) -> StrJsxScannerCheckpoint {
        StrJsxScannerCheckpoint {
            cursor: self.cursor.clone(),
            last_end_position: self.last_end_position.clone(),
        }
    }

    fn rewind(&mut self, checkpoint: StrJsxScannerCheckpoint) {
        self.cursor = checkpoint.cursor;
        self.last_end_position = checkpoint.last_end_position;
        self.buffer.clear();
    }

    fn jsx_mode(&self) -> bool {
        self.jsx_mode
    }

    fn set_jsx_mode(&mut self, enabled: bool) {
        if self.jsx_mode == enabled {
            return;
        }
        log::trace!(
            "JSX lexing mode {} at byte {}",
            if enabled { "enabled" } else { "disabled" },
            self.cursor.byte_offset,
        );
        self.jsx_mode = enabled;
        self.buffer.clear();
    }

    fn retokenize_current_as_jsx_text(&mut self) -> Option<&JsxToken<'src>> {
        let mut lexer = self.lexer_at(self.cursor.clone());
        let token = lexer.lex_jsx_text()?;
        self.buffer.clear();
        self.buffer.push_back(BufferedToken {
            token,
            cursor_after: lexer.cursor,
        });
        self.buffer.front().map(|buffered| &buffered.token)
    }

    fn skip_trivia(&mut self, required: bool) -> Option<usize> {
        let mut lexer = self.lexer_at(self.cursor.clone());
        let skipped = lexer.skip_trivia().ok()?;
        if required && skipped == 0 {
            return None;
        }
        if skipped > 0 {
            self.cursor = lexer.cursor;
        }
        Some(skipped)
    }

    fn last_end_position(&self) -> SourcePosition {
        self.last_end_position.clone()
    }

    fn file_path(&self) -> Option<&Path> {
        self.file_path
    }
}

// =============================================================================
// Lexer
// =============================================================================

/// Single-use lexer starting at some cursor. The scanner keeps the cursor
/// the lexer ends at alongside the token it produced.
struct Lexer<'src> {
    source: &'src str,
    file_path: Option<&'src Path>,
    jsx_mode: bool,
    cursor: LexCursor,
    pending_trivia: JsxTriviaTokenVec,
}

impl<'src> Lexer<'src> {
    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        let source = self.source;
        &source[self.cursor.byte_offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r`, `\r\n`, U+2028 and U+2029 each count as one line break.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        let cursor = &mut self.cursor;

        match ch {
            '\n' if cursor.last_char_was_cr => {
                cursor.last_char_was_cr = false;
            },
            '\n' | '\u{2028}' | '\u{2029}' => {
                cursor.line += 1;
                cursor.col_utf8 = 0;
                cursor.col_utf16 = 0;
                cursor.last_char_was_cr = false;
            },
            '\r' => {
                cursor.line += 1;
                cursor.col_utf8 = 0;
                cursor.col_utf16 = 0;
                cursor.last_char_was_cr = true;
            },
            _ => {
                cursor.col_utf8 += 1;
                cursor.col_utf16 += ch.len_utf16();
                cursor.last_char_was_cr = false;
            },
        }

        cursor.byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Bumps characters until the cursor reaches byte offset `end`.
    fn bump_to(&mut self, end: usize) {
        while self.cursor.byte_offset < end && self.bump().is_some() {}
    }

    fn slice_from(&self, begin: usize) -> &'src str {
        let source = self.source;
        &source[begin..self.cursor.byte_offset]
    }

    fn make_span(&self, start: SourcePosition) -> JsxSourceSpan {
        let end = self.cursor.position();
        match self.file_path {
            Some(path) => JsxSourceSpan::with_file(start, end, path.to_path_buf()),
            None => JsxSourceSpan::new(start, end),
        }
    }

    /// Creates a token ending at the cursor, carrying the accumulated trivia.
    fn make_token(
        &mut self,
        kind: JsxTokenKind<'src>,
        start: SourcePosition,
    ) -> JsxToken<'src> {
        JsxToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span: self.make_span(start),
        }
    }

    // =========================================================================
    // Main entry points
    // =========================================================================

    /// Lexes the next token in the current mode, or `None` at end of input.
    fn next_token(&mut self) -> Option<JsxToken<'src>> {
        if let Err(error_token) = self.skip_trivia() {
            return Some(error_token);
        }

        let start = self.cursor.position();
        let ch = self.peek_char()?;

        let token = if self.jsx_mode {
            match ch {
                c if is_identifier_start(c) => self.lex_identifier(start),
                '"' | '\'' => self.lex_jsx_string(start, ch),
                c => match single_char_punctuator(c) {
                    Some(punct) => {
                        self.bump();
                        self.make_token(JsxTokenKind::Punctuator(punct), start)
                    },
                    None => self.lex_invalid_character(start),
                },
            }
        } else {
            match ch {
                c if is_identifier_start(c) => self.lex_identifier(start),
                c if c.is_ascii_digit() => self.lex_number(start),
                '.' if self.peek_char_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                    self.lex_number(start)
                },
                '"' | '\'' => self.lex_string(start, ch),
                _ => self.lex_punctuator(start),
            }
        };
        Some(token)
    }

    /// Lexes a run of JSX text up to (not including) the next `<` or `{`.
    ///
    /// Returns `None` if the run would be empty.
    fn lex_jsx_text(&mut self) -> Option<JsxToken<'src>> {
        let begin = self.cursor.byte_offset;
        let rest = self.remaining().as_bytes();
        let len = memchr::memchr2(b'<', b'{', rest).unwrap_or(rest.len());
        if len == 0 {
            return None;
        }

        let start = self.cursor.position();
        self.bump_to(begin + len);
        let text = self.slice_from(begin);
        Some(self.make_token(JsxTokenKind::JsxText(Cow::Borrowed(text)), start))
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    /// Skips whitespace and comments, collecting comments as pending trivia.
    ///
    /// Returns the number of bytes skipped, or an error token for an
    /// unterminated block comment.
    fn skip_trivia(&mut self) -> Result<usize, JsxToken<'src>> {
        let begin = self.cursor.byte_offset;
        loop {
            match self.peek_char() {
                Some(ch) if is_whitespace(ch) => {
                    self.bump();
                },
                Some('/') if self.peek_char_nth(1) == Some('/') => {
                    self.lex_line_comment();
                },
                Some('/') if self.peek_char_nth(1) == Some('*') => {
                    self.lex_block_comment()?;
                },
                _ => break,
            }
        }
        Ok(self.cursor.byte_offset - begin)
    }

    /// Lexes a `//` comment and adds it to pending trivia.
    fn lex_line_comment(&mut self) {
        let start = self.cursor.position();
        self.bump();
        self.bump();
        let content_start = self.cursor.byte_offset;

        let rest = self.remaining().as_bytes();
        let len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.bump_to(content_start + len);

        let value = self.slice_from(content_start).to_string();
        let span = self.make_span(start);
        self.pending_trivia
            .push(JsxTriviaToken::LineComment { value, span });
    }

    /// Lexes a `/* */` comment and adds it to pending trivia.
    fn lex_block_comment(&mut self) -> Result<(), JsxToken<'src>> {
        let start = self.cursor.position();
        let begin = self.cursor.byte_offset;
        self.bump();
        self.bump();
        let content_start = self.cursor.byte_offset;

        match self.remaining().find("*/") {
            Some(len) => {
                self.bump_to(content_start + len);
                let value = self.slice_from(content_start).to_string();
                self.bump();
                self.bump();
                let span = self.make_span(start);
                self.pending_trivia
                    .push(JsxTriviaToken::BlockComment { value, span });
                Ok(())
            },
            None => {
                self.bump_to(self.source.len());
                let raw = self.slice_from(begin);
                Err(self.make_token(
                    JsxTokenKind::error(raw, "unterminated block comment"),
                    start,
                ))
            },
        }
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    /// Lexes an identifier (or a JSX identifier, which may contain `-`).
    ///
    /// In ordinary mode `true`, `false` and `null` are emitted as distinct
    /// token kinds.
    fn lex_identifier(&mut self, start: SourcePosition) -> JsxToken<'src> {
        let begin = self.cursor.byte_offset;
        self.bump();
        while let Some(ch) = self.peek_char() {
            if is_identifier_continue(ch) || (self.jsx_mode && ch == '-') {
                self.bump();
            } else {
                break;
            }
        }

        let text = self.slice_from(begin);
        let kind = if self.jsx_mode {
            JsxTokenKind::jsx_identifier_borrowed(text)
        } else {
            match text {
                "true" => JsxTokenKind::True,
                "false" => JsxTokenKind::False,
                "null" => JsxTokenKind::Null,
                _ => JsxTokenKind::identifier_borrowed(text),
            }
        };
        self.make_token(kind, start)
    }

    /// Lexes a numeric literal.
    ///
    /// Handles:
    /// - Radix prefixes: `0x`, `0o`, `0b`
    /// - Integer part with `_` separators
    /// - Optional fraction: `.[0-9]*` (or a leading `.` as in `.5`)
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: SourcePosition) -> JsxToken<'src> {
        let begin = self.cursor.byte_offset;

        let is_radix_prefixed = self.peek_char() == Some('0')
            && matches!(
                self.peek_char_nth(1),
                Some('x' | 'X' | 'o' | 'O' | 'b' | 'B'),
            );
        if is_radix_prefixed {
            self.bump();
            self.bump();
            while self
                .peek_char()
                .is_some_and(|c| c.is_ascii_hexdigit() || c == '_')
            {
                self.bump();
            }
        } else {
            self.bump_digits();
            if self.peek_char() == Some('.') {
                self.bump();
                self.bump_digits();
            }
            if matches!(self.peek_char(), Some('e' | 'E')) {
                let has_exponent = match self.peek_char_nth(1) {
                    Some('+' | '-') => {
                        self.peek_char_nth(2).is_some_and(|c| c.is_ascii_digit())
                    },
                    Some(c) => c.is_ascii_digit(),
                    None => false,
                };
                if has_exponent {
                    self.bump();
                    if matches!(self.peek_char(), Some('+' | '-')) {
                        self.bump();
                    }
                    self.bump_digits();
                }
            }
        }

        let raw = self.slice_from(begin);
        if self.peek_char().is_some_and(is_identifier_start) {
            // `3in` is neither a number nor an identifier.
            while self.peek_char().is_some_and(is_identifier_continue) {
                self.bump();
            }
            let raw = self.slice_from(begin);
            return self.make_token(
                JsxTokenKind::error(raw, format!("invalid numeric literal `{raw}`")),
                start,
            );
        }
        self.make_token(JsxTokenKind::NumericLiteral(Cow::Borrowed(raw)), start)
    }

    fn bump_digits(&mut self) {
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_digit() || c == '_')
        {
            self.bump();
        }
    }

    /// Lexes an ordinary string literal, skipping over escape sequences.
    ///
    /// An unescaped `\n` or `\r` terminates the literal with an error.
    fn lex_string(&mut self, start: SourcePosition, quote: char) -> JsxToken<'src> {
        let begin = self.cursor.byte_offset;
        self.bump();

        loop {
            match self.peek_char() {
                Some(ch) if ch == quote => {
                    self.bump();
                    break;
                },
                Some('\\') => {
                    self.bump();
                    if self.bump() == Some('\r') && self.peek_char() == Some('\n') {
                        self.bump();
                    }
                },
                None | Some('\n' | '\r') => {
                    let raw = self.slice_from(begin);
                    return self.make_token(
                        JsxTokenKind::error(raw, "unterminated string literal"),
                        start,
                    );
                },
                Some(_) => {
                    self.bump();
                },
            }
        }

        let raw = self.slice_from(begin);
        self.make_token(JsxTokenKind::StringLiteral(Cow::Borrowed(raw)), start)
    }

    /// Lexes a JSX attribute string: no escapes, may span lines.
    fn lex_jsx_string(&mut self, start: SourcePosition, quote: char) -> JsxToken<'src> {
        let begin = self.cursor.byte_offset;
        self.bump();

        loop {
            match self.bump() {
                Some(ch) if ch == quote => break,
                Some(_) => {},
                None => {
                    let raw = self.slice_from(begin);
                    return self.make_token(
                        JsxTokenKind::error(raw, "unterminated string literal"),
                        start,
                    );
                },
            }
        }

        let raw = self.slice_from(begin);
        self.make_token(JsxTokenKind::StringLiteral(Cow::Borrowed(raw)), start)
    }

    /// Lexes the longest ordinary-mode punctuator at the cursor.
    fn lex_punctuator(&mut self, start: SourcePosition) -> JsxToken<'src> {
        let rest = self.remaining();
        match PUNCTUATORS.iter().copied().find(|punct| rest.starts_with(punct)) {
            Some(punct) => {
                // Punctuators are ASCII: one byte per char.
                self.bump_to(self.cursor.byte_offset + punct.len());
                self.make_token(JsxTokenKind::Punctuator(punct), start)
            },
            None => self.lex_invalid_character(start),
        }
    }

    /// Lexes an invalid character, producing an error token.
    fn lex_invalid_character(&mut self, start: SourcePosition) -> JsxToken<'src> {
        let begin = self.cursor.byte_offset;
        let ch = self.bump();
        let raw = self.slice_from(begin);
        let message = match ch {
            Some(ch) => format!("unexpected character {}", describe_char(ch)),
            None => "unexpected end of input".to_string(),
        };
        self.make_token(JsxTokenKind::error(raw, message), start)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

fn is_identifier_continue(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphanumeric() || ch == '\u{200C}' || ch == '\u{200D}'
}

/// JSX-mode punctuators: every one is a single character.
fn single_char_punctuator(ch: char) -> Option<&'static str> {
    let punct = match ch {
        '<' => "<",
        '>' => ">",
        '/' => "/",
        '{' => "{",
        '}' => "}",
        '=' => "=",
        ':' => ":",
        '.' => ".",
        '(' => "(",
        ')' => ")",
        '[' => "[",
        ']' => "]",
        ',' => ",",
        ';' => ";",
        '!' => "!",
        '?' => "?",
        '+' => "+",
        '-' => "-",
        '*' => "*",
        '%' => "%",
        '&' => "&",
        '|' => "|",
        '^' => "^",
        '~' => "~",
        '@' => "@",
        '#' => "#",
        _ => return None,
    };
    Some(punct)
}

/// Returns a human-readable description of a character for error messages.
///
/// For printable characters, returns the character in backticks.
/// For invisible/control characters, includes the Unicode code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
