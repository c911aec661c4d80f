//! Decoding and encoding of ECMAScript string-literal escape sequences.
//!
//! [`unquote_literal_string`] turns the raw source text of a string literal
//! (quotes included) into its value; [`quote_literal_string`] goes the other
//! way. For any string `s` and quote character `q` in `'"'` / `'\''`:
//!
//! ```rust
//! use libjsx_parser::quote_literal_string;
//! use libjsx_parser::unquote_literal_string;
//!
//! let s = "say \"hi\"\\\nbye";
//! assert_eq!(unquote_literal_string(&quote_literal_string(s, '"')), s);
//! ```

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// What a single escape sequence decodes to.
enum Escape<'a> {
    /// A code point (or UTF-16 code unit) from `\u`, `\x` or octal forms.
    CodePoint(u32),
    /// Literal replacement text (possibly empty, for line continuations).
    Text(&'a str),
}

/// Strips the enclosing quotes from `raw` and decodes its escape sequences.
///
/// Escapes are matched left to right, without overlap, in this priority
/// order:
///
/// 1. `\u{X...}`: a code point of one or more hex digits
/// 2. `\uXXXX`: one to four hex digits
/// 3. `\xXX`: one or two hex digits
/// 4. `\[0-3][0-7][0-7]`, then `\[0-7][0-7]`, then `\[0-7]`: octal
/// 5. any other escaped character
///
/// `\n`, `\f`, `\r`, `\t`, `\v` and `\b` decode to control characters. An
/// escaped line terminator (`\n`, `\r`, `\r\n`, U+2028, U+2029) is a line
/// continuation and decodes to nothing. Any other escaped character decodes
/// to itself.
///
/// An escaped UTF-16 surrogate pair (`\uD83D\uDE00`) decodes to a single
/// character. Lone surrogates and code points above U+10FFFF decode to
/// U+FFFD.
///
/// Input shorter than two characters decodes to the empty string.
pub fn unquote_literal_string(raw: &str) -> String {
    let mut chars = raw.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return String::new();
    }
    decode_escapes(chars.as_str())
}

/// Escapes `value` so that it can be written between two `quote` characters,
/// and wraps it in them.
///
/// Backslashes and `quote` itself are prefixed with a backslash. Line
/// terminators are written as `\n`, `\r`, `\u2028` and `\u2029` so that the
/// result stays on one line and [`unquote_literal_string`] restores the
/// original text.
///
/// `quote` is expected to be `"` or `'`.
pub fn quote_literal_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            },
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn decode_escapes(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut rest = inner;

    while let Some(backslash) = rest.find('\\') {
        out.push_str(&rest[..backslash]);
        let (escape, consumed) = decode_escape(&rest[backslash + 1..]);
        rest = &rest[backslash + 1 + consumed..];

        match escape {
            Escape::Text(text) => out.push_str(text),
            Escape::CodePoint(high @ 0xD800..=0xDBFF) => {
                if let Some((low, len)) = trailing_low_surrogate(rest) {
                    let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined).unwrap_or(REPLACEMENT_CHARACTER));
                    rest = &rest[len..];
                } else {
                    out.push(REPLACEMENT_CHARACTER);
                }
            },
            Escape::CodePoint(code_point) => {
                out.push(char::from_u32(code_point).unwrap_or(REPLACEMENT_CHARACTER));
            },
        }
    }

    out.push_str(rest);
    out
}

/// If `rest` begins with an escape that decodes to a low surrogate, returns
/// the surrogate and the number of bytes the escape occupies.
fn trailing_low_surrogate(rest: &str) -> Option<(u32, usize)> {
    let after = rest.strip_prefix('\\')?;
    match decode_escape(after) {
        (Escape::CodePoint(low @ 0xDC00..=0xDFFF), consumed) => Some((low, consumed + 1)),
        _ => None,
    }
}

/// Decodes one escape sequence. `after` is the text following the
/// backslash; returns the decoded escape and the number of bytes of `after`
/// it consumed.
fn decode_escape(after: &str) -> (Escape<'_>, usize) {
    let Some(first) = after.chars().next() else {
        // A trailing backslash has nothing to escape.
        return (Escape::Text("\\"), 0);
    };

    match first {
        'u' => {
            if let Some((code_point, len)) = braced_code_point(&after[1..]) {
                return (Escape::CodePoint(code_point), 1 + len);
            }
            match hex_prefix(&after[1..], 4) {
                Some((code_point, len)) => (Escape::CodePoint(code_point), 1 + len),
                None => (Escape::Text("u"), 1),
            }
        },
        'x' => match hex_prefix(&after[1..], 2) {
            Some((code_point, len)) => (Escape::CodePoint(code_point), 1 + len),
            None => (Escape::Text("x"), 1),
        },
        '0'..='7' => {
            let (code_point, len) = octal_prefix(after);
            (Escape::CodePoint(code_point), len)
        },
        'n' => (Escape::Text("\n"), 1),
        'f' => (Escape::Text("\u{000C}"), 1),
        'r' => (Escape::Text("\r"), 1),
        't' => (Escape::Text("\t"), 1),
        'v' => (Escape::Text("\u{000B}"), 1),
        'b' => (Escape::Text("\u{0008}"), 1),
        '\r' if after[1..].starts_with('\n') => (Escape::Text(""), 2),
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => (Escape::Text(""), first.len_utf8()),
        other => {
            let len = other.len_utf8();
            (Escape::Text(&after[..len]), len)
        },
    }
}

/// Parses `{hex+}` at the start of `text`.
fn braced_code_point(text: &str) -> Option<(u32, usize)> {
    let body = text.strip_prefix('{')?;
    let close = body.find('}')?;
    let digits = &body[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    // Overlong values are out of range: they decode to U+FFFD.
    let code_point = u32::from_str_radix(digits, 16).unwrap_or(u32::MAX);
    Some((code_point, close + 2))
}

/// Parses one to `max_digits` hex digits at the start of `text`.
fn hex_prefix(text: &str, max_digits: usize) -> Option<(u32, usize)> {
    let len = text
        .bytes()
        .take(max_digits)
        .take_while(u8::is_ascii_hexdigit)
        .count();
    if len == 0 {
        return None;
    }
    u32::from_str_radix(&text[..len], 16)
        .ok()
        .map(|code_point| (code_point, len))
}

/// Parses the longest octal escape at the start of `text`, which must begin
/// with an octal digit.
fn octal_prefix(text: &str) -> (u32, usize) {
    let digits: Vec<u32> = text
        .bytes()
        .take(3)
        .take_while(|b| (b'0'..=b'7').contains(b))
        .map(|b| u32::from(b - b'0'))
        .collect();

    match digits.as_slice() {
        [a @ 0..=3, b, c] => (a * 64 + b * 8 + c, 3),
        [a, b, ..] => (a * 8 + b, 2),
        [a] => (*a, 1),
        [] => (0, 0),
    }
}
