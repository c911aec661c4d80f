use crate::JsxErrorNote;
use crate::JsxErrorNoteKind;
use crate::JsxErrorNotes;
use crate::JsxParseErrorKind;
use crate::JsxSourceSpan;

/// A hard syntax error with location information and contextual notes.
///
/// Raising one of these aborts parsing of the whole unit: there is no
/// partial-AST recovery. Grammar rules that merely fail to find their
/// construct return `Ok(None)` instead (see [`RuleResult`](crate::RuleResult)).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct JsxParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "unexpected token `>`", "unexpected end of input",
    /// "closing tag does not match opening tag"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "unexpected end of input": a zero-width span after the last
    ///   consumed token
    /// - For closing-tag mismatches: the closing tag's name
    span: JsxSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: JsxParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: JsxErrorNotes,
}

impl JsxParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: JsxSourceSpan,
        kind: JsxParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: JsxErrorNotes::new(),
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: JsxSourceSpan,
        kind: JsxParseErrorKind,
        notes: JsxErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &JsxSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &JsxParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &JsxErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(JsxErrorNote::general(message));
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: JsxSourceSpan) {
        self.notes
            .push(JsxErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(JsxErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: closing tag does not match opening tag
    ///   --> button.jsx:1:10
    ///    |
    ///  1 | <a.b.c></a.b.d>
    ///    |          ^^^^^
    ///    = note: opening tag `a.b.c` here
    ///       1 | <a.b.c></a.b.d>
    ///         |  -
    /// ```
    ///
    /// # Arguments
    /// - `source`: Optional source text for snippet extraction. If `None`,
    ///   snippets are omitted but line/column info is still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let file_name = self.file_name();
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        output.push_str(&format!("  --> {file_name}:{line}:{column}\n"));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                JsxErrorNoteKind::General => "note",
                JsxErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// button.jsx:1:10: error: closing tag does not match opening tag
    /// ```
    pub fn format_oneline(&self) -> String {
        let file_name = self.file_name();
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;

        format!("{file_name}:{line}:{column}: error: {}", self.message)
    }

    fn file_name(&self) -> String {
        self.span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Formats the source snippet for the primary error span.
    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let lines: Vec<&str> = source.lines().collect();
        let line_num = self.span.start_inclusive.line();

        // Line numbers are 0-indexed internally
        if line_num >= lines.len() {
            return None;
        }

        let line_content = lines[line_num];
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();

        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        // A span that continues onto later lines is underlined to the end
        // of its first line.
        let col_start = self.span.start_inclusive.col_utf8();
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.col_utf8()
        } else {
            line_content.chars().count()
        };
        let underline_len = if col_end > col_start {
            col_end - col_start
        } else {
            1
        };

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }

    /// Formats a source snippet for a note's span.
    fn format_note_snippet(source: &str, span: &JsxSourceSpan) -> Option<String> {
        let lines: Vec<&str> = source.lines().collect();
        let line_num = span.start_inclusive.line();

        if line_num >= lines.len() {
            return None;
        }

        let line_content = lines[line_num];
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();

        output.push_str(&format!(
            "     {display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = span.start_inclusive.col_utf8();
        output.push_str(&format!(
            "     {:>width$} | {:>padding$}-\n",
            "",
            "",
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }
}
