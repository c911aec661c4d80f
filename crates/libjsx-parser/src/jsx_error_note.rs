use crate::JsxErrorNoteKind;
use crate::JsxSourceSpan;
use crate::SmallVec;

/// An error note providing additional context about an error.
///
/// Notes augment the primary error message with explanatory context,
/// actionable suggestions, and related source locations (e.g. where the
/// opening tag of a mismatched element was written).
#[derive(Debug, Clone, PartialEq)]
pub struct JsxErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: JsxErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional span pointing to a related location.
    pub span: Option<JsxSourceSpan>,
}

impl JsxErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: JsxErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note with a span.
    pub fn general_with_span(message: impl Into<String>, span: JsxSourceSpan) -> Self {
        Self {
            kind: JsxErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: JsxErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap
/// allocation in the common case.
pub type JsxErrorNotes = SmallVec<[JsxErrorNote; 2]>;
