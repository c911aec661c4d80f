use crate::ByteSpan;
use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
///
/// Optionally includes a file path for the referenced source text.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct JsxSourceSpan {
    #[serde(rename = "start")]
    pub start_inclusive: SourcePosition,
    #[serde(rename = "end")]
    pub end_exclusive: SourcePosition,
    /// The file path to the source text this span refers to, if available.
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl JsxSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a span with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Creates a zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self::new(pos.clone(), pos)
    }

    /// Returns `true` if `other` lies entirely within this span.
    pub fn contains(&self, other: &JsxSourceSpan) -> bool {
        self.start_inclusive <= other.start_inclusive
            && other.end_exclusive <= self.end_exclusive
    }

    /// Extracts a compact `ByteSpan` from this span's byte
    /// offsets, discarding line/column and file path information.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan {
            start: self.start_inclusive.byte_offset() as u32,
            end: self.end_exclusive.byte_offset() as u32,
        }
    }
}
