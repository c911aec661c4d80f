use std::cmp::Ordering;

/// A location in JSX source text, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. Scanners are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `col_utf16`: Optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// # Ordering
///
/// Positions are totally ordered by `byte_offset`. Two positions taken from
/// the same document with equal offsets always agree on line and columns,
/// so this ordering is consistent with equality.
///
/// # Dual Column Tracking
///
/// - **`col_utf8`** (always available): number of characters from the start
///   of the current line. This is what most editors display as "column".
/// - **`col_utf16`** (optional): UTF-16 code unit offset within the line,
///   which is what LSP-based tooling (and JavaScript's own string indexing)
///   expects. It is `None` when a scanner cannot provide it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// UTF-8 character count within current line (0-based)
    #[serde(rename = "column")]
    col_utf8: usize,

    /// UTF-16 code unit offset within current line (0-based), if available.
    #[serde(skip)]
    col_utf16: Option<usize>,

    /// byte offset from start of document (0-based)
    #[serde(rename = "offset")]
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col_utf8`: 0-based UTF-8 character count within current line
    /// - `col_utf16`: 0-based UTF-16 code unit offset within current line,
    ///   or `None` if not available
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the very first character of a document.
    pub fn start_of_input() -> Self {
        Self::new(0, 0, Some(0), 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    ///
    /// Both 'a' (1 byte) and '🎉' (4 bytes) each add 1 to this count.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    ///
    /// 'a' adds 1 to this count, while '🎉' (a surrogate pair) adds 2.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl PartialOrd for SourcePosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourcePosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.byte_offset.cmp(&other.byte_offset)
    }
}
