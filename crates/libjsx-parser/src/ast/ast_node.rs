use crate::JsxSourceSpan;

/// Append the source text for `span` to `sink` by slicing
/// directly from `source` via byte offsets (zero-copy,
/// lossless).
pub(crate) fn append_span_source_slice(
    span: &JsxSourceSpan,
    sink: &mut String,
    source: &str,
) {
    let start = span.start_inclusive.byte_offset();
    let end = span.end_exclusive.byte_offset();
    debug_assert!(
        start <= end,
        "append_span_source_slice: inverted span \
         (start {start} > end {end})",
    );
    if let Some(text) = span.byte_span().slice(source) {
        sink.push_str(text);
    }
}

/// Trait implemented by AST node types. Provides source reconstruction
/// methods.
///
/// [`Node`](crate::ast::Node) implements this trait via
/// `#[inherent] impl AstNode`, giving it both inherent methods (no trait
/// import needed) and a trait bound for generic utilities (diagnostic
/// printers, the `jsx` CLI, etc.).
///
/// # Source Reconstruction Modes
///
/// - **Source-slice mode (fast, lossless):** When `source` is
///   `Some(s)`, [`append_source`](AstNode::append_source) slices
///   `&s[span.start.byte_offset..span.end.byte_offset]`.
///
/// - **Synthetic-formatting mode (slower, lossy):** When `source`
///   is `None`, [`append_source`](AstNode::append_source) walks the
///   AST and emits a normalized rendering: single spaces between
///   attributes, binary operations fully parenthesized, comments
///   dropped. The output parses to an equivalent tree.
pub trait AstNode {
    /// Append this node's source representation to `sink`.
    fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    );

    /// Return this node as a source string.
    ///
    /// Convenience wrapper around
    /// [`append_source`](AstNode::append_source).
    fn to_source(
        &self,
        source: Option<&str>,
    ) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}
