/// The kind of an error note (determines how the note is rendered).
///
/// Notes provide additional context beyond the primary error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsxErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    /// Example: "opening tag `a.b` here" (with span pointing to the opener)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    /// Example: "close the element with `</a.b>`"
    Help,
}
