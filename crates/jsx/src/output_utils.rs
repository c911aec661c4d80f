use std::path::Path;

pub(crate) const GREEN_CHECK: &str = "\x1b[32m\u{2714}\x1b[0m";
pub(crate) const RED_X: &str = "\x1b[31m\u{2718}\x1b[0m";

/// Renders `path` relative to the working directory when it lies beneath
/// it, so diagnostics stay short.
pub(crate) fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
