//! Scanner trait and implementations.

mod jsx_scanner;
mod str_jsx_scanner;

pub use jsx_scanner::JsxScanner;
pub use str_jsx_scanner::StrJsxScanner;
pub use str_jsx_scanner::StrJsxScannerCheckpoint;
