#![no_main]

use libfuzzer_sys::fuzz_target;
use libjsx_parser::token_source::JsxScanner;
use libjsx_parser::token_source::StrJsxScanner;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Alternate lexing modes and text runs so every scanner path is hit.
    let mut scanner = StrJsxScanner::new(s);
    let mut step = 0usize;
    loop {
        step += 1;
        scanner.set_jsx_mode(step % 3 == 0);
        if step % 5 == 0 && scanner.retokenize_current_as_jsx_text().is_some() {
            scanner.advance();
            continue;
        }
        if scanner.advance().is_none() {
            break;
        }
    }
});
