#![no_main]

use libfuzzer_sys::fuzz_target;
use libjsx_parser::JsxParser;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    match JsxParser::new(s).parse_expression() {
        Ok(node) => {
            assert!(node.start() <= node.end());
            let _ = node.to_source(Some(s));
        },
        Err(error) => {
            let _ = error.format_detailed(Some(s));
        },
    }
});
