#![no_main]

use libfuzzer_sys::fuzz_target;
use libjsx_parser::quote_literal_string;
use libjsx_parser::unquote_literal_string;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let _ = unquote_literal_string(s);
    assert_eq!(unquote_literal_string(&quote_literal_string(s, '"')), s);
});
