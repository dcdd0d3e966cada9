#![no_main]

use libfuzzer_sys::fuzz_target;
use luhn_core::{is_valid, is_valid_str, Error};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing either fails cleanly or agrees with integer validation
    match is_valid_str(text) {
        Ok(valid) => {
            let number: i64 = text.parse().expect("accepted text must parse");
            assert_eq!(valid, is_valid(number), "text and integer disagree");
        }
        Err(Error::MalformedNumber { .. }) => {}
        Err(e) => panic!("unexpected error: {}", e),
    }
});
