#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Expects validated input, but must not panic on anything else.
        let _ = vinparse::verify_checksum(s);
        let _ = vinparse::check_digit(s);
    }
});
