#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        if let Ok(vin) = vinparse::get_info(s) {
            assert_eq!(vin.as_str().len(), vinparse::VIN_LENGTH);
            let _ = vin.model_years_through(2100);
        }
    }
});
