#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = zugferd_extract::is_zugferd_xml(s);
        // Must not panic — errors are fine, panics are bugs.
        let _ = zugferd_extract::extract_invoice(s);
    }
});
