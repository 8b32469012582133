#![no_main]

use itl_harness::corpus::expected_outcome;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Names without a separator are never test cases
        if !name.contains('_') {
            assert!(matches!(expected_outcome(name, ".itl"), Ok(None)));
        } else {
            let _ = expected_outcome(name, ".itl");
        }
    }
});
