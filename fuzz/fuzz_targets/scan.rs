#![no_main]

use beanprobe::Introspector;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 is not a source file
    if let Ok(source) = std::str::from_utf8(data) {
        // Scanning and describing must report errors, never panic
        if let Ok(types) = beanprobe::scan::scan_source(source) {
            let introspector = Introspector::default();
            for info in &types {
                let _ = introspector.describe(info);
            }
        }
    }
});
