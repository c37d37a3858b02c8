#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz context file parsing - this should never panic
        let _ = composeflat::config::from_toml_str(content, Path::new("fuzz.toml"));
    }
});
