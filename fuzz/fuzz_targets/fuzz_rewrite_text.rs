#![no_main]

use composeflat::{rewrite_text, AliasMap};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // First line is read as `alias=target` pairs separated by commas
        let (header, body) = content.split_once('\n').unwrap_or(("", content));
        let aliases: AliasMap = header
            .split(',')
            .filter_map(|pair| pair.split_once('='))
            .collect();

        // Rewriting arbitrary text should never panic
        let once = rewrite_text(body, &aliases);
        let _ = rewrite_text(&once, &aliases);
    }
});
