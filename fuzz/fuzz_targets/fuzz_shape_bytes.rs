#![no_main]

use libfuzzer_sys::fuzz_target;
use papyrix_text::arabic::shape_bytes;
use papyrix_text::arabic::bidi::reorder_visual;
use papyrix_text::utf8::decode_all;

fuzz_target!(|data: &[u8]| {
    // Cap length.
    if data.len() > 1024 {
        return;
    }

    // Invalid UTF-8 decodes leniently; shaping must never panic on it.
    let decoded = decode_all(data);
    let shaped = shape_bytes(data);
    assert!(shaped.len() <= decoded.len());

    // Reordering alone is a permutation.
    let mut visual = reorder_visual(&decoded);
    let mut logical = decoded;
    visual.sort_unstable();
    logical.sort_unstable();
    assert_eq!(visual, logical);
});
