#![no_main]

use libfuzzer_sys::fuzz_target;
use papyrix_text::thai::{MAX_SEGMENT_BYTES, build_clusters, segment_words};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length.
    if text.len() > 4096 {
        return;
    }

    let segments = segment_words(text);
    assert_eq!(segments.concat(), text);
    for segment in &segments {
        assert!(!segment.is_empty());
        assert!(segment.len() <= MAX_SEGMENT_BYTES);
    }

    let clusters = build_clusters(text);
    let emitted: usize = clusters.iter().map(|c| c.glyphs.len()).sum();
    assert_eq!(emitted, text.chars().count());
    assert!(clusters.iter().all(|c| c.advance_count() >= 1));
});
