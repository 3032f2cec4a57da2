#![no_main]

use libfuzzer_sys::fuzz_target;
use papyrix_text::hyphenation::Hyphenator;

const LANGUAGES: [&str; 8] = ["en", "fr", "de", "ru", "es", "it", "uk", "xx"];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    // Cap length.
    if text.len() > 1024 {
        return;
    }

    let language = LANGUAGES[usize::from(selector) % LANGUAGES.len()];
    let hyphenator = Hyphenator::for_language(language);
    let fallback = selector & 0x80 != 0;

    for word in text.split_whitespace() {
        let breaks = hyphenator.break_offsets(word, fallback);
        for pair in breaks.windows(2) {
            assert!(pair[0].byte_offset < pair[1].byte_offset);
        }
        for info in &breaks {
            assert!(info.byte_offset > 0 && info.byte_offset < word.len());
            assert!(word.is_char_boundary(info.byte_offset));
        }

        // Marker insertion must keep the text intact.
        let marked = hyphenator.hyphenate(word, "\u{ad}");
        assert_eq!(marked.replace('\u{ad}', ""), word.replace('\u{ad}', ""));
    }
});
