#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use papyrix_text::hyphenation::automaton::SerializedPatterns;
use papyrix_text::hyphenation::common::{
    collect_codepoints, is_cyrillic_letter, is_latin_letter, to_lower_cyrillic, to_lower_latin,
};
use papyrix_text::hyphenation::liang::{self, WordConfig};

#[derive(Debug, Arbitrary)]
struct Input {
    blob: Vec<u8>,
    word: String,
    cyrillic: bool,
    prefixed: bool,
}

fuzz_target!(|input: Input| {
    if input.blob.len() > 4096 || input.word.len() > 256 {
        return;
    }

    // A malformed trie must decode to "no breaks", never panic.
    let patterns = if input.prefixed {
        match SerializedPatterns::parse(&input.blob) {
            Ok(patterns) => patterns,
            Err(_) => return,
        }
    } else {
        SerializedPatterns::new(&input.blob, input.blob.len() / 2)
    };

    let config = if input.cyrillic {
        WordConfig::new(is_cyrillic_letter, to_lower_cyrillic, 2, 2)
    } else {
        WordConfig::new(is_latin_letter, to_lower_latin, 2, 2)
    };

    let cps = collect_codepoints(&input.word);
    let indexes = liang::break_indexes(&cps, &patterns, &config);
    for pair in indexes.windows(2) {
        assert!(pair[0] < pair[1], "indexes not ascending: {indexes:?}");
    }
    for &idx in &indexes {
        assert!(idx > 0 && idx < cps.len(), "index {idx} outside word of {}", cps.len());
    }
});
