//! Property-based invariant tests for hyphenation and the trie codec.
//!
//! These tests verify invariants that must hold for arbitrary words in any
//! supported language:
//!
//! 1. Break offsets are strictly ascending and strictly inside the word.
//! 2. Every break offset lands on a char boundary.
//! 3. Repeated calls return identical results.
//! 4. An ASCII hyphen between letters yields a plain break right after it.
//! 5. English pattern breaks respect the 3/3 margins.
//! 6. Fallback without a language yields one break per admissible index.
//! 7. `hyphenate` with an empty marker reproduces the word.
//! 8. Pattern search over arbitrary trie bytes never panics.
//! 9. The target-delta codec round-trips every representable value.

use papyrix_text::hyphenation::automaton::{SerializedPatterns, decode_delta, encode_delta};
use papyrix_text::hyphenation::common::{collect_codepoints, is_latin_letter, to_lower_latin};
use papyrix_text::hyphenation::liang::{self, WordConfig};
use papyrix_text::hyphenation::{BreakInfo, Hyphenator};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_language() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("en"),
        Just("fr"),
        Just("de-DE"),
        Just("ru"),
        Just("es"),
        Just("it"),
        Just("uk"),
        Just("xx"),
        Just(""),
    ]
}

/// Words that look like book text: letters from several alphabets,
/// occasional hyphens, quotes, and footnote markers.
fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{0,24}",
        "[a-z\u{e0}-\u{ff}]{1,16}",
        "[\u{0430}-\u{044f}\u{0451}\u{0456}\u{0457}]{1,20}",
        "[a-z]{1,10}[-\u{ad}\u{2013}][a-z]{1,10}",
        "[\"(\u{ab}]?[a-z]{2,14}[.,!?\u{bb})]?(\\[[0-9]{1,3}\\])?",
        prop::collection::vec(any::<char>(), 0..24).prop_map(|c| c.into_iter().collect()),
    ]
}

fn assert_well_formed(word: &str, breaks: &[BreakInfo]) -> Result<(), TestCaseError> {
    for pair in breaks.windows(2) {
        prop_assert!(pair[0].byte_offset < pair[1].byte_offset, "{breaks:?}");
    }
    for info in breaks {
        prop_assert!(info.byte_offset > 0, "{word:?}: {info:?}");
        prop_assert!(info.byte_offset < word.len(), "{word:?}: {info:?}");
        prop_assert!(word.is_char_boundary(info.byte_offset), "{word:?}: {info:?}");
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1–3. Shape of the break list
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn breaks_are_ascending_interior_and_aligned(
        language in arb_language(),
        word in arb_word(),
        fallback in any::<bool>(),
    ) {
        let hyphenator = Hyphenator::for_language(language);
        let breaks = hyphenator.break_offsets(&word, fallback);
        assert_well_formed(&word, &breaks)?;
    }

    #[test]
    fn break_detection_is_deterministic(
        language in arb_language(),
        word in arb_word(),
        fallback in any::<bool>(),
    ) {
        let hyphenator = Hyphenator::for_language(language);
        prop_assert_eq!(
            hyphenator.break_offsets(&word, fallback),
            hyphenator.break_offsets(&word, fallback)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–7. Semantics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn explicit_hyphen_takes_precedence(
        language in arb_language(),
        left in "[a-z]{1,10}",
        right in "[a-z]{1,10}",
    ) {
        let word = format!("{left}-{right}");
        let breaks = Hyphenator::for_language(language).break_offsets(&word, true);
        prop_assert!(breaks.contains(&BreakInfo::new(left.len() + 1, false)), "{breaks:?}");
        assert_well_formed(&word, &breaks)?;
    }

    #[test]
    fn english_margins_hold(word in "[a-z]{0,20}") {
        let breaks = Hyphenator::for_language("en").break_offsets(&word, false);
        for info in &breaks {
            prop_assert!(info.byte_offset >= 3, "{word}: {breaks:?}");
            prop_assert!(info.byte_offset + 3 <= word.len(), "{word}: {breaks:?}");
            prop_assert!(info.requires_inserted_hyphen);
        }
    }

    #[test]
    fn fallback_without_language_covers_every_index(word in "[a-z]{0,20}") {
        let breaks = Hyphenator::default().break_offsets(&word, true);
        let offsets: Vec<usize> = breaks.iter().map(|b| b.byte_offset).collect();
        let expected: Vec<usize> = (2..).take_while(|idx| idx + 2 <= word.len()).collect();
        prop_assert_eq!(offsets, expected);
    }

    #[test]
    fn empty_marker_is_identity(language in arb_language(), word in arb_word()) {
        let hyphenator = Hyphenator::for_language(language);
        prop_assert_eq!(hyphenator.hyphenate(&word, ""), word);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8–9. Trie decoding safety and delta codec
// ═════════════════════════════════════════════════════════════════════════

const LATIN: WordConfig = WordConfig::new(is_latin_letter, to_lower_latin, 1, 1);

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn arbitrary_trie_bytes_never_panic(
        data in prop::collection::vec(any::<u8>(), 0..256),
        root in 0usize..300,
        word in "[a-z]{0,16}",
    ) {
        let patterns = SerializedPatterns::new(&data, root);
        let cps = collect_codepoints(&word);
        let indexes = liang::break_indexes(&cps, &patterns, &LATIN);
        for pair in indexes.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(indexes.iter().all(|&idx| idx > 0 && idx < cps.len()));
    }

    #[test]
    fn arbitrary_prefixed_blobs_parse_or_reject(data in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Ok(patterns) = SerializedPatterns::parse(&data) {
            prop_assert!(patterns.root_offset() < patterns.data().len());
            let _ = patterns.root();
        }
    }

    #[test]
    fn delta_one_byte_round_trip(delta in -128i32..128) {
        let raw = encode_delta(delta, 1).unwrap();
        prop_assert_eq!(raw.len(), 1);
        prop_assert_eq!(decode_delta(&raw), Some(delta));
    }

    #[test]
    fn delta_two_byte_round_trip(delta in -32_768i32..32_768) {
        let raw = encode_delta(delta, 2).unwrap();
        prop_assert_eq!(decode_delta(&raw), Some(delta));
    }

    #[test]
    fn delta_three_byte_round_trip(delta in -(1i32 << 23)..(1i32 << 23)) {
        let raw = encode_delta(delta, 3).unwrap();
        prop_assert_eq!(raw.len(), 3);
        prop_assert_eq!(decode_delta(&raw), Some(delta));
    }

    #[test]
    fn out_of_range_deltas_are_rejected(delta in (1i32 << 23)..i32::MAX) {
        prop_assert!(encode_delta(delta, 3).is_none());
        prop_assert!(encode_delta(delta, 2).is_none());
    }
}
