//! Property-based invariant tests for UTF-8 decoding and NFC composition.
//!
//! 1. Lenient decoding always makes progress and never overruns the input.
//! 2. On valid UTF-8 the lenient decoder agrees with `str::chars`.
//! 3. `encode` and `encoded_len` agree with `char::encode_utf8`.
//! 4. Tail truncation keeps the string valid and removes whole characters.
//! 5. Every composition table row agrees with `unicode-normalization`.
//! 6. Composing table pairs matches a reference NFC implementation.
//! 7. `normalize_nfc` never grows its input and is idempotent.

use papyrix_text::nfc::{COMPOSITIONS, compose_pair, normalize_nfc};
use papyrix_text::utf8::{self, codepoints, decode_all, encode, encoded_len};

use proptest::prelude::*;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..48).prop_map(|c| c.into_iter().collect())
}

/// Decomposed text built from known composition pairs, with ASCII between.
fn arb_decomposed() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(COMPOSITIONS.to_vec()), "[a-z ]{0,3}"),
        0..12,
    )
    .prop_map(|parts| {
        let mut out = String::new();
        for ((base, mark, _), filler) in parts {
            out.extend(char::from_u32(u32::from(base)));
            out.extend(char::from_u32(u32::from(mark)));
            out.push_str(&filler);
        }
        out
    })
}

// ═════════════════════════════════════════════════════════════════════════
// UTF-8
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn decoding_makes_progress(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let cps: Vec<_> = codepoints(&bytes).collect();
        prop_assert!(cps.len() <= bytes.len());
        for pair in cps.windows(2) {
            prop_assert!(pair[0].byte_offset < pair[1].byte_offset);
        }
        if let Some(last) = cps.last() {
            prop_assert!(last.byte_offset < bytes.len());
        }
    }

    #[test]
    fn valid_utf8_matches_std(text in arb_text()) {
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        prop_assert_eq!(decode_all(text.as_bytes()), expected);
        let offsets: Vec<usize> = codepoints(text.as_bytes()).map(|c| c.byte_offset).collect();
        let std_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        prop_assert_eq!(offsets, std_offsets);
    }

    #[test]
    fn encode_matches_std(ch in any::<char>()) {
        let mut out = Vec::new();
        let written = encode(u32::from(ch), &mut out);
        let mut buf = [0u8; 4];
        let expected = ch.encode_utf8(&mut buf).as_bytes();
        prop_assert_eq!(out.as_slice(), expected);
        prop_assert_eq!(written, expected.len());
        prop_assert_eq!(encoded_len(u32::from(ch)), ch.len_utf8());
    }

    #[test]
    fn truncation_removes_whole_chars(text in arb_text(), count in 0usize..60) {
        let mut truncated = text.clone();
        utf8::truncate_chars(&mut truncated, count);
        let kept = text.chars().count().saturating_sub(count);
        prop_assert_eq!(truncated.chars().count(), kept);
        prop_assert!(text.starts_with(&truncated));

        let mut popped = text.clone();
        let new_len = utf8::remove_last_char(&mut popped);
        prop_assert_eq!(new_len, popped.len());
        prop_assert_eq!(popped.chars().count(), text.chars().count().saturating_sub(1));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// NFC
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn composition_table_matches_reference() {
    for &(base, mark, composed) in COMPOSITIONS {
        let pair: String = [u32::from(base), u32::from(mark)]
            .into_iter()
            .filter_map(char::from_u32)
            .collect();
        let reference: Vec<u32> = pair.nfc().map(u32::from).collect();
        assert_eq!(
            reference,
            vec![u32::from(composed)],
            "U+{base:04X} U+{mark:04X}"
        );
        assert_eq!(compose_pair(u32::from(base), u32::from(mark)), Some(u32::from(composed)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn table_pairs_compose_like_reference(text in arb_decomposed()) {
        let reference: String = text.nfc().collect();
        prop_assert_eq!(normalize_nfc(&text).into_owned(), reference);
    }

    #[test]
    fn normalization_never_grows_and_is_idempotent(text in arb_text()) {
        let once = normalize_nfc(&text);
        prop_assert!(once.len() <= text.len());
        let twice = normalize_nfc(&once);
        prop_assert!(matches!(twice, Cow::Borrowed(_)));
        prop_assert_eq!(twice.as_ref(), once.as_ref());
    }

    #[test]
    fn ascii_is_borrowed(text in "[ -~]{0,64}") {
        prop_assert!(matches!(normalize_nfc(&text), Cow::Borrowed(_)));
    }
}
