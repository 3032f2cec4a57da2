#![forbid(unsafe_code)]

//! Character predicates and word preparation shared by every language.

use crate::nfc;
use crate::utf8::{self, Codepoint};

// ---------------------------------------------------------------------------
// Alphabets
// ---------------------------------------------------------------------------

/// Basic Latin and Latin-1 letters plus the few Latin Extended letters the
/// supported languages need (Œ œ Ÿ ẞ).
#[must_use]
pub const fn is_latin_letter(cp: u32) -> bool {
    matches!(
        cp,
        0x41..=0x5A
            | 0x61..=0x7A
            | 0xC0..=0xD6
            | 0xD8..=0xF6
            | 0xF8..=0xFF
            | 0x0152
            | 0x0153
            | 0x0178
            | 0x1E9E
    )
}

/// Cyrillic and Cyrillic Supplement blocks.
#[inline]
#[must_use]
pub const fn is_cyrillic_letter(cp: u32) -> bool {
    matches!(cp, 0x0400..=0x052F)
}

/// Letter in any alphabet that has hyphenation patterns.
#[inline]
#[must_use]
pub const fn is_alphabetic(cp: u32) -> bool {
    is_latin_letter(cp) || is_cyrillic_letter(cp)
}

#[must_use]
pub const fn to_lower_latin(cp: u32) -> u32 {
    match cp {
        0x41..=0x5A | 0xC0..=0xD6 | 0xD8..=0xDE => cp + 0x20,
        0x0152 => 0x0153,
        0x0178 => 0x00FF,
        0x1E9E => 0x00DF,
        _ => cp,
    }
}

#[must_use]
pub const fn to_lower_cyrillic(cp: u32) -> u32 {
    match cp {
        0x0410..=0x042F => cp + 0x20,
        0x0401 => 0x0451,
        _ => cp,
    }
}

// ---------------------------------------------------------------------------
// Punctuation and hyphens
// ---------------------------------------------------------------------------

/// Punctuation stripped from both ends of a word before hyphenation.
#[must_use]
pub const fn is_punctuation(cp: u32) -> bool {
    matches!(
        cp,
        0x21 // !
            | 0x22 // "
            | 0x27 // '
            | 0x28 // (
            | 0x29 // )
            | 0x2C // ,
            | 0x2D // -
            | 0x2E // .
            | 0x2F // /
            | 0x3A // :
            | 0x3B // ;
            | 0x3F // ?
            | 0x5B // [
            | 0x5D // ]
            | 0x7B // {
            | 0x7D // }
            | 0x00A0 // no-break space
            | 0x00AB // «
            | 0x00BB // »
            | 0x2018
            | 0x2019
            | 0x201C
            | 0x201D
            | 0x2026 // …
            | 0x203A // ›
    )
}

#[inline]
#[must_use]
pub const fn is_ascii_digit(cp: u32) -> bool {
    matches!(cp, 0x30..=0x39)
}

/// Hyphen-like characters that already mark a break opportunity.
///
/// Besides the Unicode dashes this includes `_` and `…`, which books use to
/// glue words together and which must stay breakable.
#[must_use]
pub const fn is_explicit_hyphen(cp: u32) -> bool {
    matches!(
        cp,
        0x2D | 0x5F
            | 0x00AD
            | 0x058A
            | 0x2010..=0x2015
            | 0x2026
            | 0x2043
            | 0x207B
            | 0x208B
            | 0x2212
            | 0x2E17
            | 0x2E3A
            | 0x2E3B
            | 0xFE58
            | 0xFE63
            | 0xFF0D
    )
}

/// U+00AD SOFT HYPHEN: invisible unless the line breaks at it.
#[inline]
#[must_use]
pub const fn is_soft_hyphen(cp: u32) -> bool {
    cp == 0x00AD
}

// ---------------------------------------------------------------------------
// Word preparation
// ---------------------------------------------------------------------------

/// Decode `word`, folding combining diacritics (U+0300..U+036F) into the
/// preceding letter when a precomposed form exists.
///
/// Byte offsets always refer to `word` itself, so a composed letter keeps the
/// offset of its base.
#[must_use]
pub fn collect_codepoints(word: &str) -> Vec<Codepoint> {
    let mut cps: Vec<Codepoint> = Vec::with_capacity(word.len());
    for cp in utf8::codepoints(word.as_bytes()) {
        if (0x0300..=0x036F).contains(&cp.value)
            && let Some(last) = cps.last_mut()
            && let Some(composed) = nfc::compose_pair(last.value, cp.value)
        {
            last.value = composed;
            continue;
        }
        cps.push(cp);
    }
    cps
}

/// Drop a trailing bracketed footnote marker (`word[12]`, `word[3].`) and
/// then all leading and trailing punctuation.
pub fn trim_surrounding_punctuation_and_footnote(cps: &mut Vec<Codepoint>) {
    if cps.len() >= 3 {
        let end = cps.iter().rposition(|c| !is_punctuation(c.value));
        if let Some(end) = end
            && is_ascii_digit(cps[end].value)
        {
            let digits_start = cps[..end]
                .iter()
                .rposition(|c| !is_ascii_digit(c.value));
            if let Some(open) = digits_start
                && cps[open].value == u32::from(b'[')
            {
                cps.truncate(open);
            }
        }
    }

    let leading = cps
        .iter()
        .position(|c| !is_punctuation(c.value))
        .unwrap_or(cps.len());
    cps.drain(..leading);
    while cps.last().is_some_and(|c| is_punctuation(c.value)) {
        cps.pop();
    }
}
