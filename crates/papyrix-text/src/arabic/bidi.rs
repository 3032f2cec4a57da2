#![forbid(unsafe_code)]

//! Minimal bidi reordering for Arabic paragraphs.
//!
//! This is not UAX #9. There are no embedding levels and explicit
//! directional marks are ignored. The paragraph direction is always RTL. It
//! covers what an Arabic book paragraph with some embedded Latin words,
//! numbers, and brackets needs, at a fraction of the code size.
//!
//! ```text
//! logical   ب  ا  _  (  A  B  )  _  1  2
//! classes   R  R  N  N  L  L  N  N  L  L
//! resolved  R  R  R  L  L  L  L  L  L  L
//! runs      [0..3 RTL] [3..10 LTR]
//! visual    ( A B ) _ 1 2 _ ا ب
//! ```

/// Direction class of a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiClass {
    Ltr,
    Rtl,
    Neutral,
}

/// Classify one codepoint. ASCII digits are always LTR.
#[must_use]
pub const fn classify(cp: u32) -> BidiClass {
    match cp {
        0x0600..=0x06FF | 0x0750..=0x077F | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF => BidiClass::Rtl,
        0x30..=0x39 => BidiClass::Ltr,
        0x00..=0x20 => BidiClass::Neutral,
        _ if cp < 0x80 && is_neutral_punctuation(cp as u8) => BidiClass::Neutral,
        _ => BidiClass::Ltr,
    }
}

const fn is_neutral_punctuation(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'[' | b']' | b',' | b'.' | b':' | b';' | b'-' | b'!' | b'?' | b'/' | b'\'' | b'"'
    )
}

fn first_strong(mut classes: impl Iterator<Item = BidiClass>) -> Option<BidiClass> {
    classes.find(|&class| class != BidiClass::Neutral)
}

/// Replace every `Neutral` in `classes` with a strong direction.
///
/// Resolution runs left to right in place, so a neutral sees the already
/// resolved neutrals before it.
/// - `(` and `[` follow the first strong class to their right.
/// - `)` and `]` follow the first strong class to their left.
/// - Anything else takes its neighbours' direction when both agree.
///
/// The fallback is always RTL.
pub fn resolve_neutrals(codepoints: &[u32], classes: &mut [BidiClass]) {
    debug_assert_eq!(codepoints.len(), classes.len());
    for i in 0..classes.len().min(codepoints.len()) {
        if classes[i] != BidiClass::Neutral {
            continue;
        }
        let left = || first_strong(classes[..i].iter().rev().copied());
        let right = || first_strong(classes[i + 1..].iter().copied());

        let resolved = match codepoints[i] {
            0x28 | 0x5B => right(),
            0x29 | 0x5D => left(),
            _ => match (left(), right()) {
                (Some(l), Some(r)) if l == r => Some(l),
                _ => None,
            },
        };
        classes[i] = resolved.unwrap_or(BidiClass::Rtl);
    }
}

/// Reorder logical `codepoints` into visual left-to-right order.
#[must_use]
pub fn reorder_visual(codepoints: &[u32]) -> Vec<u32> {
    let mut classes: Vec<BidiClass> = codepoints.iter().map(|&cp| classify(cp)).collect();
    resolve_neutrals(codepoints, &mut classes);

    // Maximal same-direction runs as (start, end, class).
    let mut runs: Vec<(usize, usize, BidiClass)> = Vec::new();
    for (idx, &class) in classes.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.2 == class => run.1 = idx + 1,
            _ => runs.push((idx, idx + 1, class)),
        }
    }

    let mut visual = Vec::with_capacity(codepoints.len());
    for &(start, end, class) in runs.iter().rev() {
        let run = &codepoints[start..end];
        if class == BidiClass::Rtl {
            visual.extend(run.iter().rev());
        } else {
            visual.extend_from_slice(run);
        }
    }
    visual
}
