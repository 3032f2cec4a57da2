#![forbid(unsafe_code)]

//! Liang pattern search over a packed trie.
//!
//! The word is lowercased, wrapped in `.` sentinels, and UTF-8 encoded. For
//! every character start in that augmented buffer the trie is walked byte by
//! byte; each node reached may carry `(distance, level)` annotations naming
//! a byte position relative to the walk's start. Positions that land on a
//! character boundary at least two characters inside the sentinels keep the
//! highest level seen. Odd levels are break points.
//!
//! ```text
//! word       h  y  p  h  e  n
//! augmented  .  h  y  p  h  e  n  .
//! char idx   0  1  2  3  4  5  6  7
//! break k    boundary before word[k]  ==  augmented char index k + 1
//! ```

use smallvec::SmallVec;

use super::automaton::SerializedPatterns;
use crate::utf8::{self, Codepoint};

/// Minimum characters kept before the first break when a language does not
/// override it.
pub const DEFAULT_MIN_PREFIX: usize = 2;
/// Minimum characters kept after the last break when a language does not
/// override it.
pub const DEFAULT_MIN_SUFFIX: usize = 2;

const SENTINEL: u8 = b'.';

/// Per-language alphabet, case mapping, and break margins.
#[derive(Debug, Clone, Copy)]
pub struct WordConfig {
    /// Letters the patterns were written for; any other codepoint rejects
    /// the word.
    pub is_letter: fn(u32) -> bool,
    /// Case folding applied before matching.
    pub to_lower: fn(u32) -> u32,
    pub min_prefix: usize,
    pub min_suffix: usize,
}

impl WordConfig {
    #[must_use]
    pub const fn new(
        is_letter: fn(u32) -> bool,
        to_lower: fn(u32) -> u32,
        min_prefix: usize,
        min_suffix: usize,
    ) -> Self {
        Self {
            is_letter,
            to_lower,
            min_prefix,
            min_suffix,
        }
    }
}

/// `.word.` as bytes, with the character-start table used to map pattern
/// positions back to boundaries.
struct AugmentedWord {
    bytes: SmallVec<[u8; 64]>,
    /// Byte offset of every augmented character, sentinels included.
    char_starts: SmallVec<[usize; 32]>,
    /// Augmented character index starting at each byte, if any.
    byte_to_char: SmallVec<[Option<usize>; 64]>,
}

impl AugmentedWord {
    fn build(cps: &[Codepoint], config: &WordConfig) -> Option<Self> {
        if cps.is_empty() {
            return None;
        }
        let mut bytes: SmallVec<[u8; 64]> = SmallVec::new();
        let mut char_starts: SmallVec<[usize; 32]> = SmallVec::new();
        let mut scratch = Vec::with_capacity(4);

        char_starts.push(0);
        bytes.push(SENTINEL);
        for cp in cps {
            if !(config.is_letter)(cp.value) {
                return None;
            }
            char_starts.push(bytes.len());
            scratch.clear();
            utf8::encode((config.to_lower)(cp.value), &mut scratch);
            bytes.extend_from_slice(&scratch);
        }
        char_starts.push(bytes.len());
        bytes.push(SENTINEL);

        let mut byte_to_char: SmallVec<[Option<usize>; 64]> = SmallVec::from_elem(None, bytes.len());
        for (idx, &start) in char_starts.iter().enumerate() {
            byte_to_char[start] = Some(idx);
        }

        Some(Self {
            bytes,
            char_starts,
            byte_to_char,
        })
    }

    #[inline]
    fn char_count(&self) -> usize {
        self.char_starts.len()
    }
}

/// Compute break indexes for `cps` (indexes into `cps`, ascending).
///
/// Returns nothing if a codepoint is not a letter for this language, if the
/// trie's root does not decode, or if no odd level survives the margins.
#[must_use]
pub fn break_indexes(
    cps: &[Codepoint],
    patterns: &SerializedPatterns<'_>,
    config: &WordConfig,
) -> Vec<usize> {
    let Some(word) = AugmentedWord::build(cps, config) else {
        return Vec::new();
    };
    let Some(root) = patterns.root() else {
        return Vec::new();
    };

    let char_count = word.char_count();
    let mut scores: SmallVec<[u8; 32]> = SmallVec::from_elem(0, char_count);

    for &byte_start in &word.char_starts {
        let mut state = root;
        for &byte in &word.bytes[byte_start..] {
            match state.transition(patterns, byte) {
                Some(next) => state = next,
                None => break,
            }

            let mut offset = 0;
            for (distance, level) in state.levels() {
                offset += distance;
                let Some(&Some(boundary)) = word.byte_to_char.get(byte_start + offset) else {
                    continue;
                };
                if boundary < 2 || boundary + 2 > char_count {
                    continue;
                }
                if level > scores[boundary] {
                    scores[boundary] = level;
                }
            }
        }
    }

    collect_break_indexes(cps.len(), &scores, config)
}

fn collect_break_indexes(cp_count: usize, scores: &[u8], config: &WordConfig) -> Vec<usize> {
    if cp_count < 2 {
        return Vec::new();
    }
    (1..cp_count)
        .filter(|&idx| idx >= config.min_prefix && cp_count - idx >= config.min_suffix)
        .filter(|&idx| scores.get(idx + 1).is_some_and(|score| score & 1 == 1))
        .collect()
}
