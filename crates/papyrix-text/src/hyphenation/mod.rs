#![forbid(unsafe_code)]

//! Word hyphenation for the line breaker.
//!
//! # Design
//!
//! [`Hyphenator`] is a small `Copy` handle around an optional
//! [`LanguageHyphenator`]. The layout engine builds one per document (from
//! the book's declared language or from [`HyphenationConfig`]) and passes it
//! down explicitly, so concurrent documents never share state.
//!
//! For callers that still want a process-wide setting there is a thin facade
//! ([`set_language`] / [`break_offsets`]) backed by an
//! [`arc_swap::ArcSwapOption`]: reads are wait-free and a language switch is a
//! single atomic store.
//!
//! # Break selection
//!
//! 1. Decode the word, composing decomposed accents.
//! 2. Trim surrounding punctuation and a trailing `[n]` footnote marker.
//! 3. Hyphen-like characters between two letters are explicit breaks. When
//!    present they win: patterns only run on the letter segments between
//!    them, never on the whole word.
//! 4. Otherwise run the language patterns on the whole word.
//! 5. If nothing was found and fallback is requested, allow a break at every
//!    position that respects the minimum prefix and suffix.
//!
//! Offsets always point into the caller's original string, so leading
//! punctuation that was trimmed is still accounted for.
//!
//! # Example
//!
//! ```
//! use papyrix_text::hyphenation::Hyphenator;
//!
//! let en = Hyphenator::for_language("en");
//! assert_eq!(en.hyphenate("extensive", "-"), "exten-sive");
//!
//! let none = Hyphenator::for_language("xx");
//! assert!(none.break_offsets("extensive", false).is_empty());
//! assert_eq!(none.break_offsets("abcde", true).len(), 2);
//! ```

pub mod automaton;
pub mod common;
pub mod liang;
pub mod registry;

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwapOption;

use crate::config::HyphenationConfig;
use crate::utf8::Codepoint;
use common::{
    collect_codepoints, is_alphabetic, is_explicit_hyphen, is_soft_hyphen,
    trim_surrounding_punctuation_and_footnote,
};
use liang::{DEFAULT_MIN_PREFIX, DEFAULT_MIN_SUFFIX};

pub use automaton::{PatternsError, SerializedPatterns};
pub use registry::{
    LanguageEntry, LanguageHyphenator, hyphenator_for_language, hyphenator_for_primary_tag,
    language_entries,
};

// ---------------------------------------------------------------------------
// BreakInfo
// ---------------------------------------------------------------------------

/// A permitted line break inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BreakInfo {
    /// Byte offset into the original word where the second part starts.
    pub byte_offset: usize,
    /// `true` if the renderer must draw a hyphen when breaking here; `false`
    /// when a visible hyphen character already ends the first part.
    pub requires_inserted_hyphen: bool,
}

impl BreakInfo {
    #[inline]
    #[must_use]
    pub const fn new(byte_offset: usize, requires_inserted_hyphen: bool) -> Self {
        Self {
            byte_offset,
            requires_inserted_hyphen,
        }
    }
}

// ---------------------------------------------------------------------------
// Hyphenator
// ---------------------------------------------------------------------------

/// Explicit hyphenation handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyphenator {
    language: Option<LanguageHyphenator>,
    /// Margins for fallback breaks when no language is set.
    fallback_margins: Option<(usize, usize)>,
    include_fallback: bool,
}

impl Hyphenator {
    /// Wrap a language (or none: explicit hyphens and fallback only).
    #[must_use]
    pub fn new(language: Option<&LanguageHyphenator>) -> Self {
        Self {
            language: language.copied(),
            fallback_margins: None,
            include_fallback: false,
        }
    }

    /// Resolve a language tag such as `"en-US"`. Unknown or empty tags give
    /// a handle without patterns.
    #[must_use]
    pub fn for_language(tag: &str) -> Self {
        let language = hyphenator_for_language(tag);
        tracing::debug!(
            tag,
            resolved = language.map(LanguageHyphenator::language),
            "hyphenator resolved"
        );
        Self::new(language)
    }

    /// Build from configuration, applying margin overrides and the
    /// fallback setting used by [`Hyphenator::breaks`].
    ///
    /// Margin overrides apply to the language's patterns when one resolves,
    /// and to fallback breaks either way.
    #[must_use]
    pub fn from_config(config: &HyphenationConfig) -> Self {
        let base = config.language.as_deref().and_then(hyphenator_for_language);
        let language = base.map(|lang| {
            lang.with_margins(
                config.min_prefix.unwrap_or(lang.min_prefix()),
                config.min_suffix.unwrap_or(lang.min_suffix()),
            )
        });
        let fallback_margins = (config.min_prefix.is_some() || config.min_suffix.is_some())
            .then(|| {
                (
                    config.min_prefix.unwrap_or(DEFAULT_MIN_PREFIX),
                    config.min_suffix.unwrap_or(DEFAULT_MIN_SUFFIX),
                )
            });
        let hyphenator = Self {
            language,
            fallback_margins,
            include_fallback: config.include_fallback,
        };
        let (min_prefix, min_suffix) = hyphenator.margins();
        tracing::debug!(
            language = language.as_ref().map(LanguageHyphenator::language),
            min_prefix,
            min_suffix,
            include_fallback = config.include_fallback,
            "hyphenator configured"
        );
        hyphenator
    }

    /// The active language, if any.
    #[inline]
    #[must_use]
    pub fn language(&self) -> Option<&LanguageHyphenator> {
        self.language.as_ref()
    }

    /// `(min_prefix, min_suffix)` used for fallback breaks.
    ///
    /// The language's margins when one is set, else the configured
    /// overrides, else 2/2.
    #[must_use]
    pub fn margins(&self) -> (usize, usize) {
        match (&self.language, self.fallback_margins) {
            (Some(lang), _) => (lang.min_prefix(), lang.min_suffix()),
            (None, Some(margins)) => margins,
            (None, None) => (DEFAULT_MIN_PREFIX, DEFAULT_MIN_SUFFIX),
        }
    }

    /// Whether [`Hyphenator::breaks`] adds fallback breaks.
    #[inline]
    #[must_use]
    pub const fn include_fallback(&self) -> bool {
        self.include_fallback
    }

    /// [`Hyphenator::break_offsets`] with the configured fallback setting.
    #[must_use]
    pub fn breaks(&self, word: &str) -> Vec<BreakInfo> {
        self.break_offsets(word, self.include_fallback)
    }

    /// Break opportunities in `word`, ascending by byte offset, without
    /// duplicates. Never fails: unusable input yields an empty list.
    #[must_use]
    pub fn break_offsets(&self, word: &str, include_fallback: bool) -> Vec<BreakInfo> {
        if word.is_empty() {
            return Vec::new();
        }

        let mut cps = collect_codepoints(word);
        trim_surrounding_punctuation_and_footnote(&mut cps);

        let explicit = explicit_breaks(&cps);
        if !explicit.is_empty() {
            let breaks = match &self.language {
                Some(lang) => merge_segment_breaks(explicit, &cps, lang),
                None => explicit,
            };
            tracing::trace!(
                word_len = word.len(),
                breaks = breaks.len(),
                "explicit hyphen breaks"
            );
            return breaks;
        }

        let mut indexes = self
            .language
            .as_ref()
            .map(|lang| lang.break_indexes(&cps))
            .unwrap_or_default();

        let mut fallback = false;
        if include_fallback && indexes.is_empty() {
            let (min_prefix, min_suffix) = self.margins();
            indexes = (min_prefix.max(1)..)
                .take_while(|idx| idx + min_suffix.max(1) <= cps.len())
                .collect();
            fallback = !indexes.is_empty();
        }

        tracing::trace!(
            word_len = word.len(),
            language = self.language.as_ref().map(LanguageHyphenator::language),
            breaks = indexes.len(),
            fallback,
            "pattern breaks"
        );

        indexes
            .into_iter()
            .map(|idx| BreakInfo::new(byte_offset_for_index(&cps, idx), true))
            .collect()
    }

    /// Render `word` with `marker` at every break that needs an inserted
    /// hyphen. Explicit hyphens are left as they are.
    #[must_use]
    pub fn hyphenate(&self, word: &str, marker: &str) -> String {
        let breaks = self.break_offsets(word, false);
        let mut out = String::with_capacity(word.len() + breaks.len() * marker.len());
        let mut prev = 0;
        for info in breaks.iter().filter(|b| b.requires_inserted_hyphen) {
            out.push_str(&word[prev..info.byte_offset]);
            out.push_str(marker);
            prev = info.byte_offset;
        }
        out.push_str(&word[prev..]);
        out
    }
}

fn byte_offset_for_index(cps: &[Codepoint], index: usize) -> usize {
    cps.get(index)
        .or_else(|| cps.last())
        .map_or(0, |cp| cp.byte_offset)
}

/// One break after every hyphen-like character that sits between letters.
fn explicit_breaks(cps: &[Codepoint]) -> Vec<BreakInfo> {
    cps.windows(3)
        .filter(|w| {
            is_explicit_hyphen(w[1].value) && is_alphabetic(w[0].value) && is_alphabetic(w[2].value)
        })
        .map(|w| BreakInfo::new(w[2].byte_offset, is_soft_hyphen(w[1].value)))
        .collect()
}

/// Add pattern breaks found inside each hyphen-delimited segment.
fn merge_segment_breaks(
    explicit: Vec<BreakInfo>,
    cps: &[Codepoint],
    lang: &LanguageHyphenator,
) -> Vec<BreakInfo> {
    let mut merged = explicit;
    let mut seg_start = 0;
    for i in 0..=cps.len() {
        let at_boundary = cps.get(i).is_none_or(|cp| is_explicit_hyphen(cp.value));
        if !at_boundary {
            continue;
        }
        if i > seg_start {
            merged.extend(
                lang.break_indexes(&cps[seg_start..i])
                    .into_iter()
                    .map(|idx| BreakInfo::new(byte_offset_for_index(cps, seg_start + idx), true)),
            );
        }
        seg_start = i + 1;
    }
    // Stable: an explicit break outranks a pattern break at the same offset.
    merged.sort_by_key(|b| b.byte_offset);
    merged.dedup_by_key(|b| b.byte_offset);
    merged
}

// ---------------------------------------------------------------------------
// Process-wide facade
// ---------------------------------------------------------------------------

static ACTIVE: LazyLock<ArcSwapOption<LanguageHyphenator>> =
    LazyLock::new(|| ArcSwapOption::from(None));

/// Select the process-wide language by tag. Unknown or empty tags clear it.
///
/// Returns whether a language is now active.
pub fn set_language(tag: &str) -> bool {
    let language = hyphenator_for_language(tag);
    ACTIVE.store(language.map(|lang| Arc::new(*lang)));
    tracing::debug!(
        tag,
        resolved = language.map(LanguageHyphenator::language),
        "hyphenation language set"
    );
    language.is_some()
}

/// Primary tag of the process-wide language.
#[must_use]
pub fn active_language() -> Option<&'static str> {
    ACTIVE.load().as_deref().map(LanguageHyphenator::language)
}

/// Snapshot of the process-wide language as an explicit handle.
#[must_use]
pub fn current() -> Hyphenator {
    Hyphenator::new(ACTIVE.load().as_deref())
}

/// [`Hyphenator::break_offsets`] using the process-wide language.
#[must_use]
pub fn break_offsets(word: &str, include_fallback: bool) -> Vec<BreakInfo> {
    current().break_offsets(word, include_fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn offsets(breaks: &[BreakInfo]) -> Vec<usize> {
        breaks.iter().map(|b| b.byte_offset).collect()
    }

    fn en() -> Hyphenator {
        Hyphenator::for_language("en")
    }

    // =========================================================================
    // Pattern breaks
    // =========================================================================

    #[test]
    fn english_patterns() {
        let breaks = en().break_offsets("hyphenation", false);
        assert_eq!(offsets(&breaks), vec![6]);
        assert!(breaks.iter().all(|b| b.requires_inserted_hyphen));

        assert_eq!(offsets(&en().break_offsets("international", false)), vec![5, 7]);
        assert_eq!(offsets(&en().break_offsets("extensive", false)), vec![5]);
        assert_eq!(offsets(&en().break_offsets("computer", false)), vec![3]);
    }

    #[test]
    fn case_and_punctuation_do_not_change_breaks() {
        assert_eq!(offsets(&en().break_offsets("Hyphenation", false)), vec![6]);
        // Leading quote shifts offsets by one byte.
        assert_eq!(offsets(&en().break_offsets("\"hyphenation,\"", false)), vec![7]);
        assert_eq!(offsets(&en().break_offsets("hyphenation[3]", false)), vec![6]);
    }

    #[test]
    fn other_languages() {
        let de = Hyphenator::for_language("de");
        assert_eq!(
            offsets(&de.break_offsets("Donaudampfschifffahrt", false)),
            vec![2, 5, 10, 16]
        );

        let fr = Hyphenator::for_language("fr-CA");
        assert_eq!(offsets(&fr.break_offsets("international", false)), vec![2, 5, 7, 10]);

        // "программирование": every letter is two bytes.
        let ru = Hyphenator::for_language("ru");
        assert_eq!(
            offsets(&ru.break_offsets("\u{043f}\u{0440}\u{043e}\u{0433}\u{0440}\u{0430}\u{043c}\u{043c}\u{0438}\u{0440}\u{043e}\u{0432}\u{0430}\u{043d}\u{0438}\u{0435}", false)),
            vec![6, 14, 18, 22, 26]
        );

        let es = Hyphenator::for_language("es");
        assert_eq!(offsets(&es.break_offsets("biblioteca", false)), vec![2, 6, 8]);
    }

    #[test]
    fn wrong_alphabet_is_rejected() {
        let ru = Hyphenator::for_language("ru");
        assert!(ru.break_offsets("international", false).is_empty());
    }

    // =========================================================================
    // Short and degenerate input
    // =========================================================================

    #[test]
    fn short_words_are_not_split() {
        for word in ["", "a", "go", "the", "12345", "---", "..."] {
            assert!(en().break_offsets(word, false).is_empty(), "{word:?}");
        }
    }

    // =========================================================================
    // Explicit hyphens
    // =========================================================================

    #[test]
    fn soft_hyphen_requires_inserted_hyphen() {
        let breaks = en().break_offsets("auto\u{00AD}matic", false);
        assert_eq!(breaks, vec![BreakInfo::new(6, true)]);
    }

    #[test]
    fn hard_hyphen_needs_no_insertion() {
        let breaks = en().break_offsets("self-aware", false);
        assert_eq!(breaks, vec![BreakInfo::new(5, false)]);
    }

    #[test]
    fn segments_between_hyphens_use_patterns() {
        let breaks = en().break_offsets("extensive-algorithm", false);
        assert_eq!(
            breaks,
            vec![
                BreakInfo::new(5, true),
                BreakInfo::new(10, false),
                BreakInfo::new(14, true),
            ]
        );
    }

    #[test]
    fn explicit_hyphen_without_language() {
        let none = Hyphenator::default();
        let breaks = none.break_offsets("well-known\u{2013}fact", true);
        assert_eq!(breaks, vec![BreakInfo::new(5, false), BreakInfo::new(13, false)]);
    }

    #[test]
    fn hyphen_at_edge_is_not_explicit() {
        // Trailing hyphen is trimmed as punctuation; digits are not letters.
        assert!(en().break_offsets("self-", false).is_empty());
        assert!(en().break_offsets("1-2", false).is_empty());
    }

    // =========================================================================
    // Fallback
    // =========================================================================

    #[test]
    fn fallback_respects_margins() {
        assert!(en().break_offsets("abcde", true).is_empty());
        let breaks = en().break_offsets("abcdefg", true);
        assert_eq!(offsets(&breaks), vec![3, 4]);
        assert!(!en().break_offsets("zzzzzzzzz", true).is_empty());
    }

    #[test]
    fn fallback_without_language_uses_defaults() {
        let none = Hyphenator::default();
        assert_eq!(offsets(&none.break_offsets("abcde", true)), vec![2, 3]);
        assert!(none.break_offsets("abcde", false).is_empty());
    }

    #[test]
    fn fallback_not_used_when_patterns_match() {
        let breaks = en().break_offsets("extensive", true);
        assert_eq!(offsets(&breaks), vec![5]);
    }

    // =========================================================================
    // Configuration and helpers
    // =========================================================================

    #[test]
    fn config_overrides_margins() {
        let config = HyphenationConfig {
            language: Some("en-US".into()),
            include_fallback: true,
            min_prefix: Some(2),
            min_suffix: Some(2),
        };
        let hyphenator = Hyphenator::from_config(&config);
        assert_eq!(hyphenator.margins(), (2, 2));
        assert_eq!(hyphenator.language().map(LanguageHyphenator::language), Some("en"));
        assert!(hyphenator.include_fallback());
    }

    #[test]
    fn config_margins_apply_to_fallback_without_language() {
        let config = HyphenationConfig {
            language: None,
            include_fallback: true,
            min_prefix: Some(4),
            min_suffix: Some(4),
        };
        let hyphenator = Hyphenator::from_config(&config);
        assert!(hyphenator.language().is_none());
        assert_eq!(hyphenator.margins(), (4, 4));
        assert_eq!(offsets(&hyphenator.breaks("abcdefgh")), vec![4]);
        assert_eq!(offsets(&hyphenator.break_offsets("abcdefgh", true)), vec![4]);
        assert!(hyphenator.breaks("abcdefg").is_empty());
    }

    #[test]
    fn partial_margin_override_keeps_other_default() {
        let config = HyphenationConfig {
            min_prefix: Some(3),
            ..HyphenationConfig::default()
        };
        let hyphenator = Hyphenator::from_config(&config);
        assert_eq!(hyphenator.margins(), (3, 2));
    }

    #[test]
    fn breaks_follow_configured_fallback_flag() {
        let mut config = HyphenationConfig::default();
        let off = Hyphenator::from_config(&config);
        assert!(!off.include_fallback());
        assert!(off.breaks("abcde").is_empty());

        config.include_fallback = true;
        let on = Hyphenator::from_config(&config);
        assert_eq!(offsets(&on.breaks("abcde")), vec![2, 3]);

        // Patterns still take precedence over fallback.
        config.language = Some("en".into());
        let en_on = Hyphenator::from_config(&config);
        assert_eq!(offsets(&en_on.breaks("extensive")), vec![5]);
        assert_eq!(offsets(&en_on.breaks("abcdefg")), vec![3, 4]);
    }

    #[test]
    fn hyphenate_renders_markers() {
        assert_eq!(en().hyphenate("international", "\u{00AD}"), "inter\u{00AD}na\u{00AD}tional");
        assert_eq!(en().hyphenate("self-aware", "-"), "self-aware");
        assert_eq!(en().hyphenate("", "-"), "");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let h = en();
        assert_eq!(h.break_offsets("hyphenation", true), h.break_offsets("hyphenation", true));
    }

    // =========================================================================
    // Process-wide facade (single test: the state is shared)
    // =========================================================================

    #[test]
    #[traced_test]
    fn global_language_switching() {
        assert!(set_language("EN"));
        assert_eq!(active_language(), Some("en"));
        assert_eq!(offsets(&break_offsets("hyphenation", false)), vec![6]);
        assert!(logs_contain("hyphenation language set"));

        assert!(set_language("de-AT"));
        assert_eq!(active_language(), Some("de"));
        assert!(!break_offsets("Donaudampfschifffahrt", false).is_empty());

        assert!(!set_language("xx"));
        assert_eq!(active_language(), None);
        assert!(break_offsets("hyphenation", false).is_empty());

        assert!(set_language("en_GB"));
        assert!(!set_language(""));
        assert!(current().language().is_none());
    }
}
