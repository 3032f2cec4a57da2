#![forbid(unsafe_code)]

//! Coarse script detection for picking a shaping path.
//!
//! The layout engine does not need full UAX #24 script runs. It needs to
//! know whether a word should go through the Arabic shaper, the Thai
//! cluster builder, CJK per-character breaking, or the default Latin path.
//! Block-range checks are enough for that.
//!
//! # Example
//!
//! ```
//! use papyrix_text::script::{Script, ShapingPath, classify};
//!
//! assert_eq!(classify("na\u{ef}ve"), Script::Latin);
//! assert_eq!(classify("\u{0E01}\u{0E32}"), Script::Thai);
//! assert_eq!(ShapingPath::for_text("abc \u{0628}"), ShapingPath::Arabic);
//! ```

use crate::thai;

pub use crate::thai::is_thai_codepoint;

// ---------------------------------------------------------------------------
// Script enum
// ---------------------------------------------------------------------------

/// Script of a word, as far as layout cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    /// Latin, Greek, Cyrillic, and plain ASCII.
    Latin,
    /// Han, Kana, Hangul, and fullwidth forms.
    Cjk,
    Thai,
    Arabic,
    #[default]
    Other,
}

impl Script {
    /// Shaping path for text of this script.
    #[must_use]
    pub const fn shaping_path(self) -> ShapingPath {
        match self {
            Self::Arabic => ShapingPath::Arabic,
            Self::Thai => ShapingPath::Thai,
            Self::Latin | Self::Cjk | Self::Other => ShapingPath::Default,
        }
    }
}

// ---------------------------------------------------------------------------
// Codepoint predicates
// ---------------------------------------------------------------------------

#[must_use]
pub const fn is_cjk_codepoint(cp: u32) -> bool {
    matches!(
        cp,
        0x4E00..=0x9FFF     // CJK Unified Ideographs
            | 0x3400..=0x4DBF   // Extension A
            | 0xF900..=0xFAFF   // Compatibility Ideographs
            | 0x3040..=0x309F   // Hiragana
            | 0x30A0..=0x30FF   // Katakana
            | 0xAC00..=0xD7AF   // Hangul Syllables
            | 0x20000..=0x2A6DF // Extension B
            | 0xFF00..=0xFFEF // Halfwidth and Fullwidth Forms
    )
}

/// Arabic, Arabic Supplement, and both presentation-form blocks.
#[must_use]
pub const fn is_arabic_codepoint(cp: u32) -> bool {
    matches!(
        cp,
        0x0600..=0x06FF | 0x0750..=0x077F | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF
    )
}

const fn is_latin_like(cp: u32) -> bool {
    matches!(
        cp,
        0x0080..=0x024F | 0x1E00..=0x1EFF | 0x0400..=0x04FF | 0x0370..=0x03FF
    )
}

// ---------------------------------------------------------------------------
// Text-level queries
// ---------------------------------------------------------------------------

/// Classify a word by its first non-ASCII character.
///
/// All-ASCII words are Latin; empty input is `Other`.
#[must_use]
pub fn classify(word: &str) -> Script {
    if word.is_empty() {
        return Script::Other;
    }
    let Some(cp) = word.chars().map(u32::from).find(|&cp| cp >= 0x80) else {
        return Script::Latin;
    };
    if is_thai_codepoint(cp) {
        Script::Thai
    } else if is_arabic_codepoint(cp) {
        Script::Arabic
    } else if is_cjk_codepoint(cp) {
        Script::Cjk
    } else if is_latin_like(cp) {
        Script::Latin
    } else {
        Script::Other
    }
}

#[must_use]
pub fn contains_thai(text: &str) -> bool {
    thai::contains_thai(text)
}

#[must_use]
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| is_arabic_codepoint(u32::from(c)))
}

#[must_use]
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| is_cjk_codepoint(u32::from(c)))
}

// ---------------------------------------------------------------------------
// ShapingPath
// ---------------------------------------------------------------------------

/// Which shaper a run of text goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapingPath {
    /// [`crate::arabic::shape_text`] then left-to-right drawing.
    Arabic,
    /// [`crate::thai::ClusterBuilder`] for mark stacking.
    Thai,
    /// One glyph per codepoint.
    Default,
}

impl ShapingPath {
    /// Arabic wins over Thai when a run mixes both, since it also needs
    /// reordering.
    #[must_use]
    pub fn for_text(text: &str) -> Self {
        let path = if contains_arabic(text) {
            Self::Arabic
        } else if contains_thai(text) {
            Self::Thai
        } else {
            Self::Default
        };
        tracing::trace!(bytes = text.len(), ?path, "shaping path selected");
        path
    }
}
