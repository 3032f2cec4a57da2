#![forbid(unsafe_code)]

//! Compiled-in languages and lookup by language tag.

use super::automaton::SerializedPatterns;
use super::common::{
    is_cyrillic_letter, is_latin_letter, to_lower_cyrillic, to_lower_latin,
};
use super::liang::{self, DEFAULT_MIN_PREFIX, DEFAULT_MIN_SUFFIX, WordConfig};
use crate::utf8::Codepoint;

/// Pattern trie bound to one language's alphabet and break margins.
#[derive(Debug, Clone, Copy)]
pub struct LanguageHyphenator {
    language: &'static str,
    patterns: SerializedPatterns<'static>,
    config: WordConfig,
}

impl LanguageHyphenator {
    #[must_use]
    pub const fn new(
        language: &'static str,
        patterns: SerializedPatterns<'static>,
        config: WordConfig,
    ) -> Self {
        Self {
            language,
            patterns,
            config,
        }
    }

    /// Primary language tag (`"en"`, `"ru"`, ...).
    #[inline]
    #[must_use]
    pub const fn language(&self) -> &'static str {
        self.language
    }

    #[inline]
    #[must_use]
    pub const fn patterns(&self) -> &SerializedPatterns<'static> {
        &self.patterns
    }

    #[inline]
    #[must_use]
    pub const fn min_prefix(&self) -> usize {
        self.config.min_prefix
    }

    #[inline]
    #[must_use]
    pub const fn min_suffix(&self) -> usize {
        self.config.min_suffix
    }

    /// Copy of this hyphenator with different break margins.
    #[must_use]
    pub const fn with_margins(mut self, min_prefix: usize, min_suffix: usize) -> Self {
        self.config.min_prefix = min_prefix;
        self.config.min_suffix = min_suffix;
        self
    }

    /// Pattern-based break indexes for an already trimmed word.
    #[must_use]
    pub fn break_indexes(&self, cps: &[Codepoint]) -> Vec<usize> {
        liang::break_indexes(cps, &self.patterns, &self.config)
    }
}

/// A registry row: the name used on the command line / in settings, the
/// primary tag, and the hyphenator.
#[derive(Debug, Clone, Copy)]
pub struct LanguageEntry {
    pub cli_name: &'static str,
    pub primary_tag: &'static str,
    pub hyphenator: &'static LanguageHyphenator,
}

// ---------------------------------------------------------------------------
// Compiled-in tries
// ---------------------------------------------------------------------------

const fn trie(blob: &'static [u8]) -> SerializedPatterns<'static> {
    match SerializedPatterns::from_prefixed(blob) {
        Ok(patterns) => patterns,
        Err(_) => panic!("malformed compiled-in hyphenation trie"),
    }
}

const LATIN: WordConfig = WordConfig::new(
    is_latin_letter,
    to_lower_latin,
    DEFAULT_MIN_PREFIX,
    DEFAULT_MIN_SUFFIX,
);
const CYRILLIC: WordConfig = WordConfig::new(
    is_cyrillic_letter,
    to_lower_cyrillic,
    DEFAULT_MIN_PREFIX,
    DEFAULT_MIN_SUFFIX,
);

static ENGLISH: LanguageHyphenator = LanguageHyphenator::new(
    "en",
    trie(include_bytes!("../../tries/en.bin")),
    WordConfig::new(is_latin_letter, to_lower_latin, 3, 3),
);
static FRENCH: LanguageHyphenator =
    LanguageHyphenator::new("fr", trie(include_bytes!("../../tries/fr.bin")), LATIN);
static GERMAN: LanguageHyphenator =
    LanguageHyphenator::new("de", trie(include_bytes!("../../tries/de.bin")), LATIN);
static RUSSIAN: LanguageHyphenator =
    LanguageHyphenator::new("ru", trie(include_bytes!("../../tries/ru.bin")), CYRILLIC);
static SPANISH: LanguageHyphenator =
    LanguageHyphenator::new("es", trie(include_bytes!("../../tries/es.bin")), LATIN);
static ITALIAN: LanguageHyphenator =
    LanguageHyphenator::new("it", trie(include_bytes!("../../tries/it.bin")), LATIN);
static UKRAINIAN: LanguageHyphenator =
    LanguageHyphenator::new("uk", trie(include_bytes!("../../tries/uk.bin")), CYRILLIC);

static ENTRIES: [LanguageEntry; 7] = [
    LanguageEntry {
        cli_name: "english",
        primary_tag: "en",
        hyphenator: &ENGLISH,
    },
    LanguageEntry {
        cli_name: "french",
        primary_tag: "fr",
        hyphenator: &FRENCH,
    },
    LanguageEntry {
        cli_name: "german",
        primary_tag: "de",
        hyphenator: &GERMAN,
    },
    LanguageEntry {
        cli_name: "russian",
        primary_tag: "ru",
        hyphenator: &RUSSIAN,
    },
    LanguageEntry {
        cli_name: "spanish",
        primary_tag: "es",
        hyphenator: &SPANISH,
    },
    LanguageEntry {
        cli_name: "italian",
        primary_tag: "it",
        hyphenator: &ITALIAN,
    },
    LanguageEntry {
        cli_name: "ukrainian",
        primary_tag: "uk",
        hyphenator: &UKRAINIAN,
    },
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// All supported languages, in display order.
#[must_use]
pub fn language_entries() -> &'static [LanguageEntry] {
    &ENTRIES
}

/// Exact lookup by lowercase primary tag.
#[must_use]
pub fn hyphenator_for_primary_tag(tag: &str) -> Option<&'static LanguageHyphenator> {
    ENTRIES
        .iter()
        .find(|entry| entry.primary_tag == tag)
        .map(|entry| entry.hyphenator)
}

/// Lookup by settings / CLI name (`"english"`).
#[must_use]
pub fn entry_for_cli_name(name: &str) -> Option<&'static LanguageEntry> {
    ENTRIES
        .iter()
        .find(|entry| entry.cli_name.eq_ignore_ascii_case(name))
}

/// Lowercased primary subtag of a BCP 47-ish tag: `"en-US"` → `"en"`,
/// `"PT_br"` → `"pt"`. `None` for an empty primary subtag.
#[must_use]
pub fn primary_tag(language: &str) -> Option<String> {
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    (!primary.is_empty()).then_some(primary)
}

/// Resolve a full language tag to its hyphenator.
#[must_use]
pub fn hyphenator_for_language(language: &str) -> Option<&'static LanguageHyphenator> {
    hyphenator_for_primary_tag(&primary_tag(language)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_all_languages() {
        let tags: Vec<_> = language_entries().iter().map(|e| e.primary_tag).collect();
        assert_eq!(tags, ["en", "fr", "de", "ru", "es", "it", "uk"]);
        for entry in language_entries() {
            assert_eq!(entry.hyphenator.language(), entry.primary_tag);
            assert!(entry.hyphenator.patterns().root().is_some(), "{}", entry.cli_name);
        }
    }

    #[test]
    fn english_uses_wider_margins() {
        let en = hyphenator_for_primary_tag("en").unwrap();
        assert_eq!((en.min_prefix(), en.min_suffix()), (3, 3));
        let de = hyphenator_for_primary_tag("de").unwrap();
        assert_eq!((de.min_prefix(), de.min_suffix()), (2, 2));
    }

    #[test]
    fn primary_tag_parsing() {
        assert_eq!(primary_tag("en-US").as_deref(), Some("en"));
        assert_eq!(primary_tag("EN").as_deref(), Some("en"));
        assert_eq!(primary_tag("pt_BR").as_deref(), Some("pt"));
        assert_eq!(primary_tag(""), None);
        assert_eq!(primary_tag("-US"), None);
    }

    #[test]
    fn lookup_by_tag_and_name() {
        assert!(hyphenator_for_language("en-GB").is_some());
        assert!(hyphenator_for_language("Ru").is_some());
        assert!(hyphenator_for_language("xx").is_none());
        assert!(hyphenator_for_language("").is_none());
        assert_eq!(entry_for_cli_name("German").map(|e| e.primary_tag), Some("de"));
        assert!(entry_for_cli_name("klingon").is_none());
    }

    #[test]
    fn with_margins_leaves_registry_untouched() {
        let en = hyphenator_for_primary_tag("en").unwrap();
        let loose = en.with_margins(1, 1);
        assert_eq!(loose.min_prefix(), 1);
        assert_eq!(en.min_prefix(), 3);
    }
}
