#![forbid(unsafe_code)]

//! Reader-side configuration for the text core.
//!
//! Groups the knobs a reader build may want to tune without recompiling:
//! the hyphenation language and margins, and the pixel offsets used to
//! stack Thai marks for a particular bitmap font.
//!
//! # Loading
//!
//! ```toml
//! # papyrix-text.toml
//! [hyphenation]
//! language = "de-DE"
//! include_fallback = true
//! min_prefix = 3
//!
//! [thai]
//! tone_mark = -5
//! ascender_x_shift = -2
//! ```
//!
//! ```rust,ignore
//! let config = TextConfig::from_toml_file("papyrix-text.toml")?;
//! let hyphenator = Hyphenator::from_config(&config.hyphenation);
//! let builder = ClusterBuilder::new(config.thai.clone());
//! ```
//!
//! # Defaults
//!
//! `TextConfig::default()` selects no hyphenation language and the Thai
//! offsets tuned for the reader's built-in font.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level TextConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct TextConfig {
    pub hyphenation: HyphenationConfig,
    pub thai: ThaiMetrics,
}

impl TextConfig {
    /// Load from a TOML string and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.into_validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string and validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.into_validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check every parameter. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.hyphenation.validate();
        errors.extend(self.thai.validate());
        errors
    }

    /// `self` if [`validate`](Self::validate) finds nothing.
    pub fn into_validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(count = errors.len(), "rejected text config");
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Hyphenation language and margin overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct HyphenationConfig {
    /// Language tag (`"en-US"`). `None` disables pattern hyphenation.
    pub language: Option<String>,
    /// Allow evenly spaced breaks when the patterns find none.
    pub include_fallback: bool,
    /// Override the language's minimum characters before a break.
    pub min_prefix: Option<usize>,
    /// Override the language's minimum characters after a break.
    pub min_suffix: Option<usize>,
}

impl HyphenationConfig {
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.min_prefix == Some(0) {
            errors.push("hyphenation.min_prefix must be > 0".into());
        }
        if self.min_suffix == Some(0) {
            errors.push("hyphenation.min_suffix must be > 0".into());
        }
        if let Some(language) = &self.language
            && language.trim().is_empty()
        {
            errors.push("hyphenation.language must not be blank (omit it instead)".into());
        }
        errors
    }
}

/// Font-dependent placement of Thai marks, in pixels.
///
/// Negative `y` is up. The defaults match the reader's built-in font.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ThaiMetrics {
    /// Above vowels (SARA I, MAI HAN-AKAT, ...).
    pub above_vowel: i8,
    /// Below vowels (SARA U, SARA UU, PHINTHU).
    pub below_vowel: i8,
    /// Tone mark stacked over an above vowel.
    pub tone_mark: i8,
    /// Tone mark directly over the consonant.
    pub tone_mark_alone: i8,
    /// Horizontal nudge for above marks on tall consonants.
    pub ascender_x_shift: i8,
    /// Consonants whose stroke rises above the mark zone.
    pub ascenders: Vec<u32>,
    /// Consonants whose stroke drops below the baseline.
    pub descenders: Vec<u32>,
}

impl Default for ThaiMetrics {
    fn default() -> Self {
        Self {
            above_vowel: -2,
            below_vowel: 3,
            tone_mark: -4,
            tone_mark_alone: -2,
            ascender_x_shift: -1,
            // PO PLA, FO FA, FO FAN, LO CHULA
            ascenders: vec![0x0E1B, 0x0E1D, 0x0E1F, 0x0E2C],
            // DO CHADA, TO PATAK, RU, LU
            descenders: vec![0x0E0E, 0x0E0F, 0x0E24, 0x0E26],
        }
    }
}

impl ThaiMetrics {
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.below_vowel <= 0 {
            errors.push(format!(
                "thai.below_vowel must be > 0, got {}",
                self.below_vowel
            ));
        }
        for (name, value) in [
            ("above_vowel", self.above_vowel),
            ("tone_mark", self.tone_mark),
            ("tone_mark_alone", self.tone_mark_alone),
        ] {
            if value >= 0 {
                errors.push(format!("thai.{name} must be < 0, got {value}"));
            }
        }
        if self.tone_mark >= self.above_vowel {
            errors.push(format!(
                "thai.tone_mark ({}) must sit above thai.above_vowel ({})",
                self.tone_mark, self.above_vowel
            ));
        }
        if let Some(cp) = self
            .ascenders
            .iter()
            .chain(&self.descenders)
            .find(|&&cp| !(0x0E01..=0x0E2E).contains(&cp))
        {
            errors.push(format!("thai consonant list contains U+{cp:04X}, not a Thai consonant"));
        }
        errors
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a [`TextConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Parsed, but out of range.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
