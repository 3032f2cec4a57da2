#![forbid(unsafe_code)]

//! Multi-script text core for the Papyrix e-ink reader.
//!
//! # Role in Papyrix
//! `papyrix-text` sits between the book parsers (which hand over plain UTF-8
//! paragraphs) and the page renderer (which places glyphs on the panel). It
//! owns everything that depends on *what script* the text is written in.
//!
//! # Primary responsibilities
//! - **Hyphenation**: Liang pattern search over compiled-in packed tries
//!   for en/fr/de/ru/es/it/uk, explicit hyphen detection, and fallback breaks.
//! - **Arabic**: Lam-Alef ligatures, contextual form selection, and a
//!   simplified RTL-base bidi reordering into visual order.
//! - **Thai**: cluster assembly with per-mark pixel offsets and
//!   cluster-aligned word segmentation.
//! - **Codepoint utilities**: lenient UTF-8 decoding and table-driven NFC
//!   composition shared by all of the above.
//!
//! # How it fits in the system
//! The layout engine classifies each word with [`script::classify`], asks
//! [`hyphenation::Hyphenator`] for break candidates while line breaking, and
//! routes Arabic and Thai runs through [`arabic::shape_text`] and
//! [`thai::build_clusters`]. None of the calls perform I/O or block; the
//! only process-wide state is the optional active hyphenation language.
//!
//! # Example
//!
//! ```
//! use papyrix_text::hyphenation::Hyphenator;
//!
//! let hyphenator = Hyphenator::for_language("en-US");
//! let breaks = hyphenator.break_offsets("self-aware", false);
//! assert_eq!(breaks.len(), 1);
//! assert_eq!(breaks[0].byte_offset, 5);
//! assert!(!breaks[0].requires_inserted_hyphen);
//! ```

pub mod arabic;
pub mod config;
pub mod hyphenation;
pub mod nfc;
pub mod script;
pub mod thai;
pub mod utf8;

pub use config::{ConfigError, HyphenationConfig, TextConfig, ThaiMetrics};
pub use hyphenation::{BreakInfo, Hyphenator};
pub use script::{Script, ShapingPath};
pub use utf8::Codepoint;
