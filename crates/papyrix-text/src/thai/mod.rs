#![forbid(unsafe_code)]

//! Thai clusters, mark placement, and word segmentation.
//!
//! # Design
//!
//! Thai stores text in the order it is drawn, so no reordering is needed.
//! The work is grouping: vowels and tone marks stack over or under their
//! consonant without advancing the pen, and their vertical placement
//! depends on what else is stacked there. Offsets come from
//! [`ThaiMetrics`](crate::config::ThaiMetrics) because they are a property
//! of the font, not of the script.
//!
//! # Example
//!
//! ```
//! use papyrix_text::thai::{build_clusters, segment_words};
//!
//! // Ko Kai + Sara I: one cluster, the vowel stacked above.
//! let clusters = build_clusters("\u{0E01}\u{0E34}");
//! assert_eq!(clusters.len(), 1);
//! assert!(clusters[0].glyphs[1].zero_advance);
//!
//! assert_eq!(segment_words("\u{0E01} \u{0E32}").len(), 3);
//! ```

mod character;
mod cluster;
mod word_break;

pub use character::{
    ThaiCharType, contains_thai, is_thai_codepoint, is_thai_combining, thai_char_type,
};
pub use cluster::{ClusterBuilder, PositionedGlyph, ThaiCluster, build_clusters};
pub use word_break::{MAX_SEGMENT_BYTES, next_cluster_boundary, segment_words};
