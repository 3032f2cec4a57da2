#![forbid(unsafe_code)]

//! Thai cluster building: grouping and mark placement.
//!
//! A cluster is at most one of each slot:
//!
//! ```text
//!            [tone / thanthakhat]
//!            [above vowel]
//! [leading]  [consonant]          [follow]
//!            [below vowel]
//! ```
//!
//! A second occupant for any slot starts a new cluster. A leading vowel
//! only ever opens a cluster, and a follow vowel closes one.

use std::sync::LazyLock;

use smallvec::SmallVec;

use super::character::{ThaiCharType, is_thai_codepoint, thai_char_type};
use crate::config::ThaiMetrics;

/// One glyph of a cluster, offset from the pen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedGlyph {
    pub codepoint: u32,
    pub x_offset: i8,
    pub y_offset: i8,
    /// Drawn without moving the pen (stacked marks).
    pub zero_advance: bool,
}

impl PositionedGlyph {
    #[inline]
    #[must_use]
    pub const fn advancing(codepoint: u32) -> Self {
        Self {
            codepoint,
            x_offset: 0,
            y_offset: 0,
            zero_advance: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn stacked(codepoint: u32, x_offset: i8, y_offset: i8) -> Self {
        Self {
            codepoint,
            x_offset,
            y_offset,
            zero_advance: true,
        }
    }
}

/// Glyphs in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThaiCluster {
    pub glyphs: SmallVec<[PositionedGlyph; 4]>,
}

impl ThaiCluster {
    fn single(codepoint: u32) -> Self {
        let mut glyphs = SmallVec::new();
        glyphs.push(PositionedGlyph::advancing(codepoint));
        Self { glyphs }
    }

    /// Number of glyphs that move the pen.
    #[must_use]
    pub fn advance_count(&self) -> usize {
        self.glyphs.iter().filter(|g| !g.zero_advance).count()
    }

    pub fn codepoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.glyphs.iter().map(|g| g.codepoint)
    }
}

#[derive(Default)]
struct Slots {
    leading: Option<u32>,
    base: Option<u32>,
    above: Option<u32>,
    below: Option<u32>,
    tone: Option<u32>,
    thanthakhat: Option<u32>,
    follow: Option<u32>,
}

/// Fill an empty slot. `false` means it is taken and the cluster ends.
fn fill(slot: &mut Option<u32>, cp: u32) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(cp);
    true
}

/// Builds positioned clusters for one font's metrics.
#[derive(Debug, Clone, Default)]
pub struct ClusterBuilder {
    metrics: ThaiMetrics,
}

impl ClusterBuilder {
    #[must_use]
    pub fn new(metrics: ThaiMetrics) -> Self {
        Self { metrics }
    }

    #[must_use]
    pub fn metrics(&self) -> &ThaiMetrics {
        &self.metrics
    }

    /// Consonant with a tall stroke that above marks must clear.
    #[must_use]
    pub fn is_ascender(&self, cp: u32) -> bool {
        self.metrics.ascenders.contains(&cp)
    }

    /// Consonant that reaches below the baseline.
    #[must_use]
    pub fn is_descender(&self, cp: u32) -> bool {
        self.metrics.descenders.contains(&cp)
    }

    /// Split `text` into clusters.
    #[must_use]
    pub fn build_clusters(&self, text: &str) -> Vec<ThaiCluster> {
        let mut clusters = Vec::new();
        let mut pos = 0;
        while let Some((cluster, next)) = self.next_cluster(text, pos) {
            clusters.push(cluster);
            pos = next;
        }
        tracing::trace!(bytes = text.len(), clusters = clusters.len(), "thai clusters built");
        clusters
    }

    /// Cluster starting at byte `start` and the offset just past it, or
    /// `None` at the end of `text` (or if `start` is not a char boundary).
    #[must_use]
    pub fn next_cluster(&self, text: &str, start: usize) -> Option<(ThaiCluster, usize)> {
        let rest = text.get(start..)?;
        let mut chars = rest.char_indices().peekable();
        let &(_, first) = chars.peek()?;
        if !is_thai_codepoint(u32::from(first)) {
            return Some((ThaiCluster::single(u32::from(first)), start + first.len_utf8()));
        }

        let mut slots = Slots::default();
        let mut end = start;
        while let Some(&(offset, ch)) = chars.peek() {
            let cp = u32::from(ch);
            let (taken, closes) = match thai_char_type(cp) {
                ThaiCharType::LeadingVowel => (end == start && fill(&mut slots.leading, cp), false),
                ThaiCharType::Consonant => (fill(&mut slots.base, cp), false),
                ThaiCharType::AboveVowel => (fill(&mut slots.above, cp), false),
                ThaiCharType::BelowVowel => (fill(&mut slots.below, cp), false),
                ThaiCharType::ToneMark => (fill(&mut slots.tone, cp), false),
                ThaiCharType::Nikhahit | ThaiCharType::Yamakkan => {
                    (fill(&mut slots.thanthakhat, cp), false)
                }
                ThaiCharType::FollowVowel => (fill(&mut slots.follow, cp), true),
                ThaiCharType::Digit | ThaiCharType::Symbol => {
                    if end == start {
                        return Some((ThaiCluster::single(cp), start + ch.len_utf8()));
                    }
                    (false, true)
                }
                ThaiCharType::NonThai => (false, true),
            };
            if !taken {
                break;
            }
            end = start + offset + ch.len_utf8();
            chars.next();
            if closes {
                break;
            }
        }

        Some((self.position(&slots), end))
    }

    fn position(&self, slots: &Slots) -> ThaiCluster {
        let m = &self.metrics;
        let mut glyphs: SmallVec<[PositionedGlyph; 4]> = SmallVec::new();
        glyphs.extend(slots.leading.map(PositionedGlyph::advancing));

        if let Some(base) = slots.base {
            glyphs.push(PositionedGlyph::advancing(base));
            let x_shift = if self.is_ascender(base) {
                m.ascender_x_shift
            } else {
                0
            };

            if let Some(above) = slots.above {
                glyphs.push(PositionedGlyph::stacked(above, x_shift, m.above_vowel));
            }
            if let Some(below) = slots.below {
                glyphs.push(PositionedGlyph::stacked(below, 0, m.below_vowel));
            }
            if let Some(tone) = slots.tone {
                let y = if slots.above.is_some() {
                    m.tone_mark
                } else {
                    m.tone_mark_alone
                };
                glyphs.push(PositionedGlyph::stacked(tone, x_shift, y));
            }
            if let Some(mark) = slots.thanthakhat {
                let y = if slots.tone.is_some() {
                    m.tone_mark.saturating_sub(2)
                } else if slots.above.is_some() {
                    m.tone_mark
                } else {
                    m.tone_mark_alone
                };
                glyphs.push(PositionedGlyph::stacked(mark, x_shift, y));
            }
        } else {
            // Marks with nothing to sit on keep their own cell.
            glyphs.extend(
                [slots.above, slots.below, slots.tone, slots.thanthakhat]
                    .into_iter()
                    .flatten()
                    .map(PositionedGlyph::advancing),
            );
        }

        glyphs.extend(slots.follow.map(PositionedGlyph::advancing));
        ThaiCluster { glyphs }
    }
}

static DEFAULT_BUILDER: LazyLock<ClusterBuilder> = LazyLock::new(ClusterBuilder::default);

/// [`ClusterBuilder::build_clusters`] with the default metrics.
#[must_use]
pub fn build_clusters(text: &str) -> Vec<ThaiCluster> {
    DEFAULT_BUILDER.build_clusters(text)
}
