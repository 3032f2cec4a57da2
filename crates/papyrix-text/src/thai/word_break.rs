#![forbid(unsafe_code)]

//! Break opportunities for Thai text, which has no spaces between words.
//!
//! Without a dictionary the safest unit is the orthographic cluster: a line
//! may break before any cluster but never inside one, so marks are never
//! separated from their consonant.

use super::character::{ThaiCharType, is_thai_codepoint, thai_char_type};

/// Upper bound on a single segment, in bytes.
pub const MAX_SEGMENT_BYTES: usize = 512;

#[inline]
const fn is_segment_space(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t')
}

/// Byte offset just past the cluster that starts at `start`.
///
/// - A non-Thai character is a cluster by itself.
/// - A leading vowel takes the consonant after it.
/// - Combining marks are then absorbed, and a follow vowel is absorbed and
///   ends the cluster.
///
/// Returns `start` at the end of `text`, and `text.len()` past it. An offset
/// inside a character is moved forward to the next character first.
#[must_use]
pub fn next_cluster_boundary(text: &str, start: usize) -> usize {
    if start >= text.len() {
        return start.min(text.len());
    }
    let mut start = start;
    while !text.is_char_boundary(start) {
        start += 1;
    }

    let mut chars = text[start..].chars().peekable();
    let Some(first) = chars.next() else {
        return start;
    };
    let mut end = start + first.len_utf8();
    let first = u32::from(first);
    if !is_thai_codepoint(first) {
        return end;
    }

    if thai_char_type(first) == ThaiCharType::LeadingVowel
        && let Some(&next) = chars.peek()
        && thai_char_type(u32::from(next)) == ThaiCharType::Consonant
    {
        end += next.len_utf8();
        chars.next();
    }

    for ch in chars {
        match thai_char_type(u32::from(ch)) {
            t if t.is_combining() => end += ch.len_utf8(),
            ThaiCharType::FollowVowel => {
                end += ch.len_utf8();
                break;
            }
            _ => break,
        }
    }
    end
}

/// Split `text` into line-break units.
///
/// Each run of spaces, tabs, and newlines is one segment, and everything
/// else is cut into clusters. Concatenating the result gives back `text`.
#[must_use]
pub fn segment_words(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let natural_end = if is_segment_space(bytes[pos]) {
            pos + bytes[pos..]
                .iter()
                .take_while(|&&b| is_segment_space(b))
                .count()
        } else {
            next_cluster_boundary(text, pos)
        };

        let mut end = natural_end;
        if end - pos > MAX_SEGMENT_BYTES {
            end = pos + MAX_SEGMENT_BYTES;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            tracing::debug!(
                offset = pos,
                natural_len = natural_end - pos,
                flushed_len = end - pos,
                "segment flushed early"
            );
        }

        segments.push(&text[pos..end]);
        pos = end;
    }

    tracing::trace!(bytes = text.len(), segments = segments.len(), "thai text segmented");
    segments
}
