#![forbid(unsafe_code)]

//! Lenient UTF-8 decoding and encoding over raw byte buffers.
//!
//! Book text arrives from parsers that do not always validate their input, so
//! every decoder here is total: malformed sequences decode to U+FFFD and the
//! scan continues with the remaining bytes. Nothing in this module panics or
//! reads past the end of its buffer.
//!
//! # Replacement policy
//!
//! | Input                                   | Result  | Bytes consumed              |
//! |-----------------------------------------|---------|-----------------------------|
//! | Lead byte `0x80..=0xBF` or `0xF8..=0xFF`| U+FFFD  | 1                           |
//! | Missing / bad continuation at index `i` | U+FFFD  | `i` (the bytes examined)    |
//! | Well-formed sequence                    | scalar  | sequence length             |
//!
//! Overlong forms and surrogates are not rejected; callers that care about
//! scalar validity work on `&str` instead.

/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT: u32 = 0xFFFD;

/// A decoded codepoint together with its byte offset in the owning buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codepoint {
    /// Unicode scalar (or U+FFFD for malformed input).
    pub value: u32,
    /// Offset of the first byte of this codepoint in the source buffer.
    pub byte_offset: usize,
}

impl Codepoint {
    /// Create a codepoint record.
    #[inline]
    #[must_use]
    pub const fn new(value: u32, byte_offset: usize) -> Self {
        Self { value, byte_offset }
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode one codepoint starting at `pos`.
///
/// Returns `(codepoint, next_pos)`, or `None` when `pos` is at or past the
/// end of `bytes`. `next_pos` is always strictly greater than `pos`.
#[must_use]
pub fn decode_next(bytes: &[u8], pos: usize) -> Option<(u32, usize)> {
    let lead = *bytes.get(pos)?;
    let (len, mut cp) = match lead {
        0x00..=0x7F => return Some((u32::from(lead), pos + 1)),
        0xC0..=0xDF => (2, u32::from(lead & 0x1F)),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
        0xF0..=0xF7 => (4, u32::from(lead & 0x07)),
        _ => return Some((REPLACEMENT, pos + 1)),
    };

    for i in 1..len {
        match bytes.get(pos + i) {
            Some(&cont) if cont & 0xC0 == 0x80 => cp = (cp << 6) | u32::from(cont & 0x3F),
            _ => return Some((REPLACEMENT, pos + i)),
        }
    }
    Some((cp, pos + len))
}

/// Iterator over the codepoints of a byte buffer. See [`codepoints`].
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Iterator for Codepoints<'_> {
    type Item = Codepoint;

    #[inline]
    fn next(&mut self) -> Option<Codepoint> {
        let start = self.pos;
        let (value, next) = decode_next(self.bytes, start)?;
        self.pos = next;
        Some(Codepoint::new(value, start))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len().saturating_sub(self.pos);
        (remaining.div_ceil(4), Some(remaining))
    }
}

/// Decode every codepoint in `bytes`, applying the replacement policy.
#[must_use]
pub fn codepoints(bytes: &[u8]) -> Codepoints<'_> {
    Codepoints { bytes, pos: 0 }
}

/// Decode `bytes` into bare codepoint values.
#[must_use]
pub fn decode_all(bytes: &[u8]) -> Vec<u32> {
    codepoints(bytes).map(|c| c.value).collect()
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Append the UTF-8 encoding of `cp` to `out`, returning the bytes written.
///
/// Values above U+10FFFF are encoded with the 4-byte pattern after masking,
/// mirroring how the pattern tries were built; they never occur for `char`
/// input.
pub fn encode(cp: u32, out: &mut Vec<u8>) -> usize {
    if cp <= 0x7F {
        out.push(cp as u8);
        1
    } else if cp <= 0x7FF {
        out.push(0xC0 | ((cp >> 6) & 0x1F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
        2
    } else if cp <= 0xFFFF {
        out.push(0xE0 | ((cp >> 12) & 0x0F) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
        3
    } else {
        out.push(0xF0 | ((cp >> 18) & 0x07) as u8);
        out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
        4
    }
}

/// Encoded length of `cp` in bytes.
#[inline]
#[must_use]
pub const fn encoded_len(cp: u32) -> usize {
    if cp <= 0x7F {
        1
    } else if cp <= 0x7FF {
        2
    } else if cp <= 0xFFFF {
        3
    } else {
        4
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Whether `cp` falls in one of the generic combining-diacritic blocks.
///
/// Covers Combining Diacritical Marks, its Supplement, the marks for
/// symbols, and the half marks. Script-specific marks (Arabic harakat, Thai
/// vowels) are classified by their own modules.
#[inline]
#[must_use]
pub const fn is_combining_mark(cp: u32) -> bool {
    matches!(cp, 0x0300..=0x036F | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF | 0xFE20..=0xFE2F)
}

// ---------------------------------------------------------------------------
// Truncation helpers
// ---------------------------------------------------------------------------

/// Remove the last character of `s`, returning the new byte length.
///
/// An empty string is left untouched.
pub fn remove_last_char(s: &mut String) -> usize {
    s.pop();
    s.len()
}

/// Remove up to `count` characters from the end of `s`.
pub fn truncate_chars(s: &mut String, count: usize) {
    for _ in 0..count {
        if s.pop().is_none() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // decode_next
    // =========================================================================

    #[test]
    fn decodes_ascii_and_multibyte() {
        let text = "a\u{e9}\u{0E01}\u{1F600}";
        let cps: Vec<_> = codepoints(text.as_bytes()).collect();
        assert_eq!(
            cps,
            vec![
                Codepoint::new(0x61, 0),
                Codepoint::new(0xE9, 1),
                Codepoint::new(0x0E01, 3),
                Codepoint::new(0x1F600, 6),
            ]
        );
    }

    #[test]
    fn invalid_lead_byte_is_replaced_and_skipped() {
        assert_eq!(decode_all(&[0x80, b'a']), vec![REPLACEMENT, 0x61]);
        assert_eq!(decode_all(&[0xFF, 0xFE]), vec![REPLACEMENT, REPLACEMENT]);
    }

    #[test]
    fn bad_continuation_consumes_examined_bytes() {
        // 3-byte lead, one good continuation, then ASCII.
        let bytes = [0xE0, 0xB8, b'x'];
        assert_eq!(decode_next(&bytes, 0), Some((REPLACEMENT, 2)));
        assert_eq!(decode_all(&bytes), vec![REPLACEMENT, u32::from(b'x')]);
    }

    #[test]
    fn truncated_sequence_at_end() {
        let bytes = [b'a', 0xD8];
        assert_eq!(decode_all(&bytes), vec![0x61, REPLACEMENT]);
    }

    #[test]
    fn past_end_is_none() {
        assert_eq!(decode_next(b"ab", 2), None);
        assert_eq!(decode_next(b"", 0), None);
    }

    // =========================================================================
    // encode
    // =========================================================================

    #[test]
    fn encode_matches_std() {
        for ch in ['a', '\u{e9}', '\u{0644}', '\u{0E48}', '\u{FEFB}', '\u{1F600}'] {
            let mut out = Vec::new();
            let n = encode(ch as u32, &mut out);
            let mut buf = [0u8; 4];
            assert_eq!(out, ch.encode_utf8(&mut buf).as_bytes(), "{ch:?}");
            assert_eq!(n, ch.len_utf8());
            assert_eq!(encoded_len(ch as u32), n);
        }
    }

    // =========================================================================
    // classification and truncation
    // =========================================================================

    #[test]
    fn combining_mark_ranges() {
        assert!(is_combining_mark(0x0301));
        assert!(is_combining_mark(0x1DC0));
        assert!(is_combining_mark(0x20D7));
        assert!(is_combining_mark(0xFE2F));
        assert!(!is_combining_mark(0x0370));
        assert!(!is_combining_mark(u32::from(b'a')));
        assert!(!is_combining_mark(0x064B));
    }

    #[test]
    fn remove_last_char_is_char_safe() {
        let mut s = String::from("caf\u{e9}");
        assert_eq!(remove_last_char(&mut s), 3);
        assert_eq!(s, "caf");

        let mut empty = String::new();
        assert_eq!(remove_last_char(&mut empty), 0);
    }

    #[test]
    fn truncate_chars_stops_at_empty() {
        let mut s = String::from("\u{0E01}\u{0E32}ab");
        truncate_chars(&mut s, 2);
        assert_eq!(s, "\u{0E01}\u{0E32}");
        truncate_chars(&mut s, 10);
        assert!(s.is_empty());
    }
}
