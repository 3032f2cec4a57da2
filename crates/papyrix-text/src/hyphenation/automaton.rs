#![forbid(unsafe_code)]

//! Decoder for the packed hyphenation-pattern trie.
//!
//! The trie is a byte buffer of nodes addressed by offset. Each node is:
//!
//! ```text
//! header      1 byte   bit 7      has level annotations
//!                      bits 5..6  target stride in bytes (0 is read as 1)
//!                      bits 0..4  child count, 31 = "count in next byte"
//! [count]     1 byte   only when the inline count is 31
//! [levels]    2 bytes  only with bit 7: offset = hi << 4 | lo >> 4,
//!                      length = lo & 0x0F
//! transitions count bytes, one input byte per child
//! targets     count * stride bytes, signed big-endian deltas to the child
//! ```
//!
//! Deltas are relative to the address of the node that owns them. Strides 1
//! and 2 are plain two's complement; stride 3 is a big-endian unsigned value
//! biased by 2^23. Level offsets are absolute addresses in the *prefixed*
//! blob (the four root-address bytes included), so they sit four bytes
//! ahead of the same position in [`SerializedPatterns::data`]. Each level
//! byte packs `distance * 10 + level`, with distances cumulative along the
//! node's list.
//!
//! Every read is bounds-checked. A header that claims more bytes than the
//! buffer holds, a level slice outside the buffer, or a delta that lands
//! outside it decodes to `None` and the caller stops walking.

use std::fmt;

/// Size of the big-endian root address that prefixes a serialized trie.
pub const ROOT_PREFIX_LEN: usize = 4;

const HAS_LEVELS: u8 = 0x80;
const STRIDE_SHIFT: u8 = 5;
const STRIDE_MASK: u8 = 0x03;
const COUNT_MASK: u8 = 0x1F;
const COUNT_ESCAPE: usize = 31;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a prefixed trie blob cannot be wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternsError {
    /// Blob is shorter than the four-byte root prefix.
    TooShort { len: usize },
    /// Root address points before the node area or past its end.
    RootOutOfRange { root: usize, len: usize },
}

impl fmt::Display for PatternsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "pattern blob too short: {len} bytes, need at least 5")
            }
            Self::RootOutOfRange { root, len } => {
                write!(f, "root address {root} outside pattern blob of {len} bytes")
            }
        }
    }
}

impl std::error::Error for PatternsError {}

// ---------------------------------------------------------------------------
// SerializedPatterns
// ---------------------------------------------------------------------------

/// A read-only view of one language's pattern trie.
#[derive(Clone, Copy)]
pub struct SerializedPatterns<'a> {
    data: &'a [u8],
    root_offset: usize,
}

impl fmt::Debug for SerializedPatterns<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializedPatterns")
            .field("len", &self.data.len())
            .field("root_offset", &self.root_offset)
            .finish()
    }
}

impl<'a> SerializedPatterns<'a> {
    /// Wrap node data whose root-address prefix has already been stripped.
    #[must_use]
    pub const fn new(data: &'a [u8], root_offset: usize) -> Self {
        Self { data, root_offset }
    }

    /// Wrap a blob that still carries its four-byte big-endian root prefix.
    ///
    /// This is `const` so compiled-in tables are validated at build time.
    pub const fn from_prefixed(blob: &'a [u8]) -> Result<Self, PatternsError> {
        if blob.len() <= ROOT_PREFIX_LEN {
            return Err(PatternsError::TooShort { len: blob.len() });
        }
        let root = u32::from_be_bytes([blob[0], blob[1], blob[2], blob[3]]) as usize;
        let (_, data) = blob.split_at(ROOT_PREFIX_LEN);
        if root < ROOT_PREFIX_LEN || root - ROOT_PREFIX_LEN >= data.len() {
            return Err(PatternsError::RootOutOfRange {
                root,
                len: blob.len(),
            });
        }
        Ok(Self::new(data, root - ROOT_PREFIX_LEN))
    }

    /// Runtime variant of [`from_prefixed`](Self::from_prefixed) that logs
    /// rejected blobs. Use this for tries loaded from outside the binary.
    pub fn parse(blob: &'a [u8]) -> Result<Self, PatternsError> {
        let parsed = Self::from_prefixed(blob);
        match &parsed {
            Ok(patterns) => tracing::debug!(
                len = patterns.data.len(),
                root = patterns.root_offset,
                "pattern trie loaded"
            ),
            Err(err) => tracing::warn!(error = %err, "rejecting pattern trie"),
        }
        parsed
    }

    /// Node bytes (without the root prefix).
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Offset of the root node within [`data`](Self::data).
    #[inline]
    #[must_use]
    pub const fn root_offset(&self) -> usize {
        self.root_offset
    }

    /// Decode the root node.
    #[must_use]
    pub fn root(&self) -> Option<State<'a>> {
        self.state_at(self.root_offset)
    }

    /// Decode the node at `addr`, or `None` if it is out of range or
    /// structurally invalid.
    #[must_use]
    pub fn state_at(&self, addr: usize) -> Option<State<'a>> {
        let data = self.data;
        let node = data.get(addr..).filter(|rest| !rest.is_empty())?;

        let header = node[0];
        let mut pos = 1;
        let stride = match (header >> STRIDE_SHIFT) & STRIDE_MASK {
            0 => 1,
            s => s,
        };
        let mut count = usize::from(header & COUNT_MASK);
        if count == COUNT_ESCAPE {
            count = usize::from(*node.get(pos)?);
            pos += 1;
        }

        let mut levels: &'a [u8] = &[];
        if header & HAS_LEVELS != 0 {
            let hi = *node.get(pos)?;
            let lo = *node.get(pos + 1)?;
            pos += 2;
            let offset = (usize::from(hi) << 4) | usize::from(lo >> 4);
            let len = usize::from(lo & 0x0F);
            let start = offset.checked_sub(ROOT_PREFIX_LEN)?;
            levels = data.get(start..start + len)?;
        }

        let transitions = node.get(pos..pos + count)?;
        pos += count;
        let targets = node.get(pos..pos + count * usize::from(stride))?;

        Some(State {
            addr,
            stride,
            transitions,
            targets,
            levels,
        })
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// One decoded trie node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State<'a> {
    addr: usize,
    stride: u8,
    transitions: &'a [u8],
    targets: &'a [u8],
    levels: &'a [u8],
}

impl<'a> State<'a> {
    /// Address of this node within the node data.
    #[inline]
    #[must_use]
    pub const fn addr(&self) -> usize {
        self.addr
    }

    /// Width of each target delta in bytes (1, 2, or 3).
    #[inline]
    #[must_use]
    pub const fn stride(&self) -> u8 {
        self.stride
    }

    /// Number of outgoing transitions.
    #[inline]
    #[must_use]
    pub const fn child_count(&self) -> usize {
        self.transitions.len()
    }

    /// Input bytes accepted by this node, in stored order.
    #[inline]
    #[must_use]
    pub const fn transitions(&self) -> &'a [u8] {
        self.transitions
    }

    /// Whether the node carries level annotations.
    #[inline]
    #[must_use]
    pub const fn has_levels(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Iterate the `(distance, level)` annotations. Distances are relative to
    /// the previous annotation (the first one to the match start).
    pub fn levels(&self) -> impl Iterator<Item = (usize, u8)> + 'a {
        self.levels
            .iter()
            .map(|&packed| (usize::from(packed / 10), packed % 10))
    }

    /// Follow the transition for `byte`.
    ///
    /// Returns `None` when there is no such child, or when the child address
    /// falls outside the trie or does not decode.
    #[must_use]
    pub fn transition(&self, patterns: &SerializedPatterns<'a>, byte: u8) -> Option<State<'a>> {
        let idx = self.transitions.iter().position(|&b| b == byte)?;
        let stride = usize::from(self.stride);
        let raw = self.targets.get(idx * stride..(idx + 1) * stride)?;
        let delta = decode_delta(raw)?;
        let next = i64::try_from(self.addr).ok()? + i64::from(delta);
        let next = usize::try_from(next).ok()?;
        if next >= patterns.data.len() {
            return None;
        }
        patterns.state_at(next)
    }
}

/// Decode a target delta. The slice length is the stride; anything other
/// than 1, 2, or 3 bytes is rejected.
#[must_use]
pub fn decode_delta(raw: &[u8]) -> Option<i32> {
    match *raw {
        [b] => Some(i32::from(b as i8)),
        [hi, lo] => Some(i32::from(i16::from_be_bytes([hi, lo]))),
        [b0, b1, b2] => {
            let unsigned = (i32::from(b0) << 16) | (i32::from(b1) << 8) | i32::from(b2);
            Some(unsigned - (1 << 23))
        }
        _ => None,
    }
}

/// Encode `delta` with the given stride. Inverse of [`decode_delta`]; used
/// when building tries in tests and tooling.
#[must_use]
pub fn encode_delta(delta: i32, stride: u8) -> Option<Vec<u8>> {
    match stride {
        1 => i8::try_from(delta).ok().map(|d| d.to_be_bytes().to_vec()),
        2 => i16::try_from(delta).ok().map(|d| d.to_be_bytes().to_vec()),
        3 => {
            let biased = delta.checked_add(1 << 23)?;
            if !(0..(1 << 24)).contains(&biased) {
                return None;
            }
            Some(biased.to_be_bytes()[1..].to_vec())
        }
        _ => None,
    }
}
