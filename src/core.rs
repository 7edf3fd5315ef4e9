//! Core types for position-code sorting.
//!
//! This module defines:
//! - [`Poscode`]: The fixed-length key record the engines sort.
//! - [`bucket_index`]: The character classifier used by the radix passes.
//! - `BucketChains`: Internal arena-backed bucket chains for the counting sort.

use cuneiform::cuneiform;
use std::fmt;
use thiserror::Error;

/// Length of a production position code, and the default for [`Poscode`].
pub const CODE_LENGTH: usize = 6;

/// Number of radix buckets: digits `0-9` plus case-folded letters `a-z`.
pub const BUCKET_COUNT: usize = 36;

/// A fixed-length alphanumeric key record.
///
/// The bytes are stored inline, so codes are `Copy` and moving one between
/// buffers copies the key data rather than sharing it. Ordering is derived
/// from the byte array, which is exactly lexicographic byte comparison.
///
/// The length is part of the type: a `Poscode<6>` can never hold five or
/// seven characters, and the radix engine takes its pass count from `N`.
///
/// # Examples
///
/// ```
/// use possort::Poscode;
///
/// let code = Poscode::<6>::try_from("A1B002").unwrap();
/// assert_eq!(code.get(0), b'A');
/// assert_eq!(code.data(), b"A1B002");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Poscode<const N: usize = CODE_LENGTH>([u8; N]);

impl<const N: usize> Poscode<N> {
    /// Builds a code directly from its bytes.
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Returns the byte at position `i`.
    ///
    /// # Panics
    ///
    /// Panics when `i >= N`. An out-of-range position is a bug in the
    /// caller, not a recoverable data condition.
    pub fn get(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// Returns the full underlying byte sequence.
    pub const fn data(&self) -> &[u8; N] {
        &self.0
    }

    /// Returns the code as a byte slice.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Default for Poscode<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> AsRef<[u8]> for Poscode<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for Poscode<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Error building a [`Poscode`] from a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position code must be {expected} characters long, got {got}")]
pub struct CodeError {
    /// The length the code type requires.
    pub expected: usize,
    /// The length the input actually had.
    pub got: usize,
}

impl<const N: usize> TryFrom<&str> for Poscode<N> {
    type Error = CodeError;

    fn try_from(line: &str) -> Result<Self, CodeError> {
        let bytes: [u8; N] = line.as_bytes().try_into().map_err(|_| CodeError {
            expected: N,
            got: line.len(),
        })?;
        Ok(Self(bytes))
    }
}

// 256-entry classification table. Unlisted bytes stay at bucket 0; see
// `bucket_index` for the contract around that fallback.
const BUCKET_TABLE: [u8; 256] = build_bucket_table();

const fn build_bucket_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 26 {
        table[b'A' as usize + i] = 10 + i as u8;
        table[b'a' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
}

/// Maps a code byte to its radix bucket.
///
/// `'0'..='9'` map to buckets 0..=9 and letters map to 10..=35 with both
/// cases folding to the same bucket. Bytes outside `[0-9A-Za-z]` fall back
/// to bucket 0; a debug assertion catches that case, since well-formed code
/// files never contain such bytes.
#[inline(always)]
pub fn bucket_index(byte: u8) -> usize {
    debug_assert!(
        byte.is_ascii_alphanumeric(),
        "byte {byte:#04x} is outside the position-code alphabet"
    );
    BUCKET_TABLE[byte as usize] as usize
}

/// Sentinel terminating a bucket chain.
const NIL: usize = usize::MAX;

// Cache-aligned cursor table: one head and one tail per bucket.
#[cuneiform]
struct ChainCursors {
    head: [usize; BUCKET_COUNT],
    tail: [usize; BUCKET_COUNT],
}

/// Arena-backed bucket chains for one radix pass.
///
/// One flat `next` slot exists per input index, so appending never
/// allocates. Chains are linked by index with [`NIL`] as the terminator;
/// insertion order within a bucket equals arrival order, which is what
/// makes the counting pass stable.
pub(crate) struct BucketChains {
    next: Vec<usize>,
    cursors: ChainCursors,
}

impl BucketChains {
    /// Creates empty chains over `len` input indices.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            next: vec![NIL; len],
            cursors: ChainCursors {
                head: [NIL; BUCKET_COUNT],
                tail: [NIL; BUCKET_COUNT],
            },
        }
    }

    /// Appends input index `index` to `bucket`, preserving arrival order.
    pub(crate) fn push_back(&mut self, bucket: usize, index: usize) {
        self.next[index] = NIL;
        match self.cursors.tail[bucket] {
            NIL => self.cursors.head[bucket] = index,
            tail => self.next[tail] = index,
        }
        self.cursors.tail[bucket] = index;
    }

    /// Walks one bucket's chain in insertion order.
    pub(crate) fn chain(&self, bucket: usize) -> impl Iterator<Item = usize> + '_ {
        let mut cursor = self.cursors.head[bucket];
        std::iter::from_fn(move || {
            if cursor == NIL {
                return None;
            }
            let index = cursor;
            cursor = self.next[index];
            Some(index)
        })
    }
}
