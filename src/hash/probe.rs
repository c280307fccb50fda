//! Double-hashing probe sequence (Kirsch & Mitzenmacher 2006).
//!
//! A single 64-bit digest is split into two signed 32-bit halves and combined
//! to simulate k independent hash functions:
//!
//! ```text
//! hash1 = low 32 bits of digest   (as i32)
//! hash2 = high 32 bits of digest  (as i32)
//!
//! gᵢ = hash1 + i·hash2            (i = 1..=k, 32-bit wrapping)
//! gᵢ = !gᵢ  if gᵢ < 0             (bitwise complement, not abs)
//! posᵢ = gᵢ mod m
//! ```
//!
//! Complementing a negative value maps `[i32::MIN, -1]` onto `[0, i32::MAX]`
//! one-to-one, so unlike `abs` there is no overflow at `i32::MIN` and no two
//! inputs collapse onto the same magnitude.
//!
//! # Examples
//!
//! ```
//! use bloomview::hash::probe::ProbeSequence;
//! use bloomview::hash::murmur3::NULL_HASHCODE;
//!
//! let positions: Vec<usize> = ProbeSequence::new(NULL_HASHCODE, 3, 1024).collect();
//! assert_eq!(positions, vec![28, 310, 592]);
//! ```
//!
//! # References
//!
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use std::iter::FusedIterator;

/// Split a digest into its `(hash1, hash2)` halves: low word first.
///
/// # Examples
///
/// ```
/// use bloomview::hash::probe::split_digest;
///
/// assert_eq!(split_digest(0xffff_ffff_0000_0001), (1, -1));
/// ```
#[inline]
#[must_use]
pub fn split_digest(digest: u64) -> (i32, i32) {
    (digest as u32 as i32, (digest >> 32) as u32 as i32)
}

/// Bit position probed by the `i`-th simulated hash function.
///
/// # Panics
///
/// Panics if `bit_count == 0`.
///
/// # Examples
///
/// ```
/// use bloomview::hash::probe::probe_position;
///
/// // i32::MIN complements to i32::MAX rather than overflowing
/// assert_eq!(probe_position(i32::MIN, 0, 1, 1000), (i32::MAX % 1000) as usize);
/// assert_eq!(probe_position(-1, 0, 1, 1000), 0);
/// ```
#[inline]
#[must_use]
pub fn probe_position(hash1: i32, hash2: i32, i: i32, bit_count: usize) -> usize {
    let mut combined = hash1.wrapping_add(i.wrapping_mul(hash2));
    if combined < 0 {
        combined = !combined;
    }
    combined as usize % bit_count
}

/// Iterator over the k bit positions probed for one digest.
///
/// Positions are produced lazily so that a membership test can stop at the
/// first clear bit.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    hash1: i32,
    hash2: i32,
    next: usize,
    hash_count: usize,
    bit_count: usize,
}

impl ProbeSequence {
    /// Probe sequence of `hash_count` positions in `[0, bit_count)`.
    ///
    /// # Panics
    ///
    /// Iteration panics if `bit_count == 0` and `hash_count > 0`.
    #[inline]
    #[must_use]
    pub fn new(digest: u64, hash_count: usize, bit_count: usize) -> Self {
        let (hash1, hash2) = split_digest(digest);
        Self {
            hash1,
            hash2,
            next: 1,
            hash_count,
            bit_count,
        }
    }

    /// The `(hash1, hash2)` pair driving this sequence.
    #[inline]
    #[must_use]
    pub fn halves(&self) -> (i32, i32) {
        (self.hash1, self.hash2)
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.next > self.hash_count {
            return None;
        }
        let pos = probe_position(self.hash1, self.hash2, self.next as i32, self.bit_count);
        self.next += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.hash_count + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl FusedIterator for ProbeSequence {}
