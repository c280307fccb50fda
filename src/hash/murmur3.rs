//! MurmurHash3 32-bit and 64-bit digests.
//!
//! These are bit-exact reimplementations of the MurmurHash3 variants used by
//! Hive-compatible Bloom filters. Any deviation, including in the tail
//! handling or the seed widening, breaks compatibility with filters produced
//! elsewhere, so the constants below are pinned and covered by golden vectors.
//!
//! # Algorithm Overview
//!
//! ```text
//! 1. Body:     little-endian blocks (4 or 8 bytes), multiply/rotate/multiply,
//!              xor into the running hash, then rotate/scale/offset the hash
//! 2. Tail:     remaining 0..block bytes as a little-endian partial word,
//!              multiply/rotate/multiply, xor into the hash (no post-mix)
//! 3. Finalize: xor the input length, then fmix32 / fmix64
//! ```
//!
//! The 64-bit variant is *not* the upper half of MurmurHash3_x64_128: it is a
//! single-lane 64-bit construction with its own additive constant.
//!
//! # Examples
//!
//! ```
//! use bloomview::hash::murmur3::{hash32_with_seed, hash64, hash64_with_seed, DEFAULT_SEED};
//!
//! assert_eq!(hash64(b"hello"), hash64_with_seed(b"hello", DEFAULT_SEED));
//!
//! // Matches the public MurmurHash3_x86_32 reference for seed 0
//! assert_eq!(hash32_with_seed(b"hello", 0), 0x248b_fa47);
//! ```

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

/// Seed used when callers do not supply one (a prime, 104729).
pub const DEFAULT_SEED: i32 = 104_729;

/// Digest assigned to an absent byte-sequence value.
///
/// Absent values never reach the hash function; they always map here.
pub const NULL_HASHCODE: u64 = 2_862_933_555_777_941_757;

// 32-bit constants
const C1_32: u32 = 0xcc9e_2d51; // -862048943
const C2_32: u32 = 0x1b87_3593; // 461845907
const R1_32: u32 = 15;
const R2_32: u32 = 13;
const M_32: u32 = 5;
const N_32: u32 = 0xe654_6b64; // -430675100

// 64-bit constants
const C1: u64 = 0x87c3_7b91_1142_53d5; // -8663945395140668459
const C2: u64 = 0x4cf5_ad43_2745_937f; // 5545529020109919103
const R1: u32 = 31;
const R2: u32 = 27;
const M: u64 = 5;
const N1: u64 = 0x52dc_e729; // 1390208809

/// Assemble a little-endian word from up to `size_of::<u64>()` bytes.
#[inline(always)]
fn le_word(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (8 * i)))
}

#[inline(always)]
fn mix_k32(k: u32) -> u32 {
    k.wrapping_mul(C1_32).rotate_left(R1_32).wrapping_mul(C2_32)
}

#[inline(always)]
fn mix_k64(k: u64) -> u64 {
    k.wrapping_mul(C1).rotate_left(R1).wrapping_mul(C2)
}

/// MurmurHash3 32-bit finalizer.
#[inline(always)]
#[must_use]
pub fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// MurmurHash3 64-bit finalizer.
#[inline(always)]
#[must_use]
pub fn fmix64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

/// 32-bit MurmurHash3 of `data` with [`DEFAULT_SEED`].
#[inline]
#[must_use]
pub fn hash32(data: &[u8]) -> u32 {
    hash32_with_seed(data, DEFAULT_SEED)
}

/// 32-bit MurmurHash3 of `data` with an explicit seed.
///
/// The seed is reinterpreted as an unsigned 32-bit value.
///
/// # Examples
///
/// ```
/// use bloomview::hash::murmur3::hash32_with_seed;
///
/// assert_eq!(hash32_with_seed(b"hello", 0), 0x248b_fa47);
/// assert_ne!(hash32_with_seed(b"hello", 1), hash32_with_seed(b"hello", 0));
/// ```
#[must_use]
pub fn hash32_with_seed(data: &[u8], seed: i32) -> u32 {
    let mut hash = seed as u32;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        hash ^= mix_k32(le_word(block) as u32);
        hash = hash
            .rotate_left(R2_32)
            .wrapping_mul(M_32)
            .wrapping_add(N_32);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        hash ^= mix_k32(le_word(tail) as u32);
    }

    hash ^= data.len() as u32;
    fmix32(hash)
}

/// 64-bit MurmurHash3 of `data` with [`DEFAULT_SEED`].
///
/// This is the digest the membership test consumes for byte values.
///
/// # Examples
///
/// ```
/// use bloomview::hash::murmur3::hash64;
///
/// assert_eq!(hash64(b""), 0x74a1_8dc8_f20a_db48);
/// assert_eq!(hash64(b"hello"), 0x3928_1000_1822_4141);
/// ```
#[inline]
#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
    hash64_with_seed(data, DEFAULT_SEED)
}

/// 64-bit MurmurHash3 of `data` with an explicit seed.
///
/// The 32-bit seed is sign-extended to 64 bits before use.
#[must_use]
pub fn hash64_with_seed(data: &[u8], seed: i32) -> u64 {
    let mut hash = i64::from(seed) as u64;

    let mut blocks = data.chunks_exact(8);
    for block in &mut blocks {
        hash ^= mix_k64(le_word(block));
        hash = hash.rotate_left(R2).wrapping_mul(M).wrapping_add(N1);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        hash ^= mix_k64(le_word(tail));
    }

    hash ^= data.len() as u64;
    fmix64(hash)
}
