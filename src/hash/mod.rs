//! Hash engine: MurmurHash3 digests, the scalar avalanche mixer, and the
//! double-hashing probe sequence.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── murmur3.rs  - 32-/64-bit MurmurHash3 over byte slices
//! ├── mixer.rs    - Integer avalanche mixer for i64/i32/f32/f64 keys
//! ├── probe.rs    - Kirsch–Mitzenmacher positions from one 64-bit digest
//! └── mod.rs      - This file (public API)
//! ```
//!
//! # Digest Sources
//!
//! | Value kind     | Digest                                  |
//! |----------------|-----------------------------------------|
//! | bytes          | [`hash64`] with [`DEFAULT_SEED`]        |
//! | absent bytes   | [`NULL_HASHCODE`] (no hashing)          |
//! | `i64` / `i32`  | [`long_hash`] of the (widened) integer  |
//! | `f64` / `f32`  | [`long_hash`] of the IEEE-754 bits      |
//!
//! # Examples
//!
//! ```
//! use bloomview::hash::{hash64, long_hash, ProbeSequence};
//!
//! let digest = hash64(b"hello");
//! let positions: Vec<usize> = ProbeSequence::new(digest, 4, 1000).collect();
//! assert_eq!(positions, vec![961, 486, 638, 790]);
//!
//! assert_eq!(long_hash(0), 0);
//! ```
//!
//! # References
//!
//! - Austin Appleby: "MurmurHash3" (SMHasher)
//! - Thomas Wang: "Integer Hash Function"
//! - Kirsch & Mitzenmacher (2006): "Less Hashing, Same Performance: Building a Better Bloom Filter"

pub mod mixer;
pub mod murmur3;
pub mod probe;

pub use mixer::{double_key, float_key, int_key, long_hash};
pub use murmur3::{
    fmix32, fmix64, hash32, hash32_with_seed, hash64, hash64_with_seed, DEFAULT_SEED,
    NULL_HASHCODE,
};
pub use probe::{probe_position, split_digest, ProbeSequence};
