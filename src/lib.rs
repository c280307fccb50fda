//! BloomView: zero-copy, read-only Bloom filter membership tests.
//!
//! BloomView evaluates membership queries against a Bloom filter bit array
//! that was built, sized, and stored by some other component. It only reads:
//! there is no insert, no resize, and no ownership of the buffer.
//!
//! The hashing pipeline is bit-exact with Hive-compatible filters:
//! MurmurHash3 (64-bit) for byte values, a fixed sentinel digest for NULL,
//! and an integer avalanche mixer for native scalars. k bit positions are
//! derived from one digest by Kirsch–Mitzenmacher double hashing.
//!
//! # What are Bloom Filters?
//!
//! A Bloom filter is a space-efficient probabilistic data structure that tests whether
//! an element is a member of a set. It can produce:
//! - **False positives**: May indicate an element is in the set when it isn't
//! - **Zero false negatives**: If it says an element isn't in the set, it definitely isn't
//!
//! # Quick Start
//!
//! ```
//! use bloomview::BloomFilterView;
//!
//! // Bits produced elsewhere: 1024 bits, 3 hash functions
//! let words: Vec<u64> = vec![u64::MAX; 16];
//! let filter = BloomFilterView::new(1024, 3, &words).unwrap();
//!
//! assert!(filter.test_long(42));
//! assert!(filter.test_int(42));
//! assert!(filter.test_bytes(Some(b"x")));
//! assert!(filter.test_bytes(None)); // NULL
//! assert!(filter.test_double(2.5));
//! ```
//!
//! # Loading From Storage
//!
//! ```
//! use bloomview::{BloomFilterView, FilterParams};
//!
//! let blob: Vec<u8> = vec![0u8; 128]; // e.g. read from a file or column chunk
//! let params = FilterParams::new(1024, 3).unwrap();
//! let filter = BloomFilterView::from_bytes(params, &blob).unwrap();
//! assert!(!filter.test("anything"));
//! ```
//!
//! # Features
//!
//! - `trace` (default) - `tracing` events on view construction and per test
//! - `serde` - `Serialize`/`Deserialize` for [`FilterParams`]
//!
//! # Sharing Across Threads
//!
//! A view is `Copy + Send + Sync`; the borrow checker keeps the buffer
//! immutable for as long as any view exists.
//!
//! ```
//! use bloomview::BloomFilterView;
//!
//! let words = vec![u64::MAX; 16];
//! let filter = BloomFilterView::new(1024, 3, &words).unwrap();
//!
//! std::thread::scope(|s| {
//!     for t in 0..4i64 {
//!         s.spawn(move || assert!(filter.test_long(t)));
//!     }
//! });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Core data structures: bit array view, parameters, values, filter
pub mod core;

/// Error types and result aliases
pub mod error;

/// Hash functions and the probe sequence
pub mod hash;

// Re-export commonly used types at crate root
pub use error::{BloomViewError, Result};

pub use core::{BitArrayView, BloomFilterView, FilterParams, FilterValue};

pub use hash::{hash32, hash64, long_hash, DEFAULT_SEED, NULL_HASHCODE};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomview::prelude::*;
///
/// let words = [u64::MAX; 1];
/// let filter = BloomFilterView::new(64, 2, &words).unwrap();
/// assert!(filter.test(FilterValue::Long(1)));
/// ```
pub mod prelude {
    pub use crate::core::{BitArrayView, BloomFilterView, FilterParams, FilterValue};
    pub use crate::error::{BloomViewError, Result};
    pub use crate::hash::{hash32, hash64, long_hash, ProbeSequence, NULL_HASHCODE};
}
