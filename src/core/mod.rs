//! Core types for BloomView.
//!
//! - **Bit storage**: [`BitArrayView`], a borrowed, byte-swapped bit array
//! - **Parameters**: [`FilterParams`], `m` and `k` as shipped with the array
//! - **Values**: [`FilterValue`], the closed set of testable value kinds
//! - **Filter**: [`BloomFilterView`], the membership tester
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bits.rs      - Bit array accessor (words or raw bytes)
//! ├── params.rs    - Filter parameters and validation
//! ├── value.rs     - Typed value dispatch
//! ├── filter.rs    - Read-only Bloom filter view
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomview::core::{BitArrayView, BloomFilterView, FilterParams, FilterValue};
//!
//! let words = vec![u64::MAX; 4];
//! let params = FilterParams::new(256, 4).unwrap();
//! let filter = BloomFilterView::from_view(params, BitArrayView::from_words(&words)).unwrap();
//!
//! assert!(filter.test(FilterValue::Long(7)));
//! assert_eq!(filter.fill_ratio(), 1.0);
//! ```

pub mod bits;
pub mod filter;
pub mod params;
pub mod value;

pub use bits::BitArrayView;
pub use filter::BloomFilterView;
pub use params::FilterParams;
pub use value::FilterValue;
