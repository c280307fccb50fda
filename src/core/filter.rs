//! Read-only Bloom filter view.
//!
//! [`BloomFilterView`] evaluates membership tests against a bit array built
//! and owned by someone else. It borrows the array, never copies it, and has
//! no write path.
//!
//! # Guarantees
//!
//! 1. **No False Negatives**: a value inserted by the builder always tests `true`
//! 2. **Determinism**: a test is a pure function of the value and the bits
//! 3. **Thread Safety**: the view is `Copy + Send + Sync`; share it freely
//!
//! # Membership Test
//!
//! ```text
//! value ──► digest (u64) ──► (hash1, hash2) ──► k positions ──► k bit reads ──► bool
//!           murmur3 / mixer    split halves       probe.rs         bits.rs
//! ```
//!
//! The test stops at the first clear bit.
//!
//! # Examples
//!
//! ```
//! use bloomview::BloomFilterView;
//!
//! // A builder elsewhere produced 1024 bits, k = 3, all set
//! let words = vec![u64::MAX; 16];
//! let filter = BloomFilterView::new(1024, 3, &words).unwrap();
//!
//! assert!(filter.test_long(42));
//! assert!(filter.test_bytes(Some(b"x")));
//! assert!(filter.test_double(3.5));
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::core::bits::BitArrayView;
use crate::core::params::FilterParams;
use crate::core::value::FilterValue;
use crate::error::{BloomViewError, Result};
use crate::hash::probe::ProbeSequence;

/// Immutable membership tester over a borrowed bit array.
///
/// # Type Properties
///
/// - `Copy`: a view is two integers and a slice reference
/// - `Send + Sync`: concurrent tests need no locking
/// - The lifetime `'a` ties the view to the caller's buffer, so the buffer
///   cannot be mutated or freed while the view exists
#[derive(Debug, Clone, Copy)]
pub struct BloomFilterView<'a> {
    params: FilterParams,
    bits: BitArrayView<'a>,
}

impl<'a> BloomFilterView<'a> {
    /// View over native 64-bit words.
    ///
    /// # Errors
    ///
    /// - [`BloomViewError::InvalidFilterSize`] if `bit_count` is zero or too large
    /// - [`BloomViewError::InvalidHashCount`] if `hash_function_count` is zero or too large
    /// - [`BloomViewError::BufferTooSmall`] if `words` holds fewer than
    ///   `ceil(bit_count / 64)` words
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomview::{BloomFilterView, BloomViewError};
    ///
    /// let words = [0u64; 2];
    /// assert!(BloomFilterView::new(128, 2, &words).is_ok());
    /// assert_eq!(
    ///     BloomFilterView::new(129, 2, &words).unwrap_err(),
    ///     BloomViewError::buffer_too_small(24, 16),
    /// );
    /// ```
    pub fn new(bit_count: usize, hash_function_count: usize, words: &'a [u64]) -> Result<Self> {
        let params = FilterParams::new(bit_count, hash_function_count)?;
        Self::from_view(params, BitArrayView::from_words(words))
    }

    /// View over native words using pre-built parameters.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilterView::new`]; `params` is re-validated.
    pub fn from_params(params: FilterParams, words: &'a [u64]) -> Result<Self> {
        Self::from_view(params, BitArrayView::from_words(words))
    }

    /// View over the raw bytes of a serialized bit array.
    ///
    /// Word `i` is the little-endian read of bytes `8i..8i + 8`, which is how
    /// the array sits in memory on the hosts that produce it. No alignment is
    /// required.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilterView::new`], measured in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomview::{BloomFilterView, FilterParams};
    ///
    /// let blob = vec![0xffu8; 128];
    /// let params = FilterParams::new(1024, 3).unwrap();
    /// let filter = BloomFilterView::from_bytes(params, &blob).unwrap();
    /// assert!(filter.test_bytes(Some(b"anything")));
    /// ```
    pub fn from_bytes(params: FilterParams, bytes: &'a [u8]) -> Result<Self> {
        Self::from_view(params, BitArrayView::from_bytes(bytes))
    }

    /// View over an existing [`BitArrayView`].
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilterView::new`].
    pub fn from_view(params: FilterParams, bits: BitArrayView<'a>) -> Result<Self> {
        params.validate()?;

        if bits.word_count() < params.word_count() {
            return Err(BloomViewError::buffer_too_small(
                params.byte_len(),
                bits.byte_len(),
            ));
        }

        #[cfg(feature = "trace")]
        tracing::debug!(
            bit_count = params.bit_count,
            hash_function_count = params.hash_function_count,
            backing = bits.backing_kind(),
            buffer_bytes = bits.byte_len(),
            "BloomFilterView::from_view"
        );

        Ok(Self { params, bits })
    }

    /// Total number of addressable bits (`m`).
    #[inline]
    #[must_use]
    pub fn bit_count(&self) -> usize {
        self.params.bit_count
    }

    /// Number of simulated hash functions (`k`).
    #[inline]
    #[must_use]
    pub fn hash_function_count(&self) -> usize {
        self.params.hash_function_count
    }

    /// Parameters this view was built with.
    #[inline]
    #[must_use]
    pub fn params(&self) -> FilterParams {
        self.params
    }

    /// The borrowed bit array.
    #[inline]
    #[must_use]
    pub fn bits(&self) -> BitArrayView<'a> {
        self.bits
    }

    /// Read a single filter bit.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.bit_count()`.
    #[inline]
    #[must_use]
    pub fn test_bit(&self, index: usize) -> bool {
        assert!(
            index < self.params.bit_count,
            "bit index {} out of range for filter of {} bits",
            index,
            self.params.bit_count
        );
        self.bits.get(index)
    }

    /// Positions probed for `digest`, in probe order.
    #[inline]
    #[must_use]
    pub fn probe_positions(&self, digest: u64) -> ProbeSequence {
        ProbeSequence::new(
            digest,
            self.params.hash_function_count,
            self.params.bit_count,
        )
    }

    /// Test a precomputed 64-bit digest.
    ///
    /// `false` means definitely absent; `true` means possibly present.
    #[inline]
    #[must_use]
    pub fn test_hash(&self, digest: u64) -> bool {
        let present = self.probe_positions(digest).all(|pos| self.bits.get(pos));

        #[cfg(feature = "trace")]
        tracing::trace!(digest, present, "BloomFilterView::test_hash");

        present
    }

    /// Test a byte value. `None` is an absent value and tests the
    /// [`NULL_HASHCODE`](crate::hash::NULL_HASHCODE) digest.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomview::BloomFilterView;
    /// use bloomview::hash::NULL_HASHCODE;
    ///
    /// let words = [0x5555_5555_5555_5555u64; 4];
    /// let filter = BloomFilterView::new(256, 2, &words).unwrap();
    /// assert_eq!(filter.test_bytes(None), filter.test_hash(NULL_HASHCODE));
    /// ```
    #[inline]
    #[must_use]
    pub fn test_bytes(&self, value: Option<&[u8]>) -> bool {
        self.test(FilterValue::Bytes(value))
    }

    /// Test a 64-bit integer.
    #[inline]
    #[must_use]
    pub fn test_long(&self, value: i64) -> bool {
        self.test(FilterValue::Long(value))
    }

    /// Test a 32-bit integer. Identical to `test_long(value as i64)`.
    #[inline]
    #[must_use]
    pub fn test_int(&self, value: i32) -> bool {
        self.test(FilterValue::Int(value))
    }

    /// Test a 32-bit float by its bit pattern.
    #[inline]
    #[must_use]
    pub fn test_float(&self, value: f32) -> bool {
        self.test(FilterValue::Float(value))
    }

    /// Test a 64-bit float by its bit pattern.
    #[inline]
    #[must_use]
    pub fn test_double(&self, value: f64) -> bool {
        self.test(FilterValue::Double(value))
    }

    /// Test any supported value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomview::BloomFilterView;
    ///
    /// let words = [u64::MAX; 1];
    /// let filter = BloomFilterView::new(64, 1, &words).unwrap();
    /// assert!(filter.test("hello"));
    /// assert!(filter.test(7i32));
    /// assert!(filter.test(2.5f32));
    /// ```
    #[inline]
    #[must_use]
    pub fn test<'v>(&self, value: impl Into<FilterValue<'v>>) -> bool {
        self.test_hash(value.into().digest())
    }

    /// Test many values, one verdict per value.
    #[must_use]
    pub fn test_batch<'v, I, V>(&self, values: I) -> Vec<bool>
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue<'v>>,
    {
        values.into_iter().map(|v| self.test(v)).collect()
    }

    /// True if every value possibly belongs to the set.
    #[must_use]
    pub fn test_all<'v, I, V>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue<'v>>,
    {
        values.into_iter().all(|v| self.test(v))
    }

    /// True if at least one value possibly belongs to the set.
    #[must_use]
    pub fn test_any<'v, I, V>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue<'v>>,
    {
        values.into_iter().any(|v| self.test(v))
    }

    /// Number of set bits among the `bit_count` addressable bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones(self.params.bit_count)
    }

    /// Fraction of addressable bits that are set, in `[0, 1]`.
    ///
    /// A saturated filter (ratio near 1) answers `true` for almost anything.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.params.bit_count as f64
    }
}
