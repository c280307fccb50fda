//! Error types for BloomView construction.
//!
//! Every membership test is a total function over its input domain, so the
//! only errors this crate produces come from building a view over a buffer
//! that does not satisfy the filter contract.
//!
//! # Error Propagation
//!
//! ```
//! use bloomview::{BloomFilterView, FilterParams, Result};
//!
//! fn open_view(words: &[u64]) -> Result<BloomFilterView<'_>> {
//!     let params = FilterParams::new(1024, 3)?;
//!     BloomFilterView::from_params(params, words)
//! }
//! # let words = vec![0u64; 16];
//! # assert!(open_view(&words).is_ok());
//! ```

#![allow(clippy::module_name_repetitions)]

/// Result type alias for BloomView operations.
///
/// # Examples
/// ```
/// use bloomview::{BloomViewError, Result};
///
/// fn check_bits(bit_count: usize) -> Result<()> {
///     if bit_count == 0 {
///         return Err(BloomViewError::invalid_filter_size(bit_count));
///     }
///     Ok(())
/// }
/// # assert!(check_bits(64).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, BloomViewError>;

/// Contract violations detected while constructing a filter view.
///
/// `Clone` + `PartialEq` keep errors comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BloomViewError {
    /// Bit count is zero or does not fit the signed 32-bit position arithmetic.
    #[error("Invalid filter size: {size} bits. Must be in range [1, {}].", i32::MAX)]
    InvalidFilterSize {
        /// The rejected bit count.
        size: usize,
    },

    /// Number of hash functions is out of range.
    #[error("Invalid hash function count: {count}. Must be in range [{min}, {max}].")]
    InvalidHashCount {
        /// The rejected hash function count.
        count: usize,
        /// Minimum allowed value.
        min: usize,
        /// Maximum allowed value.
        max: usize,
    },

    /// Backing buffer does not cover every addressable bit.
    #[error("Buffer too small: expected at least {expected_bytes} bytes, got {actual_bytes}.")]
    BufferTooSmall {
        /// Bytes needed to hold `ceil(bit_count / 64)` words.
        expected_bytes: usize,
        /// Bytes actually supplied.
        actual_bytes: usize,
    },

    /// Catch-all for parameter combinations rejected by validation.
    #[error("Invalid Bloom filter parameters: {message}.")]
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },
}

impl BloomViewError {
    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: usize, min: usize, max: usize) -> Self {
        Self::InvalidHashCount { count, min, max }
    }

    /// Create a `BufferTooSmall` error.
    #[must_use]
    pub fn buffer_too_small(expected_bytes: usize, actual_bytes: usize) -> Self {
        Self::BufferTooSmall {
            expected_bytes,
            actual_bytes,
        }
    }

    /// Create an `InvalidParameters` error with a formatted message.
    ///
    /// # Examples
    /// ```
    /// use bloomview::BloomViewError;
    ///
    /// let err = BloomViewError::invalid_parameters(
    ///     format!("bit_count={} exceeds buffer of {} words", 4096, 2)
    /// );
    /// assert!(err.to_string().contains("4096"));
    /// ```
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }
}
