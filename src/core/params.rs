//! Filter parameters supplied by the external builder.
//!
//! A view needs exactly two numbers besides the bit array itself: the number
//! of addressable bits `m` and the number of simulated hash functions `k`.
//! Both travel with the bit array (for example in file or table metadata), so
//! [`FilterParams`] is serializable behind the `serde` feature.
//!
//! # Limits
//!
//! Positions are computed in signed 32-bit arithmetic, so `m` and `k` are
//! bounded by `i32::MAX`. A filter with more bits could never have its upper
//! bits probed.
//!
//! # Examples
//!
//! ```
//! use bloomview::core::params::FilterParams;
//!
//! let params = FilterParams::new(1000, 3).unwrap();
//! assert_eq!(params.word_count(), 16);
//! assert_eq!(params.byte_len(), 128);
//!
//! assert!(FilterParams::new(0, 3).is_err());
//! assert!(FilterParams::new(1000, 0).is_err());
//! ```

#![allow(clippy::cast_sign_loss)]

use crate::error::{BloomViewError, Result};

/// Largest supported bit count.
pub const MAX_BIT_COUNT: usize = i32::MAX as usize;

/// Minimum number of hash functions.
pub const MIN_HASH_FUNCTIONS: usize = 1;

/// Largest supported number of hash functions.
pub const MAX_HASH_FUNCTIONS: usize = i32::MAX as usize;

/// Number of 64-bit words needed to hold `bit_count` bits.
///
/// # Examples
///
/// ```
/// use bloomview::core::params::words_for_bits;
///
/// assert_eq!(words_for_bits(1), 1);
/// assert_eq!(words_for_bits(64), 1);
/// assert_eq!(words_for_bits(65), 2);
/// ```
#[inline]
#[must_use]
pub const fn words_for_bits(bit_count: usize) -> usize {
    bit_count.div_ceil(64)
}

/// Shape of a pre-built Bloom filter: `m` bits probed by `k` hash functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterParams {
    /// Total number of addressable bits (`m`).
    pub bit_count: usize,
    /// Number of simulated hash functions (`k`).
    pub hash_function_count: usize,
}

impl FilterParams {
    /// Validated parameters.
    ///
    /// # Errors
    ///
    /// - [`BloomViewError::InvalidFilterSize`] if `bit_count` is zero or above [`MAX_BIT_COUNT`]
    /// - [`BloomViewError::InvalidHashCount`] if `hash_function_count` is outside
    ///   `[MIN_HASH_FUNCTIONS, MAX_HASH_FUNCTIONS]`
    pub fn new(bit_count: usize, hash_function_count: usize) -> Result<Self> {
        let params = Self {
            bit_count,
            hash_function_count,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the invariants. Deserialized params must pass this before use.
    ///
    /// # Errors
    ///
    /// Same as [`FilterParams::new`].
    pub fn validate(&self) -> Result<()> {
        if self.bit_count == 0 || self.bit_count > MAX_BIT_COUNT {
            return Err(BloomViewError::invalid_filter_size(self.bit_count));
        }
        if self.hash_function_count < MIN_HASH_FUNCTIONS
            || self.hash_function_count > MAX_HASH_FUNCTIONS
        {
            return Err(BloomViewError::invalid_hash_count(
                self.hash_function_count,
                MIN_HASH_FUNCTIONS,
                MAX_HASH_FUNCTIONS,
            ));
        }
        Ok(())
    }

    /// Words the backing buffer must provide: `ceil(bit_count / 64)`.
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        words_for_bits(self.bit_count)
    }

    /// Bytes the backing buffer must provide.
    #[inline]
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.word_count() * 8
    }
}
