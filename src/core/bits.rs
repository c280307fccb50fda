//! Borrowed, read-only view over a Bloom filter bit array.
//!
//! # Memory Layout
//!
//! The bit array is supplied by whatever component built the filter. Each
//! 64-bit word is byte-swapped before a bit is extracted:
//!
//! ```text
//! w   = words[idx >> 6]
//! w'  = w.swap_bytes()
//! bit = w' & (1 << (idx % 64))
//! ```
//!
//! Equivalently, when the array arrives as raw bytes, word `i` is the
//! big-endian read of bytes `8i..8i + 8`, and bit `idx % 64` counts from the
//! least significant end of that big-endian value. Both backings below apply
//! the same rule so they agree bit for bit.
//!
//! # Examples
//!
//! ```
//! use bloomview::core::bits::BitArrayView;
//!
//! // Only global bit 0 set, after the byte swap
//! let words = [1u64.swap_bytes()];
//! let bits = BitArrayView::from_words(&words);
//! assert!(bits.get(0));
//! assert!(!bits.get(1));
//!
//! let bytes = [0, 0, 0, 0, 0, 0, 0, 1];
//! assert!(BitArrayView::from_bytes(&bytes).get(0));
//! ```

#![allow(clippy::cast_possible_truncation)]

/// Storage backing a [`BitArrayView`].
#[derive(Debug, Clone, Copy)]
enum Backing<'a> {
    /// Native 64-bit words, as handed over in memory.
    Words(&'a [u64]),
    /// Raw bytes, as read from storage. No alignment requirement.
    Bytes(&'a [u8]),
}

/// Non-owning, read-only view of a filter's bit array.
///
/// The view never copies or mutates the buffer. It is `Copy`, `Send`, and
/// `Sync` because it is only a shared borrow.
#[derive(Debug, Clone, Copy)]
pub struct BitArrayView<'a> {
    backing: Backing<'a>,
}

impl<'a> BitArrayView<'a> {
    /// View over native 64-bit words.
    #[inline]
    #[must_use]
    pub const fn from_words(words: &'a [u64]) -> Self {
        Self {
            backing: Backing::Words(words),
        }
    }

    /// View over raw bytes. Trailing bytes that do not form a full word are
    /// not addressable.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            backing: Backing::Bytes(bytes),
        }
    }

    /// Number of complete 64-bit words available.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        match self.backing {
            Backing::Words(words) => words.len(),
            Backing::Bytes(bytes) => bytes.len() / 8,
        }
    }

    /// Number of addressable bits (`word_count * 64`).
    #[inline]
    #[must_use]
    pub fn capacity_bits(&self) -> usize {
        self.word_count().saturating_mul(64)
    }

    /// Size of the borrowed buffer in bytes.
    #[inline]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        match self.backing {
            Backing::Words(words) => words.len() * 8,
            Backing::Bytes(bytes) => bytes.len(),
        }
    }

    /// Short label for the backing kind, used in log output.
    #[inline]
    #[must_use]
    pub fn backing_kind(&self) -> &'static str {
        match self.backing {
            Backing::Words(_) => "words",
            Backing::Bytes(_) => "bytes",
        }
    }

    /// Word `index` after the byte swap, i.e. in bit-extraction order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.word_count()`.
    #[inline]
    #[must_use]
    pub fn swapped_word(&self, index: usize) -> u64 {
        match self.backing {
            Backing::Words(words) => words[index].swap_bytes(),
            Backing::Bytes(bytes) => {
                let start = index * 8;
                let chunk = &bytes[start..start + 8];
                u64::from_be_bytes([
                    chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
                ])
            }
        }
    }

    /// Read global bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity_bits()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        let mask = 1u64.rotate_left((index % 64) as u32);
        (self.swapped_word(index >> 6) & mask) != 0
    }

    /// Count set bits in `[0, bit_count)`.
    ///
    /// # Panics
    ///
    /// Panics if `bit_count > self.capacity_bits()`.
    #[must_use]
    pub fn count_ones(&self, bit_count: usize) -> usize {
        let full_words = bit_count / 64;
        let mut total: usize = (0..full_words)
            .map(|i| self.swapped_word(i).count_ones() as usize)
            .sum();

        let tail_bits = bit_count % 64;
        if tail_bits != 0 {
            let mask = (1u64 << tail_bits) - 1;
            total += (self.swapped_word(full_words) & mask).count_ones() as usize;
        }
        total
    }
}

impl<'a> From<&'a [u64]> for BitArrayView<'a> {
    fn from(words: &'a [u64]) -> Self {
        Self::from_words(words)
    }
}

impl<'a> From<&'a [u8]> for BitArrayView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
