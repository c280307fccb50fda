//! Integer avalanche mixer for scalar values.
//!
//! Scalars (integers and floating-point bit patterns) do not go through
//! MurmurHash3. They are widened to a signed 64-bit key and scrambled by a
//! Thomas Wang style shift/add/xor sequence instead.
//!
//! Right shifts are arithmetic: the key is signed and the sign bit propagates,
//! exactly as in the filters this crate reads.

#![allow(clippy::cast_possible_wrap)]

/// Scramble a 64-bit key so that small input changes flip roughly half of the
/// output bits.
///
/// # Examples
///
/// ```
/// use bloomview::hash::mixer::long_hash;
///
/// assert_eq!(long_hash(0), 0);
/// assert_eq!(long_hash(42), 1_098_236_396_662_648_698);
/// ```
#[inline]
#[must_use]
pub fn long_hash(mut key: i64) -> i64 {
    key = (!key).wrapping_add(key << 21);
    key ^= key >> 24;
    key = key.wrapping_add(key << 3).wrapping_add(key << 8); // * 265
    key ^= key >> 14;
    key = key.wrapping_add(key << 2).wrapping_add(key << 4); // * 21
    key ^= key >> 28;
    key = key.wrapping_add(key << 31);
    key
}

/// Widen a 32-bit integer to the 64-bit key space (sign-extending).
#[inline]
#[must_use]
pub fn int_key(value: i32) -> i64 {
    i64::from(value)
}

/// Reinterpret the IEEE-754 bits of a double as a key. No numeric conversion.
#[inline]
#[must_use]
pub fn double_key(value: f64) -> i64 {
    value.to_bits() as i64
}

/// Reinterpret the IEEE-754 bits of a float as a key.
///
/// The 32-bit pattern occupies the low half; the high half is zero.
#[inline]
#[must_use]
pub fn float_key(value: f32) -> i64 {
    i64::from(value.to_bits())
}
