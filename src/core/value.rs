//! Typed values accepted by a membership test.
//!
//! The set of value kinds is closed: bytes (possibly absent) and four native
//! scalars. Each kind knows how to produce its 64-bit digest.

#![allow(clippy::cast_sign_loss)]

use crate::hash::{double_key, float_key, hash64, int_key, long_hash, NULL_HASHCODE};

/// A value to test against a filter.
///
/// # Examples
///
/// ```
/// use bloomview::core::value::FilterValue;
/// use bloomview::hash::{hash64, long_hash, NULL_HASHCODE};
///
/// assert_eq!(FilterValue::from(&b"hello"[..]).digest(), hash64(b"hello"));
/// assert_eq!(FilterValue::Bytes(None).digest(), NULL_HASHCODE);
/// assert_eq!(FilterValue::from(42i64).digest(), long_hash(42) as u64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue<'a> {
    /// Raw bytes; `None` marks an absent (NULL) value.
    Bytes(Option<&'a [u8]>),
    /// 64-bit signed integer.
    Long(i64),
    /// 32-bit signed integer, sign-extended before mixing.
    Int(i32),
    /// 32-bit float, mixed by bit pattern.
    Float(f32),
    /// 64-bit float, mixed by bit pattern.
    Double(f64),
}

impl FilterValue<'_> {
    /// The 64-bit digest fed to the probe sequence.
    #[inline]
    #[must_use]
    pub fn digest(&self) -> u64 {
        match *self {
            Self::Bytes(Some(bytes)) => hash64(bytes),
            Self::Bytes(None) => NULL_HASHCODE,
            Self::Long(v) => long_hash(v) as u64,
            Self::Int(v) => long_hash(int_key(v)) as u64,
            Self::Float(v) => long_hash(float_key(v)) as u64,
            Self::Double(v) => long_hash(double_key(v)) as u64,
        }
    }

    /// Name of the value kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "bytes",
            Self::Long(_) => "long",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
        }
    }

    /// True for an absent byte value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Bytes(None))
    }
}

impl<'a> From<&'a [u8]> for FilterValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(Some(bytes))
    }
}

impl<'a> From<Option<&'a [u8]>> for FilterValue<'a> {
    fn from(bytes: Option<&'a [u8]>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for FilterValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::Bytes(Some(s.as_bytes()))
    }
}

impl From<i64> for FilterValue<'_> {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<i32> for FilterValue<'_> {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for FilterValue<'_> {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for FilterValue<'_> {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}
