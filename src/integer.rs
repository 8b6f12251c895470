//! Immutable arbitrary precision integer
//!
//! An [`Integer`] is a cheap-to-clone handle to shared, immutable
//! storage. Small magnitudes are kept in a single machine word; larger
//! ones as a vector of native digits. Which form is used depends only
//! on the value, so equal integers always have identical storage.
//!

use std::sync::Arc;

use crate::bigdigit::digitvec::split_u128_into;
use crate::bigdigit::{
    Digit,
    NativeDigitVec,
    NativeOrder,
    NativeRadix,
    RadixType,
    COMPACT_BITS,
    COMPACT_MAX_DIGITS,
};
use crate::compaction::normalize;
use crate::export::{DigitArray, IntegerExport};
use crate::small_ints;


/// Storage of an integer's magnitude
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Magnitude {
    /// Magnitude below 2<sup>COMPACT_BITS</sup>
    Compact(u64),

    /// More than COMPACT_MAX_DIGITS digits, most significant nonzero
    Digits(NativeDigitVec),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct IntegerRepr {
    pub negative: bool,
    pub magnitude: Magnitude,
}

/// Immutable arbitrary precision integer
///
/// Cloning acquires another strong reference to the same storage.
///
#[derive(Clone)]
pub struct Integer {
    repr: Arc<IntegerRepr>,
}

impl Integer {
    /// Wrap magnitude into new storage, bypassing the small integer cache
    pub(crate) fn new_uncached(negative: bool, magnitude: Magnitude) -> Integer {
        Integer {
            repr: Arc::new(IntegerRepr { negative, magnitude }),
        }
    }

    /// Integer from sign and a magnitude in the compact range
    pub(crate) fn from_compact(negative: bool, magnitude: u64) -> Integer {
        debug_assert!(COMPACT_BITS == 64 || magnitude >> COMPACT_BITS == 0);

        let negative = negative && magnitude != 0;
        small_ints::get(negative, magnitude)
            .unwrap_or_else(|| Integer::new_uncached(negative, Magnitude::Compact(magnitude)))
    }

    /// Integer from sign and a magnitude of any size
    pub(crate) fn from_magnitude_u128(negative: bool, magnitude: u128) -> Integer {
        if magnitude >> COMPACT_BITS == 0 {
            return Integer::from_compact(negative, magnitude as u64);
        }

        let bits = 128 - u64::from(magnitude.leading_zeros());
        let mut digits = vec![0 as Digit; NativeRadix::digits_for_bits(bits) as usize];
        let count = split_u128_into::<NativeRadix>(magnitude, &mut digits);
        debug_assert_eq!(count, digits.len());

        Integer::new_uncached(negative, Magnitude::Digits(NativeDigitVec::from_vec(digits)))
    }

    /// Integer from a sign and digits in native order, each in range
    ///
    /// The vector is trimmed in place and becomes the storage of the
    /// integer when too large for the compact form.
    ///
    pub(crate) fn from_digit_vec(negative: bool, mut digits: NativeDigitVec) -> Integer {
        let (negative, compact, len) = {
            let normalized = normalize::<NativeOrder>(negative, &digits.digits);
            (normalized.negative, normalized.compact, normalized.digits.len())
        };

        match compact {
            Some(magnitude) => Integer::from_compact(negative, magnitude),
            None => {
                digits.strip_significant_zeros();
                debug_assert_eq!(digits.len(), len);
                Integer::new_uncached(negative, Magnitude::Digits(digits))
            }
        }
    }

    pub(crate) fn repr(&self) -> &IntegerRepr {
        &self.repr
    }

    /// The integer zero
    pub fn zero() -> Integer {
        Integer::from_compact(false, 0)
    }

    /// True if value is less than zero
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.repr.negative
    }

    /// True if value is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self.repr.magnitude, Magnitude::Compact(0))
    }

    /// -1, 0, or 1 depending on sign of value
    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// True if the magnitude is stored in the single-word form
    pub fn is_compact(&self) -> bool {
        matches!(self.repr.magnitude, Magnitude::Compact(_))
    }

    /// Number of native digits in the normalized magnitude (zero has none)
    pub fn ndigits(&self) -> usize {
        match self.repr.magnitude {
            Magnitude::Compact(n) => {
                NativeRadix::digits_for_bits(64 - u64::from(n.leading_zeros())) as usize
            }
            Magnitude::Digits(ref digits) => digits.len(),
        }
    }

    /// Number of bits in the magnitude
    pub fn bits(&self) -> u64 {
        match self.repr.magnitude {
            Magnitude::Compact(n) => 64 - u64::from(n.leading_zeros()),
            Magnitude::Digits(ref digits) => digits.as_digit_slice().bits(),
        }
    }

    /// Magnitude as u128, if it fits
    pub(crate) fn magnitude_u128(&self) -> Option<u128> {
        match self.repr.magnitude {
            Magnitude::Compact(n) => Some(u128::from(n)),
            Magnitude::Digits(ref digits) => digits.as_digit_slice().to_u128(),
        }
    }

    /// True if both handles refer to the same storage
    pub fn ptr_eq(&self, other: &Integer) -> bool {
        Arc::ptr_eq(&self.repr, &other.repr)
    }

    /// Number of strong references to this integer's storage
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.repr)
    }

    /// Read-only view of this integer's digits in the native layout
    pub fn as_digit_array(&self) -> DigitArray {
        DigitArray::export(self)
    }

    /// Export as a signed 64-bit word when possible, otherwise as a
    /// digit array
    pub fn export(&self) -> IntegerExport {
        IntegerExport::new(self)
    }
}

impl AsRef<Integer> for Integer {
    fn as_ref(&self) -> &Integer {
        self
    }
}

impl Default for Integer {
    fn default() -> Integer {
        Integer::zero()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::BITS_PER_DIGIT;

    #[test]
    fn zero_is_canonical() {
        let z = Integer::zero();
        assert!(z.is_zero());
        assert!(!z.is_negative());
        assert!(z.is_compact());
        assert_eq!(z.ndigits(), 0);
        assert_eq!(z.signum(), 0);
        assert_eq!(Integer::from_compact(true, 0), z);
    }

    #[test]
    fn from_compact_sign() {
        let n = Integer::from_compact(true, 1000);
        assert!(n.is_negative());
        assert_eq!(n.signum(), -1);
        assert_eq!(n.bits(), 10);
    }

    #[test]
    fn from_magnitude_u128_boundary() {
        let below = Integer::from_magnitude_u128(false, (1u128 << COMPACT_BITS) - 1);
        assert!(below.is_compact());
        assert_eq!(below.ndigits(), COMPACT_MAX_DIGITS);

        let above = Integer::from_magnitude_u128(false, 1u128 << COMPACT_BITS);
        assert!(!above.is_compact());
        assert_eq!(above.ndigits(), COMPACT_MAX_DIGITS + 1);
        assert_eq!(above.bits(), u64::from(COMPACT_BITS) + 1);
    }

    #[test]
    fn from_magnitude_u128_max() {
        let n = Integer::from_magnitude_u128(true, u128::MAX);
        assert_eq!(n.magnitude_u128(), Some(u128::MAX));
        assert_eq!(n.bits(), 128);
        assert_eq!(n.ndigits(), NativeRadix::digits_for_bits(128) as usize);
    }

    #[test]
    fn from_digit_vec_trims_in_place() {
        let mut digits = vec![1 as Digit; COMPACT_MAX_DIGITS + 1];
        digits.extend([0, 0]);
        let n = Integer::from_digit_vec(true, NativeDigitVec::from_vec(digits));
        assert!(!n.is_compact());
        assert!(n.is_negative());
        assert_eq!(n.ndigits(), COMPACT_MAX_DIGITS + 1);
    }

    #[test]
    fn from_digit_vec_selects_compact() {
        let digits = vec![7, 1, 0, 0, 0, 0, 0, 0];
        let n = Integer::from_digit_vec(false, NativeDigitVec::from_vec(digits));
        assert!(n.is_compact());
        assert_eq!(n.magnitude_u128(), Some((1 << BITS_PER_DIGIT) + 7));
    }

    #[test]
    fn negative_zero_digits_become_zero() {
        let n = Integer::from_digit_vec(true, NativeDigitVec::from_vec(vec![0; 10]));
        assert!(n.is_zero());
        assert!(!n.is_negative());
    }

    #[test]
    fn clone_shares_storage() {
        let a = Integer::from_magnitude_u128(false, 1 << 100);
        assert_eq!(a.strong_count(), 1);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.strong_count(), 2);
        drop(b);
        assert_eq!(a.strong_count(), 1);
    }

    #[test]
    fn integer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Integer>();
    }
}
