//! Digit vectors (and slices) of arbitrary radix and endianness

use std::collections::TryReserveError;
use std::marker::PhantomData;

use num_traits::{FromPrimitive, PrimInt, Zero};

use super::radix::*;
use super::endian::*;


/// Vector of integers, interpreted as bigdigits in an integer
///
/// Value of the integer is defined by the radix and endianness
/// type parameters.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DigitVec<R: RadixType, E: Endianness> {
    pub digits: Vec<R::Base>,
    _radix: PhantomData<R>,
    _endian: PhantomData<E>,
}

impl<R: RadixType, E: Endianness> DigitVec<R, E> {
    /// construct from vector of digits
    pub fn from_vec(v: Vec<R::Base>) -> Self {
        Self {
            digits: v,
            _radix: PhantomData {},
            _endian: PhantomData {},
        }
    }

    /// allocate with n bigdigits and fill with zeros
    ///
    /// Reports allocation failure instead of aborting.
    ///
    pub fn try_from_zero_count(n: usize) -> Result<Self, TryReserveError> {
        let mut v = Vec::new();
        v.try_reserve_exact(n)?;
        v.resize(n, Zero::zero());
        Ok(Self::from_vec(v))
    }

    /// Number of bigdigits in the vector
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Borrow inner vector as immutable digit-slice
    pub fn as_digit_slice(&self) -> DigitSlice<'_, R, E> {
        DigitSlice::from_slice(&self.digits)
    }

    /// Remove any zeros at the location of highest significance
    pub fn strip_significant_zeros(&mut self) {
        E::strip_significant_zeros(&mut self.digits)
    }
}


/// Immutable slice of digits
///
/// Operations on the bigdigit values are defined by the
/// radix and endianness traits.
///
#[derive(Clone, Copy, Debug)]
pub(crate) struct DigitSlice<'a, R: RadixType, E: Endianness> {
    pub digits: &'a [R::Base],
    _radix: PhantomData<R>,
    _endian: PhantomData<E>,
}

impl<'a, R: RadixType, E: Endianness> DigitSlice<'a, R, E> {
    /// Wrap slice of numbers as a slice of big-digits with given radix
    /// and endianness
    ///
    /// This does no validation, so the digits may be outside the bounds
    /// of the radix and may have leading significant zeros.
    ///
    pub fn from_slice(digits: &'a [R::Base]) -> Self {
        Self {
            digits: digits,
            _radix: PhantomData {},
            _endian: PhantomData {},
        }
    }

    /// Number of bigdigits in slice
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Sub-slice with significant zeros removed
    pub fn trim_significant_zeros(&self) -> Self {
        let (digits, _) = E::split_significant_zeros(self.digits);
        Self::from_slice(digits)
    }

    /// Fold digits into a single u64, if they fit
    pub fn to_u64(&self) -> Option<u64> {
        let mut result = 0u64;
        for &d in E::iter_slice(self.digits).rev() {
            if result.leading_zeros() < u32::from(R::BITS) {
                return None;
            }
            result = (result << R::BITS) | num_traits::AsPrimitive::<u64>::as_(d);
        }
        Some(result)
    }

    /// Fold digits into a single u128, if they fit
    pub fn to_u128(&self) -> Option<u128> {
        let mut result = 0u128;
        for &d in E::iter_slice(self.digits).rev() {
            if result.leading_zeros() < u32::from(R::BITS) {
                return None;
            }
            let d: u64 = num_traits::AsPrimitive::<u64>::as_(d);
            result = (result << R::BITS) | u128::from(d);
        }
        Some(result)
    }

    /// Number of bits in the magnitude, ignoring significant zeros
    pub fn bits(&self) -> u64 {
        let trimmed = self.trim_significant_zeros();
        let (msd, rest) = E::split_most_significant_digit(trimmed.digits);
        if msd.is_zero() {
            return 0;
        }
        let msd_bits = <R::Base as PrimInt>::count_zeros(Zero::zero())
                     - <R::Base as PrimInt>::leading_zeros(msd);
        rest.len() as u64 * u64::from(R::BITS) + u64::from(msd_bits)
    }
}

impl<R: RadixType, E: Endianness> AsRef<[R::Base]> for DigitSlice<'_, R, E> {
    fn as_ref(&self) -> &[R::Base] {
        self.digits
    }
}


/// Split the low bits of `n` into little-endian digits of the radix,
/// writing into `dest` and returning the number of digits written
///
/// `dest` must be long enough to hold every digit of `n`.
///
pub(crate) fn split_u128_into<R: RadixType>(mut n: u128, dest: &mut [R::Base]) -> usize {
    let mask = u128::from(R::digit_mask());
    let mut count = 0;
    while n != 0 {
        dest[count] = R::Base::from_u128(n & mask).unwrap_or_else(Zero::zero);
        n >>= R::BITS;
        count += 1;
    }
    count
}

/// Regroup little-endian bit-groups of width `from_bits` into groups
/// of width `to_bits`
///
/// Both widths must be at most 32. A final partial group is emitted,
/// which may leave a zero group at the most-significant end.
///
pub(crate) fn regroup_bits<I>(groups: I, from_bits: u32, to_bits: u32) -> Vec<u64>
where
    I: IntoIterator<Item = u64>,
{
    debug_assert!(0 < from_bits && from_bits <= 32);
    debug_assert!(0 < to_bits && to_bits <= 32);

    let mask = (1u64 << to_bits) - 1;
    let mut result = Vec::new();
    let mut acc = 0u64;
    let mut acc_bits = 0;
    for group in groups {
        acc |= group << acc_bits;
        acc_bits += from_bits;
        while acc_bits >= to_bits {
            result.push(acc & mask);
            acc >>= to_bits;
            acc_bits -= to_bits;
        }
    }
    if acc_bits > 0 {
        result.push(acc);
    }
    result
}
