//! Construction of integers from caller supplied digits
//!
//! An [`IntegerWriter`] owns a zeroed digit buffer which the caller
//! fills in the native layout, then turns into an [`Integer`] with
//! [`IntegerWriter::finish`] or throws away with
//! [`IntegerWriter::discard`]. Both consume the writer, so a writer can
//! never be used after it has finished or been discarded.
//!
//! # Digit validation
//!
//! [`finish`](IntegerWriter::finish) checks every digit against the
//! radix before building the integer. Callers which already guarantee
//! the range may skip the check with
//! [`finish_trusted`](IntegerWriter::finish_trusted).
//!

use num_traits::AsPrimitive;
use tracing::{debug, trace};

use crate::bigdigit::{Digit, NativeDigitVec, NativeRadix, RadixType};
use crate::integer::Integer;
use crate::{Error, Result};


/// Builder filling the digits of a new integer
#[derive(Debug)]
pub struct IntegerWriter {
    negative: bool,
    digits: NativeDigitVec,
}

impl IntegerWriter {
    /// Allocate a writer with `ndigits` zeroed digits
    ///
    /// Fails with [`Error::AllocationFailure`] if the buffer cannot be
    /// allocated.
    ///
    pub fn create(negative: bool, ndigits: usize) -> Result<IntegerWriter> {
        let digits = NativeDigitVec::try_from_zero_count(ndigits).map_err(|err| {
            debug!(ndigits, %err, "could not allocate digit buffer");
            Error::AllocationFailure { ndigits }
        })?;

        trace!(negative, ndigits, "created integer writer");
        Ok(IntegerWriter { negative, digits })
    }

    /// Build an integer from a copy of `digits`, given in native layout
    pub fn from_digits(negative: bool, digits: &[Digit]) -> Result<Integer> {
        let mut writer = IntegerWriter::create(negative, digits.len())?;
        writer.digits_mut().copy_from_slice(digits);
        writer.finish()
    }

    /// Sign requested at creation
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of digits in the buffer
    pub fn ndigits(&self) -> usize {
        self.digits.len()
    }

    /// The digit buffer
    pub fn digits(&self) -> &[Digit] {
        &self.digits.digits
    }

    /// The digit buffer, to be filled in the native layout
    ///
    /// Every digit must be less than 2<sup>BITS_PER_DIGIT</sup>; unused
    /// most-significant digits must be left zero.
    ///
    pub fn digits_mut(&mut self) -> &mut [Digit] {
        &mut self.digits.digits
    }

    /// Validate the digits and build the integer
    ///
    /// Significant zero digits are ignored, and a zero result is never
    /// negative. On error the buffer is released.
    ///
    pub fn finish(self) -> Result<Integer> {
        if let Some((index, value)) = NativeRadix::find_invalid_digit(self.digits.digits.iter()) {
            let value: u64 = value.as_();
            debug!(index, value, "rejected out-of-range digit");
            return Err(Error::InvalidDigit { index, value });
        }

        Ok(self.finish_trusted())
    }

    /// Build the integer without validating the digits
    ///
    /// The caller guarantees every digit is less than
    /// 2<sup>BITS_PER_DIGIT</sup>. Breaking this cannot cause undefined
    /// behavior, but conversions, ordering and equality of the resulting
    /// integer are meaningless. Debug builds check the digits.
    ///
    pub fn finish_trusted(self) -> Integer {
        debug_assert!(NativeRadix::validate_digits(self.digits.digits.iter()));

        let IntegerWriter { negative, digits } = self;
        let ndigits = digits.len();
        let value = Integer::from_digit_vec(negative, digits);

        trace!(ndigits, compact = value.is_compact(), "finished integer writer");
        value
    }

    /// Release the buffer without building an integer
    ///
    /// Dropping an unfinished writer is equivalent.
    ///
    pub fn discard(self) {
        trace!(ndigits = self.digits.len(), "discarded integer writer");
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::{BITS_PER_DIGIT, COMPACT_MAX_DIGITS};
    use crate::ErrorKind;

    const RADIX: u64 = 1 << BITS_PER_DIGIT;

    #[test]
    fn create_zeroed() {
        let w = IntegerWriter::create(true, 4).unwrap();
        assert_eq!(w.digits(), &[0, 0, 0, 0]);
        assert_eq!(w.ndigits(), 4);
        assert!(w.is_negative());
    }

    #[test]
    fn create_too_large() {
        let err = IntegerWriter::create(false, usize::MAX).unwrap_err();
        assert_eq!(err, Error::AllocationFailure { ndigits: usize::MAX });
        assert_eq!(err.kind(), ErrorKind::AllocationFailure);
    }

    #[test]
    fn finish_empty_is_zero() {
        let n = IntegerWriter::create(true, 0).unwrap().finish().unwrap();
        assert!(n.is_zero());
        assert!(!n.is_negative());
    }

    #[test]
    fn finish_negative_zeros_is_positive_zero() {
        let n = IntegerWriter::create(true, 3).unwrap().finish().unwrap();
        assert!(n.is_zero());
        assert!(!n.is_negative());
        assert_eq!(n, Integer::zero());
    }

    #[test]
    fn finish_small_value() {
        let mut w = IntegerWriter::create(true, 3).unwrap();
        w.digits_mut()[0] = 42;
        let n = w.finish().unwrap();
        assert!(n.is_compact());
        assert_eq!(n, Integer::from(-42));
    }

    #[test]
    fn finish_small_values_share_storage() {
        let a = IntegerWriter::from_digits(false, &[200]).unwrap();
        let b = IntegerWriter::from_digits(false, &[200, 0]).unwrap();
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn finish_large_value_keeps_buffer() {
        let mut w = IntegerWriter::create(false, COMPACT_MAX_DIGITS + 3).unwrap();
        let buffer = w.digits().as_ptr();
        for (i, d) in w.digits_mut().iter_mut().enumerate().take(COMPACT_MAX_DIGITS + 1) {
            *d = i as Digit + 1;
        }
        let n = w.finish().unwrap();
        assert!(!n.is_compact());
        assert_eq!(n.ndigits(), COMPACT_MAX_DIGITS + 1);
        assert_eq!(n.as_digit_array().digits().as_ptr(), buffer);
    }

    #[test]
    fn finish_rejects_out_of_range_digit() {
        let mut w = IntegerWriter::create(false, 3).unwrap();
        w.digits_mut()[0] = 1;
        w.digits_mut()[1] = RADIX as Digit;
        let err = w.finish().unwrap_err();
        assert_eq!(err, Error::InvalidDigit { index: 1, value: RADIX });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn finish_rejects_max_digit_storage() {
        let err = IntegerWriter::from_digits(true, &[Digit::MAX]).unwrap_err();
        assert_eq!(err, Error::InvalidDigit { index: 0, value: u64::from(Digit::MAX) });
    }

    #[test]
    fn finish_accepts_largest_digit() {
        let n = IntegerWriter::from_digits(false, &[(RADIX - 1) as Digit]).unwrap();
        assert_eq!(n.bits(), u64::from(BITS_PER_DIGIT));
    }

    #[test]
    fn finish_trusted_digits() {
        let mut w = IntegerWriter::create(false, 2).unwrap();
        w.digits_mut().copy_from_slice(&[3, 1]);
        let n = w.finish_trusted();
        assert_eq!(n, Integer::from(RADIX + 3));
    }

    #[test]
    fn discard_releases_writer() {
        let mut w = IntegerWriter::create(false, 16).unwrap();
        w.digits_mut()[3] = 7;
        w.discard();
    }

    #[test]
    fn discard_absent_writer() {
        let w: Option<IntegerWriter> = IntegerWriter::create(false, usize::MAX).ok();
        assert!(w.is_none());
        if let Some(w) = w {
            w.discard();
        }
    }
}
