//! Normalization of raw signed digit sequences
//!
//! Trims significant zeros to obtain the true magnitude, canonicalizes
//! the sign of zero, and decides whether the magnitude is small enough
//! to be stored in the compact single-word form. Nothing here allocates
//! or copies: the trimmed digits are a sub-slice of the input.
//!

use crate::bigdigit::digitvec::DigitSlice;
use crate::bigdigit::endian::Endianness;
use crate::bigdigit::{Digit, NativeRadix, COMPACT_MAX_DIGITS};


/// Canonical view of a signed digit sequence
#[derive(Clone, Copy, Debug)]
pub(crate) struct Normalized<'a, E: Endianness> {
    /// Sign; never true for zero
    pub negative: bool,

    /// Digits with significant zeros removed
    pub digits: DigitSlice<'a, NativeRadix, E>,

    /// Magnitude as a single word, if it qualifies for the compact form
    pub compact: Option<u64>,
}

/// Normalize `digits`, ordered by `E`, with the given sign
pub(crate) fn normalize<E: Endianness>(negative: bool, digits: &[Digit]) -> Normalized<'_, E> {
    let digits = DigitSlice::<NativeRadix, E>::from_slice(digits).trim_significant_zeros();

    let compact = if digits.len() <= COMPACT_MAX_DIGITS {
        digits.to_u64()
    } else {
        None
    };

    Normalized {
        negative: negative && !digits.is_empty(),
        digits: digits,
        compact: compact,
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::endian::{BigEndian, LittleEndian};
    use crate::bigdigit::BITS_PER_DIGIT;

    fn large_le() -> Vec<Digit> {
        let mut digits = vec![1; COMPACT_MAX_DIGITS + 2];
        digits.extend([0, 0, 0]);
        digits
    }

    #[test]
    fn empty_is_positive_zero() {
        let n = normalize::<LittleEndian>(true, &[]);
        assert!(!n.negative);
        assert!(n.digits.is_empty());
        assert_eq!(n.compact, Some(0));
    }

    #[test]
    fn all_zeros_is_positive_zero() {
        let n = normalize::<LittleEndian>(true, &[0, 0, 0]);
        assert!(!n.negative);
        assert!(n.digits.is_empty());
        assert_eq!(n.compact, Some(0));
    }

    #[test]
    fn trims_significant_zeros_little_endian() {
        let n = normalize::<LittleEndian>(true, &[5, 1, 0, 0]);
        assert!(n.negative);
        assert_eq!(n.digits.digits, &[5, 1]);
        assert_eq!(n.compact, Some((1 << BITS_PER_DIGIT) + 5));
    }

    #[test]
    fn trims_significant_zeros_big_endian() {
        let n = normalize::<BigEndian>(false, &[0, 0, 1, 5]);
        assert!(!n.negative);
        assert_eq!(n.digits.digits, &[1, 5]);
        assert_eq!(n.compact, Some((1 << BITS_PER_DIGIT) + 5));
    }

    #[test]
    fn trimmed_view_borrows_input() {
        let input = large_le();
        let n = normalize::<LittleEndian>(false, &input);
        assert_eq!(n.digits.digits.as_ptr(), input.as_ptr());
        assert_eq!(n.digits.len(), COMPACT_MAX_DIGITS + 2);
        assert_eq!(n.compact, None);
    }

    #[test]
    fn compact_boundary() {
        let mut digits = vec![0; COMPACT_MAX_DIGITS];
        *digits.last_mut().unwrap() = 1;
        assert!(normalize::<LittleEndian>(false, &digits).compact.is_some());

        digits.push(1);
        assert!(normalize::<LittleEndian>(false, &digits).compact.is_none());
    }

    #[test]
    fn idempotent() {
        let input = large_le();
        let first = normalize::<LittleEndian>(true, &input);
        let second = normalize::<LittleEndian>(first.negative, first.digits.digits);
        assert_eq!(first.digits.digits, second.digits.digits);
        assert_eq!(first.negative, second.negative);
        assert_eq!(first.compact, second.compact);
    }

    #[test]
    fn already_canonical_is_unchanged() {
        let input = [3, 2, 1];
        let n = normalize::<LittleEndian>(false, &input);
        assert_eq!(n.digits.digits, &input);
    }
}
