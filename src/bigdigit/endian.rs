//! Structs and traits for generic operations on digit sequences of
//! either significance ordering

use std::fmt;
use std::hash::Hash;

use num_traits::Zero;


/// Trait to allow generic parameterization of significant digit ordering
pub trait Endianness: Copy + Clone + Default + fmt::Debug + Eq + Hash {
    /// Name to use for debugging
    const NAME: &'static str;

    /// Digit order as published in a layout descriptor:
    /// +1 most-significant first, -1 least-significant first
    const ORDER: i8;

    /// Iterate in slice from least to most significance
    fn iter_slice<D>(digits: &[D]) -> impl LeBigDigitIterator<'_, &D>;

    /// Split slice into most-significant digit and 'the rest'
    ///
    /// If slice is empty zero and empty-slice is returned
    fn split_most_significant_digit<D: Copy + Zero>(digits: &[D]) -> (D, &[D]);

    /// Split significant zeros from digits returning pair (digits, zeros)
    fn split_significant_zeros<D: Zero>(digits: &[D]) -> (&[D], &[D]);

    /// Remove any zeros at the location of highest significance, if all zeros
    /// the vector will be cleared
    fn strip_significant_zeros<D: Copy + Zero>(digits: &mut Vec<D>);

    /// return number of consecutive zeros starting at significant
    fn count_significant_zeros<D: Zero>(digits: &[D]) -> usize {
        Self::iter_slice(digits).rev().position(|d| !d.is_zero()).unwrap_or(digits.len())
    }

    /// Correctly order a slice of little endian digits
    ///
    /// Reverses for BigEndian, no-op for LittleEndian
    fn reorder_le_digits<D: Copy>(digits: &mut [D]);
}


/// Empty struct indicating most-significant bigdigit first
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian {}

/// Empty struct indicating least-significant bigdigit first
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian {}

impl Endianness for BigEndian {
    const NAME: &'static str = "BE";
    const ORDER: i8 = 1;

    fn iter_slice<D>(digits: &[D]) -> impl LeBigDigitIterator<'_, &D> {
        digits.iter().rev()
    }

    fn split_most_significant_digit<D: Copy + Zero>(digits: &[D]) -> (D, &[D]) {
        digits.split_first().map(|(&d, r)| (d, r)).unwrap_or((Zero::zero(), &[]))
    }

    fn strip_significant_zeros<D: Copy + Zero>(digits: &mut Vec<D>) {
        if let Some(idx) = digits.iter().position(|d| !d.is_zero()) {
            digits.copy_within(idx.., 0);
            digits.truncate(digits.len() - idx);
        } else {
            digits.clear();
        }
    }

    fn split_significant_zeros<D: Zero>(digits: &[D]) -> (&[D], &[D]) {
        if let Some(idx) = digits.iter().position(|d| !d.is_zero()) {
            let (sig_zeros, digits) = digits.split_at(idx);
            (digits, sig_zeros)
        } else {
            (&[], digits)
        }
    }

    fn reorder_le_digits<D: Copy>(digits: &mut [D]) {
        digits.reverse()
    }
}


impl Endianness for LittleEndian {
    const NAME: &'static str = "LE";
    const ORDER: i8 = -1;

    fn iter_slice<D>(digits: &[D]) -> impl LeBigDigitIterator<'_, &D> {
        digits.iter()
    }

    fn split_most_significant_digit<D: Copy + Zero>(digits: &[D]) -> (D, &[D]) {
        digits.split_last().map(|(&d, r)| (d, r)).unwrap_or((Zero::zero(), &[]))
    }

    fn strip_significant_zeros<D: Copy + Zero>(digits: &mut Vec<D>) {
        if let Some(idx) = digits.iter().rposition(|d| !d.is_zero()) {
            digits.truncate(idx + 1);
        } else {
            digits.clear();
        }
    }

    fn split_significant_zeros<D: Zero>(digits: &[D]) -> (&[D], &[D]) {
        if let Some(idx) = digits.iter().rposition(|d| !d.is_zero()) {
            digits.split_at(idx + 1)
        } else {
            (&[], digits)
        }
    }

    #[allow(unused_variables)]
    fn reorder_le_digits<D: Copy>(digits: &mut [D]) {
        //no-op
    }
}

/// Abstraction over fixed-size little-endian bigdigit iterators
pub trait LeBigDigitIterator<'a, D>
                    : Iterator<Item=D>
                    + ExactSizeIterator
                    + DoubleEndedIterator
{
}

impl<'a, D> LeBigDigitIterator<'a, &'a D> for std::slice::Iter<'a, D> {}
impl<'a, D> LeBigDigitIterator<'a, &'a D> for std::iter::Rev<std::slice::Iter<'a, D>> {}
