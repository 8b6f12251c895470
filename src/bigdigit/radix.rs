//! Radix definitions
//!
//! Empty structs used to make generic algorithms over kind of radix
//!
#![allow(non_camel_case_types)]

use std::fmt;
use std::hash::Hash;


/// All the information needed to specify an integer's digit radix,
/// and methods operating on the digits
pub trait RadixType : Copy + Clone + Default + fmt::Debug + Eq + Hash {
    /// the inner type of values
    type Base
        : 'static
        + Copy
        + fmt::Debug
        + fmt::Display
        + Hash
        + num_integer::Integer
        + num_traits::PrimInt
        + num_traits::FromPrimitive
        + num_traits::AsPrimitive<u64>
        + num_traits::Zero
        + num_traits::One
        + Send
        + Sync;

    /// double wide unsigned type (capable of storing two digits)
    type BaseDouble
        : 'static
        + Copy
        + num_integer::Integer
        + num_traits::PrimInt
        + num_traits::FromPrimitive
        + num_traits::Zero
        + num_traits::One
        + num_traits::AsPrimitive<Self::Base>
        + From<u8>
        + From<Self::Base>;

    /// Number of bits in a digit (radix is 2^BITS)
    const BITS: u8;

    /// Value of the RADIX
    const RADIX: Self::BaseDouble;

    /// Check contents of iterable contains values less than the radix
    fn validate_digits<'a, I: IntoIterator<Item=&'a Self::Base>>(i: I) -> bool {
        Self::find_invalid_digit(i).is_none()
    }

    /// Index and value of the first digit not less than the radix
    fn find_invalid_digit<'a, I: IntoIterator<Item=&'a Self::Base>>(i: I) -> Option<(usize, Self::Base)> {
        i.into_iter()
         .enumerate()
         .find(|&(_, &d)| Self::BaseDouble::from(d) >= Self::RADIX)
         .map(|(idx, &d)| (idx, d))
    }

    /// Mask selecting the low BITS of a u64
    fn digit_mask() -> u64 {
        (1u64 << Self::BITS) - 1
    }

    /// Number of digits needed to hold a magnitude of `bits` bits
    fn digits_for_bits(bits: u64) -> u64 {
        num_integer::Integer::div_ceil(&bits, &u64::from(Self::BITS))
    }
}

/// Radix = 2<sup>15</sup> storage=*u16*
#[derive(Copy,Clone,Debug,Default,PartialEq,Eq,Hash)]
pub struct RADIX_2p15_u16;

/// Radix = 2<sup>30</sup> storage=*u32*
#[derive(Copy,Clone,Debug,Default,PartialEq,Eq,Hash)]
pub struct RADIX_2p30_u32;


impl RadixType for RADIX_2p15_u16 {
    type Base = u16;
    type BaseDouble = u32;

    const BITS: u8 = 15;
    const RADIX: Self::BaseDouble = 1u32 << 15;
}

impl RadixType for RADIX_2p30_u32 {
    type Base = u32;
    type BaseDouble = u64;

    const BITS: u8 = 30;
    const RADIX: Self::BaseDouble = 1u64 << 30;
}


#[cfg(test)]
mod test_validate {
    use super::*;

    macro_rules! impl_case {
        (valid $name:ident : $radix:ident ~ $values:expr) => {
            #[test]
            fn $name() {
                assert!($radix::validate_digits($values.iter()));
            }
        };
        (invalid $name:ident : $radix:ident ~ $values:expr) => {
            #[test]
            fn $name() {
                assert!(!$radix::validate_digits($values.iter()));
            }
        };
    }

    impl_case!(valid case_valid_p30: RADIX_2p30_u32 ~ [1u32, 2, 3, 4, 5, 600]);
    impl_case!(valid case_valid_p30_max: RADIX_2p30_u32 ~ [0x3fff_ffffu32, 0]);
    impl_case!(valid case_valid_empty: RADIX_2p30_u32 ~ Vec::<u32>::new());
    impl_case!(invalid case_p30_toobig: RADIX_2p30_u32 ~ [1u32, 1 << 30]);
    impl_case!(invalid case_p30_u32_max: RADIX_2p30_u32 ~ [u32::MAX]);
    impl_case!(valid case_valid_p15: RADIX_2p15_u16 ~ [0x7fffu16, 1, 0]);
    impl_case!(invalid case_p15_toobig: RADIX_2p15_u16 ~ [0x8000u16]);

    #[test]
    fn find_invalid_digit_reports_first() {
        let digits = [5u32, 1 << 30, u32::MAX];
        assert_eq!(RADIX_2p30_u32::find_invalid_digit(digits.iter()), Some((1, 1 << 30)));
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    mod radix_2p30_u32 {
        use super::*;
        use super::RADIX_2p30_u32 as Radix;

        #[test]
        fn digits_for_bits() {
            assert_eq!(Radix::digits_for_bits(0), 0);
            assert_eq!(Radix::digits_for_bits(1), 1);
            assert_eq!(Radix::digits_for_bits(30), 1);
            assert_eq!(Radix::digits_for_bits(31), 2);
            assert_eq!(Radix::digits_for_bits(3001), 101);
        }
    }

    mod radix_2p15_u16 {
        use super::*;
        use super::RADIX_2p15_u16 as Radix;

        #[test]
        fn digit_mask() {
            assert_eq!(Radix::digit_mask(), 0x7fff);
        }
    }
}
