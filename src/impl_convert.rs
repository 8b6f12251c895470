//! Code for implementing From/To Integers

use num_bigint::{BigInt, BigUint, Sign};

use crate::bigdigit::digitvec::regroup_bits;
use crate::bigdigit::{Digit, NativeDigitVec, BITS_PER_DIGIT};
use crate::integer::Integer;


macro_rules! impl_from_unsigned_primitive {
    ($t:ty) => {
        impl From<$t> for Integer {
            fn from(n: $t) -> Self {
                Integer::from_magnitude_u128(false, u128::from(n))
            }
        }

        impl From<&$t> for Integer {
            fn from(n: &$t) -> Self {
                Integer::from_magnitude_u128(false, u128::from(*n))
            }
        }
    };
}

macro_rules! impl_from_signed_primitive {
    ($t:ty) => {
        impl From<$t> for Integer {
            fn from(n: $t) -> Self {
                Integer::from_magnitude_u128(n < 0, i128::from(n).unsigned_abs())
            }
        }

        impl From<&$t> for Integer {
            fn from(n: &$t) -> Self {
                Integer::from_magnitude_u128(*n < 0, i128::from(*n).unsigned_abs())
            }
        }
    };
}

impl_from_unsigned_primitive!(u8);
impl_from_unsigned_primitive!(u16);
impl_from_unsigned_primitive!(u32);
impl_from_unsigned_primitive!(u64);
impl_from_unsigned_primitive!(u128);
impl_from_signed_primitive!(i8);
impl_from_signed_primitive!(i16);
impl_from_signed_primitive!(i32);
impl_from_signed_primitive!(i64);
impl_from_signed_primitive!(i128);

impl From<bool> for Integer {
    fn from(b: bool) -> Self {
        Integer::from_compact(false, u64::from(b))
    }
}


impl Integer {
    fn from_biguint_with_sign(negative: bool, n: &BigUint) -> Integer {
        let digits = regroup_bits(n.iter_u32_digits().map(u64::from), 32, u32::from(BITS_PER_DIGIT))
                    .into_iter()
                    .map(|d| d as Digit)
                    .collect();
        Integer::from_digit_vec(negative, NativeDigitVec::from_vec(digits))
    }
}

impl From<&BigUint> for Integer {
    fn from(n: &BigUint) -> Self {
        Integer::from_biguint_with_sign(false, n)
    }
}

impl From<BigUint> for Integer {
    fn from(n: BigUint) -> Self {
        Integer::from(&n)
    }
}

impl From<&BigInt> for Integer {
    fn from(n: &BigInt) -> Self {
        Integer::from_biguint_with_sign(n.sign() == Sign::Minus, n.magnitude())
    }
}

impl From<BigInt> for Integer {
    fn from(n: BigInt) -> Self {
        Integer::from(&n)
    }
}

impl From<&Integer> for BigInt {
    fn from(n: &Integer) -> Self {
        let view = n.as_digit_array();
        let words = regroup_bits(view.digits().iter().map(|&d| u64::from(d)), u32::from(BITS_PER_DIGIT), 32)
                    .into_iter()
                    .map(|w| w as u32)
                    .collect();
        let sign = if view.negative() { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, BigUint::new(words))
    }
}

impl From<Integer> for BigInt {
    fn from(n: Integer) -> Self {
        BigInt::from(&n)
    }
}
