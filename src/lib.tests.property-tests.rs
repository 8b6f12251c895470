// Property tests to be included by lib.rs (if enabled)

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;


mod export {
    use super::*;

    macro_rules! impl_test {
        ($t:ident) => {
            paste! { proptest! {
                #[test]
                fn [< export_then_write_ $t >](n: $t) {
                    let value = Integer::from(n);
                    let view = value.as_digit_array();
                    prop_assert_eq!(view.negative(), n < (0 as $t));
                    prop_assert!(view.digits().last().map_or(true, |&d| d != 0));

                    let copy = IntegerWriter::from_digits(view.negative(), view.digits()).unwrap();
                    prop_assert_eq!(&copy, &value);
                    prop_assert_eq!(copy.is_compact(), value.is_compact());
                    prop_assert_eq!(BigInt::from(&copy), BigInt::from(n));
                }

                #[test]
                fn [< export_is_deterministic_ $t >](n: $t) {
                    let value = Integer::from(n);
                    let a = value.as_digit_array();
                    let b = DigitArray::export(&value);
                    prop_assert_eq!(a.negative(), b.negative());
                    prop_assert_eq!(a.digits(), b.digits());
                }
            } }
        };
    }

    impl_test!(u64);
    impl_test!(u128);
    impl_test!(i64);
    impl_test!(i128);

    proptest! {
        #[test]
        fn bigint_bytes(negative: bool, bytes in prelude::prop::collection::vec(prelude::any::<u8>(), 0..200)) {
            let sign = if negative { Sign::Minus } else { Sign::Plus };
            let big = BigInt::from_bytes_le(sign, &bytes);
            let value = Integer::from(&big);

            let view = value.as_digit_array();
            prop_assert_eq!(view.ndigits(), value.ndigits());
            let copy = IntegerWriter::from_digits(view.negative(), view.digits()).unwrap();
            view.free();

            prop_assert_eq!(BigInt::from(&copy), big);
            prop_assert_eq!(copy, value);
        }

        #[test]
        fn int64_export(n: i128) {
            let value = Integer::from(n);
            match value.export() {
                IntegerExport::Int64(v) => prop_assert_eq!(Some(v), n.to_i64()),
                IntegerExport::Digits(view) => {
                    prop_assert!(n.to_i64().is_none());
                    prop_assert_eq!(view.negative(), n < 0);
                }
            }
        }
    }
}

mod writer {
    use super::*;

    proptest! {
        #[test]
        fn trailing_zeros_are_ignored(
            negative: bool,
            digits in prelude::prop::collection::vec(0..(NativeRadix::RADIX as Digit), 0..20),
            zeros in 0usize..10,
        ) {
            let a = IntegerWriter::from_digits(negative, &digits).unwrap();

            let mut padded = digits.clone();
            padded.resize(digits.len() + zeros, 0);
            let b = IntegerWriter::from_digits(negative, &padded).unwrap();

            prop_assert_eq!(&a, &b);
            prop_assert!(!(a.is_zero() && a.is_negative()));
        }

        #[test]
        fn normalize_is_idempotent(
            negative: bool,
            digits in prelude::prop::collection::vec(0..(NativeRadix::RADIX as Digit), 0..20),
        ) {
            let first = IntegerWriter::from_digits(negative, &digits).unwrap();
            let view = first.as_digit_array();
            let second = IntegerWriter::from_digits(view.negative(), view.digits()).unwrap();
            let second_view = second.as_digit_array();
            prop_assert_eq!(view.digits(), second_view.digits());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn ordering_matches_primitive(a: i128, b: i128) {
            let (x, y) = (Integer::from(a), Integer::from(b));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }
    }
}
