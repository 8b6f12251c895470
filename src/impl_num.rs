//! Implementations of num_traits

use num_traits::{FromPrimitive, ToPrimitive};

use crate::integer::Integer;


impl ToPrimitive for Integer {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        if self.is_negative() {
            if magnitude <= i128::MIN.unsigned_abs() {
                Some((magnitude as i128).wrapping_neg())
            } else {
                None
            }
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            None
        } else {
            self.magnitude_u128()
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self.to_i128() {
            Some(n) => Some(n as f64),
            None => num_bigint::BigInt::from(self).to_f64(),
        }
    }
}

impl FromPrimitive for Integer {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(Integer::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        if n.is_finite() && n.fract() == 0.0 {
            num_bigint::BigInt::from_f64(n).map(Integer::from)
        } else {
            None
        }
    }
}
