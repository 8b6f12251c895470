//! Shared instances of frequently used small integers

use lazy_static::*;

use crate::integer::{Integer, Magnitude};

/// Number of cached negative integers: -1 ..= -NEG_CACHED
pub const NEG_CACHED: u64 = 5;

/// Largest cached positive integer
pub const POS_CACHED: u64 = 256;

lazy_static! {
    static ref SMALL_INTS: Vec<Integer> = {
        let negative = (1..=NEG_CACHED).rev().map(|n| Integer::new_uncached(true, Magnitude::Compact(n)));
        let positive = (0..=POS_CACHED).map(|n| Integer::new_uncached(false, Magnitude::Compact(n)));
        negative.chain(positive).collect()
    };
}

/// Shared instance of the given value, if it is cached
pub(crate) fn get(negative: bool, magnitude: u64) -> Option<Integer> {
    let index = if negative {
        NEG_CACHED.checked_sub(magnitude)?
    } else if magnitude <= POS_CACHED {
        NEG_CACHED + magnitude
    } else {
        return None;
    };
    Some(SMALL_INTS[index as usize].clone())
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cache_bounds() {
        assert!(get(true, NEG_CACHED).is_some());
        assert!(get(true, NEG_CACHED + 1).is_none());
        assert!(get(false, POS_CACHED).is_some());
        assert!(get(false, POS_CACHED + 1).is_none());
    }

    #[test]
    fn cached_values_are_correct() {
        for n in 1..=NEG_CACHED {
            let i = get(true, n).unwrap();
            assert!(i.is_negative());
            assert_eq!(i.magnitude_u128(), Some(u128::from(n)));
        }
        for n in 0..=POS_CACHED {
            let i = get(false, n).unwrap();
            assert!(!i.is_negative());
            assert_eq!(i.magnitude_u128(), Some(u128::from(n)));
        }
    }

    #[test]
    fn cached_values_share_storage() {
        let a = get(false, 42).unwrap();
        let b = get(false, 42).unwrap();
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn negative_zero_maps_to_zero() {
        let z = get(true, 0).unwrap();
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }
}
