//! Implementation of comparison operations
//!
//! Integers are normalized on construction, so two integers are equal
//! exactly when their storage is equal.
//!

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::integer::{Integer, Magnitude};


impl PartialEq for Integer {
    #[inline]
    fn eq(&self, rhs: &Integer) -> bool {
        self.ptr_eq(rhs) || self.repr() == rhs.repr()
    }
}

impl Eq for Integer {}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr().hash(state);
    }
}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Integer) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(self, other),
            (true, true) => cmp_magnitude(other, self),
        }
    }
}

/// Compare absolute values
fn cmp_magnitude(a: &Integer, b: &Integer) -> Ordering {
    match (&a.repr().magnitude, &b.repr().magnitude) {
        (Magnitude::Compact(x), Magnitude::Compact(y)) => x.cmp(y),
        // digit storage is only used above the compact range
        (Magnitude::Compact(_), Magnitude::Digits(_)) => Ordering::Less,
        (Magnitude::Digits(_), Magnitude::Compact(_)) => Ordering::Greater,
        (Magnitude::Digits(x), Magnitude::Digits(y)) => {
            x.len()
             .cmp(&y.len())
             .then_with(|| x.digits.iter().rev().cmp(y.digits.iter().rev()))
        }
    }
}
