//! Implementation of std::fmt traits & other stringification functions

use std::fmt;

use num_bigint::BigInt;

use crate::integer::{Integer, Magnitude};


impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.repr().magnitude {
            Magnitude::Compact(n) => {
                let digits = n.to_string();
                f.pad_integral(!self.is_negative(), "", &digits)
            }
            Magnitude::Digits(_) => fmt::Display::fmt(&BigInt::from(self), f),
        }
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Integer(\"{}\")", self)
    }
}
