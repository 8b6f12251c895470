// Copyright 2016-2023 Andrew Kubera
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Digit interchange for arbitrary precision integers
//!
//! An [`Integer`] is immutable and shared. Its magnitude is stored in a
//! single machine word when small, and as an array of fixed-width
//! binary digits otherwise. External code never sees that choice: it
//! reads any integer through a [`DigitArray`] and builds new integers
//! through an [`IntegerWriter`], both using the process-wide
//! [`NativeLayout`].
//!
//! Exported digits of large integers are borrowed from the integer
//! itself, and the view keeps the integer alive until it is released.
//!
//! # Example
//!
//! ```
//! use bigdigits::{Integer, IntegerWriter, native_layout};
//!
//! let layout = native_layout();
//! let n = Integer::from(-(1i128 << 100));
//!
//! let view = n.as_digit_array();
//! assert!(view.negative());
//! assert_eq!(view.ndigits(), 100 / layout.bits_per_digit as usize + 1);
//!
//! let copy = IntegerWriter::from_digits(view.negative(), view.digits()).unwrap();
//! view.free();
//! assert_eq!(copy, n);
//! ```
//!
//! Filling a writer directly:
//!
//! ```
//! use bigdigits::{Integer, IntegerWriter};
//!
//! let mut writer = IntegerWriter::create(false, 3).unwrap();
//! writer.digits_mut()[0] = 42;
//! let n = writer.finish().unwrap();
//! assert_eq!(n, Integer::from(42));
//! assert!(n.is_compact());
//! ```
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(test)]
extern crate paste;

// Digit radix, ordering & storage
mod bigdigit;
pub use bigdigit::{
    Digit,
    NativeRadix,
    RadixType,
    RADIX_2p15_u16,
    RADIX_2p30_u32,
    BITS_PER_DIGIT,
    COMPACT_MAX_DIGITS,
};

mod error;
pub use error::{Error, ErrorKind, Result};

mod layout;
pub use layout::{native_layout, NativeLayout, NATIVE_LAYOUT};

// Canonical form of digit arrays
mod compaction;

mod integer;
pub use integer::Integer;

// Cache of shared small integers
mod small_ints;

mod export;
pub use export::{register_integer_type, DigitArray, IntegerExport};

mod writer;
pub use writer::IntegerWriter;

// From<T>, To<T> impls
mod impl_convert;

// PartialEq, Ord, Hash
mod impl_cmp;

// Display, Debug
mod impl_fmt;

// Implementations of num_traits
mod impl_num;

#[cfg(feature = "serde")]
mod impl_serde;
