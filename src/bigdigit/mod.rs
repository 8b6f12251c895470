//! Structs and traits describing radix-dependant bigdigits
//!
//! A bigdigit is one positional unit of an integer's magnitude. Every
//! integer in this crate stores its digits in the single native radix,
//! chosen at build time, in least-significant-first order.
//!

pub(crate) mod endian;
pub(crate) mod radix;
pub(crate) mod digitvec;

pub use self::radix::{RadixType, RADIX_2p15_u16, RADIX_2p30_u32};

use self::endian::LittleEndian;
use self::digitvec::DigitVec;


// pub type NativeRadix = ${BIGDIGITS_BITS_PER_DIGIT} == 15 ? RADIX_2p15_u16 : RADIX_2p30_u32;
include!(concat!(env!("OUT_DIR"), "/native_radix.rs"));

/// Significance ordering of all digit storage
pub(crate) type NativeOrder = LittleEndian;

/// Storage type of a single native digit
pub type Digit = <NativeRadix as RadixType>::Base;

/// Number of value bits in each native digit
pub const BITS_PER_DIGIT: u8 = <NativeRadix as RadixType>::BITS;

/// Largest digit count stored in the compact (single word) form
pub const COMPACT_MAX_DIGITS: usize = 64 / BITS_PER_DIGIT as usize;

/// Number of magnitude bits available to the compact form
pub(crate) const COMPACT_BITS: u32 = BITS_PER_DIGIT as u32 * COMPACT_MAX_DIGITS as u32;

pub(crate) type NativeDigitVec = DigitVec<NativeRadix, NativeOrder>;
