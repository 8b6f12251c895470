//! Description of the native digit layout
//!
//! Consumers reading exported digits, or filling a writer's buffer,
//! interpret the digits with this layout. It is the only layout
//! supported for export and import.
//!

use std::mem;

use crate::bigdigit::endian::Endianness;
use crate::bigdigit::{Digit, NativeOrder, BITS_PER_DIGIT};


/// Layout of the digits of every integer in this process
///
/// Orders use +1 for "most significant first" (big endian) and -1 for
/// "least significant first" (little endian).
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NativeLayout {
    /// Number of value bits in each digit
    pub bits_per_digit: u8,

    /// Size in bytes of the storage of one digit
    pub digit_size: u8,

    /// Ordering of digits within the digit array
    pub digits_order: i8,

    /// Byte order of each digit
    pub digit_endianness: i8,
}

/// The process-wide native layout
pub static NATIVE_LAYOUT: NativeLayout = NativeLayout {
    bits_per_digit: BITS_PER_DIGIT,
    digit_size: mem::size_of::<Digit>() as u8,
    digits_order: <NativeOrder as Endianness>::ORDER,
    digit_endianness: if cfg!(target_endian = "big") { 1 } else { -1 },
};

/// Return the native digit layout
#[inline]
pub fn native_layout() -> &'static NativeLayout {
    &NATIVE_LAYOUT
}

impl NativeLayout {
    /// The radix of one digit: 2<sup>bits_per_digit</sup>
    ///
    /// None if the radix does not fit a u64.
    ///
    pub fn base(&self) -> Option<u64> {
        1u64.checked_shl(u32::from(self.bits_per_digit))
    }

    /// True if the digit bits fit the digit storage and both orders
    /// are +1 or -1
    pub fn is_valid(&self) -> bool {
        let order_ok = |o: i8| o == 1 || o == -1;
        0 < self.bits_per_digit
            && u32::from(self.bits_per_digit) <= 8 * u32::from(self.digit_size)
            && order_ok(self.digits_order)
            && order_ok(self.digit_endianness)
    }
}
