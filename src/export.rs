//! Zero-copy export of an integer's digits
//!
//! A [`DigitArray`] keeps a strong reference to the exported integer,
//! so the digits it exposes stay valid and unchanged for as long as the
//! view exists, even if every other handle to the integer is dropped.
//!
//! Releasing the view is tied to ownership: [`DigitArray::free`]
//! consumes it, and dropping it has the same effect. It cannot be
//! released twice, and it is released on every exit path of the code
//! holding it, including early returns through `?`.
//!
//! Dynamically typed values are exported with
//! [`DigitArray::export_any`], which accepts an [`Integer`], any type
//! registered with [`register_integer_type`], and boxes of either.
//!

use std::any::{Any, TypeId};
use std::fmt;
use std::mem;
use std::slice;
use std::sync::{PoisonError, RwLock};

use lazy_static::lazy_static;
use num_traits::{ToPrimitive, Zero};
use tracing::{debug, trace};

use crate::bigdigit::digitvec::split_u128_into;
use crate::bigdigit::endian::Endianness;
use crate::bigdigit::{Digit, NativeOrder, NativeRadix, COMPACT_MAX_DIGITS};
use crate::integer::{Integer, Magnitude};
use crate::{Error, Result};


/// Read-only view of the sign and native-layout digits of an integer
pub struct DigitArray {
    source: Integer,
    ndigits: usize,
    /// digits of a compact source, materialized on export
    materialized: [Digit; COMPACT_MAX_DIGITS],
}

impl DigitArray {
    /// Export the digits of `value`
    ///
    /// Digits of large integers are borrowed directly from the
    /// integer's storage. Integers in the compact form are expanded
    /// into digits held inside the view.
    ///
    pub fn export<T: AsRef<Integer> + ?Sized>(value: &T) -> DigitArray {
        let source = value.as_ref().clone();
        let mut materialized = [Digit::zero(); COMPACT_MAX_DIGITS];

        let ndigits = match source.repr().magnitude {
            Magnitude::Compact(n) => {
                let count = split_u128_into::<NativeRadix>(u128::from(n), &mut materialized);
                NativeOrder::reorder_le_digits(&mut materialized[..count]);
                count
            }
            Magnitude::Digits(ref digits) => digits.len(),
        };

        trace!(negative = source.is_negative(), ndigits, "exported digit array");

        DigitArray {
            source: source,
            ndigits: ndigits,
            materialized: materialized,
        }
    }

    /// Export the digits of a dynamically typed value
    ///
    /// `value` may be an [`Integer`], a value of a type registered with
    /// [`register_integer_type`], or a `Box<dyn Any>` holding either.
    /// Anything else fails with [`Error::TypeMismatch`].
    ///
    pub fn export_any(value: &dyn Any) -> Result<DigitArray> {
        match downcast_integer(value) {
            Some(integer) => Ok(DigitArray::export(integer)),
            None => {
                debug!(type_id = ?value.type_id(), "cannot export a non-integer value");
                Err(Error::TypeMismatch { type_id: value.type_id() })
            }
        }
    }

    /// Release the view and its reference to the source integer
    pub fn free(self) {
        trace!(ndigits = self.ndigits, "freed digit array");
    }

    /// True if the exported integer is negative; false for zero
    #[inline]
    pub fn negative(&self) -> bool {
        self.source.is_negative()
    }

    /// Number of digits; zero for the integer zero
    #[inline]
    pub fn ndigits(&self) -> usize {
        self.ndigits
    }

    /// The digits, in the order given by the native layout
    pub fn digits(&self) -> &[Digit] {
        match self.source.repr().magnitude {
            Magnitude::Compact(_) => &self.materialized[..self.ndigits],
            Magnitude::Digits(ref digits) => digits.digits.as_slice(),
        }
    }

    /// The digit storage as bytes, each digit in native byte order
    pub fn as_bytes(&self) -> &[u8] {
        let digits = self.digits();
        // SAFETY: Digit is a primitive unsigned integer with no padding,
        // and u8 has no alignment requirement
        unsafe {
            slice::from_raw_parts(digits.as_ptr() as *const u8, mem::size_of_val(digits))
        }
    }

    /// The integer kept alive by this view
    pub fn source(&self) -> &Integer {
        &self.source
    }
}

impl fmt::Debug for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DigitArray")
         .field("negative", &self.negative())
         .field("ndigits", &self.ndigits)
         .field("digits", &self.digits())
         .finish()
    }
}


type IntegerDowncast = for<'a> fn(&'a dyn Any) -> Option<&'a Integer>;

lazy_static! {
    static ref INTEGER_TYPES: RwLock<Vec<(TypeId, IntegerDowncast)>> = RwLock::new(Vec::new());
}

fn downcast_as<T: AsRef<Integer> + Any>(value: &dyn Any) -> Option<&Integer> {
    value.downcast_ref::<T>().map(AsRef::as_ref)
}

/// Let [`DigitArray::export_any`] accept values of type `T`
///
/// Registering the same type again has no effect.
///
pub fn register_integer_type<T: AsRef<Integer> + Any>() {
    let type_id = TypeId::of::<T>();
    let mut types = INTEGER_TYPES.write().unwrap_or_else(PoisonError::into_inner);
    if types.iter().all(|&(id, _)| id != type_id) {
        types.push((type_id, downcast_as::<T>));
        trace!(type_name = std::any::type_name::<T>(), "registered integer type");
    }
}

/// The integer inside `value`, if it has one
fn downcast_integer(value: &dyn Any) -> Option<&Integer> {
    if let Some(integer) = value.downcast_ref::<Integer>() {
        return Some(integer);
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Any>>() {
        return downcast_integer(&**boxed);
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Any + Send>>() {
        return downcast_integer(&**boxed);
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Any + Send + Sync>>() {
        return downcast_integer(&**boxed);
    }

    let types = INTEGER_TYPES.read().unwrap_or_else(PoisonError::into_inner);
    let downcast = types.iter()
                        .find(|&&(id, _)| id == value.type_id())
                        .map(|&(_, downcast)| downcast)?;
    downcast(value)
}


/// Result of [`Integer::export`]
#[derive(Debug)]
pub enum IntegerExport {
    /// Value fits a signed 64-bit integer
    Int64(i64),

    /// Value needs the full digit array
    Digits(DigitArray),
}

impl IntegerExport {
    pub(crate) fn new(value: &Integer) -> IntegerExport {
        match value.to_i64() {
            Some(n) => IntegerExport::Int64(n),
            None => IntegerExport::Digits(DigitArray::export(value)),
        }
    }

    /// Release any digit array held by this export
    pub fn free(self) {
        if let IntegerExport::Digits(array) = self {
            array.free();
        }
    }

    /// The value, if exported as a 64-bit integer
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            IntegerExport::Int64(n) => Some(n),
            IntegerExport::Digits(_) => None,
        }
    }

    /// The digit array, if exported as digits
    pub fn digit_array(&self) -> Option<&DigitArray> {
        match *self {
            IntegerExport::Int64(_) => None,
            IntegerExport::Digits(ref array) => Some(array),
        }
    }
}
