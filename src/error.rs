//! Errors reported by digit export and import

use std::any::TypeId;

use thiserror::Error;

use crate::bigdigit::BITS_PER_DIGIT;


/// Result of fallible digit export/import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by export and import operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error
{
    /// Dynamically typed export was given something other than an integer
    #[error("expected an integer, found a value of {type_id:?}")]
    TypeMismatch { type_id: TypeId },

    /// A digit handed to the writer is not less than the radix
    #[error("digit {value} at index {index} is out of range for base 2**{bits}", bits = BITS_PER_DIGIT)]
    InvalidDigit { index: usize, value: u64 },

    /// The digit buffer could not be allocated
    #[error("cannot allocate a buffer of {ndigits} digits")]
    AllocationFailure { ndigits: usize },
}

/// Broad classification of an [`Error`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    InvalidArgument,
    AllocationFailure,
}

impl Error {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::InvalidDigit { .. } => ErrorKind::InvalidArgument,
            Error::AllocationFailure { .. } => ErrorKind::AllocationFailure,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Error::TypeMismatch { type_id: TypeId::of::<f64>() }.kind(), ErrorKind::TypeMismatch);
        assert_eq!(Error::InvalidDigit { index: 0, value: 1 << 40 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::AllocationFailure { ndigits: 3 }.kind(), ErrorKind::AllocationFailure);
    }

    #[test]
    fn display_invalid_digit() {
        let err = Error::InvalidDigit { index: 2, value: 99999999999 };
        let expected = format!("digit 99999999999 at index 2 is out of range for base 2**{}", BITS_PER_DIGIT);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn display_type_mismatch() {
        let type_id = TypeId::of::<String>();
        let err = Error::TypeMismatch { type_id };
        assert_eq!(err.to_string(), format!("expected an integer, found a value of {:?}", type_id));
    }
}
