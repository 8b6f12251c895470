//!
//! Support for serde implementations
//!
//! Integers serialize as their sign and native-layout digits.
//! Deserialization goes through [`IntegerWriter`], so digits out of
//! range for the native radix are rejected.
//!
use serde::{de, ser, Deserialize, Serialize};

use crate::bigdigit::Digit;
use crate::{Integer, IntegerWriter};


#[derive(Serialize)]
#[serde(rename = "Integer")]
struct IntegerParts<'a> {
    negative: bool,
    digits: &'a [Digit],
}

#[derive(Deserialize)]
#[serde(rename = "Integer")]
struct OwnedIntegerParts {
    negative: bool,
    digits: Vec<Digit>,
}

impl ser::Serialize for Integer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let view = self.as_digit_array();
        IntegerParts {
            negative: view.negative(),
            digits: view.digits(),
        }.serialize(serializer)
    }
}

impl<'de> de::Deserialize<'de> for Integer {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let parts = OwnedIntegerParts::deserialize(d)?;
        IntegerWriter::from_digits(parts.negative, &parts.digits).map_err(de::Error::custom)
    }
}
