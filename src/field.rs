//! Field value representation.
//!
//! Redirect fields carry either text or a number. The closed variant keeps
//! the field store type-checked while still accepting the open-ended
//! key/value pairs the hosted checkout allows.

use std::fmt;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use serde_json::Value;

use crate::error::CheckoutError;

/// A single field value, text or numeric.
///
/// Values are stored exactly as supplied. Rendering uses [`fmt::Display`],
/// which is identity-preserving: `Decimal::new(4221, 2)` renders as `42.21`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A string payload, stored verbatim.
    Text(String),
    /// A numeric payload with exact decimal representation.
    Number(Decimal),
}

impl FieldValue {
    /// Returns the kind of this value, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "a string",
            Self::Number(_) => "a number",
        }
    }

    /// Returns the text payload, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric payload, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => number.fmt(f),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Decimal> for FieldValue {
    fn from(number: Decimal) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for FieldValue {
    fn from(number: i32) -> Self {
        Self::Number(Decimal::from(number))
    }
}

impl From<i64> for FieldValue {
    fn from(number: i64) -> Self {
        Self::Number(Decimal::from(number))
    }
}

impl From<u32> for FieldValue {
    fn from(number: u32) -> Self {
        Self::Number(Decimal::from(number))
    }
}

impl From<u64> for FieldValue {
    fn from(number: u64) -> Self {
        Self::Number(Decimal::from(number))
    }
}

impl TryFrom<&Value> for FieldValue {
    type Error = CheckoutError;

    /// Converts a JSON value into a field value.
    ///
    /// Strings become [`FieldValue::Text`] and numbers become
    /// [`FieldValue::Number`]. Booleans, null, arrays, and objects have no
    /// field representation and are rejected at this boundary.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Number(number) => number
                .to_string()
                .parse::<Decimal>()
                .map(Self::Number)
                .map_err(|_| CheckoutError::UnsupportedValue { kind: "an out-of-range number" }),
            other => Err(CheckoutError::UnsupportedValue { kind: json_kind(other) }),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(number) => {
                if number.scale() == 0 {
                    if let Some(integer) = number.to_i64() {
                        return serializer.serialize_i64(integer);
                    }
                }
                serializer.serialize_f64(number.to_f64().unwrap_or_default())
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldValueVisitor;

        impl Visitor<'_> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string or a number")
            }

            fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Text(text.to_owned()))
            }

            fn visit_string<E>(self, text: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Text(text))
            }

            fn visit_i64<E>(self, number: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(Decimal::from(number)))
            }

            fn visit_u64<E>(self, number: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(Decimal::from(number)))
            }

            fn visit_f64<E>(self, number: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                // f64 Display is the shortest round-trip form, so typical
                // literals like 42.21 parse to the exact decimal.
                format!("{number}")
                    .parse::<Decimal>()
                    .map(FieldValue::Number)
                    .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
