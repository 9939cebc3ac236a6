//! Dynamic value representation for renderable trees.
//!
//! This module provides the [`Value`] enum, the input to the renderer. A tree
//! of values is a mapping at the top, with mappings, sequences and scalars
//! nested below it to any depth.
//!
//! ## Core Types
//!
//! - [`Value`]: mapping, sequence, or scalar (null, bool, number, string, date, bigint)
//! - [`Number`]: numeric scalars including non-finite floats
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_dictxml::{dict, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let obj = dict!({
//!     "name": "Alice",
//!     "tags": ["a", "b"]
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ## Collections vs. Scalars
//!
//! Strings are always scalars. Only [`Value::Array`] and [`Value::Object`]
//! count as collections:
//!
//! ```rust
//! use serde_dictxml::Value;
//!
//! assert!(Value::Array(vec![]).is_collection());
//! assert!(!Value::from("abc").is_collection());
//! ```

use crate::XmlMap;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed node of the input tree.
///
/// # Examples
///
/// ```rust
/// use serde_dictxml::{Value, Number};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(XmlMap),
    Date(DateTime<Utc>),
    BigInt(BigInt),
}

/// A numeric scalar.
///
/// Non-finite floats have their own variants so they render with the
/// `xs:double` lexical forms `INF`, `-INF` and `NaN`.
///
/// # Examples
///
/// ```rust
/// use serde_dictxml::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(1.0).to_string(), "1.0");
/// assert_eq!(Number::Float(2.5).to_string(), "2.5");
/// assert_eq!(Number::Infinity.to_string(), "INF");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Converts this number to an `i64` if it is integral and in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::NaN.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => f.write_str("NaN"),
            Number::Float(fl) if fl.is_infinite() => {
                f.write_str(if *fl > 0.0 { "INF" } else { "-INF" })
            }
            // Integral floats keep a fractional digit so they read as floats.
            Number::Float(fl) if fl.fract() == 0.0 => write!(f, "{:.1}", fl),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => f.write_str("INF"),
            Number::NegativeInfinity => f.write_str("-INF"),
            Number::NaN => f.write_str("NaN"),
        }
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for values that hold other values (arrays and objects).
    ///
    /// Strings, dates and every other scalar are never collections, so a
    /// string under a key always renders as one element, not one per char.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::{Value, XmlMap};
    ///
    /// assert!(Value::Array(vec![Value::from(1)]).is_collection());
    /// assert!(Value::Object(XmlMap::new()).is_collection());
    /// assert!(!Value::from("text").is_collection());
    /// assert!(!Value::Null.is_collection());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Short kind name used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "mapping",
            Value::Date(_) => "date",
            Value::BigInt(_) => "bigint",
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&XmlMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Object(_) => write!(f, "{{mapping}}"),
            Value::Date(dt) => f.write_str(&dt.to_rfc3339()),
            Value::BigInt(bi) => write!(f, "{}", bi),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Number(Number::Infinity) => serializer.serialize_f64(f64::INFINITY),
            Value::Number(Number::NegativeInfinity) => serializer.serialize_f64(f64::NEG_INFINITY),
            Value::Number(Number::NaN) => serializer.serialize_f64(f64::NAN),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Date(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Value::BigInt(bi) => serializer.serialize_str(&bi.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping, sequence or scalar")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = XmlMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        let number = if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        };
        Value::Number(number)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<XmlMap> for Value {
    fn from(value: XmlMap) -> Self {
        Value::Object(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_non_finite_floats_get_own_variants() {
        assert_eq!(Value::from(f64::INFINITY), Value::Number(Number::Infinity));
        assert_eq!(
            Value::from(f64::NEG_INFINITY),
            Value::Number(Number::NegativeInfinity)
        );
        assert_eq!(Value::from(f64::NAN), Value::Number(Number::NaN));
    }

    #[test]
    fn test_large_u64_becomes_bigint() {
        assert_eq!(Value::from(7u64), Value::Number(Number::Integer(7)));
        let big = Value::from(u64::MAX);
        assert!(matches!(big, Value::BigInt(_)));
        assert_eq!(big.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Integer(-3).to_string(), "-3");
        assert_eq!(Number::Float(0.0).to_string(), "0.0");
        assert_eq!(Number::Float(-12.0).to_string(), "-12.0");
        assert_eq!(Number::Float(0.1).to_string(), "0.1");
        assert_eq!(Number::Float(1e16).to_string(), "10000000000000000.0");
        assert_eq!(Number::Float(-1e17).to_string(), "-100000000000000000.0");
        assert_eq!(Number::Float(9007199254740993.0).to_string(), "9007199254740992.0");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-INF");
        assert_eq!(Number::NegativeInfinity.to_string(), "-INF");
    }

    #[test]
    fn test_is_collection() {
        assert!(Value::Array(vec![]).is_collection());
        assert!(Value::Object(XmlMap::new()).is_collection());
        assert!(!Value::String("abc".to_string()).is_collection());
        assert!(!Value::from(1).is_collection());
        assert!(!Value::Bool(false).is_collection());
        assert!(!Value::Null.is_collection());
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "");
        // lowercase, the XML Schema boolean form, not Python's `True`
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("a<b").to_string(), "a<b");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Object(XmlMap::new()).kind(), "mapping");
        assert_eq!(Value::Array(vec![]).kind(), "array");
        assert_eq!(Value::Null.kind(), "null");
    }
}
