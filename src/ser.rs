//! Conversion of `Serialize` types into [`Value`] trees.
//!
//! [`ValueSerializer`] is a `serde::Serializer` whose output is a [`Value`].
//! It lets any `#[derive(Serialize)]` struct be rendered: structs and maps
//! become mappings (fields in declaration order), sequences and tuples
//! become arrays, and `Option::None` becomes null. Byte strings are text
//! and become a single string (invalid UTF-8 is replaced with U+FFFD).
//!
//! ## Keys
//!
//! Map keys are coerced to their string form when they are scalars, so a
//! `HashMap<u32, _>` renders with numeric tag names. Null, sequence and
//! mapping keys are rejected with [`Error::InvalidKey`].
//!
//! ## Enums
//!
//! Unit variants become the variant name as a string. Newtype, tuple and
//! struct variants become a single-entry mapping `{variant: payload}`.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_dictxml::{to_value, Value};
//!
//! #[derive(Serialize)]
//! enum Shape { Point, Circle { r: u32 } }
//!
//! assert_eq!(to_value(&Shape::Point).unwrap(), Value::from("Point"));
//! let circle = to_value(&Shape::Circle { r: 2 }).unwrap();
//! assert!(circle.as_object().unwrap().get("Circle").is_some());
//! ```

use crate::{Error, Number, Result, Value, XmlMap};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Serializer producing a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: XmlMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: XmlMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    // Byte strings are text, not sequences: they render as one element.
    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::String(String::from_utf8_lossy(v).into_owned()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = XmlMap::with_capacity(1);
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: XmlMap::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: XmlMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = XmlMap::with_capacity(1);
        map.insert(self.variant.to_string(), Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_to_string(to_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = XmlMap::with_capacity(1);
        outer.insert(self.variant.to_string(), Value::Object(self.map));
        Ok(Value::Object(outer))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Scalar keys stringify; null and collection keys have no tag name.
fn key_to_string(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(Error::invalid_key(&format!(
            "map keys must be scalars, found {}",
            key.kind()
        ))),
        scalar => Ok(scalar.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    enum Event {
        Started,
        Moved(Point),
        Pair(u8, u8),
        Renamed { from: String, to: String },
    }

    #[test]
    fn test_struct_fields_keep_declaration_order() {
        let value = to_value(&Point { x: 2, y: 1 }).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn test_numeric_keys_are_stringified() {
        let mut map = BTreeMap::new();
        map.insert(1u32, "one");
        map.insert(2u32, "two");
        let value = to_value(&map).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("1").and_then(|v| v.as_str()), Some("one"));
        assert_eq!(obj.get("2").and_then(|v| v.as_str()), Some("two"));
    }

    #[test]
    fn test_bool_and_char_keys_are_stringified() {
        let mut map = BTreeMap::new();
        map.insert(true, 1);
        assert!(to_value(&map).unwrap().as_object().unwrap().get("true").is_some());

        let mut map = BTreeMap::new();
        map.insert('c', 1);
        assert!(to_value(&map).unwrap().as_object().unwrap().get("c").is_some());
    }

    #[test]
    fn test_compound_keys_are_rejected() {
        let mut map = BTreeMap::new();
        map.insert(vec![1, 2], "pair");
        let err = to_value(&map).unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)));

        let mut map = BTreeMap::new();
        map.insert(None::<i32>, "nothing");
        assert!(matches!(to_value(&map).unwrap_err(), Error::InvalidKey(_)));
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(to_value(&Event::Started).unwrap(), Value::from("Started"));

        let moved = to_value(&Event::Moved(Point { x: 1, y: 2 })).unwrap();
        let inner = moved.as_object().unwrap().get("Moved").unwrap();
        assert_eq!(inner.as_object().unwrap().get("x"), Some(&Value::from(1)));

        let pair = to_value(&Event::Pair(3, 4)).unwrap();
        assert_eq!(
            pair.as_object().unwrap().get("Pair"),
            Some(&Value::Array(vec![Value::from(3u8), Value::from(4u8)]))
        );

        let renamed = to_value(&Event::Renamed {
            from: "a".to_string(),
            to: "b".to_string(),
        })
        .unwrap();
        let fields = renamed
            .as_object()
            .unwrap()
            .get("Renamed")
            .and_then(Value::as_object)
            .unwrap();
        assert_eq!(fields.get("to").and_then(|v| v.as_str()), Some("b"));
    }

    #[test]
    fn test_options_and_units() {
        assert_eq!(to_value(&None::<i32>).unwrap(), Value::Null);
        assert_eq!(to_value(&Some(5)).unwrap(), Value::from(5));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
    }

    #[test]
    fn test_bytes_are_text() {
        struct Blob(&'static [u8]);

        impl Serialize for Blob {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_bytes(self.0)
            }
        }

        let mut map = BTreeMap::new();
        map.insert("blob", Blob(b"hi"));
        let value = to_value(&map).unwrap();
        assert_eq!(value.as_object().unwrap().get("blob"), Some(&Value::from("hi")));

        let options = crate::XmlOptions::new("r").with_prolog(false);
        let xml = crate::to_string_with_options(&map, options).unwrap();
        assert_eq!(xml, "<r ><blob>hi</blob></r>");

        assert_eq!(
            serde::Serializer::serialize_bytes(ValueSerializer, &[0x61, 0xff]).unwrap(),
            Value::from("a\u{fffd}")
        );
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(to_value(&5u128).unwrap(), Value::from(5));
        assert!(matches!(to_value(&u128::MAX).unwrap(), Value::BigInt(_)));
        assert!(matches!(to_value(&i128::MIN).unwrap(), Value::BigInt(_)));
    }
}
