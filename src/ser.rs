//! JSON text rendering and the serde bridge into [`Value`].
//!
//! This module provides two serializers:
//!
//! - [`Serializer`] writes a [`Value`] tree as JSON text, either minified or
//!   indented according to [`JsonOptions`]
//! - [`ValueSerializer`] is a `serde::Serializer` that turns any `Serialize`
//!   type into a [`Value`] tree
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use jsondoc::{json, to_string, to_string_pretty};
//!
//! let value = json!({"id": 1, "tags": ["a"]});
//!
//! assert_eq!(to_string(&value), r#"{"id":1,"tags":["a"]}"#);
//! assert_eq!(
//!     to_string_pretty(&value),
//!     "{\n  \"id\": 1,\n  \"tags\": [\n    \"a\"\n  ]\n}"
//! );
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use jsondoc::{json, JsonOptions, Serializer};
//!
//! let mut serializer = Serializer::new(JsonOptions::new().with_ascii_only(true));
//! serializer.write_value(&json!("café"));
//! assert_eq!(serializer.into_inner(), r#""caf\u00e9""#);
//! ```

use crate::{Array, Error, JsonOptions, Object, Result, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Writes [`Value`] trees as JSON text.
pub struct Serializer {
    output: String,
    options: JsonOptions,
    indent_level: usize,
}

impl Serializer {
    pub fn new(options: JsonOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the rendering of `value` to the output.
    pub fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Boolean(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::String(s) => self.write_string(s),
            Value::Integer(i) => self.output.push_str(&i.to_string()),
            Value::Decimal(d) => self.output.push_str(&d.to_string()),
            Value::Array(arr) => self.write_array(arr),
            Value::Object(obj) => self.write_object(obj),
        }
    }

    pub fn write_array(&mut self, arr: &Array) {
        if arr.is_empty() {
            self.output.push_str("[]");
            return;
        }
        self.output.push('[');
        self.indent_level += 1;
        for (i, element) in arr.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_value(element);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push(']');
    }

    pub fn write_object(&mut self, obj: &Object) {
        if obj.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push('{');
        self.indent_level += 1;
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_string(key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.write_value(value);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push('}');
    }

    // Newline plus indentation in pretty mode, nothing otherwise.
    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            let width = self.indent_level * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if c < '\u{0020}' => self.write_unicode_escape(c),
                c if self.options.ascii_only && !c.is_ascii() => self.write_unicode_escape(c),
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    fn write_unicode_escape(&mut self, c: char) {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            self.output.push_str(&format!("\\u{:04x}", unit));
        }
    }
}

/// Renders `value` as JSON text with the given options.
pub fn to_string_with_options(value: &Value, options: &JsonOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_value(value);
    serializer.into_inner()
}

pub(crate) fn render_array(arr: &Array, options: &JsonOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_array(arr);
    serializer.into_inner()
}

pub(crate) fn render_object(obj: &Object, options: &JsonOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_object(obj);
    serializer.into_inner()
}

/// A `serde::Serializer` producing [`Value`] trees.
///
/// Byte buffers become lower-case hex strings. Enum variants carrying data
/// become single-key objects named after the variant.
pub struct ValueSerializer;

pub struct SerializeVec {
    arr: Array,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    obj: Object,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Boolean(v))
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
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
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
        Ok(Value::Integer(BigInt::from(v)))
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

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::String(hex::encode(v)))
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
        let mut obj = Object::with_capacity(1);
        obj.set(variant, to_value(value)?);
        Ok(Value::Object(obj))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

// Wraps `value` as `{variant: value}` for data-carrying enum variants.
fn tag_variant(variant: Option<&'static str>, value: Value) -> Value {
    match variant {
        Some(name) => {
            let mut obj = Object::with_capacity(1);
            obj.set(name, value);
            Value::Object(obj)
        }
        None => value,
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            arr: Array::with_capacity(capacity),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.arr.add(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Result<Value> {
        Ok(tag_variant(self.variant, Value::Array(self.arr)))
    }
}

impl SerializeMap {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            obj: Object::with_capacity(capacity),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Result<Value> {
        Ok(tag_variant(self.variant, Value::Object(self.obj)))
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Integer(i) => i.to_string(),
            Value::Boolean(b) => b.to_string(),
            other => {
                return Err(Error::custom(format!(
                    "object keys must be strings, found {}",
                    other.value_type()
                )))
            }
        };
        self.current_key = Some(key);
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
        self.obj.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.obj.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.obj.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

/// Converts any `Serialize` type into a [`Value`] tree.
///
/// # Errors
///
/// Fails when a map key is not a string, integer or boolean, or when the
/// type's own `Serialize` impl reports an error.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[test]
    fn test_minified() {
        let value = json!({"a": [1, 2.5, null], "b": {"c": true}, "d": [], "e": {}});
        assert_eq!(
            to_string_with_options(&value, &JsonOptions::new()),
            r#"{"a":[1,2.5,null],"b":{"c":true},"d":[],"e":{}}"#
        );
    }

    #[test]
    fn test_pretty_indent() {
        let value = json!({"a": [1, {}], "b": "x"});
        let expected = "{\n   \"a\": [\n      1,\n      {}\n   ],\n   \"b\": \"x\"\n}";
        assert_eq!(
            to_string_with_options(&value, &JsonOptions::pretty().with_indent(3)),
            expected
        );
    }

    #[test]
    fn test_escapes() {
        let value = Value::from("q\"b\\n\nt\tc\u{1}e\u{7f}");
        assert_eq!(
            to_string_with_options(&value, &JsonOptions::new()),
            "\"q\\\"b\\\\n\\nt\\tc\\u0001e\u{7f}\""
        );
    }

    #[test]
    fn test_ascii_only_uses_surrogate_pairs() {
        let value = Value::from("é😀");
        let options = JsonOptions::new().with_ascii_only(true);
        assert_eq!(
            to_string_with_options(&value, &options),
            r#""\u00e9\ud83d\ude00""#
        );
    }

    #[test]
    fn test_numbers_render_canonically() {
        let value = crate::from_str("[1, -0, 1.50, 1e3, 0.0000001, 123456789012345678901234567890]")
            .unwrap();
        assert_eq!(
            value.to_json_string(),
            "[1,0,1.50,1E+3,1E-7,123456789012345678901234567890]"
        );
    }

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    enum Shape {
        Unit,
        Circle(u32),
        Pair(u8, u8),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_to_value_structs_and_enums() {
        assert_eq!(to_value(&Point { x: 1, y: -2 }).unwrap(), json!({"x": 1, "y": (-2)}));
        assert_eq!(to_value(&Shape::Unit).unwrap(), "Unit");
        assert_eq!(to_value(&Shape::Circle(3)).unwrap(), json!({"Circle": 3}));
        assert_eq!(to_value(&Shape::Pair(1, 2)).unwrap(), json!({"Pair": [1, 2]}));
        assert_eq!(
            to_value(&Shape::Rect { w: 4, h: 5 }).unwrap(),
            json!({"Rect": {"w": 4, "h": 5}})
        );
    }

    #[test]
    fn test_to_value_keys_and_bytes() {
        let mut map = BTreeMap::new();
        map.insert(2, "two");
        map.insert(10, "ten");
        assert_eq!(to_value(&map).unwrap(), json!({"2": "two", "10": "ten"}));

        let bytes = serde_bytes_like(&[0xca, 0xfe]);
        assert_eq!(bytes, "cafe");

        let mut bad = BTreeMap::new();
        bad.insert(vec![1], 1);
        assert!(to_value(&bad).is_err());
    }

    fn serde_bytes_like(bytes: &[u8]) -> Value {
        struct Bytes<'a>(&'a [u8]);
        impl Serialize for Bytes<'_> {
            fn serialize<S: ser::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
                s.serialize_bytes(self.0)
            }
        }
        to_value(&Bytes(bytes)).unwrap()
    }

    #[test]
    fn test_large_integers() {
        assert_eq!(to_value(&u128::MAX).unwrap(), u128::MAX);
        assert_eq!(to_value(&i128::MIN).unwrap(), i128::MIN);
    }
}
