//! The JSON value model.
//!
//! This module provides the [`Value`] enum, a closed set of seven variants that
//! can represent any JSON document, and [`ValueType`], the variant tag.
//!
//! ## Core Types
//!
//! - [`Value`]: null, boolean, string, integer, decimal, array or object
//! - [`ValueType`]: the tag reported by [`Value::value_type`]
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jsondoc::{json, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let integer = Value::from(42);
//! let text = Value::from("hello");
//!
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Conditional Dispatch
//!
//! The `if_*` family runs a closure only when the runtime variant matches:
//!
//! ```rust
//! use jsondoc::{json, Value};
//!
//! let mut seen = Vec::new();
//! for value in [json!(1), json!("two"), json!([3])] {
//!     value.if_integer(|i| seen.push(format!("int {}", i)));
//!     value.if_string(|s| seen.push(format!("str {}", s)));
//!     value.if_array(|a| seen.push(format!("array of {}", a.len())));
//! }
//! assert_eq!(seen, ["int 1", "str two", "array of 1"]);
//! ```
//!
//! ### Extracting Numbers
//!
//! ```rust
//! use jsondoc::Value;
//!
//! let value = Value::from(42);
//! let num = i64::try_from(&value).unwrap();
//! assert_eq!(num, 42);
//! ```
//!
//! ## Equality
//!
//! `Value` equality is structural. Numbers compare by value across the integer
//! and decimal variants, objects compare key order as well as entries.

use crate::number::{FromNumeric, Numeric};
use crate::{ser, Array, Decimal, Error, JsonOptions, Object, Result};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Any JSON value.
///
/// Containers own their children, so a value tree can never contain a cycle.
///
/// # Examples
///
/// ```rust
/// use jsondoc::{Value, ValueType};
///
/// let value = jsondoc::from_str(r#"{"id": 7, "tags": ["a", "b"]}"#).unwrap();
/// assert_eq!(value.value_type(), ValueType::Object);
///
/// let obj = value.as_object().unwrap();
/// assert_eq!(obj.get("id").unwrap().to_number::<u8>().unwrap(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    String(String),
    Integer(BigInt),
    Decimal(Decimal),
    Array(Array),
    Object(Object),
}

/// The variant tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Array,
    Boolean,
    Decimal,
    Integer,
    Null,
    Object,
    String,
}

impl ValueType {
    /// Returns the lower-case name of this variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Array => "array",
            ValueType::Boolean => "boolean",
            ValueType::Decimal => "decimal",
            ValueType::Integer => "integer",
            ValueType::Null => "null",
            ValueType::Object => "object",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the variant tag of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::String(_) => ValueType::String,
            Value::Integer(_) => ValueType::Integer,
            Value::Decimal(_) => ValueType::Decimal,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Value::Decimal(_))
    }

    /// Returns `true` for both the integer and the decimal variant.
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Decimal(_))
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

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Value;
    ///
    /// assert_eq!(Value::Boolean(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
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

    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Value::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the numeric view of an integer or decimal value.
    #[inline]
    #[must_use]
    pub fn as_numeric(&self) -> Option<Numeric<'_>> {
        match self {
            Value::Integer(i) => Some(Numeric::Integer(i)),
            Value::Decimal(d) => Some(Numeric::Decimal(d)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Reads a numeric value as `T`, exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] if the value is not a number, and
    /// [`Error::PrecisionLoss`] if it does not fit `T` without loss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::{Error, Value};
    ///
    /// let value = jsondoc::from_str("2.5").unwrap();
    /// assert_eq!(value.to_number::<f32>().unwrap(), 2.5);
    /// assert!(value.to_number::<i32>().unwrap_err().is_precision_loss());
    /// assert!(matches!(
    ///     Value::from("2.5").to_number::<f32>(),
    ///     Err(Error::WrongVariant { .. })
    /// ));
    /// ```
    pub fn to_number<T: FromNumeric>(&self) -> Result<T> {
        match self.as_numeric() {
            Some(n) => n.to(),
            None => Err(Error::not_numeric(self.value_type())),
        }
    }

    /// Decodes a hex string value into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] if the value is not a string and
    /// [`Error::NonBinaryString`] if the text is not even-length hex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::{Error, Value};
    ///
    /// let value = Value::from_binary(&[0xde, 0xad]);
    /// assert_eq!(value.as_str(), Some("dead"));
    /// assert_eq!(value.binary_value().unwrap(), vec![0xde, 0xad]);
    ///
    /// assert_eq!(Value::from("zz").binary_value(), Err(Error::NonBinaryString));
    /// ```
    pub fn binary_value(&self) -> Result<Vec<u8>> {
        match self {
            Value::String(s) => hex::decode(s).map_err(|_| Error::NonBinaryString),
            other => Err(Error::wrong_variant(ValueType::String, other.value_type())),
        }
    }

    /// Creates a string value holding the lower-case hex encoding of `bytes`.
    #[must_use]
    pub fn from_binary(bytes: &[u8]) -> Self {
        Value::String(hex::encode(bytes))
    }

    /// Takes the value out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Runs `action` if this value is an array.
    pub fn if_array<F: FnOnce(&Array)>(&self, action: F) {
        if let Value::Array(arr) = self {
            action(arr);
        }
    }

    /// Runs `action` with mutable access if this value is an array.
    pub fn if_array_mut<F: FnOnce(&mut Array)>(&mut self, action: F) {
        if let Value::Array(arr) = self {
            action(arr);
        }
    }

    pub fn if_boolean<F: FnOnce(bool)>(&self, action: F) {
        if let Value::Boolean(b) = self {
            action(*b);
        }
    }

    pub fn if_decimal<F: FnOnce(&Decimal)>(&self, action: F) {
        if let Value::Decimal(d) = self {
            action(d);
        }
    }

    pub fn if_integer<F: FnOnce(&BigInt)>(&self, action: F) {
        if let Value::Integer(i) = self {
            action(i);
        }
    }

    pub fn if_null<F: FnOnce()>(&self, action: F) {
        if self.is_null() {
            action();
        }
    }

    /// Runs `action` if this value is either numeric variant.
    pub fn if_numeric<F: FnOnce(Numeric<'_>)>(&self, action: F) {
        if let Some(n) = self.as_numeric() {
            action(n);
        }
    }

    pub fn if_object<F: FnOnce(&Object)>(&self, action: F) {
        if let Value::Object(obj) = self {
            action(obj);
        }
    }

    pub fn if_object_mut<F: FnOnce(&mut Object)>(&mut self, action: F) {
        if let Value::Object(obj) = self {
            action(obj);
        }
    }

    pub fn if_string<F: FnOnce(&str)>(&self, action: F) {
        if let Value::String(s) = self {
            action(s);
        }
    }

    /// Renders this value as minified JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::json;
    ///
    /// let value = json!({"a": [1, 2], "b": null});
    /// assert_eq!(value.to_json_string(), r#"{"a":[1,2],"b":null}"#);
    /// ```
    #[must_use]
    pub fn to_json_string(&self) -> String {
        ser::to_string_with_options(self, &JsonOptions::new())
    }

    /// Renders this value as indented JSON, two spaces per level.
    #[must_use]
    pub fn to_pretty_json_string(&self) -> String {
        ser::to_string_with_options(self, &JsonOptions::pretty())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => match (self.as_numeric(), other.as_numeric()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for Value {}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<bool> for &Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

macro_rules! impl_partial_eq_int {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    let other = BigInt::from(*other);
                    self.as_numeric() == Some(Numeric::Integer(&other))
                }
            }

            impl PartialEq<$ty> for &Value {
                fn eq(&self, other: &$ty) -> bool {
                    **self == *other
                }
            }
        )*
    };
}

impl_partial_eq_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_partial_eq_float {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    match Decimal::try_from(*other) {
                        Ok(other) => self.as_numeric() == Some(Numeric::Decimal(&other)),
                        Err(_) => false,
                    }
                }
            }

            impl PartialEq<$ty> for &Value {
                fn eq(&self, other: &$ty) -> bool {
                    **self == *other
                }
            }
        )*
    };
}

impl_partial_eq_float!(f32, f64);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => {
                if let Ok(v) = i64::try_from(i) {
                    serializer.serialize_i64(v)
                } else if let Ok(v) = u64::try_from(i) {
                    serializer.serialize_u64(v)
                } else if let Ok(v) = i128::try_from(i) {
                    serializer.serialize_i128(v)
                } else if let Ok(v) = u128::try_from(i) {
                    serializer.serialize_u128(v)
                } else {
                    Err(serde::ser::Error::custom(format!(
                        "integer {i} does not fit in a 128-bit serde integer"
                    )))
                }
            }
            Value::Decimal(d) => match f64::from_decimal(d) {
                Ok(v) => serializer.serialize_f64(v),
                Err(_) => Err(serde::ser::Error::custom(format!(
                    "decimal {d} has no exact f64 form"
                ))),
            },
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
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E>
            where
                E: de::Error,
            {
                Decimal::try_from(value)
                    .map(Value::Decimal)
                    .map_err(de::Error::custom)
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut arr = Array::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element::<Value>()? {
                    arr.add(elem);
                }
                Ok(Value::Array(arr))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut obj = Object::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    obj.set(key, value);
                }
                Ok(Value::Object(obj))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

macro_rules! impl_try_from_value_number {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<&Value> for $ty {
                type Error = Error;

                fn try_from(value: &Value) -> Result<Self> {
                    value.to_number()
                }
            }
        )*
    };
}

impl_try_from_value_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::wrong_variant(ValueType::Boolean, value.value_type()))
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::wrong_variant(ValueType::String, other.value_type())),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

macro_rules! impl_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_value_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Integer(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

/// NaN and the infinities have no JSON form and become `Null`.
impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Decimal::try_from(value).map_or(Value::Null, Value::Decimal)
    }
}

/// NaN and the infinities have no JSON form and become `Null`.
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Decimal::try_from(value).map_or(Value::Null, Value::Decimal)
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

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
