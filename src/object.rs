//! Insertion-ordered JSON objects.
//!
//! This module provides [`Object`], a wrapper around [`IndexMap`] that keeps
//! keys in the order they were first inserted. Overwriting an existing key
//! replaces its value in place, so the key keeps its position.
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: entries render in insertion order
//! - **O(1) lookup**: `contains_key` and `get` stay hash-based
//!
//! ## Examples
//!
//! ```rust
//! use jsondoc::Object;
//!
//! let mut obj = Object::new();
//! obj.set("a", 1).set("b", 2).set("c", 3);
//! obj.set("b", "x");
//!
//! let keys: Vec<_> = obj.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["a", "b", "c"]);
//! assert_eq!(obj.to_string(), r#"{"a":1,"b":"x","c":3}"#);
//! ```

use crate::Value;
use indexmap::map::{Iter, IterMut, Keys, Values};
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to owned [`Value`]s.
///
/// Keys compare by exact byte sequence. Two objects are equal when they hold
/// the same entries in the same order.
#[derive(Debug, Clone, Default)]
pub struct Object(IndexMap<String, Value>);

impl Object {
    /// Creates an empty `Object`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Object;
    ///
    /// let obj = Object::new();
    /// assert!(obj.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Object(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Object(IndexMap::with_capacity(capacity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value for `key`. A missing key is not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Object;
    ///
    /// let mut obj = Object::new();
    /// obj.set("key", 42);
    /// assert_eq!(obj.get("key").unwrap(), 42);
    /// assert!(obj.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Inserts `value` under `key`.
    ///
    /// A new key goes to the end. An existing key keeps its position and only
    /// its value is replaced.
    ///
    /// A NaN or infinite `f32`/`f64` is stored as `null`. Use
    /// `Decimal::try_from` or [`Json::new_decimal`](crate::provider::Json::new_decimal)
    /// to reject non-finite floats instead.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn set_null(&mut self, key: impl Into<String>) -> &mut Self {
        self.set(key, Value::Null)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key` and returns its value. Remaining entries keep their
    /// relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, String, Value> {
        self.0.iter_mut()
    }
}

// IndexMap equality ignores order.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl Eq for Object {}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::ser::render_object(self, &crate::JsonOptions::new()))
    }
}

impl From<HashMap<String, Value>> for Object {
    fn from(map: HashMap<String, Value>) -> Self {
        Object(map.into_iter().collect())
    }
}

impl From<IndexMap<String, Value>> for Object {
    fn from(map: IndexMap<String, Value>) -> Self {
        Object(map)
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}
