//! Ordered, index-addressed JSON arrays.
//!
//! [`Array`] owns its elements. Positional access is bounds checked and
//! reports [`Error::IndexOutOfRange`] instead of panicking:
//!
//! ```rust
//! use jsondoc::{Array, Error};
//!
//! let mut arr = Array::new();
//! arr.add(1).add("two").add_null();
//!
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.get(1).unwrap(), "two");
//! assert_eq!(arr.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
//! ```

use crate::{Error, Result, Value};
use std::slice;
use std::vec;

/// An ordered sequence of owned [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Array(Vec<Value>);

impl Array {
    #[must_use]
    pub fn new() -> Self {
        Array(Vec::new())
    }

    /// Creates an empty array with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        let len = self.len();
        self.0
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Returns the element at `index` for in-place mutation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.len();
        self.0
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Replaces the element at `index`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= len()`. The array is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Array;
    ///
    /// let mut arr: Array = vec![1, 2, 3].into_iter().collect();
    /// arr.set(1, "b").unwrap();
    /// assert_eq!(arr.to_string(), r#"[1,"b",3]"#);
    /// assert!(arr.set(3, 4).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<&mut Self> {
        *self.get_mut(index)? = value.into();
        Ok(self)
    }

    /// Replaces the element at `index` with `null`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn set_null(&mut self, index: usize) -> Result<&mut Self> {
        self.set(index, Value::Null)
    }

    /// Appends one value.
    ///
    /// A NaN or infinite `f32`/`f64` is appended as `null`. Use
    /// `Decimal::try_from` or [`Json::new_decimal`](crate::provider::Json::new_decimal)
    /// to reject non-finite floats instead.
    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.0.push(value.into());
        self
    }

    pub fn add_null(&mut self) -> &mut Self {
        self.add(Value::Null)
    }

    /// Appends every value of `values`, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Array;
    ///
    /// let mut arr = Array::new();
    /// arr.add(0).append(vec![1, 2]).append(["x", "y"]);
    /// assert_eq!(arr.to_string(), r#"[0,1,2,"x","y"]"#);
    /// ```
    pub fn append<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.0.extend(values.into_iter().map(Into::into));
        self
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index >= self.len() {
            return Err(Error::index_out_of_range(index, self.len()));
        }
        Ok(self.0.remove(index))
    }

    /// Returns `true` if some element is structurally equal to `needle`.
    ///
    /// Numbers compare by value, so an integer needle finds an equal decimal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::{json, Value};
    ///
    /// let arr = jsondoc::from_str(r#"[3.0, "x", true, [1]]"#).unwrap();
    /// let arr = arr.as_array().unwrap();
    ///
    /// assert!(arr.contains(&3));
    /// assert!(arr.contains("x"));
    /// assert!(arr.contains(&true));
    /// assert!(arr.contains(&json!([1])));
    /// assert!(!arr.contains(&Value::Null));
    /// ```
    pub fn contains<T: ?Sized>(&self, needle: &T) -> bool
    where
        Value: PartialEq<T>,
    {
        self.0.iter().any(|v| v == needle)
    }

    #[must_use]
    pub fn contains_null(&self) -> bool {
        self.0.iter().any(Value::is_null)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.0.iter_mut()
    }

    /// Borrows the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::ser::render_array(self, &crate::JsonOptions::new()))
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(values)
    }
}

impl From<Array> for Vec<Value> {
    fn from(arr: Array) -> Self {
        arr.0
    }
}

impl<T: Into<Value>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> Extend<T> for Array {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Decimal;

    #[test]
    fn test_bounds() {
        let empty = Array::new();
        assert_eq!(empty.get(0), Err(Error::index_out_of_range(0, 0)));

        let arr: Array = vec![1, 2].into_iter().collect();
        assert!(arr.get(1).is_ok());
        assert_eq!(arr.get(2), Err(Error::index_out_of_range(2, 2)));
        assert_eq!(
            arr.get(usize::MAX),
            Err(Error::index_out_of_range(usize::MAX, 2))
        );
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut arr: Array = vec!["a", "b", "c"].into_iter().collect();
        arr.set(1, 42).unwrap().set_null(2).unwrap();
        assert_eq!(arr.get(0).unwrap(), "a");
        assert_eq!(arr.get(1).unwrap(), 42);
        assert!(arr.get(2).unwrap().is_null());
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn test_failed_set_leaves_array_unchanged() {
        let mut arr: Array = vec![1].into_iter().collect();
        assert!(arr.set(1, 2).is_err());
        assert_eq!(arr, Array::from(vec![Value::from(1)]));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut arr = Array::new();
        arr.append(Vec::<Value>::new());
        assert!(arr.is_empty());
        arr.append(vec![3, 1, 2]);
        let seen: Vec<i32> = arr.iter().map(|v| v.to_number().unwrap()).collect();
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[test]
    fn test_contains_compares_numbers_by_value() {
        let mut arr = Array::new();
        arr.add(Decimal::from(3)).add(2.5);
        assert!(arr.contains(&3));
        assert!(arr.contains(&3u8));
        assert!(arr.contains(&Value::from(3)));
        assert!(arr.contains(&2.5));
        assert!(!arr.contains(&4));
        assert!(!arr.contains("3"));
    }

    #[test]
    fn test_contains_null() {
        let mut arr = Array::new();
        arr.add(false);
        assert!(!arr.contains_null());
        arr.add_null();
        assert!(arr.contains_null());
    }

    #[test]
    fn test_non_finite_floats_append_null() {
        let mut arr = Array::new();
        arr.add(f64::NAN).add(f32::NEG_INFINITY).add(0.5);
        assert_eq!(arr.to_string(), "[null,null,0.5]");
        assert!(Decimal::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_remove() {
        let mut arr: Array = vec![1, 2, 3].into_iter().collect();
        assert_eq!(arr.remove(0).unwrap(), 1);
        assert_eq!(arr.len(), 2);
        assert!(arr.remove(2).is_err());
    }
}
