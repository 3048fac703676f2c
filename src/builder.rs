//! Conditional construction combinators.
//!
//! Documents with optional parts usually need `if` blocks between insertions.
//! The combinators here fold the condition into the call, so a whole document
//! can be written as one chain:
//!
//! ```rust
//! use jsondoc::{Object, With};
//!
//! let verbose = false;
//! let nickname: Option<&str> = None;
//!
//! let mut user = Object::new();
//! user.set("name", "Alice")
//!     .set_if(nickname.is_some(), "nickname", nickname)
//!     .set_if_with(verbose, "stats", || expensive_stats())
//!     .with(|obj| {
//!         obj.set("active", true);
//!     });
//!
//! assert_eq!(user.to_string(), r#"{"name":"Alice","active":true}"#);
//! # fn expensive_stats() -> i32 { unreachable!() }
//! ```
//!
//! Every combinator either commits its effect immediately or does nothing.
//! Suppliers passed to the `*_with` family run at most once, and only when the
//! condition holds.

use crate::{Array, Object, Value};

/// Scoped blocks over a container, for grouping related insertions.
pub trait With {
    /// Runs `block` against `self`.
    fn with<F: FnOnce(&mut Self)>(&mut self, block: F) -> &mut Self {
        block(self);
        self
    }

    /// Runs `block` against `self` only when `condition` holds.
    fn with_if<F: FnOnce(&mut Self)>(&mut self, condition: bool, block: F) -> &mut Self {
        if condition {
            block(self);
        }
        self
    }
}

impl With for Array {}

impl With for Object {}

impl Array {
    /// Appends `value` when `condition` holds.
    pub fn add_if(&mut self, condition: bool, value: impl Into<Value>) -> &mut Self {
        if condition {
            self.add(value);
        }
        self
    }

    /// Appends a `null` when `condition` holds.
    pub fn add_null_if(&mut self, condition: bool) -> &mut Self {
        self.add_if(condition, Value::Null)
    }

    /// Appends the value produced by `supplier` when `condition` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Array;
    ///
    /// let mut calls = 0;
    /// let mut arr = Array::new();
    /// arr.add_if_with(false, || { calls += 1; 1 });
    /// assert_eq!(arr.len(), 0);
    /// arr.add_if_with(true, || { calls += 1; 2 });
    /// assert_eq!(arr.len(), 1);
    /// assert_eq!(calls, 1);
    /// ```
    pub fn add_if_with<V, F>(&mut self, condition: bool, supplier: F) -> &mut Self
    where
        V: Into<Value>,
        F: FnOnce() -> V,
    {
        if condition {
            self.add(supplier());
        }
        self
    }

    /// Appends every value of `values` when `condition` holds.
    pub fn append_if<I>(&mut self, condition: bool, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        if condition {
            self.append(values);
        }
        self
    }
}

impl Object {
    /// Sets `key` to `value` when `condition` holds.
    pub fn set_if(
        &mut self,
        condition: bool,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        if condition {
            self.set(key, value);
        }
        self
    }

    pub fn set_null_if(&mut self, condition: bool, key: impl Into<String>) -> &mut Self {
        self.set_if(condition, key, Value::Null)
    }

    /// Sets `key` to the value produced by `supplier` when `condition` holds.
    pub fn set_if_with<V, F>(
        &mut self,
        condition: bool,
        key: impl Into<String>,
        supplier: F,
    ) -> &mut Self
    where
        V: Into<Value>,
        F: FnOnce() -> V,
    {
        if condition {
            self.set(key, supplier());
        }
        self
    }
}
