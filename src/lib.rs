//! # jsondoc
//!
//! An in-memory JSON document model with lossless numbers, exact narrowing to
//! native numeric types and a fluent, conditional construction API.
//!
//! ## Key Features
//!
//! - **Closed value model**: [`Value`] has exactly seven variants, including
//!   distinct integer and decimal variants
//! - **Lossless numbers**: integers are [`BigInt`](num_bigint::BigInt),
//!   decimals are [`Decimal`] with their scale preserved
//! - **Exact narrowing**: reading `300` as `u8` is an error, never a wraparound
//! - **Conditional builders**: `add_if`, `set_if_with` and friends replace
//!   `if` blocks between insertions
//! - **Provider boundary**: parsing and rendering sit behind
//!   [`DocumentProvider`](provider::DocumentProvider), resolved explicitly
//!   from a [`Registry`](provider::Registry)
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jsondoc = "0.1"
//! ```
//!
//! ### Parsing and Reading
//!
//! ```rust
//! use jsondoc::{from_str, Error};
//!
//! let doc = from_str(r#"{"id": 300, "price": 19.990, "tags": ["a", "b"]}"#).unwrap();
//! let obj = doc.as_object().unwrap();
//!
//! assert_eq!(obj.get("id").unwrap().to_number::<u16>().unwrap(), 300);
//! assert!(matches!(
//!     obj.get("id").unwrap().to_number::<u8>(),
//!     Err(Error::PrecisionLoss { target: "u8", .. })
//! ));
//!
//! // The decimal keeps its scale through a round trip
//! assert_eq!(doc.to_json_string(), r#"{"id":300,"price":19.990,"tags":["a","b"]}"#);
//! ```
//!
//! ### Building Documents
//!
//! ```rust
//! use jsondoc::{Array, Object};
//!
//! let admin = false;
//! let mut user = Object::new();
//! user.set("name", "Alice")
//!     .set_if(admin, "role", "admin")
//!     .set("scores", {
//!         let mut scores = Array::new();
//!         scores.add(1).add(2.5).add_null_if(true);
//!         scores
//!     });
//!
//! assert_eq!(user.to_string(), r#"{"name":"Alice","scores":[1,2.5,null]}"#);
//! ```
//!
//! ### Dynamic Values with json! Macro
//!
//! ```rust
//! use jsondoc::{json, Value};
//!
//! let data = json!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "json"]
//! });
//!
//! if let Value::Object(obj) = &data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All array indexing is bounds-checked and reported as [`Error::IndexOutOfRange`]
//! - Value trees are acyclic by ownership
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`builder.rs`** - Conditional construction of a document
//! - **`numbers.rs`** - Lossless storage and exact narrowing
//! - **`providers.rs`** - Resolving a provider and threading the handle
//!
//! Run any demo with: `cargo run --example <name>`

pub mod array;
pub mod builder;
pub mod de;
pub mod decimal;
pub mod error;
pub mod format;
pub mod macros;
pub mod number;
pub mod object;
pub mod options;
pub mod provider;
pub mod ser;
pub mod value;

pub use array::Array;
pub use builder::With;
pub use de::Parser;
pub use decimal::Decimal;
pub use error::{Error, Result};
pub use number::{FromNumeric, Numeric};
pub use object::Object;
pub use options::JsonOptions;
pub use ser::{to_string_with_options, to_value, Serializer, ValueSerializer};
pub use value::{Value, ValueType};

use std::io;

/// Renders a value as minified JSON text.
///
/// # Examples
///
/// ```rust
/// use jsondoc::{json, to_string};
///
/// assert_eq!(to_string(&json!([1, "a", null])), r#"[1,"a",null]"#);
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_string_with_options(value, &JsonOptions::new())
}

/// Renders a value as JSON text indented by two spaces per level.
#[must_use]
pub fn to_string_pretty(value: &Value) -> String {
    to_string_with_options(value, &JsonOptions::pretty())
}

/// Writes a value as minified JSON text to a writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
pub fn to_writer<W>(mut writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(to_string(value).as_bytes())?;
    Ok(())
}

/// Parses a JSON document from a string.
///
/// # Examples
///
/// ```rust
/// use jsondoc::from_str;
///
/// let value = from_str("[1, 2.0]").unwrap();
/// let arr = value.as_array().unwrap();
/// assert!(arr.get(0).unwrap().is_integer());
/// assert!(arr.get(1).unwrap().is_decimal());
/// ```
///
/// # Errors
///
/// Returns [`Error::Malformed`] with line, column and byte offset if the input
/// is not exactly one JSON document.
pub fn from_str(s: &str) -> Result<Value> {
    de::parse_str(s, &JsonOptions::default())
}

/// Parses a JSON document from UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Malformed`] if the bytes are not valid UTF-8 or not a
/// valid JSON document.
pub fn from_slice(v: &[u8]) -> Result<Value> {
    de::parse_slice(v, &JsonOptions::default())
}

/// Reads an I/O stream to the end and parses it as one JSON document.
///
/// # Examples
///
/// ```rust
/// use jsondoc::from_reader;
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(b"{\"ok\": true}")).unwrap();
/// assert_eq!(value.as_object().unwrap().get("ok").unwrap(), true);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Malformed`] for invalid
/// input.
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}
