//! Error types for the document model.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side
//! is the single [`Error`] enum below. Its variants fall into three families:
//!
//! - **Range failures**: [`Error::PrecisionLoss`] when a number does not fit the
//!   requested native type, [`Error::IndexOutOfRange`] for positional access
//! - **Variant failures**: [`Error::WrongVariant`] when the value is not of the
//!   kind the caller asked for, [`Error::NonBinaryString`] for strings that are
//!   not hex encoded
//! - **Input failures**: [`Error::Malformed`] with line, column and byte offset
//!
//! ## Examples
//!
//! ```rust
//! use jsondoc::{from_str, Error};
//!
//! let err = from_str("[1, 2").unwrap_err();
//! assert!(matches!(err, Error::Malformed { .. }));
//!
//! let value = from_str("300").unwrap();
//! let err = value.to_number::<i8>().unwrap_err();
//! assert!(matches!(err, Error::PrecisionLoss { target: "i8", .. }));
//! ```

use crate::number::Numeric;
use crate::value::ValueType;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the document model and its
/// providers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A numeric read could not represent the stored value exactly.
    #[error("precision loss: {value} cannot be represented exactly as {target}")]
    PrecisionLoss { target: &'static str, value: String },

    /// Positional array access outside `[0, len)`.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A string was read as binary but is not an even-length hex string.
    #[error("string is not a valid even-length hex string")]
    NonBinaryString,

    /// The value is not of the variant the caller asked for. `expected` names
    /// a variant or, for numeric reads, the kind `"number"`.
    #[error("expected {expected}, found {found}")]
    WrongVariant {
        expected: &'static str,
        found: ValueType,
    },

    /// Input text could not be parsed as a JSON document.
    #[error("malformed JSON at line {line}, column {column} (byte {offset}): {msg}")]
    Malformed {
        line: usize,
        column: usize,
        offset: usize,
        msg: String,
    },

    /// NaN and the infinities have no JSON representation.
    #[error("non-finite number {0} cannot be stored as a decimal")]
    NonFiniteNumber(f64),

    /// No document provider could be resolved.
    #[error("no document provider available: {0}")]
    ProviderUnavailable(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a precision loss error for the given target type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Error;
    ///
    /// let err = Error::precision_loss("u8", -1);
    /// assert!(err.to_string().contains("u8"));
    /// ```
    pub fn precision_loss<V: fmt::Display>(target: &'static str, value: V) -> Self {
        Error::PrecisionLoss {
            target,
            value: value.to_string(),
        }
    }

    /// Creates an index error for positional container access.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates a variant mismatch error.
    pub fn wrong_variant(expected: ValueType, found: ValueType) -> Self {
        Error::WrongVariant {
            expected: expected.as_str(),
            found,
        }
    }

    /// Creates a mismatch error for a numeric read of a non-numeric value.
    pub fn not_numeric(found: ValueType) -> Self {
        Error::WrongVariant {
            expected: Numeric::KIND,
            found,
        }
    }

    /// Creates a parse error carrying the position of the offending input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Error;
    ///
    /// let err = Error::malformed(3, 7, 42, "unexpected character '}'");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn malformed(line: usize, column: usize, offset: usize, msg: &str) -> Self {
        Error::Malformed {
            line,
            column,
            offset,
            msg: msg.to_string(),
        }
    }

    /// Creates a provider resolution error.
    pub fn provider_unavailable(msg: &str) -> Self {
        Error::ProviderUnavailable(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader and writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised while narrowing a number.
    #[must_use]
    pub fn is_precision_loss(&self) -> bool {
        matches!(self, Error::PrecisionLoss { .. })
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
