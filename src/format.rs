//! Text format and number model
//!
//! This module documents the JSON text accepted and produced by the built-in
//! [`TextProvider`](crate::provider::TextProvider), and how numbers map onto
//! the value model.
//!
//! # Input
//!
//! The parser accepts exactly one RFC 8259 document, surrounded by optional
//! whitespace (space, tab, line feed, carriage return). It is strict:
//!
//! | Input | Result |
//! |-------|--------|
//! | `[1, 2]` | array of two integers |
//! | `[1, 2,]` | error: trailing comma |
//! | `01` | error: leading zero |
//! | `.5`, `1.`, `1e` | error: incomplete number |
//! | `"\ud83d"` | error: unpaired surrogate |
//! | `"a<TAB>b"` | error: unescaped control character |
//! | `{} {}` | error: trailing characters |
//! | `NaN`, `Infinity` | error: not JSON |
//!
//! Errors are [`Error::Malformed`](crate::Error::Malformed) with the 1-based
//! line and column and the 0-based byte offset where parsing stopped. Columns
//! count characters, not bytes.
//!
//! Arrays and objects may nest at most
//! [`JsonOptions::max_depth`](crate::JsonOptions::max_depth) levels, 128 by
//! default.
//!
//! When an object repeats a key, the last value wins and the key stays at the
//! position of its first occurrence:
//!
//! ```text
//! {"a": 1, "b": 2, "a": 3}   →   {"a":3,"b":2}
//! ```
//!
//! # Numbers
//!
//! JSON has one number syntax. The value model keeps two variants so nothing
//! is lost on the way in:
//!
//! | Literal | Variant | Stored as |
//! |---------|---------|-----------|
//! | `42`, `-0`, `123456789012345678901234567890` | `Integer` | `BigInt` |
//! | `1.50` | `Decimal` | unscaled `150`, scale `2` |
//! | `1e3` | `Decimal` | unscaled `1`, scale `-3` |
//! | `2.5E-7` | `Decimal` | unscaled `25`, scale `8` |
//!
//! Integer and decimal values compare by numeric value, so `3`, `3.0` and
//! `0.3e1` are all equal, but the variant and the scale are kept for output.
//!
//! ## Reading numbers
//!
//! [`Value::to_number`](crate::Value::to_number) never rounds, truncates or
//! wraps. It returns the exact value or
//! [`Error::PrecisionLoss`](crate::Error::PrecisionLoss):
//!
//! | Stored | `u8` | `i16` | `f32` | `f64` |
//! |--------|------|-------|-------|-------|
//! | `300` | error | `300` | `300.0` | `300.0` |
//! | `-1` | error | `-1` | `-1.0` | `-1.0` |
//! | `3.0` | `3` | `3` | `3.0` | `3.0` |
//! | `3.5` | error | error | `3.5` | `3.5` |
//! | `0.1` | error | error | `0.1` | `0.1` |
//! | `16777217` | error | error | error | `16777217.0` |
//!
//! A float read succeeds when the nearest float, written back in its shortest
//! decimal form, equals the stored value.
//!
//! Reading a decimal as a `BigInt` expands it to full width only up to
//! [`Decimal::MAX_INTEGER_DIGITS`](crate::Decimal::MAX_INTEGER_DIGITS) digits.
//! A longer integral value such as `1e20000000` fails with
//! [`Error::PrecisionLoss`](crate::Error::PrecisionLoss).
//!
//! ## Exponent limits
//!
//! A decimal's scale is a signed 64-bit integer, equal to the number of
//! fraction digits minus the exponent. A literal whose exponent does not fit
//! in 64 bits, or whose scale would overflow, is rejected with
//! [`Error::Malformed`](crate::Error::Malformed) and the message
//! `number exponent out of range`:
//!
//! | Literal | Result |
//! |---------|--------|
//! | `1e9223372036854775807` | decimal, scale `-9223372036854775807` |
//! | `1e99999999999999999999` | error: exponent does not fit |
//! | `0.5e-9223372036854775807` | error: scale overflows |
//!
//! # Serde
//!
//! `Value` implements `Serialize` for use with other serde formats. An integer
//! is written as the narrowest of `i64`, `u64`, `i128` and `u128` that holds it,
//! and a decimal as an `f64` when that float reads back as the same value.
//! Any other number makes serialization fail with a custom error naming the
//! value, rather than changing its type or rounding it.
//!
//! # Output
//!
//! Minified output has no whitespace. Pretty output puts each element and
//! entry on its own line, indented by
//! [`JsonOptions::indent`](crate::JsonOptions::indent) spaces per level, with
//! one space after each colon. Empty containers render as `[]` and `{}` in
//! both forms.
//!
//! Integers render in plain decimal. Decimals render in plain notation when
//! the scale is positive and the value is not smaller than `1E-6`, otherwise
//! in scientific notation with an upper-case `E` and an explicit exponent
//! sign. A decimal with scale zero renders with a trailing `.0`, so it reads
//! back as a decimal:
//!
//! | Decimal | Text |
//! |---------|------|
//! | unscaled `150`, scale `2` | `1.50` |
//! | unscaled `3`, scale `0` | `3.0` |
//! | unscaled `1`, scale `-3` | `1E+3` |
//! | unscaled `1`, scale `7` | `1E-7` |
//!
//! Strings escape `"`, `\` and control characters. With
//! [`JsonOptions::ascii_only`](crate::JsonOptions::ascii_only), every
//! non-ASCII character is written as `\uXXXX`, using a surrogate pair outside
//! the basic multilingual plane.
//!
//! # Binary data
//!
//! Byte strings are stored as string values holding lower-case hex, two
//! digits per byte. Reading accepts either case and fails with
//! [`Error::NonBinaryString`](crate::Error::NonBinaryString) for odd-length or
//! non-hex text.
