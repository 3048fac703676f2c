//! The numeric view of a value and exact narrowing to native types.
//!
//! JSON has a single untyped number syntax. This crate stores every integer
//! literal as a [`BigInt`] and every literal with a fraction or exponent as a
//! [`Decimal`], so parsing never loses information. Reading a number back as a
//! Rust primitive goes through [`FromNumeric`], which either returns the exact
//! value or fails with [`Error::PrecisionLoss`]:
//!
//! ```rust
//! use jsondoc::{Error, Value};
//!
//! let value = Value::from(300);
//! assert_eq!(value.to_number::<i16>().unwrap(), 300);
//! assert!(matches!(value.to_number::<u8>(), Err(Error::PrecisionLoss { target: "u8", .. })));
//! ```
//!
//! ## Float targets
//!
//! `f32` and `f64` reads succeed when the stored number survives a round trip
//! through the target format: the nearest float, written back in its shortest
//! decimal form, must be numerically equal to the stored value. `0.1` reads as
//! `0.1f64`; `0.1000000000000000000001` does not.

use crate::{Decimal, Error, Result};
use num_bigint::BigInt;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// A borrowed view over the two numeric variants of [`Value`](crate::Value).
///
/// Numerics compare by value across variants: an integer `3` equals a decimal
/// `3.0`.
#[derive(Clone, Copy, Debug)]
pub enum Numeric<'a> {
    Integer(&'a BigInt),
    Decimal(&'a Decimal),
}

impl<'a> Numeric<'a> {
    /// Kind name reported when a numeric read finds a non-numeric value.
    pub const KIND: &'static str = "number";

    /// Returns `true` if the numeric value has no fractional part, regardless
    /// of which variant stores it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Value;
    ///
    /// let value = jsondoc::from_str("4.0").unwrap();
    /// assert!(value.as_numeric().unwrap().is_integral());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_integral(&self) -> bool {
        match self {
            Numeric::Integer(_) => true,
            Numeric::Decimal(d) => d.is_integral(),
        }
    }

    /// Returns `true` if the value is stored as the integer variant.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Numeric::Integer(_))
    }

    /// Reads the value as `T`, failing if it cannot be represented exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrecisionLoss`] naming `T` when the value is out of
    /// range, fractional for an integer target, or not round-trippable for a
    /// float target.
    pub fn to<T: FromNumeric>(&self) -> Result<T> {
        match self {
            Numeric::Integer(i) => T::from_integer(i),
            Numeric::Decimal(d) => T::from_decimal(d),
        }
    }

    /// Widens to a decimal. Never fails.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        match self {
            Numeric::Integer(i) => Decimal::from(*i),
            Numeric::Decimal(d) => (*d).clone(),
        }
    }

    fn as_decimal(&self) -> Cow<'a, Decimal> {
        match *self {
            Numeric::Integer(i) => Cow::Owned(Decimal::from(i)),
            Numeric::Decimal(d) => Cow::Borrowed(d),
        }
    }
}

impl PartialEq for Numeric<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Numeric<'_> {}

impl PartialOrd for Numeric<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Numeric<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Numeric::Integer(a), Numeric::Integer(b)) => a.cmp(b),
            _ => self.as_decimal().cmp(&other.as_decimal()),
        }
    }
}

impl fmt::Display for Numeric<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(i) => write!(f, "{}", i),
            Numeric::Decimal(d) => write!(f, "{}", d),
        }
    }
}

/// Exact conversion from canonical numeric storage to a Rust type.
///
/// Implemented for every primitive integer and float type, and for the
/// arbitrary-precision [`BigInt`] and [`Decimal`] widenings.
pub trait FromNumeric: Sized {
    /// Type name reported in [`Error::PrecisionLoss`].
    const TARGET: &'static str;

    fn from_integer(value: &BigInt) -> Result<Self>;

    fn from_decimal(value: &Decimal) -> Result<Self>;
}

// No value with a leading digit past 10^39 fits in 128 bits.
const MAX_INT_EXPONENT: i128 = 39;

macro_rules! impl_from_numeric_int {
    ($($ty:ty),*) => {
        $(
            impl FromNumeric for $ty {
                const TARGET: &'static str = stringify!($ty);

                fn from_integer(value: &BigInt) -> Result<Self> {
                    <$ty>::try_from(value).map_err(|_| Error::precision_loss(Self::TARGET, value))
                }

                fn from_decimal(value: &Decimal) -> Result<Self> {
                    let loss = || Error::precision_loss(Self::TARGET, value);
                    if !value.is_zero() && value.adjusted_exponent() > MAX_INT_EXPONENT {
                        return Err(loss());
                    }
                    let integer = value.to_integer().ok_or_else(loss)?;
                    <$ty>::try_from(&integer).map_err(|_| loss())
                }
            }
        )*
    };
}

impl_from_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Past these exponents every non-zero value overflows or underflows both
// float formats.
const FLOAT_EXPONENT_RANGE: std::ops::RangeInclusive<i128> = -400..=400;

macro_rules! impl_from_numeric_float {
    ($($ty:ty),*) => {
        $(
            impl FromNumeric for $ty {
                const TARGET: &'static str = stringify!($ty);

                fn from_integer(value: &BigInt) -> Result<Self> {
                    Self::from_decimal(&Decimal::from(value))
                }

                fn from_decimal(value: &Decimal) -> Result<Self> {
                    let loss = || Error::precision_loss(Self::TARGET, value);
                    if value.is_zero() {
                        return Ok(0.0);
                    }
                    if !FLOAT_EXPONENT_RANGE.contains(&value.adjusted_exponent()) {
                        return Err(loss());
                    }

                    let candidate: $ty = value.to_string().parse().map_err(|_| loss())?;
                    if !candidate.is_finite() {
                        return Err(loss());
                    }
                    let back: Decimal = candidate.to_string().parse().map_err(|_| loss())?;
                    if &back == value {
                        Ok(candidate)
                    } else {
                        Err(loss())
                    }
                }
            }
        )*
    };
}

impl_from_numeric_float!(f32, f64);

impl FromNumeric for BigInt {
    const TARGET: &'static str = "BigInt";

    fn from_integer(value: &BigInt) -> Result<Self> {
        Ok(value.clone())
    }

    /// Fails with [`Error::PrecisionLoss`] for fractional values and for
    /// integers longer than [`Decimal::MAX_INTEGER_DIGITS`] digits.
    fn from_decimal(value: &Decimal) -> Result<Self> {
        value
            .to_integer()
            .ok_or_else(|| Error::precision_loss(Self::TARGET, value))
    }
}

impl FromNumeric for Decimal {
    const TARGET: &'static str = "Decimal";

    fn from_integer(value: &BigInt) -> Result<Self> {
        Ok(Decimal::from(value))
    }

    fn from_decimal(value: &Decimal) -> Result<Self> {
        Ok(value.clone())
    }
}
