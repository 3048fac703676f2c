//! Arbitrary-precision decimal numbers.
//!
//! [`Decimal`] is the canonical storage for every JSON number literal that has
//! a fraction or an exponent. It is an unscaled [`BigInt`] plus a decimal scale,
//! so the value is `unscaled × 10^-scale` and nothing is ever rounded:
//!
//! ```rust
//! use jsondoc::Decimal;
//!
//! let price: Decimal = "19.990".parse().unwrap();
//! assert_eq!(price.scale(), 3);
//! assert_eq!(price.to_string(), "19.990");
//!
//! // Comparison is by numeric value, not by representation
//! let same: Decimal = "19.99".parse().unwrap();
//! assert_eq!(price, same);
//! ```
//!
//! ## Rendering
//!
//! Values render in plain notation when the scale is positive and the number is
//! not too small, otherwise in scientific notation with an upper-case `E`. An
//! integral value with scale zero renders with a trailing `.0` so it parses back
//! as a decimal and not as an integer.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A signed decimal number of unbounded magnitude and precision.
#[derive(Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

impl Decimal {
    /// Longest integer, in decimal digits, that [`Decimal::to_integer`] expands.
    pub const MAX_INTEGER_DIGITS: i128 = 100_000;

    /// Creates a decimal equal to `unscaled × 10^-scale`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Decimal;
    /// use num_bigint::BigInt;
    ///
    /// let d = Decimal::new(BigInt::from(1234), 2);
    /// assert_eq!(d.to_string(), "12.34");
    /// ```
    #[must_use]
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Decimal { unscaled, scale }
    }

    #[must_use]
    pub fn zero() -> Self {
        Decimal::new(BigInt::from(0u8), 0)
    }

    /// The unscaled integer value.
    #[inline]
    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The number of digits to the right of the decimal point. Negative scales
    /// multiply the unscaled value by a power of ten.
    #[inline]
    #[must_use]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.sign() == Sign::NoSign
    }

    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.unscaled.sign() == Sign::Minus
    }

    /// Returns `true` if the value has no fractional part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Decimal;
    ///
    /// assert!("3.00".parse::<Decimal>().unwrap().is_integral());
    /// assert!("1E+3".parse::<Decimal>().unwrap().is_integral());
    /// assert!(!"3.5".parse::<Decimal>().unwrap().is_integral());
    /// ```
    #[must_use]
    pub fn is_integral(&self) -> bool {
        if self.scale <= 0 || self.is_zero() {
            return true;
        }
        // Non-zero with more fractional digits than digits overall: |v| < 1.
        if i128::from(self.scale) >= self.digit_count() as i128 {
            return false;
        }
        match u32::try_from(self.scale) {
            Ok(scale) => (&self.unscaled % pow10(scale)).sign() == Sign::NoSign,
            Err(_) => false,
        }
    }

    /// Converts to an integer when the value is integral.
    ///
    /// Returns `None` for values with a fractional part and for integral values
    /// longer than [`Decimal::MAX_INTEGER_DIGITS`] digits, so a short literal
    /// such as `1e20000000` cannot force a huge allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Decimal;
    /// use num_bigint::BigInt;
    ///
    /// let d: Decimal = "1.5e3".parse().unwrap();
    /// assert_eq!(d.to_integer(), Some(BigInt::from(1500)));
    /// assert_eq!("1e20000000".parse::<Decimal>().unwrap().to_integer(), None);
    /// ```
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.is_zero() {
            return Some(BigInt::from(0u8));
        }
        if !self.is_integral() || self.adjusted_exponent() >= Self::MAX_INTEGER_DIGITS {
            return None;
        }
        if self.scale <= 0 {
            let exponent = u32::try_from(self.scale.unsigned_abs()).ok()?;
            Some(&self.unscaled * pow10(exponent))
        } else {
            let exponent = u32::try_from(self.scale).ok()?;
            Some(&self.unscaled / pow10(exponent))
        }
    }

    /// Creates the decimal holding the exact binary value of `value`.
    ///
    /// Unlike `Decimal::try_from(f64)`, which keeps the shortest decimal form
    /// that reads back as the same float, this expands every binary digit:
    /// `0.1` becomes `0.1000000000000000055511151231257827021181583404541015625`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteNumber`] for NaN and the infinities.
    pub fn from_f64_exact(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NonFiniteNumber(value));
        }
        if value == 0.0 {
            return Ok(Decimal::zero());
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };

        let mut unscaled = BigInt::from(mantissa);
        let scale = if exponent >= 0 {
            unscaled = unscaled << exponent as usize;
            0
        } else {
            // m × 2^-n == m × 5^n × 10^-n
            let n = exponent.unsigned_abs() as u32;
            unscaled *= BigInt::from(5u8).pow(n);
            i64::from(n)
        };

        if negative {
            unscaled = -unscaled;
        }
        Ok(Decimal::new(unscaled, scale))
    }

    /// Position of the most significant digit relative to the decimal point.
    ///
    /// `123.45` has an adjusted exponent of 2, `0.001` of -3.
    pub(crate) fn adjusted_exponent(&self) -> i128 {
        self.digit_count() as i128 - 1 - i128::from(self.scale)
    }

    fn digit_count(&self) -> usize {
        self.unscaled.magnitude().to_str_radix(10).len()
    }

    fn cmp_magnitude(&self, other: &Decimal) -> Ordering {
        match self.adjusted_exponent().cmp(&other.adjusted_exponent()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        // Same leading digit position, so the scales differ by at most the
        // digit count and the alignment factor stays small.
        let (a, b) = (self.unscaled.magnitude(), other.unscaled.magnitude());
        let shift = i128::from(self.scale) - i128::from(other.scale);
        match shift.cmp(&0) {
            Ordering::Equal => a.cmp(b),
            Ordering::Greater => a.cmp(&(b * pow10_unsigned(shift as u32))),
            Ordering::Less => (a * pow10_unsigned(shift.unsigned_abs() as u32)).cmp(b),
        }
    }
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

fn pow10_unsigned(exponent: u32) -> BigUint {
    BigUint::from(10u8).pow(exponent)
}

fn sign_rank(sign: Sign) -> i8 {
    match sign {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::zero()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.unscaled.sign(), other.unscaled.sign());
        if a != b {
            return sign_rank(a).cmp(&sign_rank(b));
        }
        match a {
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => self.cmp_magnitude(other),
            Sign::Minus => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = self.unscaled.magnitude().to_str_radix(10);
        if self.is_negative() {
            f.write_str("-")?;
        }

        let scale = i128::from(self.scale);
        let adjusted = self.adjusted_exponent();

        if scale == 0 {
            write!(f, "{}.0", coefficient)
        } else if scale > 0 && adjusted >= -6 {
            let scale = scale as usize;
            if coefficient.len() > scale {
                let (int, frac) = coefficient.split_at(coefficient.len() - scale);
                write!(f, "{}.{}", int, frac)
            } else {
                let zeros = "0".repeat(scale - coefficient.len());
                write!(f, "0.{}{}", zeros, coefficient)
            }
        } else {
            let (head, tail) = coefficient.split_at(1);
            f.write_str(head)?;
            if !tail.is_empty() {
                write!(f, ".{}", tail)?;
            }
            let sign = if adjusted >= 0 { "+" } else { "" };
            write!(f, "E{}{}", sign, adjusted)
        }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses plain or scientific notation: an optional sign, digits with an
    /// optional decimal point, and an optional `e`/`E` exponent.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::malformed(1, 1, 0, &format!("invalid decimal literal '{}'", s));

        let (mantissa, exponent) = match s.find(|c| c == 'e' || c == 'E') {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        };
        let (negative, body) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let (int_part, frac_part) = match body.find('.') {
            Some(i) => (&body[..i], &body[i + 1..]),
            None => (body, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let exponent: i64 = match exponent {
            Some(e) => e.parse().map_err(|_| invalid())?,
            None => 0,
        };

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let magnitude = BigInt::from_str(&digits).map_err(|_| invalid())?;

        let scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .ok_or_else(invalid)?;
        let unscaled = if negative { -magnitude } else { magnitude };
        Ok(Decimal::new(unscaled, scale))
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Decimal::new(value, 0)
    }
}

impl From<&BigInt> for Decimal {
    fn from(value: &BigInt) -> Self {
        Decimal::new(value.clone(), 0)
    }
}

macro_rules! impl_decimal_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Decimal {
                fn from(value: $ty) -> Self {
                    Decimal::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_decimal_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Decimal {
    type Error = Error;

    /// Keeps the shortest decimal form that reads back as the same `f64`, so
    /// `0.1` becomes the decimal `0.1`.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NonFiniteNumber(value));
        }
        value.to_string().parse()
    }
}

impl TryFrom<f32> for Decimal {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NonFiniteNumber(f64::from(value)));
        }
        value.to_string().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_keeps_scale() {
        let d = dec("1.50");
        assert_eq!(d.unscaled(), &BigInt::from(150));
        assert_eq!(d.scale(), 2);

        let d = dec("-2.5e-3");
        assert_eq!(d.unscaled(), &BigInt::from(-25));
        assert_eq!(d.scale(), 4);

        let d = dec("1.5E+3");
        assert_eq!(d.unscaled(), &BigInt::from(15));
        assert_eq!(d.scale(), -2);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Decimal>().is_err());
        assert!("-".parse::<Decimal>().is_err());
        assert!(".".parse::<Decimal>().is_err());
        assert!("1.2.3".parse::<Decimal>().is_err());
        assert!("1e".parse::<Decimal>().is_err());
        assert!("abc".parse::<Decimal>().is_err());
        assert!(matches!(
            "1x".parse::<Decimal>(),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(dec("3").to_string(), "3.0");
        assert_eq!(dec("3.0").to_string(), "3.0");
        assert_eq!(dec("-0.25").to_string(), "-0.25");
        assert_eq!(dec("0.000001").to_string(), "0.000001");
        assert_eq!(dec("0.0000001").to_string(), "1E-7");
        assert_eq!(dec("1.5e3").to_string(), "1.5E+3");
        assert_eq!(dec("12e2").to_string(), "1.2E+3");
        assert_eq!(dec("123.456").to_string(), "123.456");
    }

    #[test]
    fn test_display_parses_back_to_equal_value() {
        for s in ["3", "0.1", "-7.25e-12", "1e400", "0", "123456789.000"] {
            let d = dec(s);
            assert_eq!(dec(&d.to_string()), d, "roundtrip of {}", s);
        }
    }

    #[test]
    fn test_ordering_ignores_representation() {
        assert_eq!(dec("3.0"), dec("3"));
        assert_eq!(dec("3.000"), dec("0.3e1"));
        assert!(dec("2.99") < dec("3"));
        assert!(dec("-3") < dec("-2.99"));
        assert!(dec("-0.5") < dec("0"));
        assert!(dec("1e10") > dec("9999999999.9"));
        assert_eq!(dec("0e50"), dec("0.000"));
    }

    #[test]
    fn test_integral() {
        assert!(dec("0").is_integral());
        assert!(dec("10.000").is_integral());
        assert!(!dec("10.001").is_integral());
        assert!(!dec("0.5").is_integral());
        assert_eq!(dec("4.200e2").to_integer(), Some(BigInt::from(420)));
        assert_eq!(dec("-7.0").to_integer(), Some(BigInt::from(-7)));
        assert_eq!(dec("7.5").to_integer(), None);
    }

    #[test]
    fn test_to_integer_caps_expansion() {
        assert_eq!(dec("1e20000000").to_integer(), None);
        assert_eq!(dec("-3e100000").to_integer(), None);
        assert_eq!(dec("0e20000000").to_integer(), Some(BigInt::from(0)));

        let widest = dec("1e99999").to_integer().unwrap();
        assert_eq!(widest.to_string().len(), 100_000);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Decimal::try_from(0.1f64).unwrap().to_string(), "0.1");
        assert_eq!(Decimal::try_from(2.0f64).unwrap(), dec("2"));
        assert!(Decimal::try_from(f64::NAN).is_err());
        assert!(Decimal::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_f64_exact() {
        assert_eq!(Decimal::from_f64_exact(0.5).unwrap(), dec("0.5"));
        assert_eq!(Decimal::from_f64_exact(-6.0).unwrap(), dec("-6"));
        assert_eq!(
            Decimal::from_f64_exact(0.1).unwrap().to_string(),
            "0.1000000000000000055511151231257827021181583404541015625"
        );
        let max = BigInt::from((1u64 << 53) - 1) << 971usize;
        assert_eq!(Decimal::from_f64_exact(f64::MAX).unwrap(), Decimal::from(max));
    }
}
