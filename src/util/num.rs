use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::{One, ToPrimitive, Zero};

/// Number of significant digits kept after an inexact decimal operation.
pub const PRECISION: u64 = 64;
/// Largest exponent magnitude accepted by exact integer exponentiation.
pub const MAX_EXPONENT: i64 = 1_000_000_000;
/// Largest scale difference an exact remainder will line up.
pub const MAX_SCALE_GAP: u64 = 100_000;

/// Rounds a decimal to [`PRECISION`] significant digits.
///
/// Values that already fit are returned unchanged, so exact results such as
/// `0.1 + 0.2` keep their scale.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcpad::util::num::round_to_precision;
///
/// let third = BigDecimal::from(1) / BigDecimal::from(3);
/// assert_eq!(round_to_precision(third).digits(), 64);
///
/// let exact = BigDecimal::from_str("0.3").unwrap();
/// assert_eq!(round_to_precision(exact.clone()), exact);
/// ```
#[must_use]
pub fn round_to_precision(value: BigDecimal) -> BigDecimal {
    if value.digits() > PRECISION {
        value.with_prec(PRECISION)
    } else {
        value
    }
}

/// Converts a finite `f64` into a decimal using its shortest round-trip
/// representation, so `0.1_f64` becomes exactly `0.1`.
///
/// ## Returns
/// - `Some(BigDecimal)`: For finite input.
/// - `None`: For `NaN` and infinities, which have no decimal form.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcpad::util::num::f64_to_decimal;
///
/// assert_eq!(f64_to_decimal(0.1),
///            Some(BigDecimal::from_str("0.1").unwrap()));
/// assert_eq!(f64_to_decimal(f64::INFINITY), None);
/// ```
#[must_use]
pub fn f64_to_decimal(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&format!("{value:e}")).ok()
}

/// Converts a decimal to the nearest finite `f64`.
///
/// Returns `None` when the magnitude is outside the `f64` range.
#[must_use]
pub fn decimal_to_f64(value: &BigDecimal) -> Option<f64> {
    value.to_f64().filter(|f| f.is_finite())
}

/// Returns the value as an `i64` if and only if it is a whole number that
/// fits.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcpad::util::num::decimal_to_i64_exact;
///
/// assert_eq!(decimal_to_i64_exact(&BigDecimal::from_str("3.000").unwrap()), Some(3));
/// assert_eq!(decimal_to_i64_exact(&BigDecimal::from_str("3.5").unwrap()), None);
/// ```
#[must_use]
pub fn decimal_to_i64_exact(value: &BigDecimal) -> Option<i64> {
    let (_, scale) = value.as_bigint_and_exponent();
    let integer_digits = i64::try_from(value.digits()).ok()?.checked_sub(scale)?;
    if integer_digits > 19 || !is_whole(value) {
        return None;
    }
    value.to_i64()
}

/// Whether the decimal has no fractional part.
#[must_use]
pub fn is_whole(value: &BigDecimal) -> bool {
    let (_, scale) = value.as_bigint_and_exponent();
    if scale <= 0 || value.is_zero() {
        return true;
    }
    match leading_exponent(value) {
        Some(exponent) if exponent >= 0 => value.with_scale(0) == *value,
        _ => false,
    }
}

/// Power of ten of the leading digit, so `1234` gives `3` and `0.05` gives
/// `-2`. Zero has no leading digit.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcpad::util::num::leading_exponent;
///
/// assert_eq!(leading_exponent(&BigDecimal::from(1234)), Some(3));
/// assert_eq!(leading_exponent(&BigDecimal::from_str("0.05").unwrap()), Some(-2));
/// assert_eq!(leading_exponent(&BigDecimal::from_str("1e99999999").unwrap()), Some(99_999_999));
/// assert_eq!(leading_exponent(&BigDecimal::from(0)), None);
/// ```
#[must_use]
pub fn leading_exponent(value: &BigDecimal) -> Option<i64> {
    if value.is_zero() {
        return None;
    }
    let (_, scale) = value.as_bigint_and_exponent();
    i64::try_from(value.digits()).ok()?.checked_sub(scale)?.checked_sub(1)
}

/// Difference between the scales of two decimals, which is the number of
/// digits one of them gains when exact addition or remainder lines them up.
#[must_use]
pub fn scale_gap(a: &BigDecimal, b: &BigDecimal) -> u64 {
    let (_, a_scale) = a.as_bigint_and_exponent();
    let (_, b_scale) = b.as_bigint_and_exponent();
    a_scale.abs_diff(b_scale)
}

/// Adds two decimals at working precision.
///
/// An operand whose leading digit sits more than [`PRECISION`] places below
/// the other's cannot change the rounded sum, so the larger operand is
/// returned without lining the two up.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcpad::util::num::add_decimal;
///
/// let big = BigDecimal::from_str("1e99999999").unwrap();
/// assert_eq!(add_decimal(&big, &BigDecimal::from(1)), big);
///
/// let sum = add_decimal(&BigDecimal::from_str("0.1").unwrap(),
///                       &BigDecimal::from_str("0.2").unwrap());
/// assert_eq!(sum, BigDecimal::from_str("0.3").unwrap());
/// ```
#[must_use]
pub fn add_decimal(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    match (leading_exponent(a), leading_exponent(b)) {
        (None, _) => round_to_precision(b.clone()),
        (_, None) => round_to_precision(a.clone()),
        (Some(x), Some(y)) if x.abs_diff(y) > PRECISION + 2 => {
            round_to_precision(if x > y { a.clone() } else { b.clone() })
        },
        _ => round_to_precision(a + b),
    }
}

/// Rounds a decimal to `scale` places after the decimal point.
///
/// A value with no digits past `scale` is returned as is. A value whose
/// leading digit lies below the first dropped place rounds straight to zero
/// or a single unit of the last kept place, depending on `mode`.
///
/// Only `Ceiling`, `Floor` and the half modes are meaningful for that
/// shortcut; other modes round such values to zero.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::{BigDecimal, RoundingMode};
/// use calcpad::util::num::round_to_scale;
///
/// let x = BigDecimal::from_str("2.345").unwrap();
/// assert_eq!(round_to_scale(&x, 2, RoundingMode::HalfUp),
///            BigDecimal::from_str("2.35").unwrap());
///
/// let tiny = BigDecimal::from_str("1e-99999999").unwrap();
/// assert_eq!(round_to_scale(&tiny, 0, RoundingMode::Ceiling), BigDecimal::from(1));
/// assert_eq!(round_to_scale(&-tiny, 0, RoundingMode::Ceiling), BigDecimal::from(0));
/// ```
#[must_use]
pub fn round_to_scale(value: &BigDecimal, scale: i64, mode: RoundingMode) -> BigDecimal {
    let (_, current) = value.as_bigint_and_exponent();
    let Some(exponent) = leading_exponent(value) else {
        return value.clone();
    };
    if current <= scale {
        return value.clone();
    }

    if exponent < -scale.saturating_add(1) {
        let unit = match (mode, value.sign()) {
            (RoundingMode::Ceiling, Sign::Plus) => 1,
            (RoundingMode::Floor, Sign::Minus) => -1,
            _ => 0,
        };
        return BigDecimal::new(BigInt::from(unit), scale);
    }

    value.with_scale_round(scale, mode)
}

/// Raises a decimal to a non-negative integer power by repeated squaring.
///
/// Intermediate products are rounded to [`PRECISION`] digits so large
/// exponents stay bounded in size.
#[must_use]
pub fn pow_decimal(base: &BigDecimal, exponent: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut square = base.clone();
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = round_to_precision(&result * &square);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = round_to_precision(&square * &square);
        }
    }

    result
}
