use bigdecimal::BigDecimal;
use num_bigint::Sign;

/// Auto-notation settings.
///
/// A value is rounded to `precision` significant digits. If the decimal
/// exponent of the rounded value lies in `lower_exp..upper_exp` it is written
/// in fixed-point notation, otherwise in scientific notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    /// Number of significant digits.
    pub precision: usize,
    /// Smallest exponent still written in fixed-point notation.
    pub lower_exp: i64,
    /// First exponent written in scientific notation.
    pub upper_exp: i64,
}

/// Default significant digits for displayed results.
pub const DISPLAY_PRECISION: usize = 12;
/// Default lower exponent threshold.
pub const LOWER_EXP: i64 = -20;
/// Default upper exponent threshold.
pub const UPPER_EXP: i64 = 20;

impl Default for Notation {
    fn default() -> Self {
        Self { precision: DISPLAY_PRECISION,
               lower_exp: LOWER_EXP,
               upper_exp: UPPER_EXP, }
    }
}

impl Notation {
    /// Returns the default notation with a different number of significant
    /// digits. A precision of zero is treated as one.
    #[must_use]
    pub fn with_precision(precision: usize) -> Self {
        Self { precision: precision.max(1),
               ..Self::default() }
    }
}

/// Formats a decimal in auto notation.
///
/// Rounding is half away from zero. Trailing fractional zeros are removed and
/// the exponent of scientific output always carries a sign.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcpad::interpreter::value::format::{Notation, format_decimal};
///
/// let n = Notation::default();
/// let third = BigDecimal::from_str("0.3333333333333333333").unwrap();
///
/// assert_eq!(format_decimal(&third, &n), "0.333333333333");
/// assert_eq!(format_decimal(&BigDecimal::from_str("1234567.00").unwrap(), &n), "1234567");
/// assert_eq!(format_decimal(&BigDecimal::from_str("-2.5e-25").unwrap(), &n), "-2.5e-25");
/// ```
#[must_use]
pub fn format_decimal(value: &BigDecimal, notation: &Notation) -> String {
    let (int, scale) = value.as_bigint_and_exponent();
    if int.sign() == Sign::NoSign {
        return "0".to_string();
    }
    let negative = int.sign() == Sign::Minus;
    let all_digits = int.magnitude().to_string();
    let magnitude_len = i64::try_from(all_digits.len()).unwrap_or(i64::MAX);
    let exponent = magnitude_len.saturating_sub(1).saturating_sub(scale);

    let (digits, exponent) = round_digits(&all_digits, exponent, notation.precision.max(1));

    let body = if exponent >= notation.lower_exp && exponent < notation.upper_exp {
        fixed_notation(&digits, exponent)
    } else {
        scientific_notation(&digits, exponent)
    };

    if negative { format!("-{body}") } else { body }
}

/// Formats a non-finite or plain float the same way the decimal path would.
#[must_use]
pub fn format_float(value: f64, notation: &Notation) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    crate::util::num::f64_to_decimal(value).map_or_else(|| value.to_string(),
                                                        |d| format_decimal(&d, notation))
}

/// Rounds a digit string to `precision` significant digits, half away from
/// zero, and strips trailing zeros. Returns the digits and the (possibly
/// carried) exponent of the leading digit.
fn round_digits(digits: &str, exponent: i64, precision: usize) -> (String, i64) {
    let mut kept: Vec<u8> = digits.bytes().take(precision).collect();
    let mut exponent = exponent;

    if digits.len() > precision && digits.as_bytes()[precision] >= b'5' {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            kept.truncate(precision);
            exponent += 1;
        }
    }

    while kept.len() > 1 && kept.last() == Some(&b'0') {
        kept.pop();
    }

    (String::from_utf8_lossy(&kept).into_owned(), exponent)
}

/// Writes significant digits with their decimal exponent in fixed-point form.
fn fixed_notation(digits: &str, exponent: i64) -> String {
    if exponent < 0 {
        let zeros = usize::try_from(-exponent - 1).unwrap_or(0);
        return format!("0.{}{digits}", "0".repeat(zeros));
    }

    let int_len = usize::try_from(exponent + 1).unwrap_or(usize::MAX);
    if digits.len() <= int_len {
        format!("{digits}{}", "0".repeat(int_len - digits.len()))
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

/// Writes significant digits in `d.ddde+X` form.
fn scientific_notation(digits: &str, exponent: i64) -> String {
    let (first, rest) = digits.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{first}e{sign}{}", exponent.unsigned_abs())
    } else {
        format!("{first}.{rest}e{sign}{}", exponent.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn auto(s: &str) -> String {
        format_decimal(&BigDecimal::from_str(s).unwrap(), &Notation::default())
    }

    #[test]
    fn fixed_range_is_exclusive_at_upper_threshold() {
        assert_eq!(auto("12345678901234567890"), "12345678901200000000");
        assert_eq!(auto("100000000000000000000"), "1e+20");
        assert_eq!(auto("0.00000000000000000001"), "0.00000000000000000001");
        assert_eq!(auto("0.000000000000000000001"), "1e-21");
    }

    #[test]
    fn rounding_carries_into_new_digit() {
        assert_eq!(auto("9.9999999999999"), "10");
        assert_eq!(auto("-0.99999999999951"), "-1");
        assert_eq!(auto("2.0000000000004"), "2");
    }

    #[test]
    fn custom_precision() {
        let n = Notation::with_precision(3);
        assert_eq!(format_decimal(&BigDecimal::from_str("3.14159").unwrap(), &n), "3.14");
        assert_eq!(format_decimal(&BigDecimal::from(0), &n), "0");
    }

    #[test]
    fn floats() {
        let n = Notation::default();
        assert_eq!(format_float(f64::INFINITY, &n), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY, &n), "-Infinity");
        assert_eq!(format_float(f64::NAN, &n), "NaN");
        assert_eq!(format_float(0.25, &n), "0.25");
    }
}
