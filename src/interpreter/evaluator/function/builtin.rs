use bigdecimal::RoundingMode;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, float_result},
        },
        value::core::{Number, Value},
    },
    util::num::{decimal_to_i64_exact, round_to_scale},
};

/// Most digits `round` accepts on either side of the decimal point.
const MAX_ROUND_DIGITS: i64 = 1000;

/// Applies a unary `f64` function to a numeric value.
///
/// The generated functions accept exactly one argument, compute in floating
/// point and turn finite results back into decimals. A `NaN` result from a
/// non-`NaN` argument is an `InvalidArgument` error.
///
/// Non-numeric arguments produce an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let r = sin(&[Value::from(0)]).unwrap();
/// assert_eq!(r, Value::from(0));
///
/// assert!(calcpad::interpreter::evaluator::function::builtin::asin(&[Value::from(2)]).is_err());
/// ```
macro_rules! float_builtin {
    ($fname:ident, $float_fn:ident) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1)?;

            let x = args[0].as_number()?.to_f64_lossy();
            float_result(x.$float_fn(), &[x], concat!(stringify!($fname), " is undefined here"))
                .map(Value::Number)
        }
    };
}

float_builtin!(exp, exp);
float_builtin!(sin, sin);
float_builtin!(cos, cos);
float_builtin!(tan, tan);
float_builtin!(asin, asin);
float_builtin!(acos, acos);
float_builtin!(atan, atan);

/// Returns the absolute value of a number.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// assert_eq!(abs(&[Value::from(-4)]).unwrap(), Value::from(4));
/// ```
pub fn abs(args: &[Value]) -> EvalResult<Value> {
    check_arity("abs", args, 1)?;

    Ok(Value::Number(match args[0].as_number()? {
                         Number::Decimal(d) => Number::Decimal(d.abs()),
                         Number::Float(f) => Number::Float(f.abs()),
                     }))
}

/// Rounds a number to an integer using the rounding direction of `name`.
///
/// `name` is `"ceil"` or `"floor"`. Non-finite numbers are returned
/// unchanged.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluator::function::builtin::unary_round, value::core::Value};
///
/// let v = Value::from(bigdecimal::BigDecimal::from(-7) / bigdecimal::BigDecimal::from(2));
///
/// assert_eq!(unary_round("floor", &[v.clone()]).unwrap(), Value::from(-4));
/// assert_eq!(unary_round("ceil", &[v]).unwrap(), Value::from(-3));
/// ```
pub fn unary_round(name: &str, args: &[Value]) -> EvalResult<Value> {
    check_arity(name, args, 1)?;

    let mode = match name {
        "ceil" => RoundingMode::Ceiling,
        "floor" => RoundingMode::Floor,
        _ => {
            return Err(RuntimeError::UnknownFunction { name: name.to_string() });
        },
    };

    Ok(Value::Number(match args[0].as_number()? {
                         Number::Decimal(d) => Number::Decimal(round_to_scale(d, 0, mode)),
                         Number::Float(f) => Number::Float(*f),
                     }))
}

/// Rounds a number to `digits` decimal places, half away from zero.
///
/// `digits` defaults to `0` and may be negative to round to tens, hundreds
/// and so on. It must be a whole number of at most 1000 in magnitude.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcpad::interpreter::{evaluator::function::builtin::round, value::core::Value};
///
/// let x = Value::from(BigDecimal::from_str("2.345").unwrap());
///
/// assert_eq!(round(&[x.clone()]).unwrap(), Value::from(2));
/// assert_eq!(round(&[x, Value::from(2)]).unwrap(),
///            Value::from(BigDecimal::from_str("2.35").unwrap()));
/// assert_eq!(round(&[Value::from(1250), Value::from(-2)]).unwrap(), Value::from(1300));
/// ```
pub fn round(args: &[Value]) -> EvalResult<Value> {
    let digits = match args.get(1) {
        None => 0,
        Some(value) => round_digits(value.as_number()?)?,
    };

    Ok(Value::Number(match args.first().ok_or_else(|| arity_error(args))?.as_number()? {
                         Number::Decimal(d) => {
                             Number::Decimal(round_to_scale(d, digits, RoundingMode::HalfUp))
                         },
                         Number::Float(f) => Number::Float(*f),
                     }))
}

fn round_digits(digits: &Number) -> EvalResult<i64> {
    let Number::Decimal(d) = digits else {
        return Err(RuntimeError::InvalidArgument { details: "round digits must be finite".to_string() });
    };
    let digits = decimal_to_i64_exact(d).ok_or_else(|| {
                     RuntimeError::InvalidArgument { details: format!("round digits must be a whole number, got {d}") }
                 })?;
    if digits.unsigned_abs() > MAX_ROUND_DIGITS.unsigned_abs() {
        return Err(RuntimeError::Overflow);
    }
    Ok(digits)
}

fn arity_error(args: &[Value]) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { name:  "round".to_string(),
                                          found: args.len(), }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn round_half_away_from_zero() {
        let v = Value::from(BigDecimal::from_str("-2.5").unwrap());
        assert_eq!(round(&[v]).unwrap(), Value::from(-3));
    }

    #[test]
    fn rounding_extreme_exponents() {
        let big = Value::from(BigDecimal::from_str("1e99999999").unwrap());
        let tiny = Value::from(BigDecimal::from_str("-1e-99999999").unwrap());

        assert_eq!(unary_round("ceil", &[big.clone()]).unwrap(), big);
        assert_eq!(unary_round("floor", &[tiny.clone()]).unwrap(), Value::from(-1));
        assert_eq!(unary_round("ceil", &[tiny.clone()]).unwrap(), Value::from(0));
        assert_eq!(round(&[tiny, Value::from(2)]).unwrap(), Value::from(0));
    }

    #[test]
    fn round_rejects_fractional_digits() {
        let v = Value::from(BigDecimal::from_str("0.5").unwrap());
        assert!(matches!(round(&[Value::from(1), v]),
                         Err(RuntimeError::InvalidArgument { .. })));
    }

    #[test]
    fn float_builtins_pass_infinity() {
        let inf = Value::Number(Number::Float(f64::INFINITY));
        assert_eq!(exp(&[inf.clone()]).unwrap(), inf);
        assert_eq!(abs(&[Value::Number(Number::Float(f64::NEG_INFINITY))]).unwrap(), inf);
        assert!(sin(&[inf]).is_err());
    }

    #[test]
    fn booleans_are_rejected() {
        assert_eq!(abs(&[Value::Bool(true)]),
                   Err(RuntimeError::ExpectedNumber { found: "boolean" }));
    }
}
