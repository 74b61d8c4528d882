use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Scope},
            utils::float_result,
        },
        value::core::Number,
    },
    util::num::{MAX_EXPONENT, decimal_to_i64_exact, pow_decimal, round_to_precision},
};

/// Largest decimal exponent an exact power may produce.
const MAX_RESULT_EXPONENT: i64 = 1_000_000_000_000_000;

impl Scope {
    /// Evaluates an exponentiation operation.
    ///
    /// A decimal base with a whole exponent of at most [`MAX_EXPONENT`] in
    /// magnitude is computed by repeated squaring at working precision, and a
    /// negative exponent takes the reciprocal. Every other combination is
    /// computed in floating point with `powf`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<Number>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use calcpad::interpreter::{evaluator::core::Scope, value::core::Number};
    ///
    /// let b = Number::Decimal(BigDecimal::from(2));
    /// let e = Number::Decimal(BigDecimal::from(10));
    ///
    /// let result = Scope::eval_pow(&b, &e).unwrap();
    /// assert_eq!(result, Number::Decimal(BigDecimal::from(1024)));
    /// ```
    pub fn eval_pow(base: &Number, exponent: &Number) -> EvalResult<Number> {
        if let (Number::Decimal(b), Number::Decimal(e)) = (base, exponent)
           && let Some(n) = decimal_to_i64_exact(e)
           && n.unsigned_abs() <= MAX_EXPONENT.unsigned_abs()
        {
            return exact_pow(b, n);
        }

        let b = base.to_f64_lossy();
        let e = exponent.to_f64_lossy();
        float_result(b.powf(e), &[b, e], &format!("{b} ^ {e} is not a real number"))
    }
}

/// Computes `base ^ exponent` for a whole exponent.
fn exact_pow(base: &BigDecimal, exponent: i64) -> EvalResult<Number> {
    if exponent == 0 {
        return Ok(Number::Decimal(BigDecimal::one()));
    }
    if base.is_zero() {
        return if exponent < 0 {
            Err(RuntimeError::DivisionByZero)
        } else {
            Ok(Number::Decimal(BigDecimal::zero()))
        };
    }

    let (_, scale) = base.as_bigint_and_exponent();
    let magnitude = i64::try_from(base.digits()).unwrap_or(i64::MAX)
                                                .saturating_sub(scale)
                                                .saturating_abs()
                                                .saturating_add(1);
    if magnitude.saturating_mul(exponent.abs()) > MAX_RESULT_EXPONENT {
        return Err(RuntimeError::Overflow);
    }

    let power = pow_decimal(base, exponent.unsigned_abs());
    if exponent > 0 {
        Ok(Number::Decimal(power))
    } else {
        Ok(Number::Decimal(round_to_precision(BigDecimal::one() / power)))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> Number {
        Number::Decimal(BigDecimal::from_str(s).unwrap())
    }

    #[test]
    fn negative_integer_exponent_is_reciprocal() {
        assert_eq!(Scope::eval_pow(&dec("2"), &dec("-2")), Ok(dec("0.25")));
    }

    #[test]
    fn zero_base() {
        assert_eq!(Scope::eval_pow(&dec("0"), &dec("0")), Ok(dec("1")));
        assert_eq!(Scope::eval_pow(&dec("0"), &dec("3")), Ok(dec("0")));
        assert_eq!(Scope::eval_pow(&dec("0"), &dec("-1")), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn fractional_exponent_of_negative_base_is_invalid() {
        assert!(matches!(Scope::eval_pow(&dec("-8"), &dec("0.5")),
                         Err(RuntimeError::InvalidArgument { .. })));
    }

    #[test]
    fn huge_exponent_falls_back_to_float() {
        assert_eq!(Scope::eval_pow(&dec("10"), &dec("1e10")), Ok(Number::Float(f64::INFINITY)));
    }
}
