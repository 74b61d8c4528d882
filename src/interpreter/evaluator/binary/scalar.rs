use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Scope},
            utils::float_result,
        },
        value::core::Number,
    },
    util::num::{MAX_SCALE_GAP, add_decimal, leading_exponent, round_to_precision, scale_gap},
};

impl Scope {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two decimals are combined exactly and rounded to the working precision.
    /// If either operand is a float, both are converted to `f64` first.
    /// Division and modulo by zero are errors for every operand kind. The
    /// operator must be one of `Add`, `Sub`, `Mul`, `Div` or `Mod`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Number>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use calcpad::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Number},
    /// };
    ///
    /// let x = Number::Decimal(BigDecimal::from_str("0.1").unwrap());
    /// let y = Number::Decimal(BigDecimal::from_str("0.2").unwrap());
    ///
    /// let result = Scope::eval_scalar_op(BinaryOperator::Add, &x, &y).unwrap();
    /// assert_eq!(result, Number::Decimal(BigDecimal::from_str("0.3").unwrap()));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Number,
                          right: &Number)
                          -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        if matches!(op, Div | Mod) && right.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        match (left, right) {
            (Number::Decimal(a), Number::Decimal(b)) => Ok(Number::Decimal(match op {
                Add => add_decimal(a, b),
                Sub => add_decimal(a, &-b.clone()),
                Mul => round_to_precision(a * b),
                Div => round_to_precision(a / b),
                Mod => floored_mod(a, b)?,
                _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
            })),
            _ => {
                let a = left.to_f64_lossy();
                let b = right.to_f64_lossy();
                let result = match op {
                    Add => a + b,
                    Sub => a - b,
                    Mul => a * b,
                    Div => a / b,
                    Mod => a - b * (a / b).floor(),
                    _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                };
                float_result(result, &[a, b], &format!("undefined result for {a} {op} {b}"))
            },
        }
    }
}

/// Remainder whose sign follows the divisor, so `-7 % 3` is `2`.
///
/// `b` must be non-zero. Operands whose scales differ by more than
/// [`MAX_SCALE_GAP`] are an `Overflow` unless `a` is already smaller than `b`.
fn floored_mod(a: &BigDecimal, b: &BigDecimal) -> EvalResult<BigDecimal> {
    let remainder = match (leading_exponent(a), leading_exponent(b)) {
        (None, _) => return Ok(BigDecimal::zero()),
        (Some(x), Some(y)) if x < y => a.clone(),
        _ if scale_gap(a, b) > MAX_SCALE_GAP => return Err(RuntimeError::Overflow),
        _ => a % b,
    };

    if !remainder.is_zero() && remainder.sign() != b.sign() {
        Ok(add_decimal(&remainder, b))
    } else {
        Ok(remainder)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn floored_mod_follows_divisor_sign() {
        assert_eq!(floored_mod(&dec("7"), &dec("3")), Ok(dec("1")));
        assert_eq!(floored_mod(&dec("-7"), &dec("3")), Ok(dec("2")));
        assert_eq!(floored_mod(&dec("7"), &dec("-3")), Ok(dec("-2")));
        assert_eq!(floored_mod(&dec("5.5"), &dec("2")), Ok(dec("1.5")));
        assert_eq!(floored_mod(&dec("6"), &dec("-3")), Ok(dec("0")));
    }

    #[test]
    fn distant_exponents_do_not_line_up() {
        let big = dec("1e99999999");
        let tiny = dec("1e-99999999");

        assert_eq!(Scope::eval_scalar_op(BinaryOperator::Add, &Number::Decimal(big.clone()),
                                         &Number::Decimal(dec("1"))),
                   Ok(Number::Decimal(big.clone())));
        assert_eq!(Scope::eval_scalar_op(BinaryOperator::Sub, &Number::Decimal(dec("1")),
                                         &Number::Decimal(big.clone())),
                   Ok(Number::Decimal(-big.clone())));
        assert_eq!(floored_mod(&tiny, &dec("7")), Ok(tiny.clone()));
        assert_eq!(floored_mod(&-tiny, &dec("7")), Ok(dec("7")));
        assert_eq!(floored_mod(&big, &dec("7")), Err(RuntimeError::Overflow));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let one = Number::Decimal(dec("1"));
        let zero = Number::Decimal(dec("0"));
        assert_eq!(Scope::eval_scalar_op(BinaryOperator::Div, &one, &zero),
                   Err(RuntimeError::DivisionByZero));
        assert_eq!(Scope::eval_scalar_op(BinaryOperator::Mod, &one, &zero),
                   Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn infinity_minus_infinity_is_invalid() {
        let inf = Number::Float(f64::INFINITY);
        assert!(matches!(Scope::eval_scalar_op(BinaryOperator::Sub, &inf, &inf),
                         Err(RuntimeError::InvalidArgument { .. })));
        assert_eq!(Scope::eval_scalar_op(BinaryOperator::Add, &inf, &Number::Decimal(dec("1"))),
                   Ok(Number::Float(f64::INFINITY)));
    }
}
