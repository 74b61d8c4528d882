use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, float_result},
        },
        value::core::{Number, Value},
    },
    util::num::round_to_precision,
};

/// Computes the square root of a number.
///
/// Decimals are computed at working precision. The square root of a negative
/// number is an `InvalidArgument` error; `sqrt(Infinity)` is `Infinity`.
///
/// # Parameters
/// - `args`: Slice containing exactly one argument.
///
/// # Returns
/// `Value::Number` holding the non-negative root.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluator::function::sqrt::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::from(144)]).unwrap(), Value::from(12));
/// assert!(sqrt(&[Value::from(-1)]).is_err());
/// ```
pub fn sqrt(args: &[Value]) -> EvalResult<Value> {
    check_arity("sqrt", args, 1)?;

    match args[0].as_number()? {
        Number::Decimal(d) => {
            d.sqrt()
             .map(|root| Value::from(round_to_precision(root)))
             .ok_or_else(|| RuntimeError::InvalidArgument { details:
                                                                format!("sqrt of negative number {d}") })
        },
        Number::Float(f) => {
            float_result(f.sqrt(), &[*f], "sqrt of negative number").map(Value::Number)
        },
    }
}
