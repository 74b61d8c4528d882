use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::comparison::ordering_op_result, core::EvalResult, utils::numeric_args},
        value::core::{Number, Value},
    },
};

/// Computes the minimum or maximum of one or more numeric values.
///
/// Decimals are compared exactly. A `NaN` argument makes the result `NaN`.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Any non-numeric argument produces an `ExpectedNumber` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing at least one argument.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::from(3), Value::from(7), Value::from(-1)]).unwrap();
/// assert_eq!(r, Value::from(-1));
///
/// let r = min_max("max", &[Value::from(3), Value::from(7)]).unwrap();
/// assert_eq!(r, Value::from(7));
/// ```
pub fn min_max(name: &str, args: &[Value]) -> EvalResult<Value> {
    let numbers = numeric_args(args)?;
    let (first, rest) = numbers.split_first()
                               .ok_or_else(|| RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                                                                    found: 0, })?;

    let replace_if = if name == "min" {
        BinaryOperator::Less
    } else {
        BinaryOperator::Greater
    };

    let mut best: &Number = *first;
    for candidate in rest {
        if candidate.is_nan() {
            return Ok(Value::Number(Number::Float(f64::NAN)));
        }
        let ordering = match (candidate, best) {
            (Number::Decimal(a), Number::Decimal(b)) => Some(a.cmp(b)),
            (a, b) => a.to_f64_lossy().partial_cmp(&b.to_f64_lossy()),
        };
        if ordering_op_result(replace_if, ordering) {
            best = *candidate;
        }
    }

    Ok(Value::Number(best.clone()))
}
