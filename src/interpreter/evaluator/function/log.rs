use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, float_result},
        },
        value::core::Value,
    },
};

/// Computes the logarithm of a value, natural by default.
///
/// Accepts `value` and an optional `base`:
/// `log(value, base) = ln(value) / ln(base)`.
///
/// A base of `1` is a division by zero. Non-positive values are outside the
/// domain and produce `InvalidArgument`, except that `log(0)` is
/// `-Infinity`.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// // log_2(8) = 3
/// let result = log(&[Value::from(8), Value::from(2)]).unwrap();
/// assert_eq!(result, Value::from(3));
///
/// assert!(log(&[Value::from(8), Value::from(1)]).is_err());
/// ```
pub fn log(args: &[Value]) -> EvalResult<Value> {
    let x = to_f64(args.first().ok_or_else(|| arity_error("log", args))?)?;

    let Some(base) = args.get(1) else {
        return float_result(x.ln(), &[x], "log of negative number").map(Value::Number);
    };
    let base = to_f64(base)?;
    let ln_base = base.ln();
    if ln_base == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    float_result(snap_to_integer(x.ln() / ln_base), &[x, base], "log of negative number")
        .map(Value::Number)
}

/// Base-10 logarithm.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluator::function::log::log10, value::core::Value};
///
/// assert_eq!(log10(&[Value::from(1000)]).unwrap(), Value::from(3));
/// ```
pub fn log10(args: &[Value]) -> EvalResult<Value> {
    check_arity("log10", args, 1)?;
    let x = args[0].as_number()?.to_f64_lossy();
    float_result(snap_to_integer(x.log10()), &[x], "log10 of negative number").map(Value::Number)
}

/// Base-2 logarithm.
pub fn log2(args: &[Value]) -> EvalResult<Value> {
    check_arity("log2", args, 1)?;
    let x = args[0].as_number()?.to_f64_lossy();
    float_result(snap_to_integer(x.log2()), &[x], "log2 of negative number").map(Value::Number)
}

fn to_f64(value: &Value) -> EvalResult<f64> {
    Ok(value.as_number()?.to_f64_lossy())
}

/// Removes the rounding noise of `ln(a) / ln(b)` when the exact answer is an
/// integer, so `log(8, 2)` is `3` rather than `2.9999999999999996`.
fn snap_to_integer(x: f64) -> f64 {
    let nearest = x.round();
    if x.is_finite() && (x - nearest).abs() < 1e-12 * nearest.abs().max(1.0) {
        nearest
    } else {
        x
    }
}

fn arity_error(name: &str, args: &[Value]) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                          found: args.len(), }
}
