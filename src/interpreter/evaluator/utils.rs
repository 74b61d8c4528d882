use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::BUILTIN_FUNCTIONS},
        value::core::{Number, Value},
    },
};

/// Named constants resolved when no variable of the same name is bound.
///
/// Decimal constants carry 64 significant digits.
pub const CONSTANTS: &[(&str, &str)] = &[
    ("pi", "3.141592653589793238462643383279502884197169399375105820974944592"),
    ("PI", "3.141592653589793238462643383279502884197169399375105820974944592"),
    ("e", "2.718281828459045235360287471352662497757247093699959574966967628"),
    ("E", "2.718281828459045235360287471352662497757247093699959574966967628"),
    ("tau", "6.283185307179586476925286766559005768394338798750211641949889185"),
    ("phi", "1.618033988749894848204586834365638117720309179805762862135448622"),
];

/// Returns the value of a named constant.
///
/// `Infinity` and `NaN` are the only constants that are not decimals.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluator::utils::constant, value::core::Number};
///
/// assert!(matches!(constant("pi"), Some(Number::Decimal(_))));
/// assert!(matches!(constant("Infinity"), Some(Number::Float(f)) if f.is_infinite()));
/// assert_eq!(constant("x"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<Number> {
    match name {
        "Infinity" => Some(Number::Float(f64::INFINITY)),
        "NaN" => Some(Number::Float(f64::NAN)),
        _ => CONSTANTS.iter()
                      .find(|(constant, _)| *constant == name)
                      .and_then(|(_, digits)| BigDecimal::from_str(digits).ok())
                      .map(Number::Decimal),
    }
}

/// Whether `name` can not be the target of an assignment.
///
/// Only builtin function names are reserved. Constants may be shadowed.
///
/// # Example
/// ```
/// use calcpad::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("sqrt"));
/// assert!(!is_reserved_identifier("pi"));
/// assert!(!is_reserved_identifier("total"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Checks that a builtin received exactly `expected` arguments.
///
/// # Errors
/// Returns `ArgumentCountMismatch` naming the builtin when the count differs.
pub fn check_arity<T>(name: &str, args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                                  found: args.len(), })
    }
}

/// Returns the numeric payload of every argument.
///
/// # Errors
/// Returns `ExpectedNumber` for the first non-numeric argument.
pub fn numeric_args(args: &[Value]) -> EvalResult<Vec<&Number>> {
    args.iter().map(Value::as_number).collect()
}

/// Wraps the result of a float computation.
///
/// `NaN` only passes through when one of the inputs was already `NaN`;
/// otherwise the operation was outside its domain.
///
/// # Errors
/// Returns `InvalidArgument` with `details` when a new `NaN` appears.
///
/// # Example
/// ```
/// use calcpad::interpreter::evaluator::utils::float_result;
///
/// assert!(float_result(f64::NAN, &[f64::NAN], "add").is_ok());
/// assert!(float_result(f64::NAN, &[f64::INFINITY, f64::INFINITY], "subtract").is_err());
/// ```
pub fn float_result(result: f64, inputs: &[f64], details: &str) -> EvalResult<Number> {
    if result.is_nan() && !inputs.iter().any(|x| x.is_nan()) {
        return Err(RuntimeError::InvalidArgument { details: details.to_string() });
    }
    Ok(Number::from_f64(result))
}
