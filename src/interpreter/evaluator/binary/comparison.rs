use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator::{self},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::{Number, Value},
    },
};

/// Maps an ordering to the boolean result of a comparison operator.
///
/// `None` stands for an unordered pair (a `NaN` operand), for which only
/// `NotEqual` holds.
#[must_use]
pub fn ordering_op_result(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    let Some(ordering) = ordering else {
        return op == BinaryOperator::NotEqual;
    };
    match op {
        BinaryOperator::Less => ordering == Ordering::Less,
        BinaryOperator::Greater => ordering == Ordering::Greater,
        BinaryOperator::LessEqual => ordering != Ordering::Greater,
        BinaryOperator::GreaterEqual => ordering != Ordering::Less,
        BinaryOperator::Equal => ordering == Ordering::Equal,
        BinaryOperator::NotEqual => ordering != Ordering::Equal,
        _ => unreachable!("ordering_op_result used with non comparison operator"),
    }
}

impl Scope {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Two decimals are compared exactly. If either side is a float both are
    /// compared as `f64`. Booleans support `==` and `!=` against each other
    /// only.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use calcpad::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let a = Value::from(3);
    /// let b = Value::from(5);
    ///
    /// let result = Scope::eval_comparison(BinaryOperator::Less, &a, &b);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Bool(a), Value::Bool(b))
                if matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) =>
            {
                Some(a.cmp(b))
            },
            (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
            (Value::Number(_), Value::Bool(_)) | (Value::Bool(_), Value::Number(_)) => {
                return Err(RuntimeError::TypeError { details: format!("cannot compare {} {op} {}",
                                                                      left.type_name(),
                                                                      right.type_name()) });
            },
            (Value::Bool(_), _) => return Err(RuntimeError::ExpectedNumber { found: "boolean" }),
        };

        Ok(Value::Bool(ordering_op_result(op, ordering)))
    }
}

fn compare_numbers(left: &Number, right: &Number) -> Option<Ordering> {
    match (left, right) {
        (Number::Decimal(a), Number::Decimal(b)) => Some(a.cmp(b)),
        _ => left.to_f64_lossy().partial_cmp(&right.to_f64_lossy()),
    }
}
