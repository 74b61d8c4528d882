use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::{Number, Value},
    },
};

impl Scope {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Plus`: returns the operand unchanged.
    ///
    /// Both operators require a numeric operand.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use calcpad::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let v = Scope::eval_unary(UnaryOperator::Negate, &Value::from(5)).unwrap();
    /// assert_eq!(v, Value::from(-5));
    ///
    /// assert!(Scope::eval_unary(UnaryOperator::Plus, &Value::Bool(true)).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        let number = value.as_number()?;
        match op {
            UnaryOperator::Negate => Ok(Value::Number(match number {
                                              Number::Decimal(d) => Number::Decimal(-d.clone()),
                                              Number::Float(f) => Number::Float(-f),
                                          })),
            UnaryOperator::Plus => Ok(value.clone()),
        }
    }
}
