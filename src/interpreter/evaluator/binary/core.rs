use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::Value,
    },
};

impl Scope {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Arithmetic and modulo call `eval_scalar_op`, power calls
    /// `eval_pow` and relational and equality operators use
    /// `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use calcpad::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let left = Value::from(3);
    /// let right = Value::from(4);
    ///
    /// let result = Scope::eval_binary(BinaryOperator::Add, &left, &right);
    /// assert_eq!(result.unwrap(), Value::from(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => {
                Self::eval_scalar_op(op, left.as_number()?, right.as_number()?).map(Value::Number)
            },
            Pow => Self::eval_pow(left.as_number()?, right.as_number()?).map(Value::Number),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right)
            },
        }
    }
}
