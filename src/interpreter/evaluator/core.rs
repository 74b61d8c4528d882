use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{evaluator::utils::constant, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variables visible to an evaluation.
///
/// A `Scope` lives for one pass over a document. Assignments and the `ans`
/// binding write into it, and every later line reads from it.
///
/// ## Usage
///
/// `Scope` is created once and reused for evaluating expressions and
/// statements. Variables shadow the builtin constants of the same name.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    variables: HashMap<String, Value>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    ///
    /// Constants are not consulted here; see [`Scope::eval`] for full
    /// name resolution.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use calcpad::interpreter::{evaluator::core::Scope, value::core::Value};
    ///
    /// let mut scope = Scope::new();
    /// scope.set("x", Value::from(10));
    ///
    /// assert_eq!(scope.get("x"), Some(&Value::from(10)));
    /// ```
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Whether `name` is bound in this scope.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the scope has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use calcpad::{
    ///     interpreter::{evaluator::core::Scope, parse, value::core::Value},
    ///     ast::Statement,
    /// };
    ///
    /// let Statement::Expression { expr, .. } = parse("2 * (3 + 4)").unwrap() else {
    ///     unreachable!()
    /// };
    ///
    /// let scope = Scope::new();
    /// assert_eq!(scope.eval(&expr).unwrap(), Value::from(14));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, .. } => self.eval_variable(name),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value)
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::FunctionCall { name, arguments, .. } => {
                let args = arguments.iter()
                                    .map(|arg| self.eval(arg))
                                    .collect::<EvalResult<Vec<_>>>()?;
                Self::eval_function(name, &args)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side, binds the result and
    /// returns it, so `x = 5` evaluates to `5`. An expression statement
    /// returns its value and leaves the scope untouched.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The value produced by the statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set(name, value.clone());
                Ok(value)
            },
        }
    }

    /// Looks up a variable by name.
    ///
    /// Variables bound in the scope take priority, then the builtin constants
    /// such as `pi` and `e`.
    ///
    /// # Example
    /// ```
    /// use calcpad::interpreter::{evaluator::core::Scope, value::core::Value};
    ///
    /// let mut scope = Scope::new();
    /// assert!(scope.eval_variable("pi").is_ok());
    /// assert!(scope.eval_variable("nope").is_err());
    ///
    /// scope.set("pi", Value::from(3));
    /// assert_eq!(scope.eval_variable("pi").unwrap(), Value::from(3));
    /// ```
    pub fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.get(name) {
            return Ok(value.clone());
        }

        constant(name).map(Value::from)
                      .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }
}
