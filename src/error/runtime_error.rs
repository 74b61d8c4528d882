use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called an unknown function.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a builtin.
    #[error("Function '{name}' does not accept {found} argument(s).")]
    ArgumentCountMismatch {
        /// The builtin that was called.
        name:  String,
        /// The number of arguments supplied.
        found: usize,
    },
    /// A numeric value was expected, but not found.
    #[error("Expected a number but found {found}.")]
    ExpectedNumber {
        /// Type name of the value that was found instead.
        found: &'static str,
    },
    /// Operands had incompatible types.
    #[error("Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// An argument was outside the domain of the operation.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// Attempted division (or modulo) by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An exponent or rounding digit count was too large to compute.
    #[error("Numeric overflow while computing result.")]
    Overflow,
}
