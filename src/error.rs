use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// single expression: unexpected tokens, unbalanced parentheses, trailing
/// input and assignments to reserved names.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables, division by zero, type mismatches and domain errors.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure the engine can report for one expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
