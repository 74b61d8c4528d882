/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: decimal
/// arithmetic, exponentiation, floored modulo and comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and unary plus.
pub mod unary;

/// Core evaluation logic and scope management.
///
/// Contains the main evaluation engine, the variable scope and error
/// propagation.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides identifier reservation, arity checks and the constant table.
pub mod utils;

/// Function evaluation.
///
/// Handles built-in function calls, argument checking, and return value
/// computation.
pub mod function;
