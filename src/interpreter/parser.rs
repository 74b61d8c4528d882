/// Core parsing entry points.
///
/// Contains the expression entry point and the shared `ParseResult` alias.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for comparisons, additive and
/// multiplicative operators, and right-associative exponentiation.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, literals, identifiers, function calls and
/// parenthesized groups.
pub mod unary;

/// Statement parsing.
///
/// Distinguishes assignments from plain expression statements and rejects
/// trailing input.
pub mod statement;

/// Shared parser helpers such as comma-separated argument lists.
pub mod utils;
