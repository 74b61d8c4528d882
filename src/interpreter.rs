use crate::{
    ast::Statement,
    error::{EngineError, ParseError},
    interpreter::{evaluator::core::Scope, parser::statement::parse_statement, value::core::Value},
};

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparison operations, manages variable state, and
/// produces results.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables, constants and builtin functions.
/// - Reports runtime errors such as division by zero or domain errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators and delimiters.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offset.
/// - Parses numeric literals into exact decimals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of one expression or
/// assignment.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with offsets.
/// - Supports arithmetic, comparisons, function calls and assignments.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` and `Number` enums.
/// - Converts between exact decimals and floats.
/// - Formats numbers in auto notation.
pub mod value;

/// Tokenizes and parses a single statement.
///
/// # Errors
/// Returns the first lexing or parsing failure.
///
/// # Example
/// ```
/// use calcpad::{ast::Statement, interpreter::parse};
///
/// assert!(matches!(parse("x = 2 + 3"), Ok(Statement::Assignment { .. })));
/// assert!(parse("2 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Statement, ParseError> {
    let tokens = lexer::tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    parse_statement(&mut iter)
}

/// Parses and evaluates one statement against `scope`.
///
/// Assignments write into `scope` and evaluate to the assigned value.
///
/// # Errors
/// Returns `EngineError::Parse` for malformed input and
/// `EngineError::Runtime` when evaluation fails. A failed evaluation leaves
/// `scope` unchanged.
///
/// # Example
/// ```
/// use calcpad::interpreter::{evaluate, evaluator::core::Scope, value::core::Value};
///
/// let mut scope = Scope::new();
///
/// assert_eq!(evaluate("x = 7", &mut scope).unwrap(), Value::from(7));
/// assert_eq!(evaluate("x * 6", &mut scope).unwrap(), Value::from(42));
/// assert!(evaluate("y + 1", &mut scope).is_err());
/// ```
pub fn evaluate(source: &str, scope: &mut Scope) -> Result<Value, EngineError> {
    let statement = parse(source)?;
    Ok(scope.eval_statement(&statement)?)
}
