use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `+` (no-op on numbers).
/// Prefix operators bind looser than `^`, so `-2^2` is `-(2^2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_power(tokens),
    };

    let offset = tokens.next().map_or(0, |(_, offset)| *offset);
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       offset })
}

/// Parses exponentiation expressions.
///
/// The exponent is parsed as a full unary expression, which makes `^`
/// right-associative (`2^3^2` is `2^(3^2)`) and allows signed exponents such
/// as `10^-3`.
///
/// Grammar: `power := primary ("^" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;

    if let Some((Token::Caret, offset)) = tokens.peek() {
        let offset = *offset;
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   offset });
    }

    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and boolean literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Errors
/// Returns `UnexpectedEndOfInput` when no token is left and
/// `UnexpectedToken` for any token that cannot start an expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, offset) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Number(n) => Ok(Expr::Literal { value:  n.clone().into(),
                                               offset: *offset, }),
        Token::Bool(b) => Ok(Expr::Literal { value:  (*b).into(),
                                             offset: *offset, }),
        Token::LParen => parse_grouping(tokens, *offset),
        Token::Identifier(name) => parse_identifier_or_function(tokens, name, *offset),
        tok => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                 offset: *offset, }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// Failure to find the closing parenthesis yields
/// `ParseError::ExpectedClosingParen` pointing at the opening one.
///
/// Grammar `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, offset: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { offset }),
    }
}

/// Parses an identifier or function call whose name was already consumed.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Variable`] otherwise.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       name: &str,
                                       offset: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments,
                                       offset });
    }

    Ok(Expr::Variable { name: name.to_string(),
                        offset })
}
