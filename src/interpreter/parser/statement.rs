use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_identifier,
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a complete statement and requires that every token is consumed.
///
/// A statement is either an assignment (`name = expression`) or an
/// expression used as a statement. Parsing is attempted in that order.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, offset)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// - `EmptyInput` if there are no tokens at all.
/// - `UnexpectedTrailingTokens` if input remains after the statement.
/// - Any error from assignment or expression parsing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let offset = tokens.peek()
                       .map(|(_, offset)| *offset)
                       .ok_or(ParseError::EmptyInput)?;

    let statement = if let Some(statement) = parse_assignment(tokens)? {
        statement
    } else {
        let expr = parse_expression(tokens)?;
        Statement::Expression { expr, offset }
    };

    if let Some((tok, offset)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  format!("{tok:?}"),
                                                          offset: *offset, });
    }

    Ok(statement)
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `=`, an assignment is parsed.
/// Builtin function names cannot be assigned to; constants such as `pi` can,
/// and the assignment then shadows the constant.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` for assignments,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is reserved,
/// - the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), offset)) = lookahead.next() else {
        return Ok(None);
    };
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    if is_reserved_identifier(name) {
        return Err(ParseError::IdentifierReserved { name:   name.clone(),
                                                    offset: *offset, });
    }

    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value,
                                    offset: *offset }))
}
