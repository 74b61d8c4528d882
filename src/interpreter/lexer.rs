use std::str::FromStr;

use bigdecimal::BigDecimal;
use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_number)]
    Number(BigDecimal),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Identifier tokens; variable, constant or function names such as `x`,
    /// `pi` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Whitespace.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// Splits an expression into tokens paired with their byte offsets.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for the first slice the lexer
/// cannot recognize, such as a stray `$` or a non-ASCII character.
///
/// # Example
/// ```
/// use calcpad::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 2").unwrap();
///
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 0));
/// assert_eq!(tokens[1], (Token::Equals, 2));
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, offset)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         offset });
            },
        }
    }

    Ok(tokens)
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Some(BigDecimal)`: The exact decimal value of the literal.
/// - `None`: If the slice is not a valid decimal.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<BigDecimal> {
    BigDecimal::from_str(lex.slice()).ok()
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
