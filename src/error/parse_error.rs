use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Offsets are byte positions into the expression handed to the engine, which
/// is the preprocessed line rather than the user's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Unexpected token '{token}' at offset {offset}.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset where the token starts.
        offset: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' for the group opened at offset {offset}.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        offset: usize,
    },
    /// Found extra tokens after the statement was complete.
    #[error("Extra tokens after expression, starting with '{token}' at offset {offset}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Byte offset of that token.
        offset: usize,
    },
    /// Tried to assign to a builtin function name.
    #[error("Identifier '{name}' is reserved.")]
    IdentifierReserved {
        /// The reserved identifier name.
        name:   String,
        /// Byte offset of the identifier.
        offset: usize,
    },
    /// The source contained no tokens at all.
    #[error("Nothing to evaluate.")]
    EmptyInput,
}
