//! Contains the error types for lexing and parsing.
//!
//! Every error is terminal: the first fault aborts the parse and no partial
//! tree is returned. Positions are byte offsets into the source; use
//! [`LineIndex`](crate::span::LineIndex) to turn them into line and column.
use thiserror::Error;

/// A failure while turning source text into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No grammar matched at the cursor.
    #[error("Unexpected character '{character}' at offset {position}")]
    UnexpectedCharacter {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },
    /// A token was requested after the source was exhausted.
    #[error("Unexpected end of input")]
    EndOfInput,
}

/// A failure while building the AST from an otherwise well-lexed stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A consumed token did not have the expected text or kind.
    #[error("Expected {expected} but found {found} at offset {position}")]
    TokenMismatch {
        /// The literal text or token kind that was required.
        expected: String,
        /// The text of the token actually found.
        found: String,
        /// Byte offset of the token actually found.
        position: usize,
    },
    /// A punctuator other than `[` or `{` appeared where a value was expected.
    #[error("Unexpected punctuator '{punctuator}' at offset {position}, expected a value")]
    UnexpectedPunctuator {
        /// The punctuator text.
        punctuator: String,
        /// Byte offset of the punctuator.
        position: usize,
    },
    /// Tokens remain after a complete top-level value.
    #[error("Unexpected trailing token {found} at offset {position}")]
    TrailingContent {
        /// The text of the first trailing token.
        found: String,
        /// Byte offset of the first trailing token.
        position: usize,
    },
    /// Arrays and objects are nested deeper than the configured limit.
    #[error("Maximum nesting depth of {limit} exceeded at offset {position}")]
    NestingTooDeep {
        /// The configured depth limit.
        limit: usize,
        /// Byte offset of the bracket that crossed the limit.
        position: usize,
    },
    /// The source is larger than the configured limit.
    #[error("Input of {size} bytes exceeds maximum size limit of {limit} bytes")]
    InputTooLarge {
        /// Source length in bytes.
        size: usize,
        /// The configured size limit.
        limit: usize,
    },
}

/// The error returned by [`parse`](crate::parse): either a lexing or a parsing fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The lexer could not produce a token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not form a valid JSON value.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the byte offset the error points at, if it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Lex(LexError::UnexpectedCharacter { position, .. })
            | Error::Parse(ParseError::TokenMismatch { position, .. })
            | Error::Parse(ParseError::UnexpectedPunctuator { position, .. })
            | Error::Parse(ParseError::TrailingContent { position, .. })
            | Error::Parse(ParseError::NestingTooDeep { position, .. }) => Some(*position),
            Error::Lex(LexError::EndOfInput) | Error::Parse(ParseError::InputTooLarge { .. }) => {
                None
            }
        }
    }
}
