//! Defines the `Token` and `TokenKind` types.
//!
//! These are the intermediate representation between the `Lexer` and the
//! `Parser`. A token borrows its matched text from the source and records
//! the inclusive byte range it was matched from.

use crate::ast::Span;
use std::fmt;

/// The grammar a `Token` was matched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A number, e.g. `-12.5e3`
    Number,
    /// A double-quoted string, quotes included, e.g. `"hello"`
    String,
    /// `true` or `false`
    Boolean,
    /// The `null` literal
    Null,
    /// One of `[ ] { } : ,`
    Punctuator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::Punctuator => "punctuator",
        };
        f.write_str(name)
    }
}

/// A single classified lexeme.
///
/// `end` is inclusive: `end == start + text.len() - 1`. Lexemes are never
/// empty, so this never underflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub(crate) kind: TokenKind,
    pub(crate) text: &'a str,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Token {
            kind,
            text,
            start,
            end: start + text.len() - 1,
        }
    }

    /// The grammar that matched this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact matched source text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first byte of the token.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the last byte of the token.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The inclusive byte range of the token.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Length of the matched text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if this is a punctuator with the given text.
    pub fn is_punctuator(&self, text: &str) -> bool {
        self.kind == TokenKind::Punctuator && self.text == text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_end_is_inclusive() {
        let token = Token::new(TokenKind::String, "\"hey\"", 0);
        assert_eq!(token.start(), 0);
        assert_eq!(token.end(), 4);
        assert_eq!(token.len(), 5);

        let token = Token::new(TokenKind::Punctuator, "]", 4);
        assert_eq!(token.span(), Span::new(4, 4));
        assert!(token.is_punctuator("]"));
        assert!(!token.is_punctuator("["));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Number.to_string(), "number");
        assert_eq!(TokenKind::Punctuator.to_string(), "punctuator");
    }
}
