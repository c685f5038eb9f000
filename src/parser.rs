//! The recursive-descent parser.
//!
//! Each grammar rule is one method. The only state is the position in the
//! buffered token stream and the current nesting depth; every failure is
//! returned immediately and aborts the whole parse.

use crate::ast::{
    ArrayLiteral, BooleanLiteral, Node, NullLiteral, NumericLiteral, ObjectLiteral, Property,
    Span, StringLiteral,
};
use crate::buffer::LookaheadBuffer;
use crate::error::{Error, LexError, ParseError};
use crate::lexer::Lexer;
use crate::limits::Limits;
use crate::token::{Token, TokenKind};
use tracing::trace;

/// Builds AST nodes from a buffered token stream.
pub struct Parser<'a> {
    tokens: LookaheadBuffer<'a>,
    limits: Limits,
    /// Number of arrays and objects currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a fresh `Lexer` for `source`.
    pub fn new(source: &'a str, limits: Limits) -> Self {
        Parser {
            tokens: LookaheadBuffer::new(Lexer::new(source)),
            limits,
            depth: 0,
        }
    }

    /// Consumes the next token and checks its text.
    pub fn expect_literal(&mut self, text: &str) -> Result<Token<'a>, Error> {
        let token = self.tokens.consume()?;
        if token.text != text {
            return Err(ParseError::TokenMismatch {
                expected: format!("'{text}'"),
                found: token.text.to_string(),
                position: token.start,
            }
            .into());
        }
        Ok(token)
    }

    /// Consumes the next token and checks its kind.
    pub fn expect_kind(&mut self, kind: TokenKind) -> Result<Token<'a>, Error> {
        let token = self.tokens.consume()?;
        if token.kind != kind {
            return Err(ParseError::TokenMismatch {
                expected: kind.to_string(),
                found: token.text.to_string(),
                position: token.start,
            }
            .into());
        }
        Ok(token)
    }

    /// Reports whether the next token's text is `text`, without consuming it.
    ///
    /// # Errors
    /// A failed peek is an error, never a match: `[1` reports
    /// `EndOfInput` rather than looking like a closed array.
    pub fn next_is(&mut self, text: &str) -> Result<bool, Error> {
        Ok(self.tokens.peek(0)?.text == text)
    }

    /// Parses one value starting at the next token.
    pub fn parse_value(&mut self) -> Result<Node, Error> {
        let token = *self.tokens.peek(0)?;

        match token.kind {
            TokenKind::Punctuator => match token.text {
                "[" => self.parse_array().map(Node::Array),
                "{" => self.parse_object().map(Node::Object),
                _ => Err(ParseError::UnexpectedPunctuator {
                    punctuator: token.text.to_string(),
                    position: token.start,
                }
                .into()),
            },
            TokenKind::Boolean => {
                self.tokens.consume()?;
                Ok(Node::Boolean(BooleanLiteral {
                    value: token.text == "true",
                    span: token.span(),
                }))
            }
            TokenKind::Null => {
                self.tokens.consume()?;
                Ok(Node::Null(NullLiteral { span: token.span() }))
            }
            TokenKind::String => {
                self.tokens.consume()?;
                Ok(Node::String(StringLiteral {
                    raw: token.text.to_string(),
                    span: token.span(),
                }))
            }
            TokenKind::Number => {
                self.tokens.consume()?;
                Ok(Node::Number(NumericLiteral {
                    raw: token.text.to_string(),
                    span: token.span(),
                }))
            }
        }
    }

    /// `[` (value (`,` value)*)? `]`
    fn parse_array(&mut self) -> Result<ArrayLiteral, Error> {
        let open = self.expect_literal("[")?;
        self.enter(&open)?;

        let mut elements = Vec::new();
        if !self.next_is("]")? {
            loop {
                elements.push(self.parse_value()?);
                if self.next_is("]")? {
                    break;
                }
                // After a comma a value is required, so `[1,]` fails in
                // `parse_value` on the `]`.
                self.expect_literal(",")?;
            }
        }

        let close = self.expect_literal("]")?;
        self.depth -= 1;
        Ok(ArrayLiteral {
            elements,
            span: Span::new(open.start, close.end),
        })
    }

    /// `{` (property (`,` property)*)? `}`
    fn parse_object(&mut self) -> Result<ObjectLiteral, Error> {
        let open = self.expect_literal("{")?;
        self.enter(&open)?;

        let mut properties = Vec::new();
        if !self.next_is("}")? {
            loop {
                properties.push(self.parse_property()?);
                if self.next_is("}")? {
                    break;
                }
                self.expect_literal(",")?;
            }
        }

        let close = self.expect_literal("}")?;
        self.depth -= 1;
        Ok(ObjectLiteral {
            properties,
            span: Span::new(open.start, close.end),
        })
    }

    /// `string` `:` value
    fn parse_property(&mut self) -> Result<Property, Error> {
        let key = self.expect_kind(TokenKind::String)?;
        self.expect_literal(":")?;
        let value = self.parse_value()?;
        Ok(Property {
            key: key.text.to_string(),
            key_span: key.span(),
            value,
        })
    }

    /// Opens one level of nesting at `open`, enforcing the depth limit.
    fn enter(&mut self, open: &Token<'a>) -> Result<(), Error> {
        if self.depth >= self.limits.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.limits.max_depth,
                position: open.start,
            }
            .into());
        }
        self.depth += 1;
        trace!(depth = self.depth, start = open.start, bracket = open.text, "entering container");
        Ok(())
    }

    /// Checks that nothing follows the top-level value.
    ///
    /// A well-formed trailing token fails with `TrailingContent`; a trailing
    /// sequence that does not lex fails with its `LexError`.
    pub fn finish(&mut self) -> Result<(), Error> {
        match self.tokens.peek(0) {
            Ok(token) => Err(ParseError::TrailingContent {
                found: token.text.to_string(),
                position: token.start,
            }
            .into()),
            Err(LexError::EndOfInput) => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(input: &str) -> Parser<'_> {
        Parser::new(input, Limits::default())
    }

    #[test]
    fn test_expect_literal() {
        let mut p = parser("[ ]");
        assert_eq!(p.expect_literal("[").unwrap().start(), 0);
        let err = p.expect_literal(",").unwrap_err();
        assert_eq!(
            err,
            Error::Parse(ParseError::TokenMismatch {
                expected: "','".to_string(),
                found: "]".to_string(),
                position: 2,
            })
        );
        assert_eq!(
            p.expect_literal("]").unwrap_err(),
            Error::Lex(LexError::EndOfInput)
        );
    }

    #[test]
    fn test_expect_kind() {
        let mut p = parser("\"key\" 12");
        assert_eq!(p.expect_kind(TokenKind::String).unwrap().text(), "\"key\"");
        let err = p.expect_kind(TokenKind::String).unwrap_err();
        assert_eq!(
            err,
            Error::Parse(ParseError::TokenMismatch {
                expected: "string".to_string(),
                found: "12".to_string(),
                position: 6,
            })
        );
    }

    #[test]
    fn test_next_is_does_not_consume() {
        let mut p = parser("]");
        assert!(p.next_is("]").unwrap());
        assert!(!p.next_is("}").unwrap());
        assert!(p.expect_literal("]").is_ok());
        assert_eq!(p.next_is("]").unwrap_err(), Error::Lex(LexError::EndOfInput));
    }

    #[test]
    fn test_parse_value_literals() {
        let mut p = parser("true false null \"s\" -1.5");
        assert_eq!(p.parse_value().unwrap().as_bool(), Some(true));
        assert_eq!(p.parse_value().unwrap().as_bool(), Some(false));
        assert!(p.parse_value().unwrap().is_null());
        assert_eq!(p.parse_value().unwrap().raw(), Some("\"s\""));
        let number = p.parse_value().unwrap();
        assert_eq!(number.raw(), Some("-1.5"));
        assert_eq!(number.span(), Span::new(20, 23));
        assert!(p.finish().is_ok());
    }

    #[test]
    fn test_parse_value_rejects_closing_punctuators() {
        for (input, punctuator) in [("]", "]"), ("}", "}"), (",", ","), (":", ":")] {
            let err = parser(input).parse_value().unwrap_err();
            assert_eq!(
                err,
                Error::Parse(ParseError::UnexpectedPunctuator {
                    punctuator: punctuator.to_string(),
                    position: 0,
                })
            );
        }
    }

    #[test]
    fn test_depth_is_restored_after_containers() {
        let mut p = Parser::new("[[]] [[]]", Limits::default().with_max_depth(2));
        p.parse_value().unwrap();
        assert_eq!(p.depth, 0);
        p.parse_value().unwrap();
        assert!(p.finish().is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let mut p = Parser::new("[{\"a\": [1]}]", Limits::default().with_max_depth(2));
        assert_eq!(
            p.parse_value().unwrap_err(),
            Error::Parse(ParseError::NestingTooDeep {
                limit: 2,
                position: 7,
            })
        );
    }

    #[test]
    fn test_finish_reports_trailing_tokens() {
        let mut p = parser("1 2");
        p.parse_value().unwrap();
        assert_eq!(
            p.finish().unwrap_err(),
            Error::Parse(ParseError::TrailingContent {
                found: "2".to_string(),
                position: 2,
            })
        );

        let mut p = parser("1 @");
        p.parse_value().unwrap();
        assert_eq!(
            p.finish().unwrap_err(),
            Error::Lex(LexError::UnexpectedCharacter {
                position: 2,
                character: '@',
            })
        );
    }
}
