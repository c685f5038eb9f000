//! # rill-ast
//!
//! `rill-ast` is a JSON lexer and recursive-descent parser that produces a
//! positioned abstract syntax tree instead of a native value. Every node
//! keeps the byte offsets of the text it came from, which makes the output
//! suitable for diagnostics, editors and static analysis.
//!
//! ## Key Features
//!
//! * **100% Safe Rust:** Contains no `unsafe` code.
//! * **Lossless literals:** numbers and strings keep their exact source
//!   text; nothing is converted or unescaped.
//! * **Inclusive spans:** every token and node knows its `[start, end]`
//!   byte range, and [`LineIndex`] maps offsets to lines and columns.
//! * **First fault wins:** a parse either returns a complete tree or a
//!   single error.
//!
//! ## Quick Start
//!
//! ```
//! use rill_ast::{parse, Node};
//!
//! let program = parse(r#"{"lul": [1, "hello"]}"#).unwrap();
//! let root = program.root();
//! assert_eq!(root.span().start, 0);
//! assert_eq!(root.span().end, 20);
//!
//! let array = root.get("lul").unwrap();
//! assert_eq!(array.get_index(0).and_then(Node::raw), Some("1"));
//! assert_eq!(array.get_index(1).and_then(Node::raw), Some("\"hello\""));
//! ```

/// The positioned AST: `Node`, `Property`, `Program` and `Span`.
pub mod ast;
/// The `LookaheadBuffer` that lets the parser peek ahead.
pub mod buffer;
/// Contains the `LexError`, `ParseError` and `Error` types.
pub mod error;
/// The byte-based `Lexer`.
pub mod lexer;
/// Size and nesting `Limits`.
pub mod limits;
/// The recursive-descent `Parser`.
pub mod parser;
/// `LineIndex` for turning offsets into lines and columns.
pub mod span;
/// Contains the `Token` and `TokenKind` types.
pub mod token;

pub use ast::{
    ArrayLiteral, BooleanLiteral, Node, NullLiteral, NumericLiteral, ObjectLiteral, Program,
    Property, Span, StringLiteral,
};
pub use buffer::LookaheadBuffer;
pub use error::{Error, LexError, ParseError};
pub use lexer::Lexer;
pub use limits::Limits;
pub use parser::Parser;
pub use span::{LineIndex, Location};
pub use token::{Token, TokenKind};

use tracing::debug;

/// Parses `source` into a `Program` using the default [`Limits`].
///
/// # Errors
/// Returns the first lexing or parsing fault. No partial tree is produced.
///
/// # Examples
/// ```
/// use rill_ast::parse;
///
/// let program = parse("123.123").unwrap();
/// assert_eq!(program.root().raw(), Some("123.123"));
/// assert_eq!(program.root().end(), 6);
///
/// assert!(parse("123 ]").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    parse_with_limits(source, Limits::default())
}

/// Parses `source` into a `Program` with explicit limits.
///
/// # Errors
/// `InputTooLarge` is returned before any lexing if the source exceeds
/// `limits.max_input_size`. Otherwise, see [`parse`].
pub fn parse_with_limits(source: &str, limits: Limits) -> Result<Program, Error> {
    if source.len() > limits.max_input_size {
        return Err(ParseError::InputTooLarge {
            size: source.len(),
            limit: limits.max_input_size,
        }
        .into());
    }

    debug!(len = source.len(), "parsing document");
    let mut parser = Parser::new(source, limits);
    let root = parser.parse_value()?;
    parser.finish()?;
    debug!(root = root.type_name(), "parsed document");
    Ok(Program::new(root))
}

/// Lexes all of `source` into tokens.
///
/// # Errors
/// Returns the first `LexError::UnexpectedCharacter`. Running out of input
/// is the normal end, not an error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source).collect()
}
