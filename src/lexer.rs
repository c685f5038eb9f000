//! The byte-based lexer.
//!
//! The lexer turns the unconsumed suffix of the source into exactly one
//! `Token` at a time. Classification tries a fixed, ordered table of
//! grammars against the start of the remaining input; the first grammar
//! that matches wins. Each grammar is a small hand-written scanner, so no
//! input can make matching backtrack.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use memchr::memchr2;
use std::iter::FusedIterator;
use tracing::trace;

// --- The Lookup Table (LUT) ---
// A 256-entry array so any byte can be classified with a single lookup.
const W: u8 = 1; // Whitespace
const P: u8 = 2; // Punctuator
const D: u8 = 3; // Digit
const H: u8 = 4; // Hex letter

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    table[b' ' as usize] = W;
    table[b'\n' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\t' as usize] = W;

    table[b'{' as usize] = P;
    table[b'}' as usize] = P;
    table[b'[' as usize] = P;
    table[b']' as usize] = P;
    table[b':' as usize] = P;
    table[b',' as usize] = P;

    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = D;
        digit += 1;
    }

    let mut letter = 0;
    while letter < 6 {
        table[(b'a' + letter) as usize] = H;
        table[(b'A' + letter) as usize] = H;
        letter += 1;
    }

    table
};

#[inline]
fn is_digit(byte: u8) -> bool {
    BYTE_PROPERTIES[byte as usize] == D
}

#[inline]
fn is_hex(byte: u8) -> bool {
    matches!(BYTE_PROPERTIES[byte as usize], D | H)
}

/// A grammar returns the length of its match at the start of the input.
type Grammar = fn(&[u8]) -> Option<usize>;

/// The grammars in priority order. The first match classifies the lexeme.
static GRAMMARS: [(TokenKind, Grammar); 5] = [
    (TokenKind::Number, scan_number),
    (TokenKind::String, scan_string),
    (TokenKind::Boolean, scan_boolean),
    (TokenKind::Null, scan_null),
    (TokenKind::Punctuator, scan_punctuator),
];

fn skip_digits(input: &[u8], from: usize) -> usize {
    from + input[from..].iter().take_while(|&&b| is_digit(b)).count()
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn scan_number(input: &[u8]) -> Option<usize> {
    let mut i = usize::from(input.first() == Some(&b'-'));

    match input.get(i) {
        Some(b'0') => i += 1,
        Some(&b) if is_digit(b) => i = skip_digits(input, i + 1),
        _ => return None,
    }

    // A '.' or exponent marker that is not followed by digits is left for
    // the next token.
    if input.get(i) == Some(&b'.') && input.get(i + 1).is_some_and(|&b| is_digit(b)) {
        i = skip_digits(input, i + 1);
    }

    if matches!(input.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(input.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if input.get(j).is_some_and(|&b| is_digit(b)) {
            i = skip_digits(input, j);
        }
    }

    Some(i)
}

/// A double-quoted run of escapes or any byte other than `"` and `\`.
///
/// Multi-byte UTF-8 sequences never contain `"` or `\`, so scanning bytes
/// always stops on a character boundary.
fn scan_string(input: &[u8]) -> Option<usize> {
    if input.first() != Some(&b'"') {
        return None;
    }

    let mut i = 1;
    loop {
        i += memchr2(b'"', b'\\', input.get(i..)?)?;
        if input[i] == b'"' {
            return Some(i + 1);
        }
        i += 1 + escape_len(&input[i + 1..])?;
    }
}

/// Length of the escape body following a backslash.
fn escape_len(input: &[u8]) -> Option<usize> {
    match input.first()? {
        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => Some(1),
        b'u' => {
            let digits = input.get(1..5)?;
            digits.iter().all(|&b| is_hex(b)).then_some(5)
        }
        _ => None,
    }
}

fn scan_word(input: &[u8], word: &[u8]) -> Option<usize> {
    input.starts_with(word).then_some(word.len())
}

fn scan_boolean(input: &[u8]) -> Option<usize> {
    scan_word(input, b"true").or_else(|| scan_word(input, b"false"))
}

fn scan_null(input: &[u8]) -> Option<usize> {
    scan_word(input, b"null")
}

fn scan_punctuator(input: &[u8]) -> Option<usize> {
    input
        .first()
        .filter(|&&b| BYTE_PROPERTIES[b as usize] == P)
        .map(|_| 1)
}

/// A single-pass, stateful lexer over one source buffer.
///
/// Whitespace before and after every token is skipped, so once the last
/// token has been produced [`Lexer::is_finished`] reports `true`.
pub struct Lexer<'a> {
    /// The complete source text.
    source: &'a str,
    /// Byte offset of the first unconsumed byte. Always on a char boundary.
    cursor: usize,
    /// Set once the `Iterator` impl has yielded an error.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` positioned at the first non-whitespace byte.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer {
            source,
            cursor: 0,
            failed: false,
        };
        lexer.skip_whitespace();
        lexer
    }

    /// Byte offset of the next unconsumed byte.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns true once the whole source has been consumed.
    pub fn is_finished(&self) -> bool {
        self.cursor == self.source.len()
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        let bytes = self.source.as_bytes();
        while let Some(&byte) = bytes.get(self.cursor) {
            if BYTE_PROPERTIES[byte as usize] != W {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Lexes the next token.
    ///
    /// # Errors
    /// `EndOfInput` when nothing but whitespace remains, and
    /// `UnexpectedCharacter` when no grammar matches at the cursor. A
    /// failure leaves the cursor where it was.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();

        let rest = &self.source.as_bytes()[self.cursor..];
        if rest.is_empty() {
            return Err(LexError::EndOfInput);
        }

        for (kind, grammar) in &GRAMMARS {
            if let Some(len) = grammar(rest) {
                let start = self.cursor;
                let token = Token::new(*kind, &self.source[start..start + len], start);
                self.cursor += len;
                self.skip_whitespace();
                trace!(kind = %token.kind, start = token.start, end = token.end, "lexed token");
                return Ok(token);
            }
        }

        let character = self.source[self.cursor..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Err(LexError::UnexpectedCharacter {
            position: self.cursor,
            character,
        })
    }
}

/// Yields tokens until the end of input, or a single error after which the
/// iterator is exhausted.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => Some(Ok(token)),
            Err(LexError::EndOfInput) => None,
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}
