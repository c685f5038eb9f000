//! Lexer-backed token stream with unbounded lookahead.

use std::collections::VecDeque;

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::token::Token;

/// Wraps a `Lexer` with a FIFO stash so the parser can peek any number of
/// tokens ahead without consuming them.
///
/// Tokens are lexed lazily, only as far as the deepest peek requires. A lex
/// failure while filling the stash is returned to the caller and is not
/// stored; the lexer's cursor does not move on failure, so asking again
/// reports the same error.
pub struct LookaheadBuffer<'a> {
    lexer: Lexer<'a>,
    stash: VecDeque<Token<'a>>,
}

impl<'a> LookaheadBuffer<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        LookaheadBuffer {
            lexer,
            stash: VecDeque::new(),
        }
    }

    /// Peeks the `n`-th unconsumed token.
    ///
    /// `peek(0)` is the token the next [`Self::consume`] returns.
    ///
    /// # Errors
    /// `EndOfInput` when fewer than `n + 1` tokens remain, or the lexer's
    /// error if one of the tokens up to `n` fails to lex.
    pub fn peek(&mut self, n: usize) -> Result<&Token<'a>, LexError> {
        while self.stash.len() <= n {
            let token = self.lexer.next_token()?;
            self.stash.push_back(token);
        }
        self.stash.get(n).ok_or(LexError::EndOfInput)
    }

    /// Consumes the next token, from the stash if one is queued.
    pub fn consume(&mut self) -> Result<Token<'a>, LexError> {
        match self.stash.pop_front() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    /// Number of tokens lexed but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.stash.len()
    }

    /// Returns true once every token has been lexed and consumed.
    pub fn is_exhausted(&self) -> bool {
        self.stash.is_empty() && self.lexer.is_finished()
    }
}
