//! Lexer-backed token stream with bounded lookahead.

use std::collections::VecDeque;

use crate::lexer::{Lexer, Token};
use crate::parser::error::ParseError;

/// Maximum supported lookahead index (`peek(0..=3)`).
pub const MAX_LOOKAHEAD: usize = 3;

/// Fixed-lookahead token stream over the lexer.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    lookahead: VecDeque<Token>,
    reached_end_of_input: bool,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream from an existing lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            lookahead: VecDeque::new(),
            reached_end_of_input: false,
        }
    }

    /// Returns the input text behind the stream.
    pub fn input(&self) -> &'a str {
        self.lexer.input()
    }

    /// Peeks a token by bounded lookahead index.
    ///
    /// `peek(0)` is the next token to be consumed by [`Self::next`].
    pub fn peek(&mut self, n: usize) -> Result<Option<&Token>, ParseError> {
        if n > MAX_LOOKAHEAD {
            return Err(ParseError::lookahead_exceeded(n, MAX_LOOKAHEAD));
        }
        self.fill_to(n)?;
        Ok(self.lookahead.get(n))
    }

    /// Consumes and returns the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<Token>, ParseError> {
        self.fill_to(0)?;
        Ok(self.lookahead.pop_front())
    }

    fn fill_to(&mut self, n: usize) -> Result<(), ParseError> {
        while self.lookahead.len() <= n && !self.reached_end_of_input {
            match self
                .lexer
                .next_token()
                .map_err(|error| ParseError::lexer_error(&error))?
            {
                Some(token) => self.lookahead.push_back(token),
                None => self.reached_end_of_input = true,
            }
        }
        Ok(())
    }
}
