//! Shell tokenizer.
//!
//! Produces words (with quote and expansion structure preserved),
//! operators and newlines. Comments, unquoted line continuations and
//! here-doc bodies are consumed here and never reach the parser.

pub mod error;
pub mod span;
pub mod token;

mod cursor;
mod heredoc;
mod operator;
mod word;

use crate::lexer::cursor::Cursor;
use crate::lexer::heredoc::PendingHereDoc;
use crate::lexer::operator::match_operator;

pub use error::{LexError, LexErrorKind};
pub use span::{ByteOffset, SourceId, Span};
pub use token::{OperatorKind, Quoting, Token, TokenKind, WordPart};

/// Pull-based shell lexer.
pub struct Lexer<'a> {
    input: &'a str,
    source_id: SourceId,
    cursor: Cursor,
    pending_heredocs: Vec<PendingHereDoc>,
    /// Set after `<<`/`<<-`: the next word is a here-doc delimiter.
    /// `Some(true)` means tabs are stripped.
    heredoc_operator: Option<bool>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input` with source id `0`.
    pub fn new(input: &'a str) -> Self {
        Self::with_source_id(input, SourceId::default())
    }

    /// Creates a lexer whose spans carry `source_id`.
    pub fn with_source_id(input: &'a str, source_id: SourceId) -> Self {
        Self {
            input,
            source_id,
            cursor: Cursor::new(),
            pending_heredocs: Vec::new(),
            heredoc_operator: None,
        }
    }

    /// Returns the input being tokenized.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Scans and returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_blanks_and_comments();

        let Some(byte) = self.cursor.peek_byte(self.input) else {
            return Ok(None);
        };
        let start = self.cursor.offset();

        if byte == b'\n' {
            self.cursor.advance_by(1, self.input);
            let span = Span::new(self.source_id, start, self.cursor.offset());
            self.heredoc_operator = None;
            if !self.pending_heredocs.is_empty() {
                self.consume_pending_heredocs();
            }
            return Ok(Some(Token::newline(span)));
        }

        let process_substitution =
            matches!(byte, b'<' | b'>') && self.cursor.peek_at(self.input, 1) == Some(b'(');
        if !process_substitution
            && let Some(kind) = match_operator(&self.input.as_bytes()[self.cursor.position()..])
        {
            self.cursor.advance_by(kind.as_str().len(), self.input);
            let span = Span::new(self.source_id, start, self.cursor.offset());
            if matches!(kind, OperatorKind::HereDoc | OperatorKind::HereDocStripTabs) {
                self.heredoc_operator = Some(kind == OperatorKind::HereDocStripTabs);
            }
            return Ok(Some(Token::operator(kind, span)));
        }

        let token = self.scan_word()?;
        if let Some(strip_tabs) = self.heredoc_operator.take() {
            self.pending_heredocs.push(PendingHereDoc {
                delimiter: token.parts.iter().map(WordPart::text).collect(),
                strip_tabs,
            });
        }
        Ok(Some(token))
    }

    fn skip_blanks_and_comments(&mut self) {
        while let Some(byte) = self.cursor.peek_byte(self.input) {
            match byte {
                b' ' | b'\t' | b'\r' => self.cursor.advance_by(1, self.input),
                b'\\' if self.cursor.peek_at(self.input, 1) == Some(b'\n') => {
                    self.cursor.advance_by(2, self.input);
                }
                b'#' => {
                    let rest = &self.input[self.cursor.position()..];
                    let length = rest.find('\n').unwrap_or(rest.len());
                    self.cursor.advance_by(length, self.input);
                }
                _ => break,
            }
        }
    }
}

/// Tokenizes all of `input`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
