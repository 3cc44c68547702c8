//! Word scanning: quote removal and expansion boundaries.

use crate::lexer::Lexer;
use crate::lexer::error::{LexError, LexErrorKind};
use crate::lexer::operator::is_operator_start;
use crate::lexer::span::{ByteOffset, Span};
use crate::lexer::token::{Quoting, Token, WordPart};

/// Accumulates word parts, merging adjacent literals with equal quoting.
#[derive(Debug, Default)]
struct PartsBuilder {
    parts: Vec<WordPart>,
}

impl PartsBuilder {
    fn push_char(&mut self, ch: char, quoting: Quoting) {
        if let Some(WordPart::Literal {
            text,
            quoting: last,
        }) = self.parts.last_mut()
            && *last == quoting
        {
            text.push(ch);
            return;
        }
        self.parts.push(WordPart::Literal {
            text: ch.to_string(),
            quoting,
        });
    }

    /// Appends literal text; an empty string still records the quoting so
    /// that `''` yields an (empty) literal word.
    fn push_str(&mut self, value: &str, quoting: Quoting) {
        if let Some(WordPart::Literal {
            text,
            quoting: last,
        }) = self.parts.last_mut()
            && *last == quoting
        {
            text.push_str(value);
            return;
        }
        self.parts.push(WordPart::Literal {
            text: value.to_string(),
            quoting,
        });
    }

    fn push_expansion(&mut self, part: WordPart) {
        self.parts.push(part);
    }
}

impl Lexer<'_> {
    /// Scans one word starting at the cursor.
    pub(super) fn scan_word(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.offset();
        let mut parts = PartsBuilder::default();

        while let Some(byte) = self.cursor.peek_byte(self.input) {
            match byte {
                b' ' | b'\t' | b'\r' | b'\n' => break,
                b'\\' => self.scan_escape(&mut parts),
                b'\'' => self.scan_single_quoted(&mut parts)?,
                b'"' => {
                    let open = self.cursor.offset();
                    self.cursor.advance_by(1, self.input);
                    self.scan_double_quoted_body(&mut parts, open)?;
                }
                b'`' => {
                    let raw = self.scan_backquoted()?;
                    parts.push_expansion(WordPart::CommandSubstitution(raw));
                }
                b'$' => self.scan_dollar(&mut parts, Quoting::Unquoted)?,
                b'<' | b'>' if self.cursor.peek_at(self.input, 1) == Some(b'(') => {
                    let raw = self.scan_process_substitution()?;
                    parts.push_expansion(WordPart::ProcessSubstitution(raw));
                }
                byte if is_operator_start(byte) => break,
                _ => {
                    if let Some(ch) = self.cursor.advance_char(self.input) {
                        parts.push_char(ch, Quoting::Unquoted);
                    }
                }
            }
        }

        let span = self.span_from(start);
        Ok(Token::word(
            span.slice(self.input).to_string(),
            parts.parts,
            span,
        ))
    }

    fn scan_escape(&mut self, parts: &mut PartsBuilder) {
        match self.cursor.peek_at(self.input, 1) {
            Some(b'\n') => self.cursor.advance_by(2, self.input),
            None => {
                self.cursor.advance_by(1, self.input);
                parts.push_char('\\', Quoting::Unquoted);
            }
            Some(_) => {
                self.cursor.advance_by(1, self.input);
                if let Some(ch) = self.cursor.advance_char(self.input) {
                    parts.push_char(ch, Quoting::Escaped);
                }
            }
        }
    }

    fn scan_single_quoted(&mut self, parts: &mut PartsBuilder) -> Result<(), LexError> {
        let open = self.cursor.offset();
        self.cursor.advance_by(1, self.input);
        let body_start = self.cursor.position();
        let Some(length) = self.input[body_start..].find('\'') else {
            return Err(self.unterminated(LexErrorKind::UnterminatedSingleQuote, open));
        };
        parts.push_str(&self.input[body_start..body_start + length], Quoting::Single);
        self.cursor.advance_by(length + 1, self.input);
        Ok(())
    }

    /// Scans the body of a double-quoted region; the opening quote has
    /// already been consumed.
    fn scan_double_quoted_body(
        &mut self,
        parts: &mut PartsBuilder,
        open: ByteOffset,
    ) -> Result<(), LexError> {
        parts.push_str("", Quoting::Double);
        loop {
            let Some(byte) = self.cursor.peek_byte(self.input) else {
                return Err(self.unterminated(LexErrorKind::UnterminatedDoubleQuote, open));
            };
            match byte {
                b'"' => {
                    self.cursor.advance_by(1, self.input);
                    return Ok(());
                }
                b'\\' => match self.cursor.peek_at(self.input, 1) {
                    Some(b'\n') => self.cursor.advance_by(2, self.input),
                    Some(escaped @ (b'$' | b'`' | b'"' | b'\\')) => {
                        self.cursor.advance_by(2, self.input);
                        parts.push_char(char::from(escaped), Quoting::Double);
                    }
                    _ => {
                        self.cursor.advance_by(1, self.input);
                        parts.push_char('\\', Quoting::Double);
                    }
                },
                b'$' => self.scan_dollar(parts, Quoting::Double)?,
                b'`' => {
                    let raw = self.scan_backquoted()?;
                    parts.push_expansion(WordPart::CommandSubstitution(raw));
                }
                _ => {
                    if let Some(ch) = self.cursor.advance_char(self.input) {
                        parts.push_char(ch, Quoting::Double);
                    }
                }
            }
        }
    }

    fn scan_dollar(&mut self, parts: &mut PartsBuilder, quoting: Quoting) -> Result<(), LexError> {
        let start = self.cursor.offset();
        match (
            self.cursor.peek_at(self.input, 1),
            self.cursor.peek_at(self.input, 2),
        ) {
            (Some(b'('), Some(b'(')) => {
                self.cursor.advance_by(3, self.input);
                self.skip_balanced(b'(', b')', 2)
                    .map_err(|()| self.unterminated(LexErrorKind::UnterminatedArithmeticExpansion, start))?;
                parts.push_expansion(WordPart::ArithmeticExpansion(self.text_from(start)));
            }
            (Some(b'('), _) => {
                self.cursor.advance_by(2, self.input);
                self.skip_balanced(b'(', b')', 1)
                    .map_err(|()| self.unterminated(LexErrorKind::UnterminatedCommandSubstitution, start))?;
                parts.push_expansion(WordPart::CommandSubstitution(self.text_from(start)));
            }
            (Some(b'{'), _) => {
                self.cursor.advance_by(2, self.input);
                self.skip_balanced(b'{', b'}', 1)
                    .map_err(|()| self.unterminated(LexErrorKind::UnterminatedParameterExpansion, start))?;
                parts.push_expansion(WordPart::Parameter(self.text_from(start)));
            }
            (Some(b'\''), _) if quoting == Quoting::Unquoted => {
                self.cursor.advance_by(2, self.input);
                let body_start = self.cursor.position();
                loop {
                    match self.cursor.peek_byte(self.input) {
                        None => {
                            return Err(
                                self.unterminated(LexErrorKind::UnterminatedAnsiCQuote, start)
                            );
                        }
                        Some(b'\\') => self.skip_escaped(),
                        Some(b'\'') => break,
                        Some(_) => {
                            self.cursor.advance_char(self.input);
                        }
                    }
                }
                let body = &self.input[body_start..self.cursor.position()];
                parts.push_str(body, Quoting::AnsiC);
                self.cursor.advance_by(1, self.input);
            }
            (Some(b'"'), _) if quoting == Quoting::Unquoted => {
                self.cursor.advance_by(2, self.input);
                self.scan_double_quoted_body(parts, start)?;
            }
            (Some(next), _) if next.is_ascii_alphabetic() || next == b'_' => {
                self.cursor.advance_by(1, self.input);
                while self
                    .cursor
                    .peek_byte(self.input)
                    .is_some_and(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
                {
                    self.cursor.advance_by(1, self.input);
                }
                parts.push_expansion(WordPart::Parameter(self.text_from(start)));
            }
            (Some(next), _) if next.is_ascii_digit() || b"@*#?$!-".contains(&next) => {
                self.cursor.advance_by(2, self.input);
                parts.push_expansion(WordPart::Parameter(self.text_from(start)));
            }
            _ => {
                self.cursor.advance_by(1, self.input);
                parts.push_char('$', quoting);
            }
        }
        Ok(())
    }

    fn scan_backquoted(&mut self) -> Result<String, LexError> {
        let start = self.cursor.offset();
        self.cursor.advance_by(1, self.input);
        loop {
            match self.cursor.peek_byte(self.input) {
                None => return Err(self.unterminated(LexErrorKind::UnterminatedBackquote, start)),
                Some(b'\\') => self.skip_escaped(),
                Some(b'`') => {
                    self.cursor.advance_by(1, self.input);
                    return Ok(self.text_from(start));
                }
                Some(_) => {
                    self.cursor.advance_char(self.input);
                }
            }
        }
    }

    fn scan_process_substitution(&mut self) -> Result<String, LexError> {
        let start = self.cursor.offset();
        self.cursor.advance_by(2, self.input);
        self.skip_balanced(b'(', b')', 1)
            .map_err(|()| self.unterminated(LexErrorKind::UnterminatedProcessSubstitution, start))?;
        Ok(self.text_from(start))
    }

    /// Skips to the matching `close` byte, honoring nested quotes and
    /// escapes. `depth` counts the delimiters already consumed.
    fn skip_balanced(&mut self, open: u8, close: u8, mut depth: usize) -> Result<(), ()> {
        while let Some(byte) = self.cursor.peek_byte(self.input) {
            match byte {
                b'\\' => self.skip_escaped(),
                b'\'' => {
                    self.cursor.advance_by(1, self.input);
                    let rest = &self.input[self.cursor.position()..];
                    let length = rest.find('\'').ok_or(())?;
                    self.cursor.advance_by(length + 1, self.input);
                }
                b'"' | b'`' => {
                    let quote = byte;
                    self.cursor.advance_by(1, self.input);
                    loop {
                        match self.cursor.peek_byte(self.input) {
                            None => return Err(()),
                            Some(b'\\') => self.skip_escaped(),
                            Some(found) if found == quote => {
                                self.cursor.advance_by(1, self.input);
                                break;
                            }
                            Some(_) => {
                                self.cursor.advance_char(self.input);
                            }
                        }
                    }
                }
                byte if byte == open => {
                    depth += 1;
                    self.cursor.advance_by(1, self.input);
                }
                byte if byte == close => {
                    depth -= 1;
                    self.cursor.advance_by(1, self.input);
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {
                    self.cursor.advance_char(self.input);
                }
            }
        }
        Err(())
    }

    fn skip_escaped(&mut self) {
        self.cursor.advance_by(1, self.input);
        self.cursor.advance_char(self.input);
    }

    fn text_from(&self, start: ByteOffset) -> String {
        self.span_from(start).slice(self.input).to_string()
    }

    fn span_from(&self, start: ByteOffset) -> Span {
        Span::new(self.source_id, start, self.cursor.offset())
    }

    fn unterminated(&self, kind: LexErrorKind, open: ByteOffset) -> LexError {
        LexError::new(
            kind,
            Span::new(self.source_id, open, ByteOffset::from_usize(self.input.len())),
        )
    }
}
