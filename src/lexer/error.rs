//! Fatal lexer errors.

use std::fmt;

use thiserror::Error;

use crate::lexer::span::Span;

/// Stable lexer error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// `'` without a closing quote.
    UnterminatedSingleQuote,
    /// `"` without a closing quote.
    UnterminatedDoubleQuote,
    /// `$'` without a closing quote.
    UnterminatedAnsiCQuote,
    /// `` ` `` without a closing backquote.
    UnterminatedBackquote,
    /// `${` without a closing brace.
    UnterminatedParameterExpansion,
    /// `$(` without a closing parenthesis.
    UnterminatedCommandSubstitution,
    /// `$((` without closing parentheses.
    UnterminatedArithmeticExpansion,
    /// `<(` or `>(` without a closing parenthesis.
    UnterminatedProcessSubstitution,
}

impl LexErrorKind {
    /// Returns a short human-readable description.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnterminatedSingleQuote => "unterminated single quote",
            Self::UnterminatedDoubleQuote => "unterminated double quote",
            Self::UnterminatedAnsiCQuote => "unterminated dollar-single quote",
            Self::UnterminatedBackquote => "unterminated backquoted command substitution",
            Self::UnterminatedParameterExpansion => "unterminated parameter expansion",
            Self::UnterminatedCommandSubstitution => "unterminated command substitution",
            Self::UnterminatedArithmeticExpansion => "unterminated arithmetic expansion",
            Self::UnterminatedProcessSubstitution => "unterminated process substitution",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal lexical error: the rest of the input cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} starting at byte {}", .span.start.value())]
pub struct LexError {
    /// Error category.
    pub kind: LexErrorKind,
    /// Span from the opening delimiter to end of input.
    pub span: Span,
}

impl LexError {
    /// Creates a lexer error.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}
