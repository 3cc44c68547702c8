//! Parser error contracts.

use std::fmt;

use crate::lexer::{LexError, Span, Token};

/// Stable parser error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A concrete token did not match grammar expectations.
    UnexpectedToken,
    /// Input ended before required grammar elements were found.
    UnexpectedEndOfInput,
    /// The lexer could not tokenize the input.
    LexerError,
    /// Parser requested lookahead beyond the supported bound.
    LookaheadExceeded,
    /// Compound commands nest deeper than `ParseOptions::max_nesting`.
    NestingLimitExceeded,
    /// The tree grew past `ParseOptions::max_ast_nodes`.
    NodeLimitExceeded,
}

impl ParseErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",
            Self::UnexpectedEndOfInput => "unexpected end of input",
            Self::LexerError => "lexer error",
            Self::LookaheadExceeded => "lookahead exceeded",
            Self::NestingLimitExceeded => "nesting limit exceeded",
            Self::NodeLimitExceeded => "syntax tree size limit exceeded",
        }
    }
}

/// Parser error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// Source span near the failure, when known.
    pub span: Option<Span>,
    /// Expected token labels.
    pub expected: Vec<String>,
    /// Found token text or failure detail.
    pub found: Option<String>,
}

impl ParseError {
    /// Creates a parser error.
    pub fn new(
        kind: ParseErrorKind,
        span: Option<Span>,
        expected: Vec<String>,
        found: Option<String>,
    ) -> Self {
        Self {
            kind,
            span,
            expected,
            found,
        }
    }

    /// Creates an `UnexpectedToken` error.
    pub fn unexpected_token(
        token: &Token,
        expected: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            Some(token.span),
            expected.into_iter().map(Into::into).collect(),
            Some(token.lexeme.clone()),
        )
    }

    /// Creates an `UnexpectedEndOfInput` error.
    pub fn unexpected_end_of_input(expected: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEndOfInput,
            None,
            expected.into_iter().map(Into::into).collect(),
            Some("EOF".to_string()),
        )
    }

    /// Wraps a fatal lexer error.
    pub fn lexer_error(error: &LexError) -> Self {
        Self::new(
            ParseErrorKind::LexerError,
            Some(error.span),
            Vec::new(),
            Some(error.kind.to_string()),
        )
    }

    /// Creates a `LookaheadExceeded` error.
    pub fn lookahead_exceeded(requested: usize, max: usize) -> Self {
        Self::new(
            ParseErrorKind::LookaheadExceeded,
            None,
            vec![format!("lookahead <= {max}")],
            Some(format!("lookahead {requested}")),
        )
    }

    /// Creates a `NestingLimitExceeded` error.
    pub fn nesting_limit_exceeded(span: Option<Span>, max: usize) -> Self {
        Self::new(
            ParseErrorKind::NestingLimitExceeded,
            span,
            vec![format!("nesting depth <= {max}")],
            None,
        )
    }

    /// Creates a `NodeLimitExceeded` error.
    pub fn node_limit_exceeded(span: Option<Span>, max: usize) -> Self {
        Self::new(
            ParseErrorKind::NodeLimitExceeded,
            span,
            vec![format!("at most {max} nodes")],
            None,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some(found) = &self.found {
            write!(f, " `{}`", found.escape_debug())?;
        }
        if let Some(span) = self.span {
            write!(f, " at byte {}", span.start.value())?;
        }
        if !self.expected.is_empty() {
            write!(f, " (expected {})", self.expected.join(" or "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
