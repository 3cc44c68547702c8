//! Token model produced by the lexer.

use crate::lexer::span::Span;

/// Shell control and redirection operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `&&`
    AndIf,
    /// `||`
    OrIf,
    /// `;;`
    DoubleSemicolon,
    /// `;&`
    SemicolonAmpersand,
    /// `;;&`
    DoubleSemicolonAmpersand,
    /// `|&`
    PipeAmpersand,
    /// `<<`
    HereDoc,
    /// `<<-`
    HereDocStripTabs,
    /// `<<<`
    HereString,
    /// `>>`
    AppendOutput,
    /// `<&`
    DupInput,
    /// `>&`
    DupOutput,
    /// `<>`
    ReadWrite,
    /// `>|`
    Clobber,
    /// `&>`
    RedirectAll,
    /// `&>>`
    AppendAll,
    /// `|`
    Pipe,
    /// `;`
    Semicolon,
    /// `&`
    Ampersand,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `<`
    Less,
    /// `>`
    Greater,
}

impl OperatorKind {
    /// Returns the operator spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AndIf => "&&",
            Self::OrIf => "||",
            Self::DoubleSemicolon => ";;",
            Self::SemicolonAmpersand => ";&",
            Self::DoubleSemicolonAmpersand => ";;&",
            Self::PipeAmpersand => "|&",
            Self::HereDoc => "<<",
            Self::HereDocStripTabs => "<<-",
            Self::HereString => "<<<",
            Self::AppendOutput => ">>",
            Self::DupInput => "<&",
            Self::DupOutput => ">&",
            Self::ReadWrite => "<>",
            Self::Clobber => ">|",
            Self::RedirectAll => "&>",
            Self::AppendAll => "&>>",
            Self::Pipe => "|",
            Self::Semicolon => ";",
            Self::Ampersand => "&",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Less => "<",
            Self::Greater => ">",
        }
    }

    /// Returns `true` for operators that introduce a redirect target.
    pub fn is_redirect(self) -> bool {
        matches!(
            self,
            Self::HereDoc
                | Self::HereDocStripTabs
                | Self::HereString
                | Self::AppendOutput
                | Self::DupInput
                | Self::DupOutput
                | Self::ReadWrite
                | Self::Clobber
                | Self::RedirectAll
                | Self::AppendAll
                | Self::Less
                | Self::Greater
        )
    }

    /// Returns `true` for `case` item terminators.
    pub fn is_case_terminator(self) -> bool {
        matches!(
            self,
            Self::DoubleSemicolon | Self::SemicolonAmpersand | Self::DoubleSemicolonAmpersand
        )
    }
}

/// Token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A shell word (possibly quoted or containing expansions).
    Word,
    /// A control or redirection operator.
    Operator(OperatorKind),
    /// Newline delimiter.
    Newline,
}

/// How a literal word part was quoted in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quoting {
    /// Bare text.
    Unquoted,
    /// `'...'`
    Single,
    /// `"..."` or `$"..."`
    Double,
    /// `$'...'`
    AnsiC,
    /// A single backslash-escaped character.
    Escaped,
}

/// One segment of a word, in source order.
///
/// Literal parts hold text after quote removal. Expansion parts hold the
/// raw source text of the expansion, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPart {
    /// Literal text.
    Literal {
        /// Text after quote removal.
        text: String,
        /// Quoting the text was written with.
        quoting: Quoting,
    },
    /// `$name`, `$1`, `$?`, `${...}`.
    Parameter(String),
    /// `$(...)` or `` `...` ``.
    CommandSubstitution(String),
    /// `$((...))`.
    ArithmeticExpansion(String),
    /// `<(...)` or `>(...)`.
    ProcessSubstitution(String),
}

impl WordPart {
    /// Returns the part's text: literal text, or the raw expansion source.
    pub fn text(&self) -> &str {
        match self {
            Self::Literal { text, .. } => text,
            Self::Parameter(raw)
            | Self::CommandSubstitution(raw)
            | Self::ArithmeticExpansion(raw)
            | Self::ProcessSubstitution(raw) => raw,
        }
    }

    /// Returns `true` when this part is literal text.
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }
}

/// A lexical token with raw text and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Token text exactly as scanned.
    pub lexeme: String,
    /// Word parts; empty for operators and newlines.
    pub parts: Vec<WordPart>,
    /// Byte-oriented source span.
    pub span: Span,
}

impl Token {
    /// Creates a word token.
    pub fn word(lexeme: String, parts: Vec<WordPart>, span: Span) -> Self {
        Self {
            kind: TokenKind::Word,
            lexeme,
            parts,
            span,
        }
    }

    /// Creates an operator token.
    pub fn operator(kind: OperatorKind, span: Span) -> Self {
        Self {
            kind: TokenKind::Operator(kind),
            lexeme: kind.as_str().to_string(),
            parts: Vec::new(),
            span,
        }
    }

    /// Creates a newline token.
    pub fn newline(span: Span) -> Self {
        Self {
            kind: TokenKind::Newline,
            lexeme: "\n".to_string(),
            parts: Vec::new(),
            span,
        }
    }

    /// Returns `true` for a word made only of unquoted literal text.
    ///
    /// Reserved words and declaration builtins are only recognized on
    /// plain words, so `"if"` and `\if` stay ordinary words.
    pub fn is_plain(&self) -> bool {
        self.kind == TokenKind::Word
            && self.parts.iter().all(|part| {
                matches!(
                    part,
                    WordPart::Literal {
                        quoting: Quoting::Unquoted,
                        ..
                    }
                )
            })
    }

    /// Returns `true` for a plain word spelled exactly `text`.
    pub fn is_plain_word(&self, text: &str) -> bool {
        self.is_plain() && self.lexeme == text
    }

    /// Returns the operator kind for operator tokens.
    pub fn operator_kind(&self) -> Option<OperatorKind> {
        match self.kind {
            TokenKind::Operator(kind) => Some(kind),
            _ => None,
        }
    }
}
