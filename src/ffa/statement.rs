//! FFA statements and their line form.

use std::fmt;

/// Indentation unit used by [`FfaLine`]'s `Display`.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Anonymized variable name, rendered as `$x<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyntheticVar(pub usize);

impl fmt::Display for SyntheticVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$x{}", self.0)
    }
}

/// One FFA statement.
///
/// Paths are written verbatim between single quotes; they are never
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// `touch '<path>';`
    Touch(String),
    /// `mkdir '<path>';`
    Mkdir(String),
    /// `rmr '<path>';`
    Remove(String),
    /// `cp '<src>' '<dst>';`
    Copy {
        /// Copied path.
        source: String,
        /// Destination path.
        destination: String,
    },
    /// `cd '<path>';`
    ChangeDirectory(String),
    /// `assert(exists '<path>');`
    AssertExists(String),
    /// `assert(! exists '<name>');`
    AssertMissing(String),
    /// `$xN = '<literal>';`
    AssignLiteral {
        /// Assigned variable.
        var: SyntheticVar,
        /// Quote-removed value.
        value: String,
    },
    /// `$xN = INPUT;`
    AssignInput(SyntheticVar),
    /// `if (other) {`
    If,
    /// `} else if (other) {`
    ElseIf,
    /// `} else {`
    Else,
    /// `while (other) {`
    While,
    /// `}`
    Close,
}

impl Statement {
    /// True for headers that leave a block open after the line.
    pub fn opens_block(&self) -> bool {
        matches!(self, Self::If | Self::ElseIf | Self::Else | Self::While)
    }

    /// True for lines that start by closing a block.
    pub fn closes_block(&self) -> bool {
        matches!(self, Self::ElseIf | Self::Else | Self::Close)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Touch(path) => write!(f, "touch '{path}';"),
            Self::Mkdir(path) => write!(f, "mkdir '{path}';"),
            Self::Remove(path) => write!(f, "rmr '{path}';"),
            Self::Copy {
                source,
                destination,
            } => write!(f, "cp '{source}' '{destination}';"),
            Self::ChangeDirectory(path) => write!(f, "cd '{path}';"),
            Self::AssertExists(path) => write!(f, "assert(exists '{path}');"),
            Self::AssertMissing(name) => write!(f, "assert(! exists '{name}');"),
            Self::AssignLiteral { var, value } => write!(f, "{var} = '{value}';"),
            Self::AssignInput(var) => write!(f, "{var} = INPUT;"),
            Self::If => f.write_str("if (other) {"),
            Self::ElseIf => f.write_str("} else if (other) {"),
            Self::Else => f.write_str("} else {"),
            Self::While => f.write_str("while (other) {"),
            Self::Close => f.write_str("}"),
        }
    }
}

/// A statement together with the scope depth it was emitted at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FfaLine {
    /// Number of open blocks when the line was emitted.
    pub depth: usize,
    /// The statement.
    pub statement: Statement,
}

impl FfaLine {
    /// Creates a line.
    pub fn new(depth: usize, statement: Statement) -> Self {
        Self { depth, statement }
    }

    /// Renders the line with `indent_width` spaces per depth level.
    pub fn render(&self, indent_width: usize) -> String {
        let indent = " ".repeat(self.depth * indent_width);
        format!("{indent}{}", self.statement)
    }
}

impl fmt::Display for FfaLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.depth * DEFAULT_INDENT_WIDTH;
        write!(f, "{:width$}{}", "", self.statement)
    }
}
