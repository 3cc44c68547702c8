//! Syntax tree produced by the parser.
//!
//! Lists are plain `Vec<StatementAst>` in source order. Redirects hang off
//! the statement that owns them, for simple and compound commands alike.

use crate::lexer::{OperatorKind, Span, Token, WordPart};

/// Root parser output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgramAst {
    /// Top-level statements.
    pub statements: Vec<StatementAst>,
    /// Span covering all statements, when there are any.
    pub span: Option<Span>,
}

/// One command with its statement-level decorations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementAst {
    /// The command itself.
    pub command: CommandAst,
    /// Prefixed by `!`.
    pub negated: bool,
    /// Terminated by `&`.
    pub background: bool,
    /// Redirects in encounter order.
    pub redirects: Vec<RedirectAst>,
    /// Source span of the statement.
    pub span: Span,
}

/// Command node family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAst {
    /// Assignments and words (`FOO=1 make all`).
    Simple(SimpleCommandAst),
    /// `&&`/`||` chain or `|`/`|&` pipeline.
    Binary(BinaryCommandAst),
    /// `if ... fi`.
    If(IfClauseAst),
    /// `while`/`until` loop.
    While(WhileClauseAst),
    /// `for`/`select` loop.
    For(ForClauseAst),
    /// `case ... esac`.
    Case(CaseClauseAst),
    /// `{ ...; }`.
    BraceGroup(GroupAst),
    /// `( ... )`.
    Subshell(GroupAst),
    /// `name() body` or `function name body`.
    FunctionDefinition(FunctionDefinitionAst),
    /// `(( expr ))`.
    Arithmetic(ArithmeticCommandAst),
    /// `[[ expr ]]`.
    Test(TestClauseAst),
    /// `declare`, `local`, `export`, `readonly`, `typeset`, `nameref`.
    Declaration(DeclarationClauseAst),
    /// `let expr...`.
    Let(LetClauseAst),
    /// `time [-p] pipeline`.
    Time(TimeClauseAst),
    /// `coproc [name] command`.
    Coproc(CoprocClauseAst),
}

/// A word with its lexical structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAst {
    /// Lexer token (or the value slice of an assignment word).
    pub token: Token,
    /// Source span for this word.
    pub span: Span,
}

impl WordAst {
    /// Wraps a word token.
    pub fn new(token: Token) -> Self {
        Self {
            span: token.span,
            token,
        }
    }

    /// Raw source text.
    pub fn raw(&self) -> &str {
        &self.token.lexeme
    }

    /// Word parts in source order.
    pub fn parts(&self) -> &[WordPart] {
        &self.token.parts
    }

    /// Returns the quote-removed text when the word contains no expansion.
    pub fn literal(&self) -> Option<String> {
        self.token
            .parts
            .iter()
            .all(WordPart::is_literal)
            .then(|| self.token.parts.iter().map(WordPart::text).collect())
    }

    /// Quote-removed literal text with expansions kept verbatim.
    ///
    /// This is lossy by nature: `"$HOME"/bin` becomes `$HOME/bin`.
    pub fn best_effort_text(&self) -> String {
        self.token.parts.iter().map(WordPart::text).collect()
    }
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentValue {
    /// `name=`
    Empty,
    /// `name=word`
    Word(WordAst),
    /// `name=(a b c)`
    Array(Vec<WordAst>),
}

/// `name=value` or `name+=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentWordAst {
    /// Variable name, including any `[index]` suffix.
    pub name: String,
    /// `+=` form.
    pub append: bool,
    /// Assigned value.
    pub value: AssignmentValue,
    /// Source span for the whole assignment.
    pub span: Span,
}

/// Simple command: assignment prefix and command words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommandAst {
    /// Assignment prefix words.
    pub assignments: Vec<AssignmentWordAst>,
    /// Command name followed by its arguments.
    pub words: Vec<WordAst>,
    /// Source span for this command.
    pub span: Span,
}

impl SimpleCommandAst {
    /// Returns the command-name word, if any.
    pub fn name(&self) -> Option<&WordAst> {
        self.words.first()
    }

    /// Returns the argument words after the command name.
    pub fn arguments(&self) -> &[WordAst] {
        self.words.get(1..).unwrap_or(&[])
    }
}

/// Connective of a [`BinaryCommandAst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `&&`
    AndIf,
    /// `||`
    OrIf,
    /// `|`
    Pipe,
    /// `|&`
    PipeAll,
}

/// Flat chain of statements joined by binary connectives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryCommandAst {
    /// First operand.
    pub head: Box<StatementAst>,
    /// Remaining operands with the connective preceding each.
    pub tail: Vec<(BinaryOperator, StatementAst)>,
    /// Source span for the chain.
    pub span: Span,
}

/// Position of a branch inside an `if` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    /// Leading `if`.
    If,
    /// `elif` continuation.
    ElseIf,
    /// Final `else`.
    Else,
}

/// One branch of an `if` chain; continuations nest in `else_branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfClauseAst {
    /// Where this branch sits in the chain.
    pub kind: BranchKind,
    /// Condition list; empty for [`BranchKind::Else`].
    pub condition: Vec<StatementAst>,
    /// Body list.
    pub body: Vec<StatementAst>,
    /// Next `elif`/`else` branch.
    pub else_branch: Option<Box<IfClauseAst>>,
    /// Span from this branch's keyword to the closing `fi`.
    pub span: Span,
}

/// `while` or `until` loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileClauseAst {
    /// `until` form.
    pub until: bool,
    /// Loop condition list.
    pub condition: Vec<StatementAst>,
    /// Loop body list.
    pub body: Vec<StatementAst>,
    /// Source span for this loop.
    pub span: Span,
}

/// Header of a `for` loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForHeader {
    /// `for name [in words]`; `None` iterates positional parameters.
    Words {
        /// Loop variable.
        name: WordAst,
        /// Iteration words.
        words: Option<Vec<WordAst>>,
    },
    /// `for ((init; cond; step))`, raw text between the parentheses.
    Arithmetic(String),
}

/// `for` or `select` loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForClauseAst {
    /// `select` form.
    pub select: bool,
    /// Loop header.
    pub header: ForHeader,
    /// Loop body.
    pub body: Vec<StatementAst>,
    /// Source span for this loop.
    pub span: Span,
}

/// One `pattern) list ;;` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseItemAst {
    /// Alternative patterns.
    pub patterns: Vec<WordAst>,
    /// Arm body.
    pub body: Vec<StatementAst>,
    /// `;;`, `;&` or `;;&`; `None` for a final arm without terminator.
    pub terminator: Option<OperatorKind>,
    /// Source span for this arm.
    pub span: Span,
}

/// `case word in ... esac`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseClauseAst {
    /// Subject word.
    pub word: WordAst,
    /// Arms in source order.
    pub items: Vec<CaseItemAst>,
    /// Source span for the clause.
    pub span: Span,
}

/// Brace group or subshell body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAst {
    /// Grouped statements.
    pub body: Vec<StatementAst>,
    /// Source span including delimiters.
    pub span: Span,
}

/// Function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinitionAst {
    /// Function name.
    pub name: String,
    /// Function body.
    pub body: Box<StatementAst>,
    /// Source span for the full definition.
    pub span: Span,
}

/// `(( expression ))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticCommandAst {
    /// Raw expression text between the double parentheses.
    pub expression: String,
    /// Source span including delimiters.
    pub span: Span,
}

/// `[[ ... ]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestClauseAst {
    /// Word operands between the brackets; operators are not kept.
    pub words: Vec<WordAst>,
    /// Source span including delimiters.
    pub span: Span,
}

/// Operand of a declaration builtin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationOperand {
    /// `name=value`
    Assignment(AssignmentWordAst),
    /// Option flag or bare name.
    Word(WordAst),
}

/// `export`, `local`, `declare` and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationClauseAst {
    /// Builtin name.
    pub variant: String,
    /// Operands in source order.
    pub operands: Vec<DeclarationOperand>,
    /// Source span for the clause.
    pub span: Span,
}

/// `let expr...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetClauseAst {
    /// Expression words.
    pub expressions: Vec<WordAst>,
    /// Source span for the clause.
    pub span: Span,
}

/// `time [-p] [pipeline]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeClauseAst {
    /// `-p` given.
    pub posix_format: bool,
    /// Timed pipeline; `None` for a bare `time`.
    pub statement: Option<Box<StatementAst>>,
    /// Source span for the clause.
    pub span: Span,
}

/// `coproc [name] command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoprocClauseAst {
    /// Coprocess name when given.
    pub name: Option<String>,
    /// Coprocess command.
    pub statement: Box<StatementAst>,
    /// Source span for the clause.
    pub span: Span,
}

/// Redirect with optional io-number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectAst {
    /// Leading file descriptor (`2>`).
    pub fd: Option<u32>,
    /// Redirect operator.
    pub operator: OperatorKind,
    /// Target word (here-doc delimiter for `<<`).
    pub target: WordAst,
    /// Source span for this redirect.
    pub span: Span,
}
