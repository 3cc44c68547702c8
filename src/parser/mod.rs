//! Shell parser and tree traversal.
//!
//! A bounded-lookahead token stream feeds a recursive-descent grammar that
//! produces [`ProgramAst`]; [`walk`] replays the tree as enter/exit events.

pub mod ast;
pub mod error;
pub mod parser;
pub mod token_stream;
pub mod walk;

pub use ast::{
    ArithmeticCommandAst, AssignmentValue, AssignmentWordAst, BinaryCommandAst, BinaryOperator,
    BranchKind, CaseClauseAst, CaseItemAst, CommandAst, CoprocClauseAst, DeclarationClauseAst,
    DeclarationOperand, ForClauseAst, ForHeader, FunctionDefinitionAst, GroupAst, IfClauseAst,
    LetClauseAst, ProgramAst, RedirectAst, SimpleCommandAst, StatementAst, TestClauseAst,
    TimeClauseAst, WhileClauseAst, WordAst,
};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{ParseOptions, Parser, parse_program};
pub use token_stream::{MAX_LOOKAHEAD, TokenStream};
pub use walk::{SyntaxNode, Visitor, Walk, walk};
