//! Enter/exit traversal over a parsed program.
//!
//! The walk is driven by an explicit work stack, so deeply nested input
//! cannot exhaust the call stack. Nodes are visited in document order and
//! every `enter` is paired with an `exit`, including nodes whose children
//! were skipped.

use crate::parser::ast::{
    ArithmeticCommandAst, AssignmentWordAst, BinaryCommandAst, CaseClauseAst, CommandAst,
    CoprocClauseAst, DeclarationClauseAst, DeclarationOperand, ForClauseAst,
    FunctionDefinitionAst, GroupAst, IfClauseAst, LetClauseAst, ProgramAst, SimpleCommandAst,
    StatementAst, TestClauseAst, TimeClauseAst, WhileClauseAst,
};

/// Borrowed view of one traversable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode<'ast> {
    /// `name=value`, either as a command prefix or a declaration operand.
    Assignment(&'ast AssignmentWordAst),
    /// Simple command.
    Invocation(&'ast SimpleCommandAst),
    /// One branch of an `if` chain.
    Branch(&'ast IfClauseAst),
    /// `while`/`until` loop.
    WhileLoop(&'ast WhileClauseAst),
    /// `for`/`select` loop.
    ForLoop(&'ast ForClauseAst),
    /// `case` clause.
    CaseBranch(&'ast CaseClauseAst),
    /// `{ ... }` group.
    Block(&'ast GroupAst),
    /// `( ... )` group.
    Subshell(&'ast GroupAst),
    /// `&&`/`||` chain or pipeline.
    BinaryPipeline(&'ast BinaryCommandAst),
    /// Function definition.
    FunctionDecl(&'ast FunctionDefinitionAst),
    /// `(( ... ))`.
    ArithmeticCommand(&'ast ArithmeticCommandAst),
    /// `[[ ... ]]`.
    TestClause(&'ast TestClauseAst),
    /// Declaration builtin.
    DeclarationClause(&'ast DeclarationClauseAst),
    /// `let`.
    LetClause(&'ast LetClauseAst),
    /// `time`.
    TimeClause(&'ast TimeClauseAst),
    /// `coproc`.
    CoprocClause(&'ast CoprocClauseAst),
}

impl<'ast> SyntaxNode<'ast> {
    /// Node for the command of `statement`.
    pub fn of_statement(statement: &'ast StatementAst) -> Self {
        match &statement.command {
            CommandAst::Simple(command) => Self::Invocation(command),
            CommandAst::Binary(command) => Self::BinaryPipeline(command),
            CommandAst::If(clause) => Self::Branch(clause),
            CommandAst::While(clause) => Self::WhileLoop(clause),
            CommandAst::For(clause) => Self::ForLoop(clause),
            CommandAst::Case(clause) => Self::CaseBranch(clause),
            CommandAst::BraceGroup(group) => Self::Block(group),
            CommandAst::Subshell(group) => Self::Subshell(group),
            CommandAst::FunctionDefinition(function) => Self::FunctionDecl(function),
            CommandAst::Arithmetic(command) => Self::ArithmeticCommand(command),
            CommandAst::Test(clause) => Self::TestClause(clause),
            CommandAst::Declaration(clause) => Self::DeclarationClause(clause),
            CommandAst::Let(clause) => Self::LetClause(clause),
            CommandAst::Time(clause) => Self::TimeClause(clause),
            CommandAst::Coproc(clause) => Self::CoprocClause(clause),
        }
    }

    /// Direct children in document order.
    ///
    /// An invocation's assignment prefix is listed as its children, so
    /// assignments are visited after the invocation itself.
    pub fn children(self) -> Vec<SyntaxNode<'ast>> {
        match self {
            Self::Assignment(_)
            | Self::ArithmeticCommand(_)
            | Self::TestClause(_)
            | Self::LetClause(_) => Vec::new(),
            Self::Invocation(command) => command
                .assignments
                .iter()
                .map(Self::Assignment)
                .collect(),
            Self::Branch(clause) => {
                let mut children = statements(&clause.condition);
                children.extend(statements(&clause.body));
                if let Some(continuation) = &clause.else_branch {
                    children.push(Self::Branch(continuation));
                }
                children
            }
            Self::WhileLoop(clause) => {
                let mut children = statements(&clause.condition);
                children.extend(statements(&clause.body));
                children
            }
            Self::ForLoop(clause) => statements(&clause.body),
            Self::CaseBranch(clause) => clause
                .items
                .iter()
                .flat_map(|item| item.body.iter().map(Self::of_statement))
                .collect(),
            Self::Block(group) | Self::Subshell(group) => statements(&group.body),
            Self::BinaryPipeline(chain) => std::iter::once(chain.head.as_ref())
                .chain(chain.tail.iter().map(|(_, statement)| statement))
                .map(Self::of_statement)
                .collect(),
            Self::FunctionDecl(function) => vec![Self::of_statement(&function.body)],
            Self::DeclarationClause(clause) => clause
                .operands
                .iter()
                .filter_map(|operand| match operand {
                    DeclarationOperand::Assignment(assignment) => {
                        Some(Self::Assignment(assignment))
                    }
                    DeclarationOperand::Word(_) => None,
                })
                .collect(),
            Self::TimeClause(clause) => clause
                .statement
                .iter()
                .map(|statement| Self::of_statement(statement))
                .collect(),
            Self::CoprocClause(clause) => vec![Self::of_statement(&clause.statement)],
        }
    }
}

/// Traversal control returned from [`Visitor::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Walk {
    /// Visit the node's children.
    #[default]
    Continue,
    /// Do not descend; `exit` is still delivered.
    SkipChildren,
}

/// Callbacks receiving traversal events.
pub trait Visitor<'ast> {
    /// Called before the node's children.
    fn enter(&mut self, node: SyntaxNode<'ast>) -> Walk;

    /// Called after the node's children.
    fn exit(&mut self, _node: SyntaxNode<'ast>) {}
}

enum Step<'ast> {
    Enter(SyntaxNode<'ast>),
    Exit(SyntaxNode<'ast>),
}

/// Walks every top-level statement of `program` in document order.
pub fn walk<'ast, V>(program: &'ast ProgramAst, visitor: &mut V)
where
    V: Visitor<'ast> + ?Sized,
{
    let mut stack: Vec<Step<'ast>> = statements(&program.statements)
        .into_iter()
        .rev()
        .map(Step::Enter)
        .collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node) => {
                let control = visitor.enter(node);
                stack.push(Step::Exit(node));
                if control == Walk::Continue {
                    stack.extend(node.children().into_iter().rev().map(Step::Enter));
                }
            }
            Step::Exit(node) => visitor.exit(node),
        }
    }
}

fn statements(list: &[StatementAst]) -> Vec<SyntaxNode<'_>> {
    list.iter().map(SyntaxNode::of_statement).collect()
}
