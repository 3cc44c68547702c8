//! Syntax tree to FFA lines.

use tracing::{debug, trace, warn};

use crate::ffa::args::literalize;
use crate::ffa::commands::command_effects;
use crate::ffa::scope::{FrameKind, ScopeTracker};
use crate::ffa::statement::{FfaLine, Statement};
use crate::ffa::vars::VariableBank;
use crate::parser::ast::{
    AssignmentValue, AssignmentWordAst, BranchKind, ProgramAst, SimpleCommandAst,
};
use crate::parser::walk::{SyntaxNode, Visitor, Walk, walk};

/// State of one translation call.
///
/// A context is consumed by [`TranslationContext::translate_program`], so
/// scope depth and synthetic names never leak between calls.
#[derive(Debug, Default)]
pub struct TranslationContext {
    lines: Vec<FfaLine>,
    scope: ScopeTracker,
    vars: VariableBank,
}

impl TranslationContext {
    /// Creates a fresh context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `program` and returns the emitted lines in program order.
    pub fn translate_program(mut self, program: &ProgramAst) -> Vec<FfaLine> {
        walk(program, &mut self);
        if !self.scope.is_empty() {
            warn!(
                open_blocks = self.scope.depth(),
                "translation finished with open blocks"
            );
        }
        self.lines
    }

    fn emit(&mut self, statement: Statement) {
        let depth = self.scope.depth();
        trace!(depth, %statement, "emit");
        self.lines.push(FfaLine::new(depth, statement));
    }

    fn translate_assignment(&mut self, assignment: &AssignmentWordAst) {
        let value = match &assignment.value {
            AssignmentValue::Empty => {
                debug!(name = %assignment.name, "empty assignment, nothing to record");
                return;
            }
            AssignmentValue::Word(word) => word.literal(),
            AssignmentValue::Array(_) => None,
        };

        let name = assignment
            .name
            .split_once('[')
            .map_or(assignment.name.as_str(), |(base, _)| base);
        let var = self.vars.resolve(name);
        let statement = match value {
            Some(value) => Statement::AssignLiteral { var, value },
            None => Statement::AssignInput(var),
        };
        self.emit(statement);
    }

    fn translate_invocation(&mut self, command: &SimpleCommandAst) {
        let Some(name_word) = command.name() else {
            return;
        };
        let Some(name) = name_word.literal() else {
            debug!(raw = name_word.raw(), "command name is not literal, skipping");
            return;
        };

        let arguments = literalize(command.arguments());
        for statement in command_effects(&name, &arguments) {
            self.emit(statement);
        }
    }

    fn open(&mut self, statement: Statement, kind: FrameKind) {
        self.emit(statement);
        self.scope.push(kind);
    }

    /// `elif`/`else`: closes the previous branch and opens the next one on
    /// the same line. Only an open `if`/`elif` branch can be continued.
    fn continue_branch(&mut self, statement: Statement, kind: FrameKind) {
        match self.scope.current() {
            Some(FrameKind::Branch) => {
                self.scope.pop();
                self.open(statement, kind);
            }
            open => debug!(?open, %statement, "no open branch to continue, skipping"),
        }
    }

    /// Closes the innermost block if `opened_by` accepts its kind.
    fn close(&mut self, opened_by: fn(FrameKind) -> bool) {
        match self.scope.current() {
            Some(kind) if opened_by(kind) => {
                self.scope.pop();
                self.emit(Statement::Close);
            }
            open => debug!(?open, "innermost block belongs to another construct"),
        }
    }
}

impl<'ast> Visitor<'ast> for TranslationContext {
    fn enter(&mut self, node: SyntaxNode<'ast>) -> Walk {
        match node {
            SyntaxNode::Assignment(assignment) => self.translate_assignment(assignment),
            SyntaxNode::Invocation(command) => self.translate_invocation(command),
            SyntaxNode::Branch(clause) => match clause.kind {
                BranchKind::If => self.open(Statement::If, FrameKind::Branch),
                BranchKind::ElseIf => self.continue_branch(Statement::ElseIf, FrameKind::Branch),
                BranchKind::Else => {
                    self.continue_branch(Statement::Else, FrameKind::ElseBranch);
                }
            },
            SyntaxNode::WhileLoop(_) => self.open(Statement::While, FrameKind::WhileLoop),
            SyntaxNode::ForLoop(_) => self.open(Statement::While, FrameKind::ForLoop),
            SyntaxNode::CaseBranch(_)
            | SyntaxNode::Block(_)
            | SyntaxNode::Subshell(_)
            | SyntaxNode::BinaryPipeline(_)
            | SyntaxNode::FunctionDecl(_)
            | SyntaxNode::ArithmeticCommand(_)
            | SyntaxNode::TestClause(_)
            | SyntaxNode::DeclarationClause(_)
            | SyntaxNode::LetClause(_)
            | SyntaxNode::TimeClause(_)
            | SyntaxNode::CoprocClause(_) => {}
        }
        Walk::Continue
    }

    fn exit(&mut self, node: SyntaxNode<'ast>) {
        match node {
            // Continuations are nested inside the leading branch, whose exit
            // closes the whole chain.
            SyntaxNode::Branch(clause) if clause.kind == BranchKind::If => {
                self.close(FrameKind::is_branch);
            }
            SyntaxNode::WhileLoop(_) => self.close(|kind| kind == FrameKind::WhileLoop),
            SyntaxNode::ForLoop(_) => self.close(|kind| kind == FrameKind::ForLoop),
            _ => {}
        }
    }
}
