//! Recursive-descent parser over the token stream.

use crate::lexer::{ByteOffset, Lexer, OperatorKind, Quoting, SourceId, Span, Token, TokenKind, WordPart};
use crate::parser::ast::{
    ArithmeticCommandAst, AssignmentValue, AssignmentWordAst, BinaryCommandAst, BinaryOperator,
    BranchKind, CaseClauseAst, CaseItemAst, CommandAst, CoprocClauseAst, DeclarationClauseAst,
    DeclarationOperand, ForClauseAst, ForHeader, FunctionDefinitionAst, GroupAst, IfClauseAst,
    LetClauseAst, ProgramAst, RedirectAst, SimpleCommandAst, StatementAst, TestClauseAst,
    TimeClauseAst, WhileClauseAst, WordAst,
};
use crate::parser::error::ParseError;
use crate::parser::token_stream::TokenStream;

/// Builtins parsed as declaration clauses.
const DECLARATION_BUILTINS: [&str; 6] =
    ["declare", "export", "local", "nameref", "readonly", "typeset"];

/// Reserved words that close or continue a construct and so can never
/// start a command.
const NON_STARTING_RESERVED: [&str; 8] = ["then", "else", "elif", "fi", "do", "done", "esac", "}"];

/// Parser behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ParseOptions {
    /// Maximum nesting of command lists.
    ///
    /// The default keeps the deepest accepted input within a 2 MiB thread
    /// stack in unoptimized builds.
    pub max_nesting: usize,
    /// Maximum statements plus words in one tree.
    pub max_ast_nodes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: 32,
            max_ast_nodes: 100_000,
        }
    }
}

type ParseResult<T> = Result<T, ParseError>;

/// Shell parser producing a [`ProgramAst`].
pub struct Parser<'a> {
    options: ParseOptions,
    tokens: TokenStream<'a>,
    depth: usize,
    nodes: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input`.
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Self::with_source_id(input, SourceId::default(), options)
    }

    /// Creates a parser whose spans carry `source_id`.
    pub fn with_source_id(input: &'a str, source_id: SourceId, options: ParseOptions) -> Self {
        Self {
            options,
            tokens: TokenStream::new(Lexer::with_source_id(input, source_id)),
            depth: 0,
            nodes: 0,
        }
    }

    /// Parses the whole input.
    pub fn parse_program(&mut self) -> ParseResult<ProgramAst> {
        let statements = self.parse_compound_list(&[])?;
        if let Some(token) = self.peek(0)? {
            return Err(ParseError::unexpected_token(&token, ["EOF"]));
        }
        let span = span_of_statements(&statements);
        Ok(ProgramAst { statements, span })
    }

    /// Parses statements until end of input, `)`, a `case` terminator, or
    /// one of `terminators` in command position.
    fn parse_compound_list(&mut self, terminators: &[&str]) -> ParseResult<Vec<StatementAst>> {
        self.enter_nesting()?;
        let mut statements = Vec::new();

        loop {
            self.skip_newlines()?;
            let Some(token) = self.peek(0)? else {
                break;
            };
            if is_list_terminator(&token, terminators) {
                break;
            }

            let (statement, separated) = self.parse_statement()?;
            statements.push(statement);
            if separated {
                continue;
            }

            match self.peek(0)? {
                None => break,
                Some(next)
                    if next.kind == TokenKind::Newline || is_list_terminator(&next, terminators) => {}
                Some(next) => {
                    return Err(ParseError::unexpected_token(&next, ["newline", ";", "&"]));
                }
            }
        }

        self.leave_nesting();
        Ok(statements)
    }

    fn parse_statement(&mut self) -> ParseResult<(StatementAst, bool)> {
        let mut statement = self.parse_and_or()?;
        let separated = match self.peek_operator(0)? {
            Some(OperatorKind::Semicolon) => {
                let separator = self.next_token(";")?;
                statement.span = statement.span.merge(separator.span);
                true
            }
            Some(OperatorKind::Ampersand) => {
                let separator = self.next_token("&")?;
                statement.span = statement.span.merge(separator.span);
                statement.background = true;
                true
            }
            _ => false,
        };
        Ok((statement, separated))
    }

    fn parse_and_or(&mut self) -> ParseResult<StatementAst> {
        let head = self.parse_pipeline()?;
        let mut tail = Vec::new();

        loop {
            let operator = match self.peek_operator(0)? {
                Some(OperatorKind::AndIf) => BinaryOperator::AndIf,
                Some(OperatorKind::OrIf) => BinaryOperator::OrIf,
                _ => break,
            };
            self.next_token(operator_label(operator))?;
            self.skip_newlines()?;
            tail.push((operator, self.parse_pipeline()?));
        }

        self.chain(head, tail)
    }

    fn parse_pipeline(&mut self) -> ParseResult<StatementAst> {
        let Some(token) = self.peek(0)? else {
            return Err(ParseError::unexpected_end_of_input(["command"]));
        };

        if token.is_plain_word("time") {
            return self.parse_time_clause();
        }

        if token.is_plain_word("!") {
            self.next_token("!")?;
            self.enter_nesting()?;
            let mut statement = self.parse_pipeline()?;
            self.leave_nesting();
            statement.negated = !statement.negated;
            statement.span = token.span.merge(statement.span);
            return Ok(statement);
        }

        let head = self.parse_command()?;
        let mut tail = Vec::new();

        loop {
            let operator = match self.peek_operator(0)? {
                Some(OperatorKind::Pipe) => BinaryOperator::Pipe,
                Some(OperatorKind::PipeAmpersand) => BinaryOperator::PipeAll,
                _ => break,
            };
            self.next_token(operator_label(operator))?;
            self.skip_newlines()?;
            tail.push((operator, self.parse_command()?));
        }

        self.chain(head, tail)
    }

    fn parse_time_clause(&mut self) -> ParseResult<StatementAst> {
        let keyword = self.next_token("time")?;
        let mut posix_format = false;
        if self.peek_is_plain(0, "-p")? {
            self.next_token("-p")?;
            posix_format = true;
        }

        let statement = if self.can_start_command()? {
            self.enter_nesting()?;
            let statement = self.parse_pipeline()?;
            self.leave_nesting();
            Some(Box::new(statement))
        } else {
            None
        };

        let span = statement
            .as_ref()
            .map_or(keyword.span, |timed| keyword.span.merge(timed.span));
        let clause = TimeClauseAst {
            posix_format,
            statement,
            span,
        };
        self.statement(CommandAst::Time(clause), Vec::new(), span)
    }

    fn parse_command(&mut self) -> ParseResult<StatementAst> {
        let token = self
            .peek(0)?
            .ok_or_else(|| ParseError::unexpected_end_of_input(["command"]))?;

        let command = match token.kind {
            TokenKind::Newline => return Err(ParseError::unexpected_token(&token, ["command"])),
            TokenKind::Operator(OperatorKind::LeftParen) => {
                if self.is_double_paren()? {
                    let (expression, span) = self.parse_double_paren()?;
                    CommandAst::Arithmetic(ArithmeticCommandAst { expression, span })
                } else {
                    CommandAst::Subshell(self.parse_subshell()?)
                }
            }
            TokenKind::Operator(kind) if kind.is_redirect() => return self.parse_simple_command(),
            TokenKind::Operator(_) => {
                return Err(ParseError::unexpected_token(&token, ["command"]));
            }
            TokenKind::Word if token.is_plain() => match token.lexeme.as_str() {
                "if" => CommandAst::If(self.parse_if_clause()?),
                "while" | "until" => CommandAst::While(self.parse_while_clause()?),
                "for" | "select" => CommandAst::For(self.parse_for_clause()?),
                "case" => CommandAst::Case(self.parse_case_clause()?),
                "{" => CommandAst::BraceGroup(self.parse_brace_group()?),
                "[[" => CommandAst::Test(self.parse_test_clause()?),
                "function" => CommandAst::FunctionDefinition(self.parse_function_keyword()?),
                "coproc" => CommandAst::Coproc(self.parse_coproc_clause()?),
                "let" => return self.parse_let_clause(),
                word if DECLARATION_BUILTINS.contains(&word) => {
                    return self.parse_declaration_clause();
                }
                word if NON_STARTING_RESERVED.contains(&word) => {
                    return Err(ParseError::unexpected_token(&token, ["command"]));
                }
                _ if self.is_function_definition_head()? => {
                    CommandAst::FunctionDefinition(self.parse_function_parens()?)
                }
                _ => return self.parse_simple_command(),
            },
            TokenKind::Word => return self.parse_simple_command(),
        };

        let span = command_span(&command);
        let redirects = self.parse_trailing_redirects()?;
        self.statement(command, redirects, span)
    }

    fn parse_simple_command(&mut self) -> ParseResult<StatementAst> {
        let mut assignments = Vec::new();
        let mut words = Vec::new();
        let mut redirects = Vec::new();

        loop {
            if let Some(redirect) = self.try_parse_redirect()? {
                redirects.push(redirect);
                continue;
            }
            match self.peek(0)? {
                Some(token) if token.kind == TokenKind::Word => {}
                _ => break,
            }
            if words.is_empty()
                && let Some(assignment) = self.try_parse_assignment()?
            {
                assignments.push(assignment);
                continue;
            }
            let token = self.next_token("WORD")?;
            words.push(self.word(token)?);
        }

        let content = assignments
            .iter()
            .map(|assignment: &AssignmentWordAst| assignment.span)
            .chain(words.iter().map(|word| word.span))
            .reduce(Span::merge);
        let Some(span) = content.or_else(|| redirects.iter().map(|r| r.span).reduce(Span::merge))
        else {
            return Err(self.unexpected_here(&["command"]));
        };

        let command = SimpleCommandAst {
            assignments,
            words,
            span,
        };
        self.statement(CommandAst::Simple(command), redirects, span)
    }

    fn try_parse_assignment(&mut self) -> ParseResult<Option<AssignmentWordAst>> {
        let Some(token) = self.peek(0)? else {
            return Ok(None);
        };
        let Some(split) = split_assignment(&token) else {
            return Ok(None);
        };
        let token = self.next_token("ASSIGNMENT_WORD")?;
        let mut span = token.span;

        let value = if split.value.parts.is_empty() {
            match self.peek(0)? {
                Some(open)
                    if open.operator_kind() == Some(OperatorKind::LeftParen)
                        && open.span.start == token.span.end =>
                {
                    let (elements, end) = self.parse_array_elements()?;
                    span = span.merge(end);
                    AssignmentValue::Array(elements)
                }
                _ => AssignmentValue::Empty,
            }
        } else {
            AssignmentValue::Word(self.word(split.value)?)
        };

        Ok(Some(AssignmentWordAst {
            name: split.name,
            append: split.append,
            value,
            span,
        }))
    }

    fn parse_array_elements(&mut self) -> ParseResult<(Vec<WordAst>, Span)> {
        self.next_token("(")?;
        let mut elements = Vec::new();
        loop {
            self.skip_newlines()?;
            let token = self.next_token(")")?;
            match token.kind {
                TokenKind::Operator(OperatorKind::RightParen) => return Ok((elements, token.span)),
                TokenKind::Word => elements.push(self.word(token)?),
                _ => return Err(ParseError::unexpected_token(&token, ["WORD", ")"])),
            }
        }
    }

    fn try_parse_redirect(&mut self) -> ParseResult<Option<RedirectAst>> {
        let Some(token) = self.peek(0)? else {
            return Ok(None);
        };

        let fd = match token.kind {
            TokenKind::Operator(kind) if kind.is_redirect() => None,
            TokenKind::Word if is_io_number(&token) => match self.peek(1)? {
                Some(next)
                    if next.operator_kind().is_some_and(OperatorKind::is_redirect)
                        && next.span.start == token.span.end =>
                {
                    self.next_token("IO_NUMBER")?;
                    token.lexeme.parse::<u32>().ok()
                }
                _ => return Ok(None),
            },
            _ => return Ok(None),
        };

        let operator_token = self.next_token("redirect operator")?;
        let Some(operator) = operator_token.operator_kind() else {
            return Err(ParseError::unexpected_token(&operator_token, ["redirect operator"]));
        };
        let target = self.next_token("WORD")?;
        if target.kind != TokenKind::Word {
            return Err(ParseError::unexpected_token(&target, ["WORD"]));
        }

        let span = token.span.merge(target.span);
        Ok(Some(RedirectAst {
            fd,
            operator,
            target: self.word(target)?,
            span,
        }))
    }

    fn parse_trailing_redirects(&mut self) -> ParseResult<Vec<RedirectAst>> {
        let mut redirects = Vec::new();
        while let Some(redirect) = self.try_parse_redirect()? {
            redirects.push(redirect);
        }
        Ok(redirects)
    }

    fn parse_if_clause(&mut self) -> ParseResult<IfClauseAst> {
        let keyword = self.next_token("if")?;
        let (condition, body) = self.parse_if_arm()?;

        let mut continuations = Vec::new();
        while self.peek_is_plain(0, "elif")? {
            let elif = self.next_token("elif")?;
            self.reserve_node(elif.span)?;
            let (condition, body) = self.parse_if_arm()?;
            continuations.push((elif.span, condition, body));
        }

        let (mut chain, end) = if self.peek_is_plain(0, "else")? {
            let else_keyword = self.next_token("else")?;
            let else_body = self.parse_compound_list(&["fi"])?;
            let fi = self.expect_reserved("fi")?;
            let span = else_keyword.span.merge(fi.span);
            self.reserve_node(span)?;
            let branch = IfClauseAst {
                kind: BranchKind::Else,
                condition: Vec::new(),
                body: else_body,
                else_branch: None,
                span,
            };
            (Some(Box::new(branch)), fi.span)
        } else {
            (None, self.expect_reserved("fi")?.span)
        };

        // Link the elif arms back to front so each owns the rest of the chain.
        while let Some((start, condition, body)) = continuations.pop() {
            chain = Some(Box::new(IfClauseAst {
                kind: BranchKind::ElseIf,
                condition,
                body,
                else_branch: chain,
                span: start.merge(end),
            }));
        }

        Ok(IfClauseAst {
            kind: BranchKind::If,
            condition,
            body,
            else_branch: chain,
            span: keyword.span.merge(end),
        })
    }

    /// Parses `condition; then body` after an `if` or `elif` keyword.
    fn parse_if_arm(&mut self) -> ParseResult<(Vec<StatementAst>, Vec<StatementAst>)> {
        let condition = self.parse_compound_list(&["then"])?;
        if condition.is_empty() {
            return Err(self.unexpected_here(&["command"]));
        }
        self.expect_reserved("then")?;
        let body = self.parse_compound_list(&["elif", "else", "fi"])?;
        Ok((condition, body))
    }

    fn parse_while_clause(&mut self) -> ParseResult<WhileClauseAst> {
        let keyword = self.next_token("while")?;
        let condition = self.parse_compound_list(&["do"])?;
        if condition.is_empty() {
            return Err(self.unexpected_here(&["command"]));
        }
        let (body, end) = self.parse_do_group()?;
        Ok(WhileClauseAst {
            until: keyword.lexeme == "until",
            condition,
            body,
            span: keyword.span.merge(end),
        })
    }

    fn parse_for_clause(&mut self) -> ParseResult<ForClauseAst> {
        let keyword = self.next_token("for")?;

        let header = if self.is_double_paren()? {
            let (expression, _) = self.parse_double_paren()?;
            ForHeader::Arithmetic(expression)
        } else {
            let name = self.next_token("NAME")?;
            if name.kind != TokenKind::Word {
                return Err(ParseError::unexpected_token(&name, ["NAME"]));
            }
            let name = self.word(name)?;
            self.skip_newlines()?;

            let words = if self.peek_is_plain(0, "in")? {
                self.next_token("in")?;
                let mut words = Vec::new();
                while let Some(token) = self.peek(0)?
                    && token.kind == TokenKind::Word
                {
                    let token = self.next_token("WORD")?;
                    words.push(self.word(token)?);
                }
                Some(words)
            } else {
                None
            };
            ForHeader::Words { name, words }
        };

        if self.peek_operator(0)? == Some(OperatorKind::Semicolon) {
            self.next_token(";")?;
        }
        self.skip_newlines()?;
        let (body, end) = self.parse_do_group()?;

        Ok(ForClauseAst {
            select: keyword.lexeme == "select",
            header,
            body,
            span: keyword.span.merge(end),
        })
    }

    fn parse_do_group(&mut self) -> ParseResult<(Vec<StatementAst>, Span)> {
        self.expect_reserved("do")?;
        let body = self.parse_compound_list(&["done"])?;
        let done = self.expect_reserved("done")?;
        Ok((body, done.span))
    }

    fn parse_case_clause(&mut self) -> ParseResult<CaseClauseAst> {
        let keyword = self.next_token("case")?;
        let subject = self.next_token("WORD")?;
        if subject.kind != TokenKind::Word {
            return Err(ParseError::unexpected_token(&subject, ["WORD"]));
        }
        let word = self.word(subject)?;
        self.skip_newlines()?;
        self.expect_reserved("in")?;

        let mut items = Vec::new();
        let end = loop {
            self.skip_newlines()?;
            if self.peek_is_plain(0, "esac")? {
                break self.next_token("esac")?.span;
            }
            if self.peek(0)?.is_none() {
                return Err(ParseError::unexpected_end_of_input(["esac"]));
            }
            items.push(self.parse_case_item()?);
        };

        Ok(CaseClauseAst {
            word,
            items,
            span: keyword.span.merge(end),
        })
    }

    fn parse_case_item(&mut self) -> ParseResult<CaseItemAst> {
        let mut start = None;
        if self.peek_operator(0)? == Some(OperatorKind::LeftParen) {
            start = Some(self.next_token("(")?.span);
        }

        let mut patterns = Vec::new();
        loop {
            let token = self.next_token("pattern")?;
            if token.kind != TokenKind::Word {
                return Err(ParseError::unexpected_token(&token, ["pattern"]));
            }
            patterns.push(self.word(token)?);
            match self.peek_operator(0)? {
                Some(OperatorKind::Pipe) => {
                    self.next_token("|")?;
                }
                Some(OperatorKind::RightParen) => break,
                _ => return Err(self.unexpected_here(&["|", ")"])),
            }
        }
        let close = self.expect_operator(OperatorKind::RightParen)?;
        let body = self.parse_compound_list(&["esac"])?;

        let mut end = span_of_statements(&body).unwrap_or(close.span);
        let terminator = match self.peek_operator(0)? {
            Some(kind) if kind.is_case_terminator() => {
                end = self.next_token(kind.as_str())?.span;
                Some(kind)
            }
            _ => None,
        };

        let start = start.unwrap_or(patterns[0].span);
        Ok(CaseItemAst {
            patterns,
            body,
            terminator,
            span: start.merge(end),
        })
    }

    fn parse_brace_group(&mut self) -> ParseResult<GroupAst> {
        let open = self.next_token("{")?;
        let body = self.parse_compound_list(&["}"])?;
        let close = self.expect_reserved("}")?;
        Ok(GroupAst {
            body,
            span: open.span.merge(close.span),
        })
    }

    fn parse_subshell(&mut self) -> ParseResult<GroupAst> {
        let open = self.next_token("(")?;
        let body = self.parse_compound_list(&[])?;
        let close = self.expect_operator(OperatorKind::RightParen)?;
        Ok(GroupAst {
            body,
            span: open.span.merge(close.span),
        })
    }

    fn is_double_paren(&mut self) -> ParseResult<bool> {
        let (Some(first), Some(second)) = (self.peek(0)?, self.peek(1)?) else {
            return Ok(false);
        };
        Ok(first.operator_kind() == Some(OperatorKind::LeftParen)
            && second.operator_kind() == Some(OperatorKind::LeftParen)
            && first.span.end == second.span.start)
    }

    /// Consumes `(( ... ))` and returns the inner text and full span.
    fn parse_double_paren(&mut self) -> ParseResult<(String, Span)> {
        let open = self.next_token("((")?;
        let inner_open = self.next_token("((")?;
        let mut depth = 2usize;
        let mut inner_end = inner_open.span.end;

        let close = loop {
            let token = self.next_token("))")?;
            match token.operator_kind() {
                Some(OperatorKind::LeftParen) => depth += 1,
                Some(OperatorKind::RightParen) => {
                    depth -= 1;
                    if depth == 1 {
                        inner_end = token.span.start;
                    }
                    if depth == 0 {
                        break token;
                    }
                }
                _ => {}
            }
        };

        let inner = Span::new(open.span.source_id, inner_open.span.end, inner_end);
        let expression = inner.slice(self.tokens.input()).trim().to_string();
        Ok((expression, open.span.merge(close.span)))
    }

    fn parse_test_clause(&mut self) -> ParseResult<TestClauseAst> {
        let open = self.next_token("[[")?;
        let mut words = Vec::new();
        let close = loop {
            let token = self.next_token("]]")?;
            if token.is_plain_word("]]") {
                break token;
            }
            if token.kind == TokenKind::Word {
                words.push(self.word(token)?);
            }
        };
        Ok(TestClauseAst {
            words,
            span: open.span.merge(close.span),
        })
    }

    fn is_function_definition_head(&mut self) -> ParseResult<bool> {
        let (Some(name), Some(open), Some(close)) = (self.peek(0)?, self.peek(1)?, self.peek(2)?)
        else {
            return Ok(false);
        };
        Ok(name.is_plain()
            && is_function_name(&name.lexeme)
            && open.operator_kind() == Some(OperatorKind::LeftParen)
            && close.operator_kind() == Some(OperatorKind::RightParen))
    }

    fn parse_function_parens(&mut self) -> ParseResult<FunctionDefinitionAst> {
        let name = self.next_token("NAME")?;
        self.expect_operator(OperatorKind::LeftParen)?;
        self.expect_operator(OperatorKind::RightParen)?;
        self.parse_function_body(name)
    }

    fn parse_function_keyword(&mut self) -> ParseResult<FunctionDefinitionAst> {
        let keyword = self.next_token("function")?;
        let name = self.next_token("NAME")?;
        if name.kind != TokenKind::Word {
            return Err(ParseError::unexpected_token(&name, ["NAME"]));
        }
        if self.peek_operator(0)? == Some(OperatorKind::LeftParen)
            && self.peek_operator(1)? == Some(OperatorKind::RightParen)
        {
            self.next_token("(")?;
            self.next_token(")")?;
        }
        let mut definition = self.parse_function_body(name)?;
        definition.span = keyword.span.merge(definition.span);
        Ok(definition)
    }

    fn parse_function_body(&mut self, name: Token) -> ParseResult<FunctionDefinitionAst> {
        self.skip_newlines()?;
        self.enter_nesting()?;
        let body = self.parse_command()?;
        self.leave_nesting();
        Ok(FunctionDefinitionAst {
            span: name.span.merge(body.span),
            name: name.lexeme,
            body: Box::new(body),
        })
    }

    fn parse_coproc_clause(&mut self) -> ParseResult<CoprocClauseAst> {
        let keyword = self.next_token("coproc")?;
        let name = match (self.peek(0)?, self.peek(1)?) {
            (Some(candidate), Some(next))
                if candidate.is_plain()
                    && is_variable_name(&candidate.lexeme)
                    && (next.is_plain_word("{")
                        || next.operator_kind() == Some(OperatorKind::LeftParen)) =>
            {
                self.next_token("NAME")?;
                Some(candidate.lexeme)
            }
            _ => None,
        };

        self.enter_nesting()?;
        let statement = self.parse_command()?;
        self.leave_nesting();
        Ok(CoprocClauseAst {
            name,
            span: keyword.span.merge(statement.span),
            statement: Box::new(statement),
        })
    }

    fn parse_let_clause(&mut self) -> ParseResult<StatementAst> {
        let keyword = self.next_token("let")?;
        let mut expressions = Vec::new();
        let mut redirects = Vec::new();

        loop {
            if let Some(redirect) = self.try_parse_redirect()? {
                redirects.push(redirect);
                continue;
            }
            match self.peek(0)? {
                Some(token) if token.kind == TokenKind::Word => {
                    let token = self.next_token("WORD")?;
                    expressions.push(self.word(token)?);
                }
                _ => break,
            }
        }

        let span = expressions
            .iter()
            .fold(keyword.span, |span, word| span.merge(word.span));
        let clause = LetClauseAst { expressions, span };
        self.statement(CommandAst::Let(clause), redirects, span)
    }

    fn parse_declaration_clause(&mut self) -> ParseResult<StatementAst> {
        let keyword = self.next_token("declaration builtin")?;
        let mut operands = Vec::new();
        let mut redirects = Vec::new();
        let mut span = keyword.span;

        loop {
            if let Some(redirect) = self.try_parse_redirect()? {
                redirects.push(redirect);
                continue;
            }
            match self.peek(0)? {
                Some(token) if token.kind == TokenKind::Word => {}
                _ => break,
            }
            if let Some(assignment) = self.try_parse_assignment()? {
                span = span.merge(assignment.span);
                operands.push(DeclarationOperand::Assignment(assignment));
            } else {
                let token = self.next_token("WORD")?;
                let word = self.word(token)?;
                span = span.merge(word.span);
                operands.push(DeclarationOperand::Word(word));
            }
        }

        let clause = DeclarationClauseAst {
            variant: keyword.lexeme,
            operands,
            span,
        };
        self.statement(CommandAst::Declaration(clause), redirects, span)
    }

    fn chain(
        &mut self,
        head: StatementAst,
        tail: Vec<(BinaryOperator, StatementAst)>,
    ) -> ParseResult<StatementAst> {
        let Some((_, last)) = tail.last() else {
            return Ok(head);
        };
        let span = head.span.merge(last.span);
        let command = CommandAst::Binary(BinaryCommandAst {
            head: Box::new(head),
            tail,
            span,
        });
        self.statement(command, Vec::new(), span)
    }

    fn statement(
        &mut self,
        command: CommandAst,
        redirects: Vec<RedirectAst>,
        span: Span,
    ) -> ParseResult<StatementAst> {
        self.reserve_node(span)?;
        let span = redirects
            .iter()
            .fold(span, |span, redirect| span.merge(redirect.span));
        Ok(StatementAst {
            command,
            negated: false,
            background: false,
            redirects,
            span,
        })
    }

    fn word(&mut self, token: Token) -> ParseResult<WordAst> {
        self.reserve_node(token.span)?;
        Ok(WordAst::new(token))
    }

    fn reserve_node(&mut self, span: Span) -> ParseResult<()> {
        self.nodes += 1;
        if self.nodes > self.options.max_ast_nodes {
            return Err(ParseError::node_limit_exceeded(
                Some(span),
                self.options.max_ast_nodes,
            ));
        }
        Ok(())
    }

    fn enter_nesting(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_nesting {
            let span = self.peek(0).ok().flatten().map(|token| token.span);
            return Err(ParseError::nesting_limit_exceeded(
                span,
                self.options.max_nesting,
            ));
        }
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn can_start_command(&mut self) -> ParseResult<bool> {
        Ok(match self.peek(0)? {
            Some(token) => match token.kind {
                TokenKind::Word => {
                    !(token.is_plain() && NON_STARTING_RESERVED.contains(&token.lexeme.as_str()))
                }
                TokenKind::Operator(kind) => kind == OperatorKind::LeftParen || kind.is_redirect(),
                TokenKind::Newline => false,
            },
            None => false,
        })
    }

    fn skip_newlines(&mut self) -> ParseResult<()> {
        while self
            .tokens
            .peek(0)?
            .is_some_and(|token| token.kind == TokenKind::Newline)
        {
            self.tokens.next()?;
        }
        Ok(())
    }

    fn expect_reserved(&mut self, word: &str) -> ParseResult<Token> {
        if self.peek_is_plain(0, word)? {
            return self.next_token(word);
        }
        Err(self.unexpected_here(&[word]))
    }

    fn expect_operator(&mut self, kind: OperatorKind) -> ParseResult<Token> {
        if self.peek_operator(0)? == Some(kind) {
            return self.next_token(kind.as_str());
        }
        Err(self.unexpected_here(&[kind.as_str()]))
    }

    fn unexpected_here(&mut self, expected: &[&str]) -> ParseError {
        match self.peek(0) {
            Ok(Some(token)) => ParseError::unexpected_token(&token, expected.iter().copied()),
            Ok(None) => ParseError::unexpected_end_of_input(expected.iter().copied()),
            Err(error) => error,
        }
    }

    fn peek(&mut self, n: usize) -> ParseResult<Option<Token>> {
        Ok(self.tokens.peek(n)?.cloned())
    }

    fn peek_operator(&mut self, n: usize) -> ParseResult<Option<OperatorKind>> {
        Ok(self.tokens.peek(n)?.and_then(Token::operator_kind))
    }

    fn peek_is_plain(&mut self, n: usize, word: &str) -> ParseResult<bool> {
        Ok(self
            .tokens
            .peek(n)?
            .is_some_and(|token| token.is_plain_word(word)))
    }

    fn next_token(&mut self, expected: &str) -> ParseResult<Token> {
        self.tokens
            .next()?
            .ok_or_else(|| ParseError::unexpected_end_of_input([expected]))
    }
}

/// Parses `input` with the given options.
pub fn parse_program(input: &str, options: ParseOptions) -> Result<ProgramAst, ParseError> {
    Parser::new(input, options).parse_program()
}

/// An assignment word split at its `=`.
struct AssignmentSplit {
    name: String,
    append: bool,
    value: Token,
}

/// Splits `name=value` / `name+=value`; the name must be unquoted.
fn split_assignment(token: &Token) -> Option<AssignmentSplit> {
    if token.kind != TokenKind::Word {
        return None;
    }
    let Some(WordPart::Literal {
        text,
        quoting: Quoting::Unquoted,
    }) = token.parts.first()
    else {
        return None;
    };

    let equals = text.find('=')?;
    let (name, append) = match text[..equals].strip_suffix('+') {
        Some(name) => (name, true),
        None => (&text[..equals], false),
    };
    if !is_assignment_target(name) {
        return None;
    }

    let prefix_len = equals + 1;
    let mut parts = token.parts.clone();
    let rest = &text[prefix_len..];
    if rest.is_empty() {
        parts.remove(0);
    } else {
        parts[0] = WordPart::Literal {
            text: rest.to_string(),
            quoting: Quoting::Unquoted,
        };
    }

    let value_start = ByteOffset::from_usize(token.span.start.as_usize() + prefix_len);
    let span = Span::new(token.span.source_id, value_start, token.span.end);
    let lexeme = token.lexeme.get(prefix_len..).unwrap_or_default().to_string();

    Some(AssignmentSplit {
        name: name.to_string(),
        append,
        value: Token::word(lexeme, parts, span),
    })
}

fn is_variable_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// `name` or `name[subscript]`.
fn is_assignment_target(text: &str) -> bool {
    match text.split_once('[') {
        Some((base, subscript)) => is_variable_name(base) && subscript.ends_with(']'),
        None => is_variable_name(text),
    }
}

fn is_function_name(text: &str) -> bool {
    !text.is_empty()
        && !text.contains('=')
        && !NON_STARTING_RESERVED.contains(&text)
        && !text.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_io_number(token: &Token) -> bool {
    token.is_plain()
        && !token.lexeme.is_empty()
        && token.lexeme.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_list_terminator(token: &Token, terminators: &[&str]) -> bool {
    match token.kind {
        TokenKind::Operator(kind) => kind == OperatorKind::RightParen || kind.is_case_terminator(),
        TokenKind::Word => terminators.iter().any(|word| token.is_plain_word(word)),
        TokenKind::Newline => false,
    }
}

fn operator_label(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::AndIf => "&&",
        BinaryOperator::OrIf => "||",
        BinaryOperator::Pipe => "|",
        BinaryOperator::PipeAll => "|&",
    }
}

fn command_span(command: &CommandAst) -> Span {
    match command {
        CommandAst::Simple(command) => command.span,
        CommandAst::Binary(command) => command.span,
        CommandAst::If(clause) => clause.span,
        CommandAst::While(clause) => clause.span,
        CommandAst::For(clause) => clause.span,
        CommandAst::Case(clause) => clause.span,
        CommandAst::BraceGroup(group) | CommandAst::Subshell(group) => group.span,
        CommandAst::FunctionDefinition(function) => function.span,
        CommandAst::Arithmetic(command) => command.span,
        CommandAst::Test(clause) => clause.span,
        CommandAst::Declaration(clause) => clause.span,
        CommandAst::Let(clause) => clause.span,
        CommandAst::Time(clause) => clause.span,
        CommandAst::Coproc(clause) => clause.span,
    }
}

fn span_of_statements(statements: &[StatementAst]) -> Option<Span> {
    let first = statements.first()?.span;
    let last = statements.last()?.span;
    Some(first.merge(last))
}
