use ffakit::lexer::OperatorKind;
use ffakit::parser::{
    AssignmentValue, BinaryOperator, CommandAst, DeclarationOperand, ParseOptions, ProgramAst,
    SimpleCommandAst, StatementAst, parse_program,
};

fn parse(input: &str) -> ProgramAst {
    parse_program(input, ParseOptions::default()).expect("input should parse")
}

fn simple(statement: &StatementAst) -> &SimpleCommandAst {
    match &statement.command {
        CommandAst::Simple(command) => command,
        other => panic!("expected simple command, got {other:?}"),
    }
}

fn raw_words(command: &SimpleCommandAst) -> Vec<&str> {
    command.words.iter().map(|word| word.raw()).collect()
}

#[test]
fn statements_split_on_newlines_and_semicolons() {
    let program = parse("echo a; echo b\n\necho c &\n");

    assert_eq!(program.statements.len(), 3);
    assert_eq!(raw_words(simple(&program.statements[1])), vec!["echo", "b"]);
    assert!(program.statements[2].background);
    assert!(program.span.is_some());
}

#[test]
fn empty_input_has_no_statements() {
    let program = parse("\n  # only a comment\n");

    assert!(program.statements.is_empty());
    assert_eq!(program.span, None);
}

#[test]
fn and_or_chain_is_flat_and_pipelines_bind_tighter() {
    let program = parse("a && b | c || d");
    let CommandAst::Binary(chain) = &program.statements[0].command else {
        panic!("expected binary chain");
    };

    assert_eq!(raw_words(simple(&chain.head)), vec!["a"]);
    assert_eq!(chain.tail.len(), 2);
    assert_eq!(chain.tail[0].0, BinaryOperator::AndIf);
    assert_eq!(chain.tail[1].0, BinaryOperator::OrIf);

    let CommandAst::Binary(pipeline) = &chain.tail[0].1.command else {
        panic!("expected pipeline");
    };
    assert_eq!(pipeline.tail[0].0, BinaryOperator::Pipe);
    assert_eq!(raw_words(simple(&pipeline.tail[0].1)), vec!["c"]);
}

#[test]
fn operator_may_be_followed_by_newlines() {
    let program = parse("make &&\n\n  make install |\n tee log");

    assert_eq!(program.statements.len(), 1);
}

#[test]
fn negation_marks_the_statement() {
    let program = parse("! grep -q x file");

    assert!(program.statements[0].negated);
    assert_eq!(simple(&program.statements[0]).name().map(|w| w.raw()), Some("grep"));
}

#[test]
fn assignment_prefix_precedes_command_words() {
    let program = parse("CC=gcc CFLAGS+=-O2 make all X=1");
    let command = simple(&program.statements[0]);

    assert_eq!(command.assignments.len(), 2);
    assert_eq!(command.assignments[0].name, "CC");
    assert!(!command.assignments[0].append);
    assert_eq!(command.assignments[1].name, "CFLAGS");
    assert!(command.assignments[1].append);
    assert_eq!(raw_words(command), vec!["make", "all", "X=1"]);
    assert_eq!(
        command.arguments().iter().map(|w| w.raw()).collect::<Vec<_>>(),
        vec!["all", "X=1"]
    );
}

#[test]
fn assignment_values_keep_their_structure() {
    let program = parse("A= B='x y' C=$(pwd) D=(one \"two\") E[1]=z");
    let command = simple(&program.statements[0]);
    let values: Vec<_> = command.assignments.iter().map(|a| &a.value).collect();

    assert!(command.words.is_empty());
    assert_eq!(values[0], &AssignmentValue::Empty);
    match values[1] {
        AssignmentValue::Word(word) => assert_eq!(word.literal().as_deref(), Some("x y")),
        other => panic!("expected word value, got {other:?}"),
    }
    match values[2] {
        AssignmentValue::Word(word) => {
            assert_eq!(word.literal(), None);
            assert_eq!(word.raw(), "$(pwd)");
        }
        other => panic!("expected word value, got {other:?}"),
    }
    match values[3] {
        AssignmentValue::Array(elements) => assert_eq!(elements.len(), 2),
        other => panic!("expected array value, got {other:?}"),
    }
    assert_eq!(command.assignments[4].name, "E[1]");
}

#[test]
fn quoted_name_is_not_an_assignment() {
    let program = parse("\"A\"=1");
    let command = simple(&program.statements[0]);

    assert!(command.assignments.is_empty());
    assert_eq!(raw_words(command), vec!["\"A\"=1"]);
}

#[test]
fn redirects_attach_to_the_statement() {
    let program = parse("make 2>&1 >build.log < /dev/null");
    let statement = &program.statements[0];
    let redirects: Vec<_> = statement
        .redirects
        .iter()
        .map(|r| (r.fd, r.operator, r.target.raw().to_string()))
        .collect();

    assert_eq!(raw_words(simple(statement)), vec!["make"]);
    assert_eq!(
        redirects,
        vec![
            (Some(2), OperatorKind::DupOutput, "1".to_string()),
            (None, OperatorKind::Greater, "build.log".to_string()),
            (None, OperatorKind::Less, "/dev/null".to_string()),
        ]
    );
}

#[test]
fn detached_number_is_an_ordinary_word() {
    let program = parse("echo 2 > out");
    let statement = &program.statements[0];

    assert_eq!(raw_words(simple(statement)), vec!["echo", "2"]);
    assert_eq!(statement.redirects[0].fd, None);
}

#[test]
fn heredoc_body_does_not_reach_the_parser() {
    let program = parse("cat <<EOF > out\nrm -rf /\nEOF\ntouch after");

    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        program.statements[0].redirects[0].operator,
        OperatorKind::HereDoc
    );
    assert_eq!(raw_words(simple(&program.statements[1])), vec!["touch", "after"]);
}

#[test]
fn declaration_builtins_collect_operands() {
    let program = parse("export -n PATH=/bin HOME");
    let CommandAst::Declaration(clause) = &program.statements[0].command else {
        panic!("expected declaration clause");
    };

    assert_eq!(clause.variant, "export");
    assert_eq!(clause.operands.len(), 3);
    assert!(matches!(&clause.operands[0], DeclarationOperand::Word(word) if word.raw() == "-n"));
    assert!(
        matches!(&clause.operands[1], DeclarationOperand::Assignment(a) if a.name == "PATH")
    );
    assert!(matches!(&clause.operands[2], DeclarationOperand::Word(word) if word.raw() == "HOME"));
}

#[test]
fn let_and_time_clauses() {
    let program = parse("let i=i+1 j++\ntime -p sleep 1\ntime");

    let CommandAst::Let(clause) = &program.statements[0].command else {
        panic!("expected let clause");
    };
    assert_eq!(clause.expressions.len(), 2);

    let CommandAst::Time(timed) = &program.statements[1].command else {
        panic!("expected time clause");
    };
    assert!(timed.posix_format);
    assert!(timed.statement.is_some());

    let CommandAst::Time(bare) = &program.statements[2].command else {
        panic!("expected time clause");
    };
    assert!(bare.statement.is_none());
}

#[test]
fn reserved_words_are_ordinary_arguments() {
    let program = parse("echo if then fi done");

    assert_eq!(
        raw_words(simple(&program.statements[0])),
        vec!["echo", "if", "then", "fi", "done"]
    );
}
