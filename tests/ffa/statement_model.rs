use ffakit::ffa::{FfaLine, FrameKind, ScopeTracker, Statement, SyntheticVar, VariableBank};

#[test]
fn statements_render_in_ffa_syntax() {
    let rendered: Vec<_> = [
        Statement::Touch("a".into()),
        Statement::Mkdir("b".into()),
        Statement::Remove("c".into()),
        Statement::Copy {
            source: "s".into(),
            destination: "d".into(),
        },
        Statement::ChangeDirectory("/".into()),
        Statement::AssertExists("./x".into()),
        Statement::AssertMissing("y".into()),
        Statement::AssignLiteral {
            var: SyntheticVar(3),
            value: "v".into(),
        },
        Statement::AssignInput(SyntheticVar(0)),
        Statement::If,
        Statement::ElseIf,
        Statement::Else,
        Statement::While,
        Statement::Close,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(
        rendered,
        vec![
            "touch 'a';",
            "mkdir 'b';",
            "rmr 'c';",
            "cp 's' 'd';",
            "cd '/';",
            "assert(exists './x');",
            "assert(! exists 'y');",
            "$x3 = 'v';",
            "$x0 = INPUT;",
            "if (other) {",
            "} else if (other) {",
            "} else {",
            "while (other) {",
            "}",
        ]
    );
}

#[test]
fn paths_are_not_escaped() {
    assert_eq!(Statement::Touch("it's".into()).to_string(), "touch 'it's';");
}

#[test]
fn block_markers() {
    assert!(Statement::If.opens_block());
    assert!(Statement::Else.opens_block() && Statement::Else.closes_block());
    assert!(Statement::Close.closes_block() && !Statement::Close.opens_block());
    assert!(!Statement::Touch("a".into()).opens_block());
}

#[test]
fn line_indentation() {
    let line = FfaLine::new(2, Statement::Mkdir("m".into()));

    assert_eq!(line.to_string(), "        mkdir 'm';");
    assert_eq!(line.render(1), "  mkdir 'm';");
    assert_eq!(FfaLine::new(0, Statement::Close).to_string(), "}");
}

#[test]
fn variable_bank_allocates_in_first_seen_order() {
    let mut bank = VariableBank::new();
    assert!(bank.is_empty());

    assert_eq!(bank.resolve("B"), SyntheticVar(0));
    assert_eq!(bank.resolve("A"), SyntheticVar(1));
    assert_eq!(bank.resolve("B"), SyntheticVar(0));
    assert_eq!(bank.get("A"), Some(SyntheticVar(1)));
    assert_eq!(bank.get("C"), None);
    assert_eq!(bank.len(), 2);
}

#[test]
fn scope_tracker_is_a_stack() {
    let mut scope = ScopeTracker::new();
    assert_eq!(scope.pop(), None);

    scope.push(FrameKind::WhileLoop);
    scope.push(FrameKind::Branch);
    assert_eq!(scope.depth(), 2);
    assert_eq!(scope.current(), Some(FrameKind::Branch));

    assert_eq!(scope.pop(), Some(FrameKind::Branch));
    assert_eq!(scope.pop(), Some(FrameKind::WhileLoop));
    assert!(scope.is_empty());
}

#[test]
fn only_if_chain_frames_are_branches() {
    assert!(FrameKind::Branch.is_branch());
    assert!(FrameKind::ElseBranch.is_branch());
    assert!(!FrameKind::WhileLoop.is_branch());
    assert!(!FrameKind::ForLoop.is_branch());
}
