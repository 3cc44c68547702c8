use ffakit::{InstructionError, parse_instruction_list};

const BUILD_FILE: &str = "FROM alpine:3.19 AS base

RUN apk add --no-cache curl \\
    # inline comment
    git
WORKDIR /app
copy --chown=app:app src/ dest/
Cmd [\"./run\", \"--fast\"]
";

#[test]
fn records_keep_names_lines_and_arguments() {
    let instructions = parse_instruction_list(BUILD_FILE).expect("build file parses");
    let summary: Vec<_> = instructions
        .iter()
        .map(|instruction| (instruction.name.as_str(), instruction.line))
        .collect();

    assert_eq!(
        summary,
        vec![("from", 1), ("run", 3), ("workdir", 6), ("copy", 7), ("cmd", 8)]
    );
    assert_eq!(instructions[0].arguments, vec!["alpine:3.19", "AS", "base"]);
    assert_eq!(
        instructions[1].arguments,
        vec!["apk add --no-cache curl     git"]
    );
}

#[test]
fn leading_flags_are_split_off() {
    let instructions = parse_instruction_list(BUILD_FILE).expect("build file parses");
    let copy = &instructions[3];

    assert_eq!(copy.flags, vec!["--chown=app:app"]);
    assert_eq!(copy.arguments, vec!["src/", "dest/"]);
    assert!(instructions[1].flags.is_empty());
}

#[test]
fn exec_form_is_decoded() {
    let instructions = parse_instruction_list(BUILD_FILE).expect("build file parses");
    let cmd = &instructions[4];

    assert!(cmd.json_form);
    assert_eq!(cmd.arguments, vec!["./run", "--fast"]);
    assert!(!instructions[1].json_form);
}

#[test]
fn malformed_exec_form_falls_back_to_shell_form() {
    let instructions =
        parse_instruction_list("RUN [ -f a ] && touch b").expect("build file parses");

    assert!(!instructions[0].json_form);
    assert_eq!(instructions[0].arguments, vec!["[ -f a ] && touch b"]);
}

#[test]
fn run_flags_precede_the_command() {
    let instructions =
        parse_instruction_list("RUN --mount=type=cache,target=/root/.cache --network=none make")
            .expect("build file parses");

    assert_eq!(
        instructions[0].flags,
        vec!["--mount=type=cache,target=/root/.cache", "--network=none"]
    );
    assert_eq!(instructions[0].arguments, vec!["make"]);
}

#[test]
fn missing_arguments_report_the_line() {
    assert_eq!(
        parse_instruction_list("FROM scratch\nRUN   \n"),
        Err(InstructionError::MissingArguments {
            instruction: "run".to_string(),
            line: 2,
        })
    );
}

#[test]
fn trailing_continuation_is_kept() {
    let instructions = parse_instruction_list("RUN touch a \\").expect("build file parses");

    assert_eq!(instructions[0].arguments, vec!["touch a"]);
}

#[test]
fn empty_input_has_no_instructions() {
    assert_eq!(parse_instruction_list("\n# only a comment\n"), Ok(Vec::new()));
}
