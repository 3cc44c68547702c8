use ffakit::{InstructionError, parse_instruction_list};

#[test]
fn backtick_escape_changes_continuations() {
    let text = "# escape=`\nRUN mkdir a `\n    && touch b\nWORKDIR C:\\work\\dir\n";
    let instructions = parse_instruction_list(text).expect("build file parses");

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].arguments, vec!["mkdir a     && touch b"]);
    assert_eq!(instructions[0].line, 2);
    assert_eq!(instructions[1].arguments, vec!["C:\\work\\dir"]);
}

#[test]
fn invalid_escape_is_an_error() {
    assert_eq!(
        parse_instruction_list("# escape=x\nFROM scratch"),
        Err(InstructionError::InvalidEscapeDirective {
            value: "x".to_string(),
            line: 1,
        })
    );
}

#[test]
fn directives_after_an_instruction_are_comments() {
    let text = "FROM scratch\n# escape=x\nRUN touch a \\\n  b\n";
    let instructions = parse_instruction_list(text).expect("build file parses");

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[1].arguments, vec!["touch a   b"]);
}

#[test]
fn unknown_directive_ends_the_directive_block() {
    let text = "# syntax=x\n# custom=1\n# escape=x\nFROM scratch";
    let instructions = parse_instruction_list(text).expect("build file parses");

    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].line, 4);
}

#[test]
fn directive_keys_are_case_insensitive() {
    let text = "#  ESCAPE = `\nRUN touch a `\n b";
    let instructions = parse_instruction_list(text).expect("build file parses");

    assert_eq!(instructions[0].arguments, vec!["touch a  b"]);
}
