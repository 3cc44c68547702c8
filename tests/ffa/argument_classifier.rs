use ffakit::ffa::{extract_flag, literalize, remove_flags, strip_value_options};
use ffakit::parser::{CommandAst, ParseOptions, parse_program};

#[test]
fn remove_flags_keeps_positionals_in_order() {
    assert_eq!(
        remove_flags(&["-p", "a", "--verbose", "b", "-"]),
        vec!["a", "b"]
    );
    assert!(remove_flags::<&str>(&[]).is_empty());
}

#[test]
fn extract_flag_takes_the_last_occurrence() {
    let (remainder, extracted) = extract_flag(&["-O", "first", "url", "-O", "second"], "-O", 1);

    assert_eq!(remainder, vec!["-O", "first", "url"]);
    assert_eq!(extracted, vec!["-O", "second"]);
}

#[test]
fn extract_flag_stops_at_the_end() {
    let (remainder, extracted) = extract_flag(&["url", "-O"], "-O", 2);

    assert_eq!(remainder, vec!["url"]);
    assert_eq!(extracted, vec!["-O"]);
}

#[test]
fn extract_flag_without_match_leaves_arguments() {
    let (remainder, extracted) = extract_flag(&["a", "b"], "-o", 1);

    assert_eq!(remainder, vec!["a", "b"]);
    assert!(extracted.is_empty());
}

#[test]
fn value_options_are_removed_in_every_spelling() {
    let args = ["--depth", "1", "--branch=dev", "-bmain", "-b", "x", "url", "dir"];

    assert_eq!(
        strip_value_options(&args, &["--depth", "-b", "--branch"]),
        vec!["url", "dir"]
    );
}

#[test]
fn long_option_prefixes_are_not_value_options() {
    assert_eq!(
        strip_value_options(&["--depthcharge", "url"], &["--depth"]),
        vec!["--depthcharge", "url"]
    );
}

#[test]
fn literalize_removes_quotes_and_keeps_expansions() {
    let program = parse_program(r#"cmd 'a b' "c$D" e\ f ${G}h"#, ParseOptions::default())
        .expect("command should parse");
    let CommandAst::Simple(command) = &program.statements[0].command else {
        panic!("expected a simple command");
    };

    assert_eq!(
        literalize(command.arguments()),
        vec!["a b", "c$D", "e f", "${G}h"]
    );
}
