use ffakit::lexer::{LexErrorKind, tokenize};

fn error_kind(input: &str) -> LexErrorKind {
    tokenize(input).expect_err("scan should fail").kind
}

#[test]
fn unterminated_constructs_are_fatal() {
    let cases = [
        ("echo 'abc", LexErrorKind::UnterminatedSingleQuote),
        ("echo \"abc", LexErrorKind::UnterminatedDoubleQuote),
        ("echo $'abc", LexErrorKind::UnterminatedAnsiCQuote),
        ("echo `date", LexErrorKind::UnterminatedBackquote),
        ("echo ${HOME", LexErrorKind::UnterminatedParameterExpansion),
        ("echo $(pwd", LexErrorKind::UnterminatedCommandSubstitution),
        ("echo $((1+2", LexErrorKind::UnterminatedArithmeticExpansion),
        ("diff <(ls", LexErrorKind::UnterminatedProcessSubstitution),
    ];
    for (input, expected) in cases {
        assert_eq!(error_kind(input), expected, "input {input:?}");
    }
}

#[test]
fn error_span_starts_at_the_opening_delimiter() {
    let error = tokenize("echo 'abc").expect_err("scan should fail");

    assert_eq!(error.span.start.value(), 5);
    assert_eq!(error.span.end.value(), 9);
    assert_eq!(
        error.to_string(),
        "unterminated single quote starting at byte 5"
    );
}
