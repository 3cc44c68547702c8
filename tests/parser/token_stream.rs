use ffakit::lexer::{Lexer, TokenKind};
use ffakit::parser::{MAX_LOOKAHEAD, ParseErrorKind, TokenStream};

#[test]
fn peek_does_not_consume() {
    let mut stream = TokenStream::new(Lexer::new("a b c"));

    let third = stream.peek(2).expect("peek should succeed").map(|t| t.lexeme.clone());
    assert_eq!(third.as_deref(), Some("c"));

    let first = stream.next().expect("next should succeed").expect("token expected");
    assert_eq!(first.lexeme, "a");
    assert_eq!(first.kind, TokenKind::Word);
}

#[test]
fn peek_past_end_is_none() {
    let mut stream = TokenStream::new(Lexer::new("a"));

    assert!(stream.peek(1).expect("peek should succeed").is_none());
    assert!(stream.next().expect("next should succeed").is_some());
    assert!(stream.next().expect("next should succeed").is_none());
}

#[test]
fn lookahead_is_bounded() {
    let mut stream = TokenStream::new(Lexer::new("a b c d e f"));
    let error = stream
        .peek(MAX_LOOKAHEAD + 1)
        .expect_err("lookahead should be bounded");

    assert_eq!(error.kind, ParseErrorKind::LookaheadExceeded);
}

#[test]
fn lexer_errors_are_wrapped() {
    let mut stream = TokenStream::new(Lexer::new("'open"));
    let error = stream.next().expect_err("lexing should fail");

    assert_eq!(error.kind, ParseErrorKind::LexerError);
}
