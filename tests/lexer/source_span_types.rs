use ffakit::lexer::{ByteOffset, Lexer, SourceId, Span};

fn span(start: u32, end: u32) -> Span {
    Span::new(SourceId::new(0), ByteOffset::new(start), ByteOffset::new(end))
}

#[test]
fn reversed_bounds_are_normalized() {
    let span = span(7, 3);

    assert_eq!(span.start.value(), 3);
    assert_eq!(span.end.value(), 7);
    assert_eq!(span.len(), 4);
}

#[test]
fn merge_covers_both_spans() {
    let merged = span(4, 6).merge(span(1, 2));

    assert_eq!(merged, span(1, 6));
    assert!(span(2, 2).is_empty());
}

#[test]
fn slice_is_empty_when_out_of_range() {
    assert_eq!(span(0, 4).slice("echo hi"), "echo");
    assert_eq!(span(5, 50).slice("echo hi"), "");
}

#[test]
fn tokens_carry_the_lexer_source_id() {
    let mut lexer = Lexer::with_source_id("a b", SourceId::new(9));
    let token = lexer
        .next_token()
        .expect("scan should succeed")
        .expect("token expected");

    assert_eq!(token.span.source_id, SourceId::new(9));
    assert_eq!(token.span.slice(lexer.input()), "a");
}

#[test]
fn offsets_saturate_on_conversion() {
    assert_eq!(ByteOffset::from_usize(usize::MAX).value(), u32::MAX);
    assert_eq!(ByteOffset::from_usize(12).as_usize(), 12);
}
