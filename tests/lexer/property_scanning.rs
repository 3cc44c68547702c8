use ffakit::lexer::{TokenKind, tokenize};
use proptest::prelude::*;

const MAX_INPUT_BYTES: usize = 256;

proptest! {
    #[test]
    fn tokenize_handles_lossy_utf8_inputs_without_panicking(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let _ = tokenize(&input);
    }

    #[test]
    fn token_spans_are_ordered_and_in_bounds(
        input in "[a-z $'\"|&;()<>#\\\\\n]{0,64}"
    ) {
        if let Ok(tokens) = tokenize(&input) {
            let mut previous_end = 0usize;
            for token in &tokens {
                prop_assert!(token.span.start.as_usize() >= previous_end);
                prop_assert!(token.span.end.as_usize() <= input.len());
                if token.kind == TokenKind::Word {
                    prop_assert_eq!(token.span.slice(&input), token.lexeme.as_str());
                }
                previous_end = token.span.end.as_usize();
            }
        }
    }
}
