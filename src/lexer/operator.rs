//! Longest-match operator recognition.

use crate::lexer::token::OperatorKind;

const THREE_BYTE: [(&[u8; 3], OperatorKind); 4] = [
    (b";;&", OperatorKind::DoubleSemicolonAmpersand),
    (b"<<-", OperatorKind::HereDocStripTabs),
    (b"<<<", OperatorKind::HereString),
    (b"&>>", OperatorKind::AppendAll),
];

const TWO_BYTE: [(&[u8; 2], OperatorKind); 12] = [
    (b"&&", OperatorKind::AndIf),
    (b"||", OperatorKind::OrIf),
    (b";;", OperatorKind::DoubleSemicolon),
    (b";&", OperatorKind::SemicolonAmpersand),
    (b"|&", OperatorKind::PipeAmpersand),
    (b"<<", OperatorKind::HereDoc),
    (b">>", OperatorKind::AppendOutput),
    (b"<&", OperatorKind::DupInput),
    (b">&", OperatorKind::DupOutput),
    (b"<>", OperatorKind::ReadWrite),
    (b">|", OperatorKind::Clobber),
    (b"&>", OperatorKind::RedirectAll),
];

/// Returns `true` for bytes that end an unquoted word.
pub(crate) fn is_operator_start(byte: u8) -> bool {
    matches!(byte, b'|' | b'&' | b';' | b'(' | b')' | b'<' | b'>')
}

/// Matches the longest operator at the start of `tail`.
pub(crate) fn match_operator(tail: &[u8]) -> Option<OperatorKind> {
    if let Some(prefix) = tail.get(..3)
        && let Some((_, kind)) = THREE_BYTE.iter().find(|(text, _)| &text[..] == prefix)
    {
        return Some(*kind);
    }

    if let Some(prefix) = tail.get(..2)
        && let Some((_, kind)) = TWO_BYTE.iter().find(|(text, _)| &text[..] == prefix)
    {
        return Some(*kind);
    }

    match tail.first()? {
        b'|' => Some(OperatorKind::Pipe),
        b';' => Some(OperatorKind::Semicolon),
        b'&' => Some(OperatorKind::Ampersand),
        b'(' => Some(OperatorKind::LeftParen),
        b')' => Some(OperatorKind::RightParen),
        b'<' => Some(OperatorKind::Less),
        b'>' => Some(OperatorKind::Greater),
        _ => None,
    }
}
