//! Here-document body consumption.

use tracing::debug;

use crate::lexer::Lexer;

/// A here-doc whose body starts after the next newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingHereDoc {
    /// Delimiter after quote removal.
    pub(crate) delimiter: String,
    /// `<<-` strips leading tabs from body lines and the delimiter line.
    pub(crate) strip_tabs: bool,
}

impl Lexer<'_> {
    /// Consumes the bodies of all pending here-docs, in operator order.
    ///
    /// A body that runs to end of input without its delimiter line is
    /// accepted, as interactive shells do after a warning.
    pub(super) fn consume_pending_heredocs(&mut self) {
        for pending in std::mem::take(&mut self.pending_heredocs) {
            let mut lines = 0usize;
            let mut terminated = false;
            while !self.cursor.is_eof(self.input) {
                let start = self.cursor.position();
                let rest = &self.input[start..];
                let line_len = rest.find('\n').unwrap_or(rest.len());
                let line = rest[..line_len].trim_end_matches('\r');
                self.cursor.advance_by(line_len + 1, self.input);

                let candidate = if pending.strip_tabs {
                    line.trim_start_matches('\t')
                } else {
                    line
                };
                if candidate == pending.delimiter {
                    terminated = true;
                    break;
                }
                lines += 1;
            }
            if !terminated {
                debug!(
                    delimiter = %pending.delimiter,
                    lines,
                    "here-doc body reached end of input before its delimiter"
                );
            }
        }
    }
}
