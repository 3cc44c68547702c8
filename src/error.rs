//! Crate-level translation failure.

use thiserror::Error;

use crate::instructions::InstructionError;
use crate::parser::ParseError;

/// Input that could not be parsed; the whole call is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFault {
    /// Shell text failed to parse.
    #[error("shell syntax error: {0}")]
    Shell(#[from] ParseError),
    /// The build file could not be split into instructions.
    #[error("instruction list error: {0}")]
    InstructionList(#[from] InstructionError),
    /// The shell body of a `RUN` instruction failed to parse.
    #[error("RUN instruction on line {line}: {source}")]
    RunInstruction {
        /// 1-based line the instruction starts on.
        line: usize,
        /// Underlying shell error.
        #[source]
        source: ParseError,
    },
}
