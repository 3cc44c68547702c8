//! Instruction list errors.

use thiserror::Error;

/// Failure to split a build file into instructions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionError {
    /// `# escape=` names something other than `\` or `` ` ``.
    #[error("invalid escape directive `{value}` on line {line}")]
    InvalidEscapeDirective {
        /// Directive value as written.
        value: String,
        /// 1-based line number.
        line: usize,
    },
    /// An instruction keyword with nothing after it.
    #[error("`{instruction}` on line {line} requires at least one argument")]
    MissingArguments {
        /// Lower-cased instruction name.
        instruction: String,
        /// 1-based line number of the instruction start.
        line: usize,
    },
}
