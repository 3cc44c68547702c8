//! Library entrypoint for `ffakit`.
//!
//! Translates shell scripts and container build instruction lists into
//! FFA, a line-oriented notation that keeps only filesystem effects
//! (touch, mkdir, rmr, cp, cd), existence assertions, anonymized
//! assignments and coarse `if`/`while` structure.
//!
//! ```
//! let lines = ffakit::translate_shell_script("mkdir -p out && touch out/a").unwrap();
//! assert_eq!(lines, ["mkdir 'out';", "touch 'out/a';"]);
//! ```

pub mod error;
pub mod ffa;
pub mod instructions;
pub mod lexer;
pub mod parser;

pub use error::ParseFault;
pub use ffa::{
    FfaLine, Statement, SyntheticVar, TranslateOptions, Translator, translate_instruction_list,
    translate_shell_script,
};
pub use instructions::{Instruction, InstructionError, parse_instruction_list};
pub use parser::{ParseError, ParseOptions, ProgramAst, parse_program};
