//! FFA translation.
//!
//! [`Translator`] turns shell scripts and build instruction lists into
//! ordered [`FfaLine`]s. Each call builds its own [`TranslationContext`],
//! so a translator can be shared freely between threads.

pub mod args;
pub mod commands;
pub mod instruction_list;
pub mod scope;
pub mod statement;
pub mod translator;
pub mod vars;

use tracing::instrument;

use crate::error::ParseFault;
use crate::instructions::{Instruction, parse_instruction_list};
use crate::parser::{ParseOptions, ProgramAst, parse_program};

pub use args::{extract_flag, literalize, remove_flags, strip_value_options};
pub use commands::command_effects;
pub use scope::{FrameKind, ScopeTracker};
pub use statement::{DEFAULT_INDENT_WIDTH, FfaLine, Statement, SyntheticVar};
pub use translator::TranslationContext;
pub use vars::VariableBank;

/// Translation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct TranslateOptions {
    /// Limits applied when parsing shell text.
    pub parse: ParseOptions,
    /// Spaces per depth level in rendered lines.
    pub indent_width: usize,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Entry point for translating scripts and instruction lists.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    /// Creates a translator with `options`.
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Parses and translates a shell script.
    #[instrument(level = "debug", skip_all, fields(bytes = script.len()))]
    pub fn translate_script(&self, script: &str) -> Result<Vec<FfaLine>, ParseFault> {
        let program = parse_program(script, self.options.parse)?;
        Ok(self.translate_program(&program))
    }

    /// Translates an already parsed script.
    pub fn translate_program(&self, program: &ProgramAst) -> Vec<FfaLine> {
        TranslationContext::new().translate_program(program)
    }

    /// Parses and translates a build instruction list.
    #[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn translate_instruction_list(&self, text: &str) -> Result<Vec<FfaLine>, ParseFault> {
        let instructions = parse_instruction_list(text)?;
        self.translate_instructions(&instructions)
    }

    /// Translates already extracted instructions.
    pub fn translate_instructions(
        &self,
        instructions: &[Instruction],
    ) -> Result<Vec<FfaLine>, ParseFault> {
        instruction_list::translate_instructions(instructions, self.options.parse)
    }

    /// Renders lines with the configured indent width.
    pub fn render(&self, lines: &[FfaLine]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.render(self.options.indent_width))
            .collect()
    }
}

/// Translates a shell script into FFA text lines with default options.
pub fn translate_shell_script(text: &str) -> Result<Vec<String>, ParseFault> {
    let translator = Translator::default();
    let lines = translator.translate_script(text)?;
    Ok(translator.render(&lines))
}

/// Translates a build instruction list into FFA text lines with default
/// options.
pub fn translate_instruction_list(text: &str) -> Result<Vec<String>, ParseFault> {
    let translator = Translator::default();
    let lines = translator.translate_instruction_list(text)?;
    Ok(translator.render(&lines))
}
