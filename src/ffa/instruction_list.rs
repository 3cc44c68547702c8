//! Build instructions to FFA lines.

use tracing::trace;

use crate::error::ParseFault;
use crate::ffa::statement::{FfaLine, Statement};
use crate::ffa::translator::TranslationContext;
use crate::instructions::Instruction;
use crate::parser::{ParseOptions, parse_program};

/// Translates instructions in order.
///
/// Every `RUN` body is translated with a fresh [`TranslationContext`]; the
/// first body that fails to parse aborts the whole list.
pub fn translate_instructions(
    instructions: &[Instruction],
    options: ParseOptions,
) -> Result<Vec<FfaLine>, ParseFault> {
    let mut lines = Vec::new();

    for instruction in instructions {
        match instruction.name.as_str() {
            "run" => {
                let script = instruction.arguments.join(" ");
                let program = parse_program(&script, options).map_err(|source| {
                    ParseFault::RunInstruction {
                        line: instruction.line,
                        source,
                    }
                })?;
                lines.extend(TranslationContext::new().translate_program(&program));
            }
            "workdir" => {
                if let Some(directory) = instruction.arguments.first() {
                    lines.push(FfaLine::new(
                        0,
                        Statement::ChangeDirectory(directory.clone()),
                    ));
                }
            }
            "copy" => match instruction.arguments.as_slice() {
                [source, destination] => lines.push(FfaLine::new(
                    0,
                    Statement::Copy {
                        source: source.clone(),
                        destination: destination.clone(),
                    },
                )),
                other => trace!(
                    line = instruction.line,
                    operands = other.len(),
                    "copy with other than two operands"
                ),
            },
            name => trace!(line = instruction.line, instruction = name, "no effect"),
        }
    }

    Ok(lines)
}
