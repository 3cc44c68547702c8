//! Container build instruction lists.
//!
//! Splits a build file into ordered [`Instruction`] records: parser
//! directives, comments and line continuations are handled here, and each
//! logical line becomes one record. Here-document bodies (`RUN <<EOF`) are
//! not recognized.

pub mod error;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

pub use error::InstructionError;

/// `# key=value` on a leading comment line.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*([a-zA-Z][a-zA-Z0-9]*)\s*=\s*(.*?)\s*$").expect("directive pattern is valid")
});

const DEFAULT_ESCAPE: char = '\\';

/// Instructions whose leading `--flag` words are options.
const FLAG_INSTRUCTIONS: [&str; 5] = ["add", "copy", "from", "healthcheck", "run"];

/// Instructions whose shell form keeps the remaining text as one argument.
const WHOLE_LINE_INSTRUCTIONS: [&str; 5] = ["cmd", "entrypoint", "run", "shell", "workdir"];

/// One logical instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instruction {
    /// Lower-cased keyword (`run`, `copy`, ...).
    pub name: String,
    /// Leading `--flag[=value]` words.
    pub flags: Vec<String>,
    /// Arguments after the flags.
    pub arguments: Vec<String>,
    /// Written in JSON exec form (`["a", "b"]`).
    pub json_form: bool,
    /// 1-based line the instruction starts on.
    pub line: usize,
}

/// Splits `text` into instructions in source order.
pub fn parse_instruction_list(text: &str) -> Result<Vec<Instruction>, InstructionError> {
    let mut lines = text.lines().enumerate().peekable();
    let mut escape = DEFAULT_ESCAPE;

    while let Some((index, line)) = lines.peek().copied() {
        let Some(captures) = DIRECTIVE.captures(line.trim()) else {
            break;
        };
        let key = captures[1].to_ascii_lowercase();
        let value = &captures[2];
        match key.as_str() {
            "escape" => {
                escape = match value {
                    "\\" => '\\',
                    "`" => '`',
                    _ => {
                        return Err(InstructionError::InvalidEscapeDirective {
                            value: value.to_string(),
                            line: index + 1,
                        });
                    }
                };
            }
            "syntax" | "check" => {}
            _ => break,
        }
        lines.next();
    }

    let mut instructions = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in lines {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (start, mut logical) = pending.take().unwrap_or((index + 1, String::new()));
        let body = raw.trim_end();
        match body.strip_suffix(escape) {
            Some(head) => {
                logical.push_str(head);
                pending = Some((start, logical));
            }
            None => {
                logical.push_str(body);
                instructions.push(parse_instruction(&logical, start)?);
            }
        }
    }

    if let Some((start, logical)) = pending
        && !logical.trim().is_empty()
    {
        debug!(line = start, "build file ends inside a line continuation");
        instructions.push(parse_instruction(&logical, start)?);
    }

    Ok(instructions)
}

fn parse_instruction(logical: &str, line: usize) -> Result<Instruction, InstructionError> {
    let (keyword, mut rest) = split_first_word(logical.trim());
    let name = keyword.to_ascii_lowercase();

    let mut flags = Vec::new();
    if FLAG_INSTRUCTIONS.contains(&name.as_str()) {
        while rest.starts_with("--") {
            let (flag, tail) = split_first_word(rest);
            flags.push(flag.to_string());
            rest = tail;
        }
    }

    let (arguments, json_form) = if let Some(arguments) = parse_json_form(rest) {
        (arguments, true)
    } else if WHOLE_LINE_INSTRUCTIONS.contains(&name.as_str()) {
        let arguments = if rest.is_empty() {
            Vec::new()
        } else {
            vec![rest.to_string()]
        };
        (arguments, false)
    } else {
        (rest.split_whitespace().map(str::to_string).collect(), false)
    };

    if arguments.is_empty() {
        return Err(InstructionError::MissingArguments {
            instruction: name,
            line,
        });
    }

    Ok(Instruction {
        name,
        flags,
        arguments,
        json_form,
        line,
    })
}

/// Decodes `["a", "b"]`; anything else is shell form.
fn parse_json_form(rest: &str) -> Option<Vec<String>> {
    if !rest.starts_with('[') {
        return None;
    }
    serde_json::from_str::<Vec<String>>(rest).ok()
}

/// Splits off the first whitespace-delimited word; the tail is trimmed.
fn split_first_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, tail)) => (word, tail.trim()),
        None => (text, ""),
    }
}
