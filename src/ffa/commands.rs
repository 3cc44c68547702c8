//! Side effects of recognized commands.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::ffa::args::{extract_flag, remove_flags, strip_value_options};
use crate::ffa::statement::Statement;

/// Command names that start with `./`, `/` or a run of `../`.
static LEADING_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\./|/|(?:\.\./)+)").expect("leading path pattern is valid")
});

/// `git clone` options whose value is a separate word.
const GIT_CLONE_VALUE_OPTIONS: [&str; 7] =
    ["--depth", "-b", "--branch", "-o", "--origin", "-c", "--config"];

/// Commands that have effects but are deliberately not modeled.
const UNMODELED: [&str; 4] = ["tar", "set", "ln", "export"];

/// Statements produced by running `name` with literalized `args`.
///
/// `args` excludes the command name. Shapes that cannot be interpreted
/// produce no statement.
pub fn command_effects(name: &str, args: &[String]) -> Vec<Statement> {
    match name {
        "touch" => args.iter().cloned().map(Statement::Touch).collect(),
        "mkdir" => remove_flags(args).into_iter().map(Statement::Mkdir).collect(),
        "rm" | "rmdir" => remove_flags(args).into_iter().map(Statement::Remove).collect(),
        "cp" => copy_effects(name, args, false),
        "mv" => copy_effects(name, args, true),
        "git" => git_effects(args),
        "cd" => vec![Statement::ChangeDirectory(
            args.first().cloned().unwrap_or_else(|| "/".to_string()),
        )],
        "wget" => wget_effects(args),
        "curl" => curl_effects(args),
        "chmod" => remove_flags(args)
            .into_iter()
            .skip(1)
            .map(Statement::AssertExists)
            .collect(),
        "source" | "." | "file" => script_assertion(name, args),
        "python" | "python2" | "python3" => {
            if args.iter().any(|arg| arg == "-c" || arg == "-m") {
                debug!(command = name, "inline code or module run, nothing to assert");
                return Vec::new();
            }
            script_assertion(name, args)
        }
        _ if UNMODELED.contains(&name) => {
            debug!(command = name, "unmodeled command");
            Vec::new()
        }
        _ => unknown_command(name),
    }
}

fn copy_effects(name: &str, args: &[String], remove_source: bool) -> Vec<Statement> {
    let operands = remove_flags(args);
    let [source, destination, ..] = operands.as_slice() else {
        debug!(command = name, operands = operands.len(), "needs two operands, skipping");
        return Vec::new();
    };

    let mut effects = vec![Statement::Copy {
        source: source.clone(),
        destination: destination.clone(),
    }];
    if remove_source {
        effects.push(Statement::Remove(source.clone()));
    }
    effects
}

fn git_effects(args: &[String]) -> Vec<Statement> {
    if args.first().map(String::as_str) != Some("clone") {
        return Vec::new();
    }
    let operands = remove_flags(&strip_value_options(&args[1..], &GIT_CLONE_VALUE_OPTIONS));
    let Some(url) = operands.first() else {
        debug!(command = "git", "clone without repository, skipping");
        return Vec::new();
    };
    vec![Statement::Mkdir(basename(url).to_string())]
}

fn wget_effects(args: &[String]) -> Vec<Statement> {
    let (_, extracted) = extract_flag(args, "-O", 1);
    match extracted.get(1) {
        Some(target) if target != "-" => vec![Statement::Touch(target.clone())],
        Some(_) => Vec::new(),
        None => {
            if !extracted.is_empty() {
                debug!(command = "wget", "-O without a target, skipping");
            }
            Vec::new()
        }
    }
}

fn curl_effects(args: &[String]) -> Vec<Statement> {
    let Some(position) = args.iter().rposition(|arg| arg.starts_with("-O")) else {
        return Vec::new();
    };
    let attached = &args[position][2..];
    let target = if attached.is_empty() {
        args.get(position + 1).map(String::as_str)
    } else {
        Some(attached)
    };
    match target {
        Some(target) => vec![Statement::Touch(target.to_string())],
        None => {
            debug!(command = "curl", "-O without a target, skipping");
            Vec::new()
        }
    }
}

fn script_assertion(name: &str, args: &[String]) -> Vec<Statement> {
    match remove_flags(args).into_iter().next() {
        Some(script) => vec![Statement::AssertExists(script)],
        None => {
            debug!(command = name, "no script operand, skipping");
            Vec::new()
        }
    }
}

fn unknown_command(name: &str) -> Vec<Statement> {
    if LEADING_PATH.is_match(name) {
        return vec![Statement::AssertExists(name.to_string())];
    }
    if name.is_empty() || name.starts_with('[') {
        return Vec::new();
    }
    vec![Statement::AssertMissing(name.to_string())]
}

/// Last path component, ignoring trailing slashes; `/` for an all-slash
/// path and `.` for an empty one.
fn basename(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
