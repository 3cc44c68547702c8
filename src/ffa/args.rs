//! Argument literalization and option-flag handling.

use crate::parser::ast::WordAst;

/// Resolves each word to its best-effort literal text.
///
/// Quotes are removed and expansions are kept verbatim, so `"$HOME"/bin`
/// becomes `$HOME/bin`.
pub fn literalize(words: &[WordAst]) -> Vec<String> {
    words.iter().map(WordAst::best_effort_text).collect()
}

/// Keeps the arguments that do not start with `-`.
pub fn remove_flags<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .map(AsRef::as_ref)
        .filter(|arg| !arg.starts_with('-'))
        .map(str::to_string)
        .collect()
}

/// Splits off the last occurrence of `flag` and up to `count_after`
/// following arguments.
///
/// Returns `(remainder, extracted)`, where `extracted` starts with the
/// flag itself. When `flag` is absent the remainder is `args` unchanged
/// and `extracted` is empty.
pub fn extract_flag<S: AsRef<str>>(
    args: &[S],
    flag: &str,
    count_after: usize,
) -> (Vec<String>, Vec<String>) {
    let owned: Vec<String> = args.iter().map(|arg| arg.as_ref().to_string()).collect();
    let Some(position) = owned.iter().rposition(|arg| arg == flag) else {
        return (owned, Vec::new());
    };

    let end = position
        .saturating_add(1)
        .saturating_add(count_after)
        .min(owned.len());
    let mut remainder = owned;
    let extracted: Vec<String> = remainder.drain(position..end).collect();
    (remainder, extracted)
}

/// Removes every occurrence of the given value-taking options together
/// with their value.
///
/// Both `--opt value` and `--opt=value` are recognized; short options
/// also accept an attached value (`-bmain`).
pub fn strip_value_options<S: AsRef<str>>(args: &[S], options: &[&str]) -> Vec<String> {
    let mut kept = Vec::with_capacity(args.len());
    let mut iter = args.iter().map(AsRef::as_ref);

    while let Some(arg) = iter.next() {
        if options.contains(&arg) {
            iter.next();
            continue;
        }
        let attached = options.iter().any(|option| {
            arg.strip_prefix(option).is_some_and(|rest| {
                rest.starts_with('=') || (!option.starts_with("--") && !rest.is_empty())
            })
        });
        if !attached {
            kept.push(arg.to_string());
        }
    }
    kept
}
