use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("environment variable `{0}` is not set and has no default")]
    MissingVariable(String),

    #[error("unsupported placeholder `{0}`, only `env.NAME` is recognised")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // {{ env.NAME }} or {{ env.NAME | default("value") }}
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Substitute `{{ env.NAME }}` placeholders in raw config text
///
/// `{{ env.NAME | default("value") }}` uses `value` when `NAME` is unset.
/// Lines that are TOML comments are copied untouched so commented-out
/// settings never require their variables.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut lines = Vec::new();

    for line in input.split('\n') {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
        } else {
            lines.push(expand_line(line)?);
        }
    }

    Ok(lines.join("\n"))
}

fn expand_line(line: &str) -> Result<String, ExpandError> {
    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for captures in placeholder().captures_iter(line) {
        let Some(whole) = captures.get(0) else { continue };

        expanded.push_str(&line[cursor..whole.start()]);
        expanded.push_str(&resolve(&captures)?);
        cursor = whole.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}

fn resolve(captures: &Captures<'_>) -> Result<String, ExpandError> {
    let key = captures.get(1).map_or("", |m| m.as_str());

    let Some(name) = key.strip_prefix("env.").filter(|name| !name.is_empty() && !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_owned()));
    };

    std::env::var(name)
        .ok()
        .or_else(|| captures.get(2).map(|m| m.as_str().to_owned()))
        .ok_or_else(|| ExpandError::MissingVariable(name.to_owned()))
}
