//! `SKILL.md` frontmatter extraction.
//!
//! The frontmatter is the block between the opening `---` line and the next
//! `---` delimiter. It is parsed with [`serde_yaml`] into a generic
//! [`Mapping`] so that unknown keys and non-string values can be reported
//! instead of rejected by a typed deserializer.

use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

/// Opening delimiter, a non-greedy body, then the closing delimiter.
static RE_FRONTMATTER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?s)\A---\n(.*?)\n---").unwrap());

/// Structural problems that make every later check meaningless.
///
/// The `Display` text of each variant is the exact message reported in the
/// result's `errors` list.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("No YAML frontmatter found (file must start with ---)")]
    MissingOpening,

    #[error("Invalid frontmatter format (missing closing ---)")]
    MissingClosing,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("Frontmatter must be a YAML mapping")]
    NotAMapping,
}

/// Extracts and parses the frontmatter block of `content`.
pub fn parse(content: &str) -> Result<Mapping, FrontmatterError> {
    if !content.starts_with("---") {
        return Err(FrontmatterError::MissingOpening);
    }

    let block = RE_FRONTMATTER
        .captures(content)
        .and_then(|caps| caps.get(1))
        .ok_or(FrontmatterError::MissingClosing)?
        .as_str();

    // An empty document is null, never a mapping.
    if block.trim().is_empty() {
        return Err(FrontmatterError::NotAMapping);
    }

    match serde_yaml::from_str::<Value>(block)? {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

/// Returns everything after the closing delimiter.
///
/// The closing delimiter is the first `---` at or after byte 3, so a `---`
/// inside a frontmatter value ends the search early. Returns `""` when no
/// such delimiter exists.
pub fn body(content: &str) -> &str {
    content
        .get(3..)
        .and_then(|rest| rest.find("---"))
        .map(|idx| &content[idx + 6..])
        .unwrap_or("")
}

/// Human-readable YAML type of `value`, used in type-mismatch errors.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Renders a mapping key for display.
///
/// YAML allows non-string keys (`1: x`, `true: y`); those are shown by their
/// scalar text so they still appear in the unexpected-field warning.
pub fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("<{}>", type_name(other))),
    }
}
