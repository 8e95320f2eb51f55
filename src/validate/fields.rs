//! `name` and `description` field rules.

use crate::config::LimitsConfig;
use crate::finding::ValidationResult;
use crate::validate::frontmatter::type_name;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

static RE_NAME_CHARSET: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Phrases that tell an agent *when* to pick the skill.
const TRIGGER_PHRASES: &[&str] = &["use when", "use for", "use to", "trigger", "invoke"];

/// Lowercased openings that mark first- or second-person voice.
const NON_THIRD_PERSON_PREFIXES: &[&str] = &["i ", "i can", "you "];

/// Validates the `name` field.
pub(crate) fn check_name(
    result: &mut ValidationResult,
    fields: &Mapping,
    dir_name: &str,
    limits: &LimitsConfig,
) {
    let Some(value) = fields.get("name") else {
        result.error("Missing required field: name");
        return;
    };
    let Value::String(name) = value else {
        result.error(format!("name must be a string, got {}", type_name(value)));
        return;
    };

    if let Some(message) = name_violation(name.trim(), dir_name, limits.max_name_length) {
        result.error(message);
    }
}

/// Returns the first rule a trimmed `name` breaks, in priority order.
///
/// Later rules are only meaningful once earlier ones pass (the charset rule
/// makes the hyphen rules well-defined, and a malformed name would never
/// match a directory), so only one violation is ever reported.
fn name_violation(name: &str, dir_name: &str, max_len: usize) -> Option<String> {
    let len = name.chars().count();
    if name.is_empty() {
        Some("name must not be empty".to_string())
    } else if len > max_len {
        Some(format!("name is too long ({len} chars, max {max_len})"))
    } else if !RE_NAME_CHARSET.is_match(name) {
        Some(format!("name '{name}' must contain only lowercase letters, digits, and hyphens"))
    } else if name.starts_with('-') || name.ends_with('-') {
        Some(format!("name '{name}' must not start or end with a hyphen"))
    } else if name.contains("--") {
        Some(format!("name '{name}' must not contain consecutive hyphens"))
    } else if name != dir_name {
        Some(format!("name '{name}' does not match directory name '{dir_name}'"))
    } else {
        None
    }
}

/// Validates the `description` field and its phrasing.
pub(crate) fn check_description(
    result: &mut ValidationResult,
    fields: &Mapping,
    limits: &LimitsConfig,
) {
    let Some(value) = fields.get("description") else {
        result.error("Missing required field: description");
        return;
    };
    let Value::String(desc) = value else {
        result.error(format!("description must be a string, got {}", type_name(value)));
        return;
    };

    let desc = desc.trim();
    let len = desc.chars().count();
    let max_len = limits.max_description_length;
    if desc.is_empty() {
        result.error("description must not be empty");
    } else if len > max_len {
        result.error(format!("description is too long ({len} chars, max {max_len})"));
    }

    if desc.contains('<') || desc.contains('>') {
        result.error("description must not contain angle brackets (< or >)");
    }

    let lower = desc.to_lowercase();
    if !TRIGGER_PHRASES.iter().any(|p| lower.contains(p)) {
        result.warning(
            "description should include trigger phrases (e.g., 'Use when asked to \"review code\"')",
        );
    }
    if NON_THIRD_PERSON_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        result.warning(
            "description should be in third person (\"Processes files...\" not \"I can process files...\")",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(name: &str, dir: &str) -> Option<String> {
        name_violation(name, dir, 64)
    }

    #[test]
    fn accepts_matching_kebab_name() {
        assert_eq!(violation("pdf-tools-2", "pdf-tools-2"), None);
    }

    #[test]
    fn empty_name() {
        assert_eq!(violation("", "x").as_deref(), Some("name must not be empty"));
    }

    #[test]
    fn length_is_counted_in_chars() {
        let name = "a".repeat(65);
        assert_eq!(violation(&name, &name).as_deref(), Some("name is too long (65 chars, max 64)"));
        assert_eq!(violation(&"a".repeat(64), &"a".repeat(64)), None);
    }

    #[test]
    fn charset_precedes_directory_match() {
        let msg = violation("My_Skill", "my_skill").unwrap();
        assert!(msg.contains("only lowercase letters"), "{msg}");
    }

    #[test]
    fn hyphen_rules_in_order() {
        assert!(violation("-abc", "-abc").unwrap().contains("start or end"));
        assert!(violation("abc-", "abc-").unwrap().contains("start or end"));
        assert!(violation("a--b", "a--b").unwrap().contains("consecutive"));
    }

    #[test]
    fn directory_mismatch_names_both_values() {
        assert_eq!(
            violation("alpha", "beta").as_deref(),
            Some("name 'alpha' does not match directory name 'beta'")
        );
    }

    #[test]
    fn respects_configured_max_length() {
        assert!(name_violation("abcdef", "abcdef", 5).unwrap().contains("max 5"));
    }
}
