//! Skill directory validation.
//!
//! [`validate_skill`] runs a single sequential pass over one directory:
//!
//! 1. `SKILL.md` must exist and be readable.
//! 2. The [`frontmatter`] block must be present, closed, and a YAML mapping.
//!    Any failure up to here is fatal: the result carries that one error and
//!    nothing else.
//! 3. Unknown frontmatter keys produce a warning.
//! 4. The `name` and `description` fields are checked.
//! 5. The body length, `references/` and `scripts/` cross-references, and
//!    hardcoded install paths are checked.
//!
//! Steps 3–5 are cumulative: every finding is collected.

pub mod frontmatter;

mod content;
mod fields;

use crate::config::Config;
use crate::finding::ValidationResult;
use serde_yaml::Mapping;
use std::collections::BTreeSet;
use std::path::Path;

/// Name of the metadata file every skill directory must contain.
pub const SKILL_FILE: &str = "SKILL.md";

/// Frontmatter keys that never trigger the unexpected-field warning.
///
/// The first six are the core skill fields; the rest are agent-runtime
/// extensions.
pub const ALLOWED_FIELDS: &[&str] = &[
    "name",
    "description",
    "license",
    "compatibility",
    "metadata",
    "allowed-tools",
    "argument-hint",
    "disable-model-invocation",
    "user-invocable",
    "model",
    "context",
    "agent",
    "hooks",
];

/// Validates a skill directory with the default [`Config`].
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_validate::validate::validate_skill;
///
/// let result = validate_skill(Path::new("./pdf-tools"));
/// for error in &result.errors {
///     eprintln!("error: {error}");
/// }
/// std::process::exit(if result.valid { 0 } else { 1 });
/// ```
pub fn validate_skill(path: &Path) -> ValidationResult {
    validate_skill_with(path, &Config::default())
}

/// Validates a skill directory using the limits and field allowances in `config`.
///
/// Never fails: unreadable files and malformed frontmatter are reported as
/// errors in the returned [`ValidationResult`].
pub fn validate_skill_with(path: &Path, config: &Config) -> ValidationResult {
    let skill_md = path.join(SKILL_FILE);
    tracing::debug!(path = %skill_md.display(), "validating skill");

    if !skill_md.exists() {
        return ValidationResult::fatal("SKILL.md not found");
    }

    let content = match std::fs::read_to_string(&skill_md) {
        Ok(c) => c,
        Err(e) => return ValidationResult::fatal(format!("Failed to read SKILL.md: {e}")),
    };

    let mapping = match frontmatter::parse(&content) {
        Ok(mapping) => mapping,
        Err(e) => {
            tracing::debug!(error = %e, "frontmatter rejected");
            return ValidationResult::fatal(e.to_string());
        }
    };

    let mut result = ValidationResult::default();
    let limits = &config.limits;

    check_unexpected_fields(&mut result, &mapping, config);
    fields::check_name(&mut result, &mapping, &skill_dir_name(path), limits);
    fields::check_description(&mut result, &mapping, limits);
    content::check_body_length(&mut result, &content, limits.max_body_lines);
    content::check_linked_dirs(&mut result, &content, path);
    content::check_hardcoded_paths(&mut result, &content);

    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validation finished"
    );
    result
}

/// Warns once, listing every key outside [`ALLOWED_FIELDS`] and the
/// configured extras in sorted order.
fn check_unexpected_fields(result: &mut ValidationResult, fields: &Mapping, config: &Config) {
    let unexpected: BTreeSet<String> = fields
        .keys()
        .map(frontmatter::key_label)
        .filter(|key| !ALLOWED_FIELDS.contains(&key.as_str()) && !config.is_extra_field(key))
        .collect();

    if !unexpected.is_empty() {
        let list = unexpected.into_iter().collect::<Vec<_>>().join(", ");
        result.warning(format!(
            "Unexpected frontmatter field(s): {list}. These may be ignored by some tools."
        ));
    }
}

/// The directory's last path component, which `name` must equal.
fn skill_dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
