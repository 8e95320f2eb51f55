//! Output formatting for validation results.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation, CI gating (default) |
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |

pub mod json;
pub mod pretty;

use crate::finding::ValidationResult;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON with `valid`, `errors` and `warnings` keys.
    #[default]
    Json,
    /// Human-readable colored text.
    Pretty,
}

/// Everything a formatter needs besides the result itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Skill directory name shown in human-readable headers.
    pub skill: &'a str,
    /// Whether warnings fail the run.
    pub strict: bool,
}

/// Formats a [`ValidationResult`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust
/// use skill_validate::finding::ValidationResult;
/// use skill_validate::output::{format_result, OutputFormat, RenderContext};
///
/// let result = ValidationResult::fatal("SKILL.md not found");
/// let ctx = RenderContext { skill: "pdf-tools", strict: false };
/// let json = format_result(&result, OutputFormat::Json, ctx);
/// assert!(json.contains("\"valid\": false"));
/// ```
pub fn format_result(
    result: &ValidationResult,
    format: OutputFormat,
    ctx: RenderContext<'_>,
) -> String {
    match format {
        OutputFormat::Json => json::format(result),
        OutputFormat::Pretty => pretty::format(result, ctx),
    }
}
