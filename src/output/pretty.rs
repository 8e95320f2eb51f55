//! Human-readable colored text formatter.

use crate::finding::{Severity, ValidationResult};
use crate::output::RenderContext;
use colored::Colorize;

/// Formats a [`ValidationResult`] as ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header**: skill name.
/// 2. **Findings**: errors, then warnings.
/// 3. **Summary**: overall status and counts.
pub fn format(result: &ValidationResult, ctx: RenderContext<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n\n",
        format!("  Skill Validation: {}  ", ctx.skill)
            .bold()
            .on_blue()
            .white()
    ));

    let mut messages = result.messages().peekable();
    if messages.peek().is_some() {
        out.push_str(&format!("{}\n", "Findings".bold().underline()));
        for (severity, message) in messages {
            let tag = match severity {
                Severity::Error => "ERROR".red().bold().to_string(),
                Severity::Warning => " WARN".yellow().bold().to_string(),
            };
            out.push_str(&format!("  [{tag}] {message}\n"));
        }
        out.push('\n');
    }

    let status = if !result.valid {
        "FAILED".red().bold().to_string()
    } else if !result.passes(ctx.strict) {
        "FAILED (strict)".red().bold().to_string()
    } else if !result.warnings.is_empty() {
        "WARNING".yellow().bold().to_string()
    } else {
        "PASSED".green().bold().to_string()
    };

    out.push_str(&format!(
        "Result: {status}  |  {} errors, {} warnings\n",
        result.errors.len(),
        result.warnings.len(),
    ));

    out
}
