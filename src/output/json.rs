//! JSON output formatter.
//!
//! The document has exactly three keys, in order: `valid`, `errors`,
//! `warnings`.

use crate::finding::ValidationResult;

/// Formats a [`ValidationResult`] as pretty-printed JSON with a trailing newline.
pub fn format(result: &ValidationResult) -> String {
    // A struct of a bool and two string vectors always serializes.
    let mut out = serde_json::to_string_pretty(result).unwrap_or_else(|e| {
        tracing::error!(error = %e, "JSON serialization failed");
        String::from("{}")
    });
    out.push('\n');
    out
}
