//! Checks over the raw `SKILL.md` text and its sibling directories.

use crate::finding::ValidationResult;
use crate::validate::frontmatter;
use std::path::Path;
use std::sync::LazyLock;

/// A literal install path such as `skills/pdf-tools/scripts/`, which breaks
/// as soon as the skill is installed somewhere else.
static RE_HARDCODED_PATH: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?:plugins|skills)/[a-z-]+/(?:scripts|references|assets)/").unwrap()
});

/// Sibling directories that `SKILL.md` may point into.
const LINKED_DIRS: &[&str] = &["references", "scripts"];

/// Characters that end a line besides `\n`. A `\r\n` pair counts once.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Number of lines in `text`, splitting on every Unicode line boundary
/// rather than only `\n`. A trailing break does not start a new line.
fn count_lines(text: &str) -> usize {
    let mut lines = 0;
    let mut chars = text.chars().peekable();
    let mut open = false;
    while let Some(c) = chars.next() {
        if LINE_BREAKS.contains(&c) {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            lines += 1;
            open = false;
        } else {
            open = true;
        }
    }
    lines + usize::from(open)
}

/// Warns when the body (after the frontmatter, trimmed) exceeds `max_lines`.
pub(crate) fn check_body_length(result: &mut ValidationResult, content: &str, max_lines: usize) {
    let lines = count_lines(frontmatter::body(content).trim());
    if lines > max_lines {
        result.warning(format!(
            "SKILL.md body is {lines} lines (recommended max {max_lines}). \
             Consider moving content to references/."
        ));
    }
}

/// Errors for each `references/` or `scripts/` mention whose directory is missing.
pub(crate) fn check_linked_dirs(result: &mut ValidationResult, content: &str, skill_dir: &Path) {
    for dir in LINKED_DIRS {
        let needle = format!("{dir}/");
        if content.contains(&needle) && !skill_dir.join(dir).exists() {
            tracing::debug!(dir = *dir, "referenced directory is missing");
            result.error(format!("SKILL.md references '{needle}' but directory does not exist"));
        }
    }
}

/// Warns when the text contains a literal plugin or skill install path.
pub(crate) fn check_hardcoded_paths(result: &mut ValidationResult, content: &str) {
    if RE_HARDCODED_PATH.is_match(content) {
        result.warning(
            "SKILL.md may contain hardcoded paths. Use ${CLAUDE_SKILL_ROOT}/scripts/... instead.",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hardcoded_path_pattern() {
        for text in [
            "run skills/pdf-tools/scripts/fill.py",
            "see plugins/my-plugin/references/api.md",
            "load skills/x/assets/logo.png",
        ] {
            let mut result = ValidationResult::default();
            check_hardcoded_paths(&mut result, text);
            assert_eq!(result.warnings.len(), 1, "{text}");
        }

        for text in [
            "run scripts/fill.py",
            "skills/Pdf/scripts/fill.py",
            "skills/pdf2/scripts/fill.py",
            "skills/pdf/docs/x.md",
        ] {
            let mut result = ValidationResult::default();
            check_hardcoded_paths(&mut result, text);
            assert!(result.warnings.is_empty(), "{text}");
        }
    }

    #[test]
    fn body_length_boundary() {
        let at_limit = format!("---\nname: x\n---\n{}", "line\n".repeat(500));
        let mut result = ValidationResult::default();
        check_body_length(&mut result, &at_limit, 500);
        assert!(result.warnings.is_empty());

        let over = format!("---\nname: x\n---\n{}", "line\n".repeat(501));
        check_body_length(&mut result, &over, 500);
        assert_eq!(
            result.warnings,
            vec!["SKILL.md body is 501 lines (recommended max 500). Consider moving content to references/."]
        );
    }

    #[test]
    fn line_count_follows_unicode_boundaries() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\nb\n"), 2);
        assert_eq!(count_lines("a\r\nb"), 2);
        assert_eq!(count_lines("a\rb\rc"), 3);
        assert_eq!(count_lines("a\n\nb"), 3);
        assert_eq!(count_lines("a\u{2028}b\x0cc\x0bd"), 4);
    }

    #[test]
    fn carriage_return_body_is_counted() {
        let content = format!("---\nname: x\n---\n{}", "line\r".repeat(600));
        let mut result = ValidationResult::default();
        check_body_length(&mut result, &content, 500);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("SKILL.md body is 600 lines"));
    }

    #[test]
    fn surrounding_blank_lines_do_not_count() {
        let content = format!("---\nname: x\n---\n\n\n{}\n\n\n", "line\n".repeat(3));
        let mut result = ValidationResult::default();
        check_body_length(&mut result, &content, 3);
        assert!(result.warnings.is_empty());
    }
}
