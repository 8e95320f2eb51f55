use std::fmt;

/// How much a finding counts against a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Outcome of validating one skill directory.
///
/// Serializes with exactly three keys in a stable order: `valid`, `errors`,
/// `warnings`. `valid` is always `errors.is_empty()`; use [`record`] or the
/// constructors rather than pushing into the vectors by hand.
///
/// [`record`]: ValidationResult::record
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        ValidationResult {
            valid: true,
            errors: vec![],
            warnings: vec![],
        }
    }
}

impl ValidationResult {
    /// A result holding one fatal error and no warnings.
    pub fn fatal(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            errors: vec![message.into()],
            warnings: vec![],
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Severity::Error, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.record(Severity::Warning, message);
    }

    /// Appends a message under `severity` and keeps `valid` in sync.
    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Error => self.errors.push(message.into()),
            Severity::Warning => self.warnings.push(message.into()),
        }
        self.valid = self.errors.is_empty();
    }

    /// Whether the run should exit successfully.
    ///
    /// In strict mode any warning fails the run as well. `valid` itself is
    /// never touched by strictness.
    pub fn passes(&self, strict: bool) -> bool {
        self.valid && !(strict && !self.warnings.is_empty())
    }

    /// Iterates all messages, errors first, tagged with their severity.
    pub fn messages(&self) -> impl Iterator<Item = (Severity, &str)> + '_ {
        self.errors
            .iter()
            .map(|m| (Severity::Error, m.as_str()))
            .chain(self.warnings.iter().map(|m| (Severity::Warning, m.as_str())))
    }
}
