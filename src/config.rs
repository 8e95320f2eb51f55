//! Configuration loading.
//!
//! The validator runs with built-in limits that match the skill authoring
//! guidelines. A TOML file passed with `--config` can tighten or relax them.
//! Nothing is read implicitly, so the verdict for a skill directory never
//! depends on where the command runs.
//!
//! ```toml
//! [limits]
//! max_body_lines = 300
//!
//! [fields]
//! extra_allowed = ["version"]
//!
//! [strict]
//! enabled = true
//! ```
//!
//! ```rust,no_run
//! use skill_validate::config::Config;
//!
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("skill-validate.toml")).expect("failed to load config");
//! assert!(config.limits.max_name_length >= 1);
//! ```

use std::path::{Path, PathBuf};

/// Conventional config file name. It is only used when passed explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "skill-validate.toml";

/// Main configuration for a validation run.
///
/// Every field carries a default so the file can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Length and size limits.
    pub limits: LimitsConfig,
    /// Frontmatter key allowances.
    pub fields: FieldsConfig,
    /// When strict mode is enabled, warnings fail the run.
    pub strict: StrictConfig,
}

/// Length and size limits applied to `SKILL.md`.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum `name` length in characters.
    pub max_name_length: usize,
    /// Maximum `description` length in characters.
    pub max_description_length: usize,
    /// Body line count above which a warning is emitted.
    pub max_body_lines: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            max_name_length: 64,
            max_description_length: 1024,
            max_body_lines: 500,
        }
    }
}

/// Additional frontmatter keys that should not trigger the
/// unexpected-field warning.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub extra_allowed: Vec<String>,
}

/// Strict-mode configuration.
///
/// Strictness only changes the exit status; the reported `valid` flag still
/// reflects errors alone.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    pub enabled: bool,
}

/// Failure to locate, read, or parse a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads configuration from the TOML file at `path`.
    ///
    /// Sections and keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns `true` if `key` is one of the configured extra frontmatter keys.
    pub fn is_extra_field(&self, key: &str) -> bool {
        self.fields.extra_allowed.iter().any(|k| k == key)
    }
}
