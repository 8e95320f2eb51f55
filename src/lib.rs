//! # skill-validate
//!
//! Quick validation for AI agent skill directories.
//!
//! A skill is a directory holding a `SKILL.md` file whose YAML frontmatter
//! describes it, plus optional `references/` and `scripts/` folders.
//! `skill-validate` checks the frontmatter schema, naming conventions, length
//! limits, and cross-references, and reports a pass/fail verdict with lists
//! of errors and warnings.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skill_validate::validate::validate_skill;
//!
//! let result = validate_skill(Path::new("./pdf-tools"));
//! if result.valid {
//!     println!("Skill is valid");
//! } else {
//!     for error in &result.errors {
//!         eprintln!("{error}");
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]**: optional TOML configuration (limits, extra fields, strict mode).
//! 2. **[`validate`]**: the validation pass and frontmatter parsing.
//! 3. **[`finding`]**: the [`finding::ValidationResult`] type.
//! 4. **[`output`]**: JSON or pretty text rendering.

pub mod config;
pub mod finding;
pub mod output;
pub mod validate;
