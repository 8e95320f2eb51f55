use clap::Parser;
use skill_validate::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skill-validate",
    version,
    about = "Quick validation for AI agent skill directories"
)]
pub struct Cli {
    /// Path to the skill directory (the one containing SKILL.md)
    pub path: PathBuf,

    /// Output format
    #[arg(long, short, default_value = "json", value_enum)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Treat warnings as errors for the exit code
    #[arg(long)]
    pub strict: bool,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log validation steps to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
