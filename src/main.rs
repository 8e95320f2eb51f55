mod cli;
mod logging;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use skill_validate::{config, finding::ValidationResult, output, validate};
use std::path::{Path, PathBuf};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout; every usage error exits 1.
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    let mut config = match cli.config.as_deref() {
        Some(config_path) => config::Config::load(config_path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }),
        None => {
            if Path::new(config::DEFAULT_CONFIG_FILE).exists() {
                tracing::warn!(
                    "ignoring {} in the current directory; pass --config to use it",
                    config::DEFAULT_CONFIG_FILE
                );
            }
            config::Config::default()
        }
    };

    if cli.strict {
        config.strict.enabled = true;
    }

    let path = resolve(&cli.path);
    let result = if path.is_dir() {
        validate::validate_skill_with(&path, &config)
    } else {
        tracing::debug!(path = %path.display(), "not a directory");
        ValidationResult::fatal(format!("Not a directory: {}", path.display()))
    };

    let skill = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let formatted = output::format_result(
        &result,
        cli.format,
        output::RenderContext {
            skill: &skill,
            strict: config.strict.enabled,
        },
    );

    if let Some(out_path) = cli.output {
        std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(2);
        });
        eprintln!("Output written to {}", out_path.display());
    } else {
        print!("{formatted}");
    }

    std::process::exit(if result.passes(config.strict.enabled) { 0 } else { 1 });
}

/// Resolves `path` to an absolute path, following symlinks when it exists.
fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
