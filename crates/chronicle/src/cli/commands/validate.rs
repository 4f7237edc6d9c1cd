//! Validate command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use chronicle_core::config::{find_config, load_config};
use chronicle_git::GitRepo;

use crate::cli::{Cli, OutputFormat};

/// Validate configuration and repository state
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Only validate configuration file
    #[arg(long)]
    pub config_only: bool,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Collected findings
#[derive(Debug, Default, Serialize)]
struct Report {
    valid: bool,
    config_path: Option<PathBuf>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            config_only = self.config_only,
            strict = self.strict,
            "executing validate command"
        );
        let cwd = std::env::current_dir()?;
        let report = self.check(&cwd);

        match cli.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => {
                if !cli.quiet {
                    print_report(&report);
                }
            }
        }

        if !report.valid {
            anyhow::bail!("validation failed with {} error(s)", report.errors.len());
        }
        Ok(())
    }

    fn check(&self, dir: &Path) -> Report {
        let mut report = Report::default();

        match find_config(dir) {
            Some(path) => {
                if let Err(e) = load_config(&path) {
                    report.errors.push(format!("Configuration: {}", e));
                }
                report.config_path = Some(path);
            }
            None => report
                .warnings
                .push("No configuration file found; defaults apply".to_string()),
        }

        if !self.config_only {
            match GitRepo::discover(dir) {
                Ok(repo) => match repo.is_empty() {
                    Ok(true) => report.warnings.push("Repository has no commits".to_string()),
                    Ok(false) => {}
                    Err(e) => report.errors.push(format!("Git repository: {}", e)),
                },
                Err(e) => report.errors.push(format!("Git repository: {}", e)),
            }
        }

        if self.strict {
            report.errors.append(&mut report.warnings);
        }
        report.valid = report.errors.is_empty();
        report
    }
}

fn print_report(report: &Report) {
    eprintln!("{}", style("Validation Results").bold());
    eprintln!();

    if let Some(path) = &report.config_path {
        eprintln!("Config: {}", style(path.display()).cyan());
        eprintln!();
    }

    if !report.errors.is_empty() {
        eprintln!("{}", style("Errors:").red().bold());
        for error in &report.errors {
            eprintln!("  {} {}", style("✗").red(), error);
        }
        eprintln!();
    }

    if !report.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow().bold());
        for warning in &report.warnings {
            eprintln!("  {} {}", style("!").yellow(), warning);
        }
        eprintln!();
    }

    if report.valid {
        eprintln!("{}", style("✓ All checks passed").green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command(config_only: bool, strict: bool) -> ValidateCommand {
        ValidateCommand {
            config_only,
            strict,
        }
    }

    #[test]
    fn test_missing_config_is_a_warning() {
        let temp = TempDir::new().unwrap();
        let report = command(true, false).check(temp.path());
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.config_path.is_none());
    }

    #[test]
    fn test_strict_promotes_warnings() {
        let temp = TempDir::new().unwrap();
        let report = command(true, true).check(temp.path());
        assert!(!report.valid);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_bad_format_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("chronicle.yaml"), "changelog:\n  format: rst\n").unwrap();

        let report = command(true, false).check(temp.path());
        assert!(!report.valid);
        assert!(report.errors[0].contains("rst"));
    }

    #[test]
    fn test_empty_repository_warns() {
        let temp = TempDir::new().unwrap();
        git2::Repository::init(temp.path()).unwrap();
        std::fs::write(temp.path().join("chronicle.yaml"), "changelog:\n  format: grouped\n").unwrap();

        let report = command(false, false).check(temp.path());
        assert!(report.valid, "{:?}", report.errors);
        assert_eq!(report.warnings, vec!["Repository has no commits".to_string()]);
    }
}
