//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use chronicle_core::config::defaults::{DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_YAML};
use chronicle_core::config::Config;

use crate::cli::{output, Cli};

/// Initialize a new Chronicle configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));

        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                output::warning("Aborted.");
                return Ok(());
            }
        }

        let format = if self.yes {
            "yaml"
        } else {
            let formats = ["yaml", "toml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            formats[selection]
        };

        let config_path = target_path(config_path, format);
        let content = render_config(format)?;
        std::fs::write(&config_path, &content)?;

        if !cli.quiet {
            output::success(&format!("Created configuration at {}", output::path(&config_path)));
            eprintln!();
            eprintln!("Next steps:");
            eprintln!("  1. Edit {} to pick a format and excluded types", config_path.display());
            eprintln!("  2. Run {} to verify your setup", style("chronicle validate").cyan());
            eprintln!("  3. Run {} to render your first changelog", style("chronicle generate").cyan());
        }

        Ok(())
    }
}

/// Swap a `.yaml` extension for `.toml` when TOML was chosen
fn target_path(path: PathBuf, format: &str) -> PathBuf {
    if format == "toml" && path.extension().is_some_and(|e| e == "yaml") {
        path.with_extension("toml")
    } else {
        path
    }
}

/// Default configuration text in the chosen format
fn render_config(format: &str) -> anyhow::Result<String> {
    if format == "toml" {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
        Ok(toml::to_string_pretty(&config)?)
    } else {
        Ok(DEFAULT_CONFIG_TEMPLATE.to_string())
    }
}
