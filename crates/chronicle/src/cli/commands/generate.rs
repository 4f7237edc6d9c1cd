//! Generate command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use chronicle_changelog::{run, ChangelogRequest, Outcome, ParserConfig};
use chronicle_core::config::{load_config_or_default, Config};
use chronicle_core::{ChangelogFormat, ChronicleError};
use chronicle_git::{GitRepo, RangeQuery};

use crate::cli::{output, Cli, OutputFormat};

/// Generate a changelog for a commit range
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Start reference, exclusive (default: latest tag, else the root commit)
    #[arg(long)]
    pub from: Option<String>,

    /// End reference, inclusive (default: HEAD)
    #[arg(long)]
    pub to: Option<String>,

    /// Output format: keepachangelog, conventional or grouped
    #[arg(short, long)]
    pub format: Option<String>,

    /// Version label for the header (default: the end reference)
    #[arg(long, value_name = "VERSION")]
    pub version_label: Option<String>,

    /// Output file (default: print to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write to the configured changelog file
    #[arg(short, long)]
    pub write: bool,

    /// Merge into the existing file below its top-level heading
    #[arg(long)]
    pub prepend: bool,

    /// Skip merge commits
    #[arg(long)]
    pub no_merges: bool,

    /// Comma-separated commit types to drop, e.g. "chore,ci"
    #[arg(long, value_name = "TYPES")]
    pub exclude_types: Option<String>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            from = ?self.from,
            to = ?self.to,
            format = ?self.format,
            prepend = self.prepend,
            "executing generate command"
        );
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let format: ChangelogFormat = self
            .format
            .as_deref()
            .unwrap_or(&config.changelog.format)
            .parse()
            .map_err(ChronicleError::from)?;

        let repo = GitRepo::discover(&cwd).map_err(ChronicleError::from)?;
        let request = self.request(&config, &cwd, format);

        match run(&repo, &request)? {
            Outcome::Empty(notice) => match cli.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&notice)?),
                OutputFormat::Text => {
                    if !cli.quiet {
                        output::warning(&notice.to_string());
                    }
                }
            },
            Outcome::Rendered(document) => match cli.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
                OutputFormat::Text => print!("{}", document.content),
            },
            Outcome::Written { path, document } => match cli.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
                OutputFormat::Text => {
                    if !cli.quiet {
                        output::success(&format!(
                            "Changelog for {} ({} commits) written to {}",
                            document.version,
                            document.commit_count,
                            output::path(&path)
                        ));
                    }
                }
            },
        }

        Ok(())
    }

    /// Combine flags with configuration; flags win
    fn request(&self, config: &Config, cwd: &std::path::Path, format: ChangelogFormat) -> ChangelogRequest {
        let to = self.to.clone().unwrap_or_else(|| config.git.to.clone());
        let mut query =
            RangeQuery::new(to).with_merges(!self.no_merges && config.changelog.include_merges);
        if let Some(from) = &self.from {
            query = query.from_ref(from.clone());
        }
        if let Some(pattern) = &config.git.tag_pattern {
            query = query.with_tag_pattern(pattern.clone());
        }

        let parser = match &self.exclude_types {
            Some(list) => ParserConfig::from_exclude_list(list),
            None => ParserConfig::default().exclude_types(config.changelog.exclude_types.iter().cloned()),
        };

        let date = chrono::Local::now().date_naive();
        let mut request = ChangelogRequest::new(query, format, date).with_parser(parser);
        if let Some(version) = &self.version_label {
            request = request.with_version(version.clone());
        }

        let output = self.output.clone().or_else(|| {
            (self.write || self.prepend)
                .then(|| config.changelog.file.as_ref().map(|file| cwd.join(file)))
                .flatten()
        });
        if let Some(path) = output {
            request = request.with_output(path, self.prepend || config.changelog.prepend);
        } else if self.prepend {
            // Left for the pipeline to reject
            request.prepend = true;
        }
        request
    }
}
