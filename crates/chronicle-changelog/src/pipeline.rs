//! End-to-end changelog run: query, classify, group, render, write

use std::path::PathBuf;

use chrono::NaiveDate;
use chronicle_core::error::{ChangelogError, Result};
use chronicle_core::ChangelogFormat;
use chronicle_git::{CommitSource, RangeQuery};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::generator::ChangelogGenerator;
use crate::merge::write_changelog;
use crate::parser::ParserConfig;
use crate::types::ChangelogDocument;

/// Everything a single run needs
#[derive(Debug, Clone)]
pub struct ChangelogRequest {
    /// Commit range to read
    pub query: RangeQuery,
    /// Output schema
    pub format: ChangelogFormat,
    /// Version label; defaults to the end reference
    pub version: Option<String>,
    /// Generation date for the header
    pub date: NaiveDate,
    /// Type filters
    pub parser: ParserConfig,
    /// Destination file; `None` returns the document without writing
    pub output: Option<PathBuf>,
    /// Splice into the destination instead of overwriting it
    pub prepend: bool,
}

impl ChangelogRequest {
    /// Create a request printing `format` for `query`
    pub fn new(query: RangeQuery, format: ChangelogFormat, date: NaiveDate) -> Self {
        Self {
            query,
            format,
            version: None,
            date,
            parser: ParserConfig::default(),
            output: None,
            prepend: false,
        }
    }

    /// Set the version label
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the type filters
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Write to `path`, splicing when `prepend` is set
    pub fn with_output(mut self, path: impl Into<PathBuf>, prepend: bool) -> Self {
        self.output = Some(path.into());
        self.prepend = prepend;
        self
    }
}

/// Why a run produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// The range holds no commits
    NoCommits,
    /// Every commit was removed by type exclusion
    AllExcluded,
}

/// Notice that a run had nothing to render; not an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyRange {
    /// Start reference used
    pub from: String,
    /// End reference used
    pub to: String,
    /// Why nothing was rendered
    pub reason: EmptyReason,
}

impl std::fmt::Display for EmptyRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            EmptyReason::NoCommits => {
                write!(f, "No commits found in range {}..{}", self.from, self.to)
            }
            EmptyReason::AllExcluded => write!(
                f,
                "No commits remaining in range {}..{} after filtering",
                self.from, self.to
            ),
        }
    }
}

/// Result of a run
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Nothing to render; no file was touched
    Empty(EmptyRange),
    /// Rendered document, not written anywhere
    Rendered(ChangelogDocument),
    /// Rendered document written to `path`
    Written {
        path: PathBuf,
        document: ChangelogDocument,
    },
}

/// Run the whole pipeline against `source`
#[instrument(skip(source, request), fields(format = %request.format, to = %request.query.to))]
pub fn run<S: CommitSource + ?Sized>(source: &S, request: &ChangelogRequest) -> Result<Outcome> {
    if request.prepend && request.output.is_none() {
        return Err(ChangelogError::PrependRequiresOutput.into());
    }

    let range = source.query(&request.query)?;
    if range.is_empty() {
        let notice = EmptyRange {
            from: range.from,
            to: range.to,
            reason: EmptyReason::NoCommits,
        };
        warn!(%notice, "nothing to render");
        return Ok(Outcome::Empty(notice));
    }

    let generator = ChangelogGenerator::new(request.format, request.parser.clone());
    let parsed = generator.classify(&range.commits);
    if parsed.is_empty() {
        let notice = EmptyRange {
            from: range.from,
            to: range.to,
            reason: EmptyReason::AllExcluded,
        };
        warn!(%notice, "nothing to render");
        return Ok(Outcome::Empty(notice));
    }

    info!(
        count = parsed.len(),
        from = %range.from,
        to = %range.to,
        "processing commits"
    );

    let version = request.version.as_deref().unwrap_or(&range.to);
    let entry = generator.build_entry(version, request.date, &range.from, &parsed);
    let document = generator.format(&entry);

    match &request.output {
        None => Ok(Outcome::Rendered(document)),
        Some(path) => {
            write_changelog(path, &document.content, request.prepend)?;
            Ok(Outcome::Written {
                path: path.clone(),
                document,
            })
        }
    }
}
