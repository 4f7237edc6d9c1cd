//! Conventional Commits parser
//!
//! Parses subjects of the form `type(scope)!: description`:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use super::{CommitParser, ParserConfig};
use crate::types::{Category, CommitType, ParsedCommit};
use chronicle_git::CommitInfo;

/// Regex for parsing conventional commit subjects
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>\w+)(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?:\s*(?P<description>.+)$",
    )
    .expect("Invalid regex")
});

/// Markers that flag a breaking change anywhere in the message
const BREAKING_MARKERS: [&str; 2] = ["BREAKING CHANGE", "BREAKING-CHANGE"];

/// Parser for Conventional Commits format
pub struct ConventionalParser {
    config: ParserConfig,
}

impl ConventionalParser {
    /// Create a new parser with default configuration
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Split a subject into its grammar parts
    fn parse_subject<'a>(&self, subject: &'a str) -> Option<SubjectParts<'a>> {
        let caps = CONVENTIONAL_REGEX.captures(subject)?;

        // `feat:  ` still carries a type; only its description is blank
        let description = caps.name("description")?.as_str().trim();

        Some(SubjectParts {
            commit_type: caps.name("type")?.as_str(),
            scope: caps
                .name("scope")
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty()),
            breaking: caps.name("breaking").is_some(),
            description,
        })
    }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        Self::new()
    }
}

struct SubjectParts<'a> {
    commit_type: &'a str,
    scope: Option<&'a str>,
    breaking: bool,
    description: &'a str,
}

fn has_breaking_marker(text: &str) -> bool {
    BREAKING_MARKERS.iter().any(|marker| text.contains(marker))
}

impl CommitParser for ConventionalParser {
    fn parse(&self, commit: &CommitInfo) -> ParsedCommit {
        let marked = has_breaking_marker(&commit.subject)
            || commit.body.as_deref().is_some_and(has_breaking_marker);

        let Some(parts) = self.parse_subject(&commit.subject) else {
            trace!(hash = %commit.short_hash, "subject is not conventional");
            return ParsedCommit {
                commit: commit.clone(),
                commit_type: None,
                category: Category::Other,
                scope: None,
                description: commit.subject.clone(),
                breaking: marked,
            };
        };

        let breaking = parts.breaking || marked;
        let category = if breaking {
            Category::BreakingChanges
        } else {
            CommitType::category_of(parts.commit_type)
        };

        ParsedCommit {
            commit: commit.clone(),
            commit_type: Some(parts.commit_type.to_string()),
            category,
            scope: parts.scope.map(str::to_string),
            description: parts.description.to_string(),
            breaking,
        }
    }

    fn should_include(&self, commit: &ParsedCommit) -> bool {
        commit
            .commit_type
            .as_ref()
            .map_or(true, |t| !self.config.exclude_types.contains(t))
    }
}
