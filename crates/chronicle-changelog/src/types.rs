//! Changelog types

use chrono::NaiveDate;
use chronicle_core::ChangelogFormat;
use chronicle_git::CommitInfo;
use serde::{Deserialize, Serialize};

/// Changelog category, declared in canonical rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Breaking Changes")]
    BreakingChanges,
    Added,
    Fixed,
    Changed,
    Deprecated,
    Removed,
    Performance,
    Security,
    Documentation,
    Tests,
    Maintenance,
    Other,
}

impl Category {
    /// Every category in canonical order
    pub const ALL: [Category; 12] = [
        Self::BreakingChanges,
        Self::Added,
        Self::Fixed,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Performance,
        Self::Security,
        Self::Documentation,
        Self::Tests,
        Self::Maintenance,
        Self::Other,
    ];

    /// Section heading text
    pub fn title(&self) -> &'static str {
        match self {
            Self::BreakingChanges => "Breaking Changes",
            Self::Added => "Added",
            Self::Fixed => "Fixed",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::Documentation => "Documentation",
            Self::Tests => "Tests",
            Self::Maintenance => "Maintenance",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Recognised conventional commit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Refactor,
    Style,
    Perf,
    Test,
    Chore,
    Ci,
    Build,
    Revert,
    Deprecate,
}

impl CommitType {
    /// Category a commit of this type lands in when not breaking
    pub fn category(&self) -> Category {
        match self {
            Self::Feat => Category::Added,
            Self::Fix => Category::Fixed,
            Self::Docs => Category::Documentation,
            Self::Refactor | Self::Style => Category::Changed,
            Self::Perf => Category::Performance,
            Self::Test => Category::Tests,
            Self::Chore | Self::Ci | Self::Build => Category::Maintenance,
            Self::Revert => Category::Removed,
            Self::Deprecate => Category::Deprecated,
        }
    }

    /// Category for a raw type token; unknown tokens land in Other
    pub fn category_of(token: &str) -> Category {
        token
            .parse::<CommitType>()
            .map_or(Category::Other, |t| t.category())
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "refactor" => Ok(Self::Refactor),
            "style" => Ok(Self::Style),
            "perf" => Ok(Self::Perf),
            "test" => Ok(Self::Test),
            "chore" => Ok(Self::Chore),
            "ci" => Ok(Self::Ci),
            "build" => Ok(Self::Build),
            "revert" => Ok(Self::Revert),
            "deprecate" => Ok(Self::Deprecate),
            _ => Err(()),
        }
    }
}

/// A classified commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The commit this was derived from
    pub commit: CommitInfo,
    /// Type token, when the subject followed the conventional grammar
    pub commit_type: Option<String>,
    /// Assigned category
    pub category: Category,
    /// Scope label
    pub scope: Option<String>,
    /// Subject with the type/scope prefix stripped
    pub description: String,
    /// Whether this is a breaking change
    pub breaking: bool,
}

impl ParsedCommit {
    /// Short hash of the originating commit
    pub fn hash(&self) -> &str {
        &self.commit.short_hash
    }

    /// Author of the originating commit
    pub fn author(&self) -> &str {
        &self.commit.author
    }

    /// Date of the originating commit
    pub fn date(&self) -> NaiveDate {
        self.commit.date
    }

    /// Raw subject line of the originating commit
    pub fn subject(&self) -> &str {
        &self.commit.subject
    }
}

/// Commits sharing a category, in source order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category of every commit in the group
    pub category: Category,
    /// Commits in this group
    pub commits: Vec<ParsedCommit>,
}

impl CategoryGroup {
    /// Create a new group
    pub fn new(category: Category) -> Self {
        Self {
            category,
            commits: Vec::new(),
        }
    }

    /// Add a commit to the group
    pub fn add_commit(&mut self, commit: ParsedCommit) {
        self.commits.push(commit);
    }

    /// Section heading text
    pub fn title(&self) -> &'static str {
        self.category.title()
    }

    /// Check if group is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Commits sharing a calendar date, in source order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateGroup {
    /// Commit date
    pub date: NaiveDate,
    /// Commits in this group
    pub commits: Vec<ParsedCommit>,
}

impl DateGroup {
    /// Create a new group
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            commits: Vec::new(),
        }
    }

    /// Check if group is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// The grouped model handed to a formatter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Version label
    pub version: String,
    /// Generation date
    pub date: NaiveDate,
    /// Start reference of the range
    pub from: String,
    /// Non-empty category groups in canonical order
    pub sections: Vec<CategoryGroup>,
    /// Non-empty date groups, newest date first
    pub days: Vec<DateGroup>,
}

impl ChangelogEntry {
    /// Create a new, empty entry
    pub fn new(version: impl Into<String>, date: NaiveDate, from: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date,
            from: from.into(),
            sections: Vec::new(),
            days: Vec::new(),
        }
    }

    /// Add a category group; empty groups are dropped
    pub fn add_section(&mut self, section: CategoryGroup) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    /// Add a date group; empty groups are dropped
    pub fn add_day(&mut self, day: DateGroup) {
        if !day.is_empty() {
            self.days.push(day);
        }
    }

    /// Number of commits in the entry
    pub fn commit_count(&self) -> usize {
        self.sections.iter().map(|s| s.commits.len()).sum()
    }

    /// Check if entry has any content
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.days.is_empty()
    }
}

/// A rendered changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogDocument {
    /// Version label used in the header
    pub version: String,
    /// Generation date used in the header
    pub date: NaiveDate,
    /// Schema the content was rendered in
    pub format: ChangelogFormat,
    /// Number of commits rendered
    pub commit_count: usize,
    /// Markdown text
    pub content: String,
}
