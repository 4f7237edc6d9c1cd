//! The commit query interface consumed by the changelog pipeline

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use chronicle_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

/// A request for the commits between two references
#[derive(Debug, Clone)]
pub struct RangeQuery {
    /// Start reference (exclusive); `None` means latest tag, then root commit
    pub from: Option<String>,
    /// End reference (inclusive)
    pub to: String,
    /// Whether merge commits are kept
    pub include_merges: bool,
    /// Glob restricting tags used for the default start
    pub tag_pattern: Option<String>,
}

impl RangeQuery {
    /// Query everything since the latest tag up to `to`
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            from: None,
            to: to.into(),
            include_merges: true,
            tag_pattern: None,
        }
    }

    /// Set an explicit start reference
    pub fn from_ref(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set whether merge commits are kept
    pub fn with_merges(mut self, include: bool) -> Self {
        self.include_merges = include;
        self
    }

    /// Restrict default-start tags to a glob pattern
    pub fn with_tag_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.tag_pattern = Some(pattern.into());
        self
    }
}

/// The resolved range and its commits, newest first
#[derive(Debug, Clone, Serialize)]
pub struct CommitRange {
    /// Start reference actually used
    pub from: String,
    /// End reference
    pub to: String,
    /// Commits in the range
    pub commits: Vec<CommitInfo>,
}

impl CommitRange {
    /// Check if the range holds no commits
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// A read-only backend that can list commits between two references
pub trait CommitSource {
    /// Whether the history has no commits at all
    fn is_empty(&self) -> Result<bool>;

    /// Most recent tag reachable from `to`
    fn latest_tag(&self, to: &str, pattern: Option<&str>) -> Result<Option<String>>;

    /// Root commit of the history of `to`
    fn root_commit(&self, to: &str) -> Result<Option<String>>;

    /// Commits reachable from `to` and not from `from`, newest first
    fn commits_between(&self, from: &str, to: &str) -> Result<Vec<CommitInfo>>;

    /// Pick the start reference when none was given
    fn default_start(&self, to: &str, pattern: Option<&str>) -> Result<String> {
        if self.is_empty()? {
            return Err(GitError::NoCommits);
        }

        if let Some(tag) = self.latest_tag(to, pattern)? {
            return Ok(tag);
        }

        let root = self.root_commit(to)?.ok_or(GitError::NoCommits)?;
        warn!(
            root = %root.chars().take(8).collect::<String>(),
            "no tags found, using first commit"
        );
        Ok(root)
    }

    /// Resolve the query and collect its commits
    #[instrument(skip(self), fields(to = %query.to))]
    fn query(&self, query: &RangeQuery) -> Result<CommitRange> {
        let from = match &query.from {
            Some(from) => from.clone(),
            None => self.default_start(&query.to, query.tag_pattern.as_deref())?,
        };

        let mut commits = self.commits_between(&from, &query.to)?;

        if !query.include_merges {
            let before = commits.len();
            commits.retain(|c| !c.is_merge);
            debug!(dropped = before - commits.len(), "filtered merge commits");
        }

        info!(from = %from, to = %query.to, count = commits.len(), "collected commits");
        Ok(CommitRange {
            from,
            to: query.to.clone(),
            commits,
        })
    }
}

impl CommitSource for GitRepo {
    fn is_empty(&self) -> Result<bool> {
        GitRepo::is_empty(self)
    }

    fn latest_tag(&self, to: &str, pattern: Option<&str>) -> Result<Option<String>> {
        GitRepo::latest_tag(self, to, pattern)
    }

    fn root_commit(&self, to: &str) -> Result<Option<String>> {
        GitRepo::root_commit(self, to)
    }

    fn commits_between(&self, from: &str, to: &str) -> Result<Vec<CommitInfo>> {
        self.commits_in_range(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ScratchRepo;

    #[test]
    fn test_query_defaults_to_latest_tag() {
        let mut scratch = ScratchRepo::new();
        let base = scratch.commit("chore: initial");
        scratch.tag("v0.1.0", base);
        scratch.commit("feat: one");

        let repo = scratch.open();
        let range = repo.query(&RangeQuery::new("HEAD")).unwrap();
        assert_eq!(range.from, "v0.1.0");
        assert_eq!(range.commits.len(), 1);
    }

    #[test]
    fn test_query_falls_back_to_root_commit() {
        let mut scratch = ScratchRepo::new();
        let root = scratch.commit("chore: initial");
        scratch.commit("feat: one");
        scratch.commit("fix: two");

        let repo = scratch.open();
        let range = repo.query(&RangeQuery::new("HEAD")).unwrap();
        assert_eq!(range.from, root.to_string());
        assert_eq!(range.commits.len(), 2);
    }

    #[test]
    fn test_query_on_empty_repository() {
        let scratch = ScratchRepo::new();
        let repo = scratch.open();
        assert!(matches!(
            repo.query(&RangeQuery::new("HEAD")),
            Err(GitError::NoCommits)
        ));
    }

    #[test]
    fn test_query_without_merges() {
        let mut scratch = ScratchRepo::new();
        let base = scratch.commit("chore: initial");
        let side = scratch.commit_with_parents(None, "feat: side", &[base]);
        let main = scratch.commit("fix: main");
        scratch.commit_with_parents(Some("HEAD"), "Merge branch 'side'", &[main, side]);

        let repo = scratch.open();
        let query = RangeQuery::new("HEAD").from_ref(base.to_string());
        assert_eq!(repo.query(&query).unwrap().commits.len(), 3);

        let range = repo.query(&query.with_merges(false)).unwrap();
        assert_eq!(range.commits.len(), 2);
        assert!(range.commits.iter().all(|c| !c.is_merge));
    }
}
