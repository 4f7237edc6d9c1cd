//! In-memory commit source over a linear history

use std::collections::HashMap;

use globset::Glob;

use chronicle_core::error::GitError;

use crate::repository::Result;
use crate::source::CommitSource;
use crate::types::CommitInfo;

/// A linear history held in memory, newest commit first.
///
/// References resolve through named refs (branches, tags), `HEAD`, or any
/// unique hash prefix of at least four characters.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    commits: Vec<CommitInfo>,
    refs: HashMap<String, String>,
    tags: Vec<String>,
}

impl MemorySource {
    /// Create a source from commits ordered newest first
    pub fn new(commits: Vec<CommitInfo>) -> Self {
        Self {
            commits,
            refs: HashMap::new(),
            tags: Vec::new(),
        }
    }

    /// Point a named reference at a commit hash
    pub fn with_ref(mut self, name: impl Into<String>, hash: impl Into<String>) -> Self {
        self.refs.insert(name.into(), hash.into());
        self
    }

    /// Add a tag pointing at a commit hash
    pub fn with_tag(mut self, name: impl Into<String>, hash: impl Into<String>) -> Self {
        let name = name.into();
        self.tags.push(name.clone());
        self.with_ref(name, hash)
    }

    /// Index of the commit a reference resolves to
    fn position(&self, reference: &str) -> Result<usize> {
        if reference == "HEAD" {
            return if self.commits.is_empty() {
                Err(GitError::unresolved(reference, "HEAD has no commits"))
            } else {
                Ok(0)
            };
        }

        let target = self.refs.get(reference).map(String::as_str).unwrap_or(reference);
        if target.len() < 4 {
            return Err(GitError::unresolved(reference, "reference not found"));
        }

        let mut matches = self
            .commits
            .iter()
            .enumerate()
            .filter(|(_, c)| c.hash.starts_with(target));

        match (matches.next(), matches.next()) {
            (Some((index, _)), None) => Ok(index),
            (Some(_), Some(_)) => Err(GitError::unresolved(reference, "ambiguous hash prefix")),
            (None, _) => Err(GitError::unresolved(reference, "reference not found")),
        }
    }

    fn tags_at(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        let hash = &self.commits[index].hash;
        self.tags
            .iter()
            .filter(move |name| self.refs.get(*name).is_some_and(|h| hash.starts_with(h.as_str())))
            .map(String::as_str)
    }
}

impl CommitSource for MemorySource {
    fn is_empty(&self) -> Result<bool> {
        Ok(self.commits.is_empty())
    }

    fn latest_tag(&self, to: &str, pattern: Option<&str>) -> Result<Option<String>> {
        let start = self.position(to)?;
        let matcher = pattern
            .map(|p| {
                Glob::new(p)
                    .map(|g| g.compile_matcher())
                    .map_err(|e| GitError::InvalidTagPattern {
                        pattern: p.to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        for index in start..self.commits.len() {
            let found = self
                .tags_at(index)
                .find(|name| matcher.as_ref().map_or(true, |m| m.is_match(name)));
            if let Some(name) = found {
                return Ok(Some(name.to_string()));
            }
        }

        Ok(None)
    }

    fn root_commit(&self, to: &str) -> Result<Option<String>> {
        self.position(to)?;
        Ok(self.commits.last().map(|c| c.hash.clone()))
    }

    fn commits_between(&self, from: &str, to: &str) -> Result<Vec<CommitInfo>> {
        let end = self.position(to)?;
        let start = self.position(from)?;

        if start <= end {
            return Ok(Vec::new());
        }

        Ok(self.commits[end..start].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RangeQuery;
    use chrono::NaiveDate;

    fn commit(hash: &str, subject: &str) -> CommitInfo {
        CommitInfo::new(
            hash,
            subject,
            "Test Author",
            NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
        )
    }

    fn history() -> MemorySource {
        MemorySource::new(vec![
            commit("e5f6a7b8c9d0", "fix(db): leak"),
            commit("a1b2c3d4e5f6", "feat(auth): add login"),
            commit("99887766aabb", "chore: release 1.1.0"),
            commit("00112233ccdd", "chore: initial"),
        ])
        .with_tag("v1.0.0", "00112233ccdd")
        .with_tag("v1.1.0", "99887766aabb")
        .with_ref("main", "e5f6a7b8c9d0")
    }

    #[test]
    fn test_range_between_refs() {
        let source = history();
        let commits = source.commits_between("v1.1.0", "main").unwrap();
        let hashes: Vec<_> = commits.iter().map(|c| c.short_hash.as_str()).collect();
        assert_eq!(hashes, vec!["e5f6a7b8", "a1b2c3d4"]);
    }

    #[test]
    fn test_identical_refs_are_empty() {
        let source = history();
        assert!(source.commits_between("main", "HEAD").unwrap().is_empty());
    }

    #[test]
    fn test_hash_prefix_resolution() {
        let source = history();
        let commits = source.commits_between("9988", "a1b2c3d4").unwrap();
        assert_eq!(commits.len(), 1);
        assert!(matches!(
            source.commits_between("deadbeef", "HEAD"),
            Err(GitError::RangeResolution { .. })
        ));
    }

    #[test]
    fn test_default_start_prefers_latest_tag() {
        let source = history();
        let range = source.query(&RangeQuery::new("HEAD")).unwrap();
        assert_eq!(range.from, "v1.1.0");
        assert_eq!(range.commits.len(), 2);

        let range = source
            .query(&RangeQuery::new("HEAD").with_tag_pattern("v1.0.*"))
            .unwrap();
        assert_eq!(range.from, "v1.0.0");
        assert_eq!(range.commits.len(), 3);
    }

    #[test]
    fn test_default_start_without_tags_uses_root() {
        let source = MemorySource::new(vec![commit("bbbb0000", "feat: b"), commit("aaaa0000", "init")]);
        let range = source.query(&RangeQuery::new("HEAD")).unwrap();
        assert_eq!(range.from, "aaaa0000");
        assert_eq!(range.commits.len(), 1);
    }

    #[test]
    fn test_empty_history() {
        let source = MemorySource::default();
        assert!(matches!(
            source.query(&RangeQuery::new("HEAD")),
            Err(GitError::NoCommits)
        ));
    }
}
