//! Git types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of hex characters kept in a short hash
pub const SHORT_HASH_LEN: usize = 8;

/// Immutable snapshot of one commit as reported by a commit source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Short hash (first 8 characters)
    pub short_hash: String,
    /// Subject line
    pub subject: String,
    /// Extended message after the subject
    pub body: Option<String>,
    /// Author display name
    pub author: String,
    /// Author date in the author's own offset
    pub date: NaiveDate,
    /// Whether the commit has more than one parent
    pub is_merge: bool,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        subject: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let hash = hash.into();
        let short_hash = hash.chars().take(SHORT_HASH_LEN).collect();

        Self {
            hash,
            short_hash,
            subject: subject.into(),
            body: None,
            author: author.into(),
            date,
            is_merge: false,
        }
    }

    /// Set the commit body; blank bodies are stored as `None`
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.trim().is_empty() {
            None
        } else {
            Some(body)
        };
        self
    }

    /// Mark the commit as a merge commit
    pub fn as_merge(mut self) -> Self {
        self.is_merge = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
    }

    #[test]
    fn test_commit_info() {
        let commit = CommitInfo::new("a1b2c3d4e5f60718", "feat: add feature", "Author", date());
        assert_eq!(commit.short_hash, "a1b2c3d4");
        assert_eq!(commit.subject, "feat: add feature");
        assert!(!commit.is_merge);
        assert!(commit.body.is_none());
    }

    #[test]
    fn test_short_hash_of_short_input() {
        let commit = CommitInfo::new("abc", "x", "A", date());
        assert_eq!(commit.short_hash, "abc");
    }

    #[test]
    fn test_blank_body_is_none() {
        let commit = CommitInfo::new("abc", "x", "A", date()).with_body("  \n");
        assert!(commit.body.is_none());
    }

    #[test]
    fn test_body_is_kept() {
        let commit = CommitInfo::new("abc", "fix: y", "A", date()).with_body("details");
        assert_eq!(commit.body.as_deref(), Some("details"));
    }
}
