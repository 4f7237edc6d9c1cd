//! Commit history operations

use chrono::{FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use git2::{Oid, Sort};
use tracing::{debug, instrument};

use chronicle_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Resolve any revision (hash, tag, branch, `HEAD~2`) to a commit id
    pub fn resolve_commit(&self, reference: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(reference)
            .map_err(|e| GitError::unresolved(reference, e.message()))?;
        let commit = object
            .peel_to_commit()
            .map_err(|e| GitError::unresolved(reference, e.message()))?;
        Ok(commit.id())
    }

    /// Get commits reachable from `to` and not from `from`, newest first
    #[instrument(skip(self))]
    pub fn commits_in_range(&self, from: &str, to: &str) -> Result<Vec<CommitInfo>> {
        let to_oid = self.resolve_commit(to)?;
        let from_oid = self.resolve_commit(from)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_oid)?;
        revwalk.hide(from_oid)?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "walked commit range");
        Ok(commits)
    }

    /// Get the oldest parentless commit in the history of `to`
    pub fn root_commit(&self, to: &str) -> Result<Option<String>> {
        let to_oid = self.resolve_commit(to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)?;
        revwalk.push(to_oid)?;

        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if commit.parent_count() == 0 {
                return Ok(Some(commit.id().to_string()));
            }
        }

        Ok(None)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let author = commit.author();

    let subject = String::from_utf8_lossy(commit.summary_bytes().unwrap_or_default());
    let body = String::from_utf8_lossy(commit.body_bytes().unwrap_or_default());

    let info = CommitInfo::new(
        commit.id().to_string(),
        subject,
        String::from_utf8_lossy(author.name_bytes()),
        author_date(author.when()),
    )
    .with_body(body);

    if commit.parent_count() > 1 {
        info.as_merge()
    } else {
        info
    }
}

/// Calendar date of a git timestamp in the offset it was recorded with.
///
/// Timestamps chrono cannot represent map to the Unix epoch date.
fn author_date(time: git2::Time) -> NaiveDate {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());

    offset
        .timestamp_opt(time.seconds(), 0)
        .single()
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
