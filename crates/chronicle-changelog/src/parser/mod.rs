//! Commit classification

mod conventional;
mod types;

pub use conventional::ConventionalParser;
pub use types::*;

use crate::types::ParsedCommit;
use chronicle_git::CommitInfo;

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Classify a commit; never fails, unparseable subjects land in Other
    fn parse(&self, commit: &CommitInfo) -> ParsedCommit;

    /// Check if a classified commit survives the type filters
    fn should_include(&self, commit: &ParsedCommit) -> bool;

    /// Classify a commit, or drop it when its type is filtered out
    fn classify(&self, commit: &CommitInfo) -> Option<ParsedCommit> {
        let parsed = self.parse(commit);
        self.should_include(&parsed).then_some(parsed)
    }
}
