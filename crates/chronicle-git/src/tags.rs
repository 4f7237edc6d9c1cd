//! Tag operations

use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode};
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Find the most recent tag reachable from `to`, optionally restricted
    /// to tags matching a glob `pattern`
    #[instrument(skip(self))]
    pub fn latest_tag(&self, to: &str, pattern: Option<&str>) -> Result<Option<String>> {
        let oid = self.resolve_commit(to)?;
        let commit = self.repo.find_commit(oid)?;

        if self.repo.tag_names(pattern)?.is_empty() {
            debug!(?pattern, "no tags in repository");
            return Ok(None);
        }

        let mut options = DescribeOptions::new();
        options.describe_tags();
        if let Some(pattern) = pattern {
            options.pattern(pattern);
        }

        let describe = match commit.as_object().describe(&options) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound || e.class() == ErrorClass::Describe => {
                debug!("no reachable tags");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let name = describe.format(Some(&format))?;

        debug!(tag = %name, "found latest tag");
        Ok(Some(name))
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::ScratchRepo;

    #[test]
    fn test_latest_reachable_tag() {
        let mut scratch = ScratchRepo::new();
        let first = scratch.commit("chore: initial");
        scratch.tag("v1.0.0", first);
        let second = scratch.commit("feat: more");
        scratch.tag("v1.1.0", second);
        scratch.commit("fix: after release");

        let repo = scratch.open();
        assert_eq!(
            repo.latest_tag("HEAD", None).unwrap(),
            Some("v1.1.0".to_string())
        );
        assert_eq!(
            repo.latest_tag(&first.to_string(), None).unwrap(),
            Some("v1.0.0".to_string())
        );
    }

    #[test]
    fn test_tag_pattern_filters_candidates() {
        let mut scratch = ScratchRepo::new();
        let first = scratch.commit("chore: initial");
        scratch.tag("v1.0.0", first);
        let second = scratch.commit("feat: more");
        scratch.tag("nightly-42", second);

        let repo = scratch.open();
        assert_eq!(
            repo.latest_tag("HEAD", Some("v*")).unwrap(),
            Some("v1.0.0".to_string())
        );
    }

    #[test]
    fn test_unreachable_tags_are_ignored() {
        let mut scratch = ScratchRepo::new();
        let base = scratch.commit("chore: initial");
        let side = scratch.commit_with_parents(None, "feat: side branch", &[base]);
        scratch.tag("v0.9.0", side);
        scratch.commit("fix: on main");

        let repo = scratch.open();
        assert_eq!(repo.latest_tag("HEAD", None).unwrap(), None);
    }

    #[test]
    fn test_pattern_matching_no_tags() {
        let mut scratch = ScratchRepo::new();
        let first = scratch.commit("chore: initial");
        scratch.tag("nightly-1", first);
        scratch.commit("feat: more");

        let repo = scratch.open();
        assert_eq!(repo.latest_tag("HEAD", Some("v*")).unwrap(), None);
    }

    #[test]
    fn test_no_tags() {
        let mut scratch = ScratchRepo::new();
        scratch.commit("chore: initial");

        let repo = scratch.open();
        assert_eq!(repo.latest_tag("HEAD", None).unwrap(), None);
    }
}
