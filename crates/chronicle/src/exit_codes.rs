//! Exit codes for the CLI

use chronicle_core::{ChangelogError, ChronicleError, ConfigError, GitError};

/// General error
pub const ERROR: i32 = 1;

/// Configuration error, including unknown formats
pub const CONFIG_ERROR: i32 = 2;

/// Git error, including unresolvable references
pub const GIT_ERROR: i32 = 3;

/// Changelog write or merge error
pub const CHANGELOG_ERROR: i32 = 6;

/// Map an error to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<ChronicleError>() {
        return match err {
            ChronicleError::Config(_) => CONFIG_ERROR,
            ChronicleError::Git(_) => GIT_ERROR,
            ChronicleError::Changelog(err) => changelog_code(err),
            _ => ERROR,
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    if err.downcast_ref::<GitError>().is_some() {
        return GIT_ERROR;
    }
    match err.downcast_ref::<ChangelogError>() {
        Some(err) => changelog_code(err),
        None => ERROR,
    }
}

fn changelog_code(err: &ChangelogError) -> i32 {
    match err {
        ChangelogError::UnsupportedFormat(_) => CONFIG_ERROR,
        _ => CHANGELOG_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_mapping() {
        let git: anyhow::Error = ChronicleError::from(GitError::unresolved("v1", "missing")).into();
        assert_eq!(for_error(&git), GIT_ERROR);

        let format: anyhow::Error =
            ChronicleError::from(ChangelogError::UnsupportedFormat("rst".into())).into();
        assert_eq!(for_error(&format), CONFIG_ERROR);

        let merge: anyhow::Error =
            ChronicleError::from(ChangelogError::MergeTargetMissingHeading(PathBuf::from("x")))
                .into();
        assert_eq!(for_error(&merge), CHANGELOG_ERROR);

        let config: anyhow::Error = ChronicleError::from(ConfigError::InvalidValue {
            field: "git.to".into(),
            message: "empty".into(),
        })
        .into();
        assert_eq!(for_error(&config), CONFIG_ERROR);

        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
    }

    #[test]
    fn test_bare_domain_errors_map_too() {
        let git: anyhow::Error = GitError::NoCommits.into();
        assert_eq!(for_error(&git), GIT_ERROR);

        let format: anyhow::Error = ChangelogError::UnsupportedFormat("rst".into()).into();
        assert_eq!(for_error(&format), CONFIG_ERROR);
    }
}
