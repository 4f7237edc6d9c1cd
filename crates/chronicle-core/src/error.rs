//! Error types for Chronicle

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChronicleError
pub type Result<T> = std::result::Result<T, ChronicleError>;

/// Main error type for Chronicle operations
#[derive(Debug, Error)]
pub enum ChronicleError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// A range endpoint could not be resolved to a commit
    #[error("Cannot resolve reference '{reference}' to a commit: {reason}")]
    RangeResolution { reference: String, reason: String },

    /// Tag glob could not be compiled
    #[error("Invalid tag pattern '{pattern}': {reason}")]
    InvalidTagPattern { pattern: String, reason: String },

    /// Repository has neither tags nor commits to start from
    #[error("No tags or commits found in repository")]
    NoCommits,

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

impl GitError {
    /// Build a range resolution error for `reference`
    pub fn unresolved(reference: impl Into<String>, reason: impl ToString) -> Self {
        Self::RangeResolution {
            reference: reference.into(),
            reason: reason.to_string(),
        }
    }
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Unknown output format selector
    #[error("Unsupported changelog format '{0}' (expected one of: keepachangelog, conventional, grouped)")]
    UnsupportedFormat(String),

    /// Merge target exists, is non-empty, and has no top-level heading
    #[error("Cannot merge into {0}: no top-level '# ' heading found")]
    MergeTargetMissingHeading(PathBuf),

    /// Merge mode needs a destination file
    #[error("Prepending requires an output file")]
    PrependRequiresOutput,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
