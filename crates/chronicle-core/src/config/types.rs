//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for Chronicle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Git configuration
    pub git: GitConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Output format selector (keepachangelog, conventional, grouped)
    pub format: String,

    /// Default destination file
    pub file: Option<PathBuf>,

    /// Whether to splice new entries into an existing file
    pub prepend: bool,

    /// Whether merge commits are included
    pub include_merges: bool,

    /// Commit types to drop entirely
    pub exclude_types: Vec<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            format: "keepachangelog".to_string(),
            file: None,
            prepend: false,
            include_merges: true,
            exclude_types: Vec::new(),
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Default end reference
    pub to: String,

    /// Glob restricting the tags considered when picking a default start
    pub tag_pattern: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            to: "HEAD".to_string(),
            tag_pattern: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.changelog.format, "keepachangelog");
        assert!(config.changelog.include_merges);
        assert!(!config.changelog.prepend);
        assert_eq!(config.git.to, "HEAD");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config =
            serde_yaml::from_str("changelog:\n  exclude_types: [chore, ci]\n").unwrap();
        assert_eq!(config.changelog.exclude_types, vec!["chore", "ci"]);
        assert_eq!(config.changelog.format, "keepachangelog");
        assert_eq!(config.git.to, "HEAD");
    }
}
