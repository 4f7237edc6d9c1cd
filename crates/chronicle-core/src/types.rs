//! Core types for Chronicle

use serde::{Deserialize, Serialize};

use crate::error::ChangelogError;

/// Output document schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogFormat {
    /// Keep a Changelog (`## [version] - date`)
    #[default]
    KeepAChangelog,
    /// conventional-changelog style (`# version (date)`)
    Conventional,
    /// Commits grouped by calendar date
    Grouped,
}

impl ChangelogFormat {
    /// All supported formats
    pub const ALL: [ChangelogFormat; 3] = [Self::KeepAChangelog, Self::Conventional, Self::Grouped];

    /// Returns the selector string for the format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeepAChangelog => "keepachangelog",
            Self::Conventional => "conventional",
            Self::Grouped => "grouped",
        }
    }
}

impl std::fmt::Display for ChangelogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ChangelogFormat {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "keepachangelog" => Ok(Self::KeepAChangelog),
            "conventional" => Ok(Self::Conventional),
            "grouped" => Ok(Self::Grouped),
            other => Err(ChangelogError::UnsupportedFormat(other.to_string())),
        }
    }
}
