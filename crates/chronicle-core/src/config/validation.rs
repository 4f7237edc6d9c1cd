//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::types::ChangelogFormat;

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_git(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    config.changelog.format.parse::<ChangelogFormat>()?;

    for (i, commit_type) in config.changelog.exclude_types.iter().enumerate() {
        if commit_type.is_empty() || commit_type.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.exclude_types[{}]", i),
                message: "must be a single non-empty commit type".to_string(),
            }
            .into());
        }
    }

    if config
        .changelog
        .file
        .as_ref()
        .is_some_and(|f| f.as_os_str().is_empty())
    {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.to.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "git.to".to_string(),
            message: "end reference cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
