//! Chronicle Core - Shared foundation for changelog generation
//!
//! This crate provides the error taxonomy, configuration loading, and the
//! small set of types shared between the git adapter, the changelog
//! pipeline, and the command-line surface.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ChangelogError, ChronicleError, ConfigError, GitError, Result};
pub use types::ChangelogFormat;
