//! Chronicle Changelog - Commit classification and changelog rendering
//!
//! Commits from a [`chronicle_git::CommitSource`] are classified against the
//! Conventional Commits grammar, grouped by category or date, rendered in
//! one of three markdown schemas, and optionally spliced into an existing
//! changelog file.

pub mod formatter;
pub mod generator;
pub mod grouping;
pub mod merge;
pub mod parser;
pub mod pipeline;
pub mod types;

pub use formatter::{formatter_for, ChangelogFormatter};
pub use generator::ChangelogGenerator;
pub use merge::{splice, write_changelog};
pub use parser::{CommitParser, ConventionalParser, ParserConfig};
pub use pipeline::{run, ChangelogRequest, EmptyRange, EmptyReason, Outcome};
pub use types::{
    Category, CategoryGroup, ChangelogDocument, ChangelogEntry, CommitType, DateGroup,
    ParsedCommit,
};
