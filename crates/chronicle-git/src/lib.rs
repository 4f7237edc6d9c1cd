//! Chronicle Git - Commit sources for changelog generation
//!
//! This crate exposes the [`CommitSource`] query interface (range in,
//! ordered commit records out) together with a `git2`-backed
//! implementation and an in-memory implementation for fixtures.

mod commits;
#[cfg(test)]
mod fixtures;
pub mod memory;
mod repository;
pub mod source;
mod tags;
pub mod types;

pub use memory::MemorySource;
pub use repository::{GitRepo, Result};
pub use source::{CommitRange, CommitSource, RangeQuery};
pub use types::CommitInfo;
