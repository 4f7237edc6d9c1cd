//! Grouping and ordering of classified commits

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{Category, CategoryGroup, DateGroup, ParsedCommit};

/// Partition commits by category.
///
/// Groups come out in canonical category order and only when non-empty;
/// commits keep their source order inside each group.
pub fn group_by_category(commits: &[ParsedCommit]) -> Vec<CategoryGroup> {
    let mut buckets: BTreeMap<Category, CategoryGroup> = BTreeMap::new();

    for commit in commits {
        buckets
            .entry(commit.category)
            .or_insert_with(|| CategoryGroup::new(commit.category))
            .add_commit(commit.clone());
    }

    buckets.into_values().collect()
}

/// Partition commits by calendar date, newest date first
pub fn group_by_date(commits: &[ParsedCommit]) -> Vec<DateGroup> {
    let mut buckets: BTreeMap<NaiveDate, DateGroup> = BTreeMap::new();

    for commit in commits {
        let date = commit.date();
        buckets
            .entry(date)
            .or_insert_with(|| DateGroup::new(date))
            .commits
            .push(commit.clone());
    }

    buckets.into_values().rev().collect()
}
