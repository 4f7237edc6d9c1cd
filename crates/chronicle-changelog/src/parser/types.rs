//! Parser configuration types

use std::collections::HashSet;

/// Configuration for the commit parser
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Commit type tokens to drop entirely
    pub exclude_types: HashSet<String>,
}

impl ParserConfig {
    /// Add a type to exclude
    pub fn exclude_type(mut self, type_name: impl Into<String>) -> Self {
        self.exclude_types.insert(type_name.into());
        self
    }

    /// Add several types to exclude
    pub fn exclude_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Parse a comma-separated exclusion list such as `chore, ci,test`
    pub fn from_exclude_list(list: &str) -> Self {
        Self::default().exclude_types(
            list.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty()),
        )
    }
}
