//! Changelog generation

use chrono::NaiveDate;
use chronicle_core::ChangelogFormat;
use chronicle_git::CommitInfo;
use tracing::{debug, info, instrument};

use crate::formatter::{formatter_for, ChangelogFormatter};
use crate::grouping::{group_by_category, group_by_date};
use crate::parser::{CommitParser, ConventionalParser, ParserConfig};
use crate::types::{ChangelogDocument, ChangelogEntry, ParsedCommit};

/// Changelog generator: classify, group, then render
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a generator for `format` with the conventional parser
    pub fn new(format: ChangelogFormat, config: ParserConfig) -> Self {
        Self {
            parser: Box::new(ConventionalParser::with_config(config)),
            formatter: formatter_for(format),
        }
    }

    /// Classify commits, dropping excluded types
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn classify(&self, commits: &[CommitInfo]) -> Vec<ParsedCommit> {
        let parsed: Vec<ParsedCommit> = commits
            .iter()
            .filter_map(|c| self.parser.classify(c))
            .collect();

        debug!(
            kept = parsed.len(),
            excluded = commits.len() - parsed.len(),
            "commits classified"
        );
        parsed
    }

    /// Group classified commits into an entry
    pub fn build_entry(
        &self,
        version: &str,
        date: NaiveDate,
        from: &str,
        commits: &[ParsedCommit],
    ) -> ChangelogEntry {
        let mut entry = ChangelogEntry::new(version, date, from);

        for section in group_by_category(commits) {
            entry.add_section(section);
        }
        for day in group_by_date(commits) {
            entry.add_day(day);
        }

        debug!(
            section_count = entry.sections.len(),
            day_count = entry.days.len(),
            "changelog groups built"
        );
        entry
    }

    /// Generate a changelog entry from commits
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(
        &self,
        version: &str,
        date: NaiveDate,
        from: &str,
        commits: &[CommitInfo],
    ) -> ChangelogEntry {
        info!(version, commit_count = commits.len(), "generating changelog entry");
        let parsed = self.classify(commits);
        self.build_entry(version, date, from, &parsed)
    }

    /// Render an entry
    pub fn format(&self, entry: &ChangelogEntry) -> ChangelogDocument {
        ChangelogDocument {
            version: entry.version.clone(),
            date: entry.date,
            format: self.formatter.kind(),
            commit_count: entry.commit_count(),
            content: self.formatter.format(entry),
        }
    }

    /// Generate and format in one step
    pub fn generate_formatted(
        &self,
        version: &str,
        date: NaiveDate,
        from: &str,
        commits: &[CommitInfo],
    ) -> ChangelogDocument {
        let entry = self.generate(version, date, from, commits);
        let document = self.format(&entry);
        debug!(output_len = document.content.len(), "changelog formatted");
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
    }

    fn make_commit(hash: &str, subject: &str) -> CommitInfo {
        CommitInfo::new(hash, subject, "Test Author", date())
    }

    #[test]
    fn test_generate_changelog() {
        let generator = ChangelogGenerator::new(ChangelogFormat::KeepAChangelog, ParserConfig::default());

        let commits = vec![
            make_commit("00000003", "feat: add new feature"),
            make_commit("00000002", "fix: fix bug"),
            make_commit("00000001", "chore: update deps"),
        ];

        let entry = generator.generate("1.0.0", date(), "v0.9.0", &commits);

        assert_eq!(entry.version, "1.0.0");
        let categories: Vec<_> = entry.sections.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![Category::Added, Category::Fixed, Category::Maintenance]
        );
        assert_eq!(entry.days.len(), 1);
    }

    #[test]
    fn test_excluded_types_are_counted_out() {
        let config = ParserConfig::default().exclude_types(["chore", "ci"]);
        let generator = ChangelogGenerator::new(ChangelogFormat::Conventional, config);

        let commits = vec![
            make_commit("00000004", "feat: a"),
            make_commit("00000003", "ci: b"),
            make_commit("00000002", "chore(ci): c"),
            make_commit("00000001", "not conventional"),
        ];

        let parsed = generator.classify(&commits);
        assert_eq!(parsed.len(), commits.len() - 2);
    }

    #[test]
    fn test_format_document_metadata() {
        let generator = ChangelogGenerator::new(ChangelogFormat::Grouped, ParserConfig::default());
        let commits = vec![make_commit("00000001", "feat: a"), make_commit("00000002", "fix: b")];

        let document = generator.generate_formatted("2.0.0", date(), "v1.0.0", &commits);

        assert_eq!(document.format, ChangelogFormat::Grouped);
        assert_eq!(document.commit_count, 2);
        assert!(document.content.starts_with("# Changes: v1.0.0 -> 2.0.0\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let commits = vec![
            make_commit("00000003", "feat(ui): a"),
            make_commit("00000002", "perf: b"),
            make_commit("00000001", "misc"),
        ];

        for format in ChangelogFormat::ALL {
            let generator = ChangelogGenerator::new(format, ParserConfig::default());
            let entry = generator.generate("1.0.0", date(), "v0.1.0", &commits);
            assert_eq!(generator.format(&entry), generator.format(&entry));
        }
    }
}
