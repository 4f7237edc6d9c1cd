//! Keep a Changelog formatter

use chronicle_core::ChangelogFormat;
use tracing::{debug, instrument};

use super::{finish, ChangelogFormatter};
use crate::types::ChangelogEntry;

/// Renders `## [version] - date` entries with one `###` section per category
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAChangelogFormatter;

impl ChangelogFormatter for KeepAChangelogFormatter {
    #[instrument(skip(self, entry), fields(version = %entry.version, section_count = entry.sections.len()))]
    fn format(&self, entry: &ChangelogEntry) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "## [{}] - {}\n\n",
            entry.version,
            entry.date.format("%Y-%m-%d")
        ));

        for section in &entry.sections {
            if section.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", section.title()));

            for commit in &section.commits {
                output.push_str("- ");
                if let Some(scope) = &commit.scope {
                    output.push_str(&format!("**{}**: ", scope));
                }
                output.push_str(&format!("{} ({})\n", commit.description, commit.hash()));
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "keep-a-changelog entry formatted");
        finish(output)
    }

    fn kind(&self) -> ChangelogFormat {
        ChangelogFormat::KeepAChangelog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::test_support::entry;

    #[test]
    fn test_format_scenario() {
        let entry = entry(&[
            ("a1b2c3d4", "feat(auth): add login", "Ann", 12),
            ("i9j0k1l2", "fix(db): leak", "Bo", 11),
        ]);

        let output = KeepAChangelogFormatter.format(&entry);

        assert_eq!(
            output,
            "## [1.2.0] - 2026-02-12\n\
             \n\
             ### Added\n\
             \n\
             - **auth**: add login (a1b2c3d4)\n\
             \n\
             ### Fixed\n\
             \n\
             - **db**: leak (i9j0k1l2)\n"
        );
    }

    #[test]
    fn test_format_without_scope() {
        let entry = entry(&[("abcdef12", "docs: explain merge mode", "Ann", 12)]);
        let output = KeepAChangelogFormatter.format(&entry);

        assert!(output.contains("### Documentation\n\n- explain merge mode (abcdef12)\n"));
        assert!(!output.contains("**"));
    }

    #[test]
    fn test_format_breaking_first() {
        let entry = entry(&[
            ("00000001", "fix: small", "Ann", 12),
            ("00000002", "refactor(api)!: rename endpoints", "Ann", 12),
        ]);
        let output = KeepAChangelogFormatter.format(&entry);

        let breaking = output.find("### Breaking Changes").unwrap();
        let fixed = output.find("### Fixed").unwrap();
        assert!(breaking < fixed);
        assert!(!output.contains("### Changed"));
    }

    #[test]
    fn test_format_empty_entry_has_only_header() {
        let entry = entry(&[]);
        assert_eq!(KeepAChangelogFormatter.format(&entry), "## [1.2.0] - 2026-02-12\n");
    }
}
