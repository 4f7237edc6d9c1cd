//! conventional-changelog formatter

use chronicle_core::ChangelogFormat;
use tracing::{debug, instrument};

use super::{finish, ChangelogFormatter};
use crate::types::ChangelogEntry;

/// Renders `# version (date)` entries with `*` bullets and bracketed hashes
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalFormatter;

/// Lowercase the first character unless the second is uppercase too
/// (`API`, `URLs`, `UI-kit` stay as written)
fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if chars.clone().next().is_some_and(char::is_uppercase) {
        return text.to_string();
    }
    first.to_lowercase().chain(chars).collect()
}

impl ChangelogFormatter for ConventionalFormatter {
    #[instrument(skip(self, entry), fields(version = %entry.version, section_count = entry.sections.len()))]
    fn format(&self, entry: &ChangelogEntry) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "# {} ({})\n\n",
            entry.version,
            entry.date.format("%Y-%m-%d")
        ));

        for section in &entry.sections {
            if section.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", section.title()));

            for commit in &section.commits {
                output.push_str("* ");
                if let Some(scope) = &commit.scope {
                    output.push_str(&format!("**{}:** ", scope));
                }
                output.push_str(&format!(
                    "{} ([{}])\n",
                    lowercase_first(&commit.description),
                    commit.hash()
                ));
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "conventional changelog formatted");
        finish(output)
    }

    fn kind(&self) -> ChangelogFormat {
        ChangelogFormat::Conventional
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::test_support::entry;

    #[test]
    fn test_lowercase_first() {
        assert_eq!(lowercase_first("Add login"), "add login");
        assert_eq!(lowercase_first("add login"), "add login");
        assert_eq!(lowercase_first("API keys rotate"), "API keys rotate");
        assert_eq!(lowercase_first("A small fix"), "a small fix");
        assert_eq!(lowercase_first("URLs are trimmed"), "URLs are trimmed");
        assert_eq!(lowercase_first("UI-kit redesign"), "UI-kit redesign");
        assert_eq!(lowercase_first("X"), "x");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn test_format() {
        let entry = entry(&[
            ("a1b2c3d4", "feat(auth): Add login", "Ann", 12),
            ("e5f6a7b8", "feat: Export to CSV", "Ann", 12),
            ("i9j0k1l2", "fix(db): leak", "Bo", 11),
        ]);

        let output = ConventionalFormatter.format(&entry);

        assert_eq!(
            output,
            "# 1.2.0 (2026-02-12)\n\
             \n\
             ### Added\n\
             \n\
             * **auth:** add login ([a1b2c3d4])\n\
             * export to CSV ([e5f6a7b8])\n\
             \n\
             ### Fixed\n\
             \n\
             * **db:** leak ([i9j0k1l2])\n"
        );
    }
}
