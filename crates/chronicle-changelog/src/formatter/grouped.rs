//! Date-grouped formatter

use chronicle_core::ChangelogFormat;
use tracing::{debug, instrument};

use super::{finish, ChangelogFormatter};
use crate::types::ChangelogEntry;

/// Renders one `## date` section per day, each commit with hash and author
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedFormatter;

impl ChangelogFormatter for GroupedFormatter {
    #[instrument(skip(self, entry), fields(version = %entry.version, day_count = entry.days.len()))]
    fn format(&self, entry: &ChangelogEntry) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Changes: {} -> {}\n\n", entry.from, entry.version));

        for day in &entry.days {
            if day.is_empty() {
                continue;
            }

            output.push_str(&format!("## {}\n\n", day.date.format("%Y-%m-%d")));

            for commit in &day.commits {
                output.push_str(&format!(
                    "- {} ({}, {})\n",
                    commit.subject(),
                    commit.hash(),
                    commit.author()
                ));
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "grouped changelog formatted");
        finish(output)
    }

    fn kind(&self) -> ChangelogFormat {
        ChangelogFormat::Grouped
    }
}
