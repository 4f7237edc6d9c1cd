//! Changelog formatters

mod conventional;
mod grouped;
mod keepachangelog;

pub use conventional::ConventionalFormatter;
pub use grouped::GroupedFormatter;
pub use keepachangelog::KeepAChangelogFormatter;

use chronicle_core::ChangelogFormat;

use crate::types::ChangelogEntry;

/// Trait for changelog formatters.
///
/// Formatting must be a pure function of the entry: the same entry always
/// yields byte-identical text.
pub trait ChangelogFormatter: Send + Sync {
    /// Format a changelog entry to markdown
    fn format(&self, entry: &ChangelogEntry) -> String;

    /// The schema this formatter produces
    fn kind(&self) -> ChangelogFormat;
}

/// Build the formatter for a schema
pub fn formatter_for(format: ChangelogFormat) -> Box<dyn ChangelogFormatter> {
    match format {
        ChangelogFormat::KeepAChangelog => Box::new(KeepAChangelogFormatter),
        ChangelogFormat::Conventional => Box::new(ConventionalFormatter),
        ChangelogFormat::Grouped => Box::new(GroupedFormatter),
    }
}

/// Normalise trailing whitespace to a single newline
fn finish(mut output: String) -> String {
    let len = output.trim_end().len();
    output.truncate(len);
    output.push('\n');
    output
}
