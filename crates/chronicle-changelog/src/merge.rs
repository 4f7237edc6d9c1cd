//! Splicing new entries into an existing changelog document

use std::path::Path;

use chronicle_core::error::{ChangelogError, Result};
use tracing::{debug, info, instrument};

/// Heading synthesised when a merge target does not exist yet
pub const DEFAULT_HEADING: &str = "# Changelog";

/// Byte offset just past the first top-level heading line, if any
fn heading_end(existing: &str) -> Option<usize> {
    let mut offset = 0;
    for line in existing.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        if text.strip_prefix("# ").is_some_and(|title| !title.trim().is_empty()) {
            return Some(offset + line.len());
        }
        offset += line.len();
    }
    None
}

/// Combine new content with an existing document.
///
/// `existing` of `None` (or blank) yields a fresh document under
/// [`DEFAULT_HEADING`]. Otherwise the new content is inserted right after
/// the first `# ` heading with one blank line on each side, and everything
/// from the first non-blank line after the heading is kept byte-for-byte.
/// Returns `None` when a non-blank document has no heading to splice under.
pub fn splice(existing: Option<&str>, new_content: &str) -> Option<String> {
    let body = new_content.trim_end();

    let existing = match existing {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Some(format!("{}\n\n{}\n", DEFAULT_HEADING, body)),
    };

    let end = heading_end(existing)?;
    let (head, rest) = existing.split_at(end);
    let rest = rest.trim_start_matches(['\n', '\r']);

    let mut output = String::with_capacity(existing.len() + body.len() + 4);
    output.push_str(head);
    if !head.ends_with('\n') {
        output.push('\n');
    }
    output.push('\n');
    output.push_str(body);
    output.push('\n');
    if !rest.is_empty() {
        output.push('\n');
        output.push_str(rest);
    }

    Some(output)
}

/// Write changelog content to `path`, splicing into the existing file when
/// `prepend` is set.
///
/// The complete new file content is computed before anything is written, so
/// a failed merge leaves the destination untouched.
#[instrument(skip(content), fields(path = %path.display()))]
pub fn write_changelog(path: &Path, content: &str, prepend: bool) -> Result<()> {
    info!(path = %path.display(), prepend, "writing changelog");

    let output = if prepend {
        let existing = read_changelog(path)?;
        splice(existing.as_deref(), content)
            .ok_or_else(|| ChangelogError::MergeTargetMissingHeading(path.to_path_buf()))?
    } else {
        content.to_string()
    };

    std::fs::write(path, output).map_err(ChangelogError::Io)?;
    Ok(())
}

/// Read existing changelog content
pub fn read_changelog(path: &Path) -> Result<Option<String>> {
    if path.exists() {
        debug!(path = %path.display(), "reading existing changelog");
        Ok(Some(
            std::fs::read_to_string(path).map_err(ChangelogError::Io)?,
        ))
    } else {
        debug!(path = %path.display(), "no existing changelog found");
        Ok(None)
    }
}
