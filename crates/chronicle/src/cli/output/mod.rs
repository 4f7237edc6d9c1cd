//! Output formatting utilities
//!
//! Status lines go to stderr so stdout carries only the changelog itself.

use console::style;

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Create a styled path
pub fn path(path: &std::path::Path) -> String {
    style(path.display()).cyan().to_string()
}
