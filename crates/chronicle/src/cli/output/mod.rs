//! Console output for command results

use std::path::Path;

use console::style;

use chronicle_changelog::{Diagnostic, VersionNode};

/// Print a completed action
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a skipped changelog line on stderr
pub fn diagnostic(diagnostic: &Diagnostic) {
    eprintln!("{} {}", style("!").yellow().bold(), style(diagnostic).yellow());
}

/// Version line of a parse summary
pub fn version_heading(node: &VersionNode) -> String {
    let version = if node.version.is_empty() {
        style("(no version)").dim().to_string()
    } else {
        style(&node.version).green().bold().to_string()
    };
    match &node.date {
        Some(date) => format!("{} {}", version, style(date).dim()),
        None => version,
    }
}

/// Category line of a parse summary
pub fn category_count(title: &str, entries: usize) -> String {
    format!("  {}: {}", style(title).dim(), entries)
}

/// A file path as shown in messages
pub fn path(path: &Path) -> String {
    style(path.display()).cyan().to_string()
}
