//! Changelog formatters

mod markdown;
mod template;

pub use markdown::MarkdownFormatter;
pub use template::{expand, ChangelogTemplate};

use crate::types::VersionNode;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a version tree, newest first. Must not depend on anything
    /// but the tree.
    fn format(&self, tree: &[VersionNode]) -> String;
}
