//! Chronicle Changelog - Changelog parsing and generation
//!
//! Two sources feed one tree shape: an existing markdown changelog
//! (split into version blocks, then compiled) and a tagged commit history
//! (walked by the [`TreeBuilder`]). The [`MarkdownFormatter`] renders the
//! tree back to markdown.

pub mod categories;
pub mod diagnostics;
pub mod formatter;
pub mod generator;
pub mod history;
pub mod incremental;
pub mod markdown;
pub mod types;

pub use categories::CategoryMapper;
pub use diagnostics::{Diagnostic, DiagnosticKind, Parsed};
pub use formatter::{ChangelogFormatter, ChangelogTemplate, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use history::{CommitPatterns, TreeBuilder, UNRELEASED};
pub use incremental::merge_trees;
pub use markdown::{read_changelog, split_blocks, BlockCompiler, VersionBlocks};
pub use types::{CategoryKey, ChangeEntry, Changes, VersionNode, VersionTree};
