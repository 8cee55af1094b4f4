//! Markdown changelog parsing
//!
//! A document is split into version blocks, then each block is compiled
//! into a [`VersionNode`](crate::types::VersionNode) by classifying its
//! lines.

mod blocks;
pub mod classifier;
mod compiler;

pub use blocks::{split_blocks, VersionBlocks};
pub use compiler::BlockCompiler;

use std::path::Path;

use chronicle_core::error::ChangelogError;
use tracing::{debug, instrument};

/// Read a changelog document from disk
#[instrument(skip(path), fields(path = %path.display()))]
pub fn read_changelog(path: &Path) -> Result<String, ChangelogError> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    debug!(bytes = content.len(), "read changelog document");
    Ok(content)
}
