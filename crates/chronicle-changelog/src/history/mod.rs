//! Version tree construction from a tagged commit history

mod patterns;

pub use patterns::{CommitPatterns, ParsedLine};

use std::collections::{HashMap, HashSet};

use chronicle_core::config::ChangelogConfig;
use chronicle_core::error::ChangelogError;
use chronicle_git::{GitCommit, GitTag};
use tracing::{debug, info, instrument, trace};

use crate::categories::CategoryMapper;
use crate::types::{CategoryKey, VersionNode, VersionTree};

/// Name of the open bucket when the newest commit is not tagged
pub const UNRELEASED: &str = "Unreleased";

/// Builds a version tree by walking commits newest first and opening a
/// new version whenever a commit carries a tag not seen yet.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    patterns: CommitPatterns,
    mapper: CategoryMapper,
    unreleased_version: Option<String>,
}

impl TreeBuilder {
    /// Create a builder from compiled patterns and a category table
    pub fn new(patterns: CommitPatterns, mapper: CategoryMapper) -> Self {
        Self {
            patterns,
            mapper,
            unreleased_version: None,
        }
    }

    /// Create a builder from configuration
    pub fn from_config(config: &ChangelogConfig) -> Result<Self, ChangelogError> {
        let builder = Self::new(
            CommitPatterns::from_config(config)?,
            CategoryMapper::new(config.categories.clone()),
        );
        Ok(match &config.unreleased_version {
            Some(version) => builder.with_unreleased_version(version),
            None => builder,
        })
    }

    /// Name the open bucket instead of `Unreleased`
    pub fn with_unreleased_version(mut self, version: impl Into<String>) -> Self {
        self.unreleased_version = Some(version.into());
        self
    }

    /// Name used for the untagged head bucket
    pub fn unreleased_name(&self) -> &str {
        self.unreleased_version.as_deref().unwrap_or(UNRELEASED)
    }

    /// Build the tree. `commits` must be newest first.
    ///
    /// Yields one node per newly encountered tag plus the final open
    /// bucket, which is emitted even when empty. Tags bound to no
    /// supplied commit never appear.
    #[instrument(skip_all, fields(commits = commits.len(), tags = tags.len()))]
    pub fn build(&self, commits: &[GitCommit], tags: &[GitTag]) -> VersionTree {
        let tags_by_rev = index_tags(tags);

        let head_tag = commits
            .first()
            .and_then(|commit| tags_by_rev.get(commit.rev.as_str()).copied());

        let mut used: HashSet<&str> = HashSet::new();
        let mut bucket = match head_tag {
            Some(tag) => {
                used.insert(tag.rev.as_str());
                if tag.name.is_empty() {
                    VersionNode::new(self.unreleased_name())
                } else {
                    VersionNode::new(tag.name.as_str()).with_date(tag.date.as_str())
                }
            }
            None => VersionNode::new(self.unreleased_name()),
        };

        let mut tree = Vec::new();
        for commit in commits {
            if let Some(tag) = tags_by_rev.get(commit.rev.as_str()).copied() {
                if used.insert(tag.rev.as_str()) {
                    debug!(tag = %tag.name, rev = %commit.short_rev(), "version boundary");
                    let next = VersionNode::new(tag.name.as_str()).with_date(tag.date.as_str());
                    tree.push(std::mem::replace(&mut bucket, next));
                }
            }

            if !self.patterns.admits(&commit.title) {
                trace!(rev = %commit.short_rev(), title = %commit.title, "commit filtered out");
                continue;
            }

            for text in [commit.title.as_str(), commit.body.as_str()] {
                if let Some(parsed) = self.patterns.parse(text) {
                    let key = self.category(parsed.change_type);
                    bucket.changes.push(key, parsed.entry);
                }
            }
        }
        tree.push(bucket);

        info!(versions = tree.len(), "built version tree from history");
        tree
    }

    /// Canonical key for a captured label, or the label itself when the
    /// table does not know it
    fn category(&self, change_type: &str) -> CategoryKey {
        match self.mapper.map(change_type) {
            Ok(key) => key,
            Err(_) => {
                debug!(change_type, "keeping unmapped commit category");
                CategoryKey::new(change_type)
            }
        }
    }
}

/// Revision to tag lookup; the first tag listed for a revision wins
fn index_tags(tags: &[GitTag]) -> HashMap<&str, &GitTag> {
    let mut index = HashMap::with_capacity(tags.len());
    for tag in tags {
        index.entry(tag.rev.as_str()).or_insert(tag);
    }
    index
}
