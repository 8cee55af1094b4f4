//! Git record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as exported by the git-log collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitCommit {
    /// Commit revision (full hash)
    pub rev: String,
    /// Commit subject (first line)
    pub title: String,
    /// Commit body, empty when absent
    #[serde(default)]
    pub body: String,
}

impl GitCommit {
    /// Create a new commit record
    pub fn new(rev: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            rev: rev.into(),
            title: title.into(),
            body: String::new(),
        }
    }

    /// Set the commit body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Short revision (first 7 characters)
    pub fn short_rev(&self) -> &str {
        let end = self
            .rev
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.rev.len());
        &self.rev[..end]
    }
}

/// A tag bound to a revision.
///
/// Tags are matched against commits by revision only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitTag {
    /// Tag name
    pub name: String,
    /// Revision the tag points to
    pub rev: String,
    /// Tag date (usually `YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,
}

impl GitTag {
    /// Create a new tag record
    pub fn new(name: impl Into<String>, rev: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rev: rev.into(),
            date: date.into(),
        }
    }

    /// Create a tag record from a timestamp, keeping only the day
    pub fn with_timestamp(
        name: impl Into<String>,
        rev: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(name, rev, timestamp.format("%Y-%m-%d").to_string())
    }
}

/// Normalize a tag name or changelog heading for version comparison.
///
/// `v1.2.0`, `pkg@1.2.0` and `pkg-v1.2.0` all normalize to `1.2.0`;
/// anything that does not look like a version is returned unchanged.
pub fn normalize_version(name: &str) -> String {
    extract_version(name).unwrap_or_else(|| name.to_string())
}

/// Extract version from a tag name
fn extract_version(tag: &str) -> Option<String> {
    let tag = tag.strip_prefix('v').unwrap_or(tag);

    if let Some(pos) = tag.rfind('@') {
        let version_part = &tag[pos + 1..];
        let version = version_part.strip_prefix('v').unwrap_or(version_part);
        if looks_like_version(version) {
            return Some(version.to_string());
        }
    }

    if let Some(pos) = tag.rfind("-v") {
        let version = &tag[pos + 2..];
        if looks_like_version(version) {
            return Some(version.to_string());
        }
    }

    if looks_like_version(tag) {
        return Some(tag.to_string());
    }

    None
}

/// Dotted, with a numeric leading component
fn looks_like_version(s: &str) -> bool {
    let mut parts = s.split('.');
    let first = parts.next().unwrap_or_default();
    parts.next().is_some() && first.parse::<u64>().is_ok()
}
