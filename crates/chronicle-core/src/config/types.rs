//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_CHANGELOG_FILE, DEFAULT_COMMIT_FILTER, DEFAULT_COMMIT_PARSER};

/// Main configuration for Chronicle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Custom rendering template (TOML)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Pattern a commit subject must match to be considered at all
    pub commit_filter: String,

    /// Pattern with named groups `change_type`, `message` and optionally
    /// `scope` and `breaking`
    pub commit_parser: String,

    /// Ordered category table; also the rendering order
    pub categories: Vec<CategoryRule>,

    /// Only regenerate versions newer than the latest one in the file
    pub incremental: bool,

    /// Name given to the open bucket when the newest commit is untagged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreleased_version: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            template: None,
            commit_filter: DEFAULT_COMMIT_FILTER.to_string(),
            commit_parser: DEFAULT_COMMIT_PARSER.to_string(),
            categories: default_categories(),
            incremental: false,
            unreleased_version: None,
        }
    }
}

/// One row of the category table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Case-insensitive substring tested against a raw label
    pub pattern: String,

    /// Canonical category key
    pub key: String,

    /// Header text used when rendering (defaults to the title-cased key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CategoryRule {
    /// Create a new rule
    pub fn new(pattern: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            key: key.into(),
            title: None,
        }
    }

    /// Set the rendered header title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// The built-in category table
pub fn default_categories() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new("fix", "fix"),
        CategoryRule::new("breaking", "BREAKING CHANGES"),
        CategoryRule::new("feat", "feat"),
        CategoryRule::new("refactor", "refactor"),
        CategoryRule::new("perf", "perf"),
        CategoryRule::new("test", "test"),
        CategoryRule::new("build", "build"),
        CategoryRule::new("ci", "ci"),
        CategoryRule::new("chore", "chore"),
    ]
}
