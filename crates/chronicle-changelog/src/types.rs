//! Changelog tree types

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Canonical category key (`fix`, `feat`, `BREAKING CHANGES`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Create a key from any string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CategoryKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl PartialEq<str> for CategoryKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CategoryKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One change line, from a markdown list item or a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEntry {
    /// Scope, `None` when the source had none
    pub scope: Option<String>,
    /// Change description
    pub message: String,
    /// Breaking change marker; serialized as `"!"` or `null`
    #[serde(serialize_with = "serialize_marker")]
    pub breaking: bool,
}

fn serialize_marker<S: Serializer>(breaking: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    breaking.then_some("!").serialize(serializer)
}

impl ChangeEntry {
    /// Create an unscoped, non-breaking entry
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            scope: None,
            message: message.into(),
            breaking: false,
        }
    }

    /// Set the scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Mark as breaking
    pub fn breaking(mut self) -> Self {
        self.breaking = true;
        self
    }
}

/// Entries grouped by category, in first-seen category order.
///
/// A bucket only exists once an entry has been pushed into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    buckets: Vec<(CategoryKey, Vec<ChangeEntry>)>,
}

impl Changes {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under `key`, creating the bucket on first use
    pub fn push(&mut self, key: CategoryKey, entry: ChangeEntry) {
        match self.buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, entries)) => entries.push(entry),
            None => self.buckets.push((key, vec![entry])),
        }
    }

    /// Entries for a category
    pub fn get(&self, key: &str) -> Option<&[ChangeEntry]> {
        self.buckets
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Iterate buckets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, &[ChangeEntry])> {
        self.buckets
            .iter()
            .map(|(key, entries)| (key, entries.as_slice()))
    }

    /// Category keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.buckets.iter().map(|(key, _)| key)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if there are no categories
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of entries across categories
    pub fn entry_count(&self) -> usize {
        self.buckets.iter().map(|(_, entries)| entries.len()).sum()
    }
}

impl Serialize for Changes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (key, entries) in &self.buckets {
            map.serialize_entry(key, entries)?;
        }
        map.end()
    }
}

/// One released (or open) version with its categorized changes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionNode {
    /// Version or tag name; empty for content found before any header
    pub version: String,
    /// Release date
    pub date: Option<String>,
    /// Categorized changes
    pub changes: Changes,
}

impl VersionNode {
    /// Create a node with no date and no changes
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: None,
            changes: Changes::new(),
        }
    }

    /// Set the date; an empty string leaves it unset
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.date = (!date.is_empty()).then_some(date);
        self
    }

    /// Check if the node carries no changes
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Version nodes, newest first
pub type VersionTree = Vec<VersionNode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_keep_first_seen_order() {
        let mut changes = Changes::new();
        changes.push("refactor".into(), ChangeEntry::new("a"));
        changes.push("fix".into(), ChangeEntry::new("b"));
        changes.push("refactor".into(), ChangeEntry::new("c"));

        let keys: Vec<_> = changes.keys().map(CategoryKey::as_str).collect();
        assert_eq!(keys, vec!["refactor", "fix"]);
        assert_eq!(changes.get("refactor").unwrap().len(), 2);
        assert_eq!(changes.get("refactor").unwrap()[1].message, "c");
        assert_eq!(changes.entry_count(), 3);
        assert!(changes.get("feat").is_none());
    }

    #[test]
    fn test_scope_absent_is_not_empty_string() {
        let bare = ChangeEntry::new("x");
        let empty = ChangeEntry::new("x").with_scope("");
        assert_ne!(bare, empty);
        assert_eq!(empty.scope.as_deref(), Some(""));
    }

    #[test]
    fn test_with_date_ignores_empty() {
        assert_eq!(VersionNode::new("Unreleased").with_date("").date, None);
        assert_eq!(
            VersionNode::new("v1.0.0").with_date("2019-03-01").date.as_deref(),
            Some("2019-03-01")
        );
    }

    #[test]
    fn test_serialize_preserves_category_order() {
        let mut node = VersionNode::new("1.0.0").with_date("2019-07-12");
        node.changes.push("fix".into(), ChangeEntry::new("issue A"));
        node.changes.push("feat".into(), ChangeEntry::new("issue B"));

        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"version":"1.0.0","date":"2019-07-12","changes":{"fix":[{"scope":null,"message":"issue A","breaking":null}],"feat":[{"scope":null,"message":"issue B","breaking":null}]}}"#
        );
    }

    #[test]
    fn test_serialize_breaking_marker() {
        let entry = ChangeEntry::new("API is stable").with_scope("api").breaking();
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"scope":"api","message":"API is stable","breaking":"!"}"#
        );
    }
}
