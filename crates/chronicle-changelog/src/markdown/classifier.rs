//! Line recognizers for the changelog grammar
//!
//! Each recognizer returns `None` for a line of any other shape.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ChangeEntry;

/// `## <version> (<date>)`
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s(?P<version>[a-zA-Z0-9.+]+)\s?\(?(?P<date>[0-9-]+)?\)?")
        .expect("Invalid regex")
});

/// `### <label>`
static CATEGORY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^###\s(?P<change_type>[a-zA-Z0-9.+\s]+)").expect("Invalid regex")
});

/// `- **<scope>**: <message>!`
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-\s(?:\*{2}(?P<scope>[^*]+)\*{2}:\s)?(?P<message>.+?)(?P<breaking>!)?$")
        .expect("Invalid regex")
});

/// A recognized version header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionHeader<'a> {
    pub version: &'a str,
    pub date: Option<&'a str>,
}

/// A recognized category header; the label keeps its case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryHeader<'a> {
    pub change_type: &'a str,
}

/// Recognize a version header line
pub fn parse_version_header(line: &str) -> Option<VersionHeader<'_>> {
    let caps = VERSION_REGEX.captures(line)?;
    Some(VersionHeader {
        version: caps.name("version")?.as_str(),
        date: caps.name("date").map(|m| m.as_str()),
    })
}

/// The part of a version name a version header keeps: the leading run
/// of alphanumerics, `.` and `+`
pub fn version_token(name: &str) -> &str {
    let end = name
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.' || c == '+'))
        .unwrap_or(name.len());
    &name[..end]
}

/// Recognize a category header line
pub fn parse_category_header(line: &str) -> Option<CategoryHeader<'_>> {
    let caps = CATEGORY_REGEX.captures(line)?;
    let change_type = caps.name("change_type")?.as_str().trim_end();
    if change_type.is_empty() {
        return None;
    }
    Some(CategoryHeader { change_type })
}

/// Recognize a list item line
pub fn parse_entry(line: &str) -> Option<ChangeEntry> {
    let caps = ENTRY_REGEX.captures(line)?;
    Some(ChangeEntry {
        scope: caps.name("scope").map(|m| m.as_str().to_string()),
        message: caps.name("message")?.as_str().to_string(),
        breaking: caps.name("breaking").is_some(),
    })
}
