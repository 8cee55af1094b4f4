//! Commit filter and parser patterns

use regex::{Captures, Regex};
use std::sync::LazyLock;

use chronicle_core::config::{
    compile_parser_pattern, compile_pattern, ChangelogConfig, DEFAULT_COMMIT_FILTER,
    DEFAULT_COMMIT_PARSER,
};
use chronicle_core::error::ChangelogError;

use crate::types::ChangeEntry;

static DEFAULT_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_COMMIT_FILTER).expect("Invalid regex"));

static DEFAULT_PARSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_COMMIT_PARSER).expect("Invalid regex"));

/// A commit line matched by the parser pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'t> {
    /// Raw `change_type` capture
    pub change_type: &'t str,
    /// Entry built from `scope`, `message` and `breaking`
    pub entry: ChangeEntry,
}

/// Compiled commit filter and parser.
///
/// Both patterns are applied at the start of the text, like a prefix
/// match.
#[derive(Debug, Clone)]
pub struct CommitPatterns {
    filter: Regex,
    parser: Regex,
}

impl CommitPatterns {
    /// Compile both patterns, failing before any commit is processed
    pub fn new(filter: &str, parser: &str) -> Result<Self, ChangelogError> {
        Ok(Self {
            filter: compile_pattern("commit_filter", filter)?,
            parser: compile_parser_pattern("commit_parser", parser)?,
        })
    }

    /// Compile the patterns from configuration
    pub fn from_config(config: &ChangelogConfig) -> Result<Self, ChangelogError> {
        Ok(Self {
            filter: compile_pattern("changelog.commit_filter", &config.commit_filter)?,
            parser: compile_parser_pattern("changelog.commit_parser", &config.commit_parser)?,
        })
    }

    /// Check if a commit subject is admitted by the filter
    pub fn admits(&self, title: &str) -> bool {
        prefix_captures(&self.filter, title).is_some()
    }

    /// Apply the parser to a subject or body
    pub fn parse<'t>(&self, text: &'t str) -> Option<ParsedLine<'t>> {
        let caps = prefix_captures(&self.parser, text)?;
        let change_type = caps.name("change_type")?.as_str();
        let entry = ChangeEntry {
            scope: caps.name("scope").map(|m| m.as_str().to_string()),
            message: caps
                .name("message")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            breaking: caps.name("breaking").is_some(),
        };
        Some(ParsedLine { change_type, entry })
    }
}

impl Default for CommitPatterns {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.clone(),
            parser: DEFAULT_PARSER.clone(),
        }
    }
}

/// Captures of a match that begins at the start of `text`.
///
/// Leftmost-first search returns a match at offset 0 whenever one exists.
fn prefix_captures<'t>(regex: &Regex, text: &'t str) -> Option<Captures<'t>> {
    let caps = regex.captures(text)?;
    (caps.get(0)?.start() == 0).then_some(caps)
}
