//! Reading exported commit and tag records

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use chronicle_core::error::{GitError, Result};

use crate::types::{GitCommit, GitTag};

/// Tag record as written by exporters, which may give either a day or a
/// full timestamp
#[derive(Debug, Deserialize)]
struct TagRecord {
    name: String,
    rev: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

impl From<TagRecord> for GitTag {
    fn from(record: TagRecord) -> Self {
        match (record.date, record.timestamp) {
            (Some(date), _) => GitTag::new(record.name, record.rev, date),
            (None, Some(ts)) => GitTag::with_timestamp(record.name, record.rev, ts),
            (None, None) => GitTag::new(record.name, record.rev, ""),
        }
    }
}

/// Parse a JSON array of commits, newest first
pub fn parse_commits(json: &str) -> serde_json::Result<Vec<GitCommit>> {
    serde_json::from_str(json)
}

/// Parse a JSON array of tags
pub fn parse_tags(json: &str) -> serde_json::Result<Vec<GitTag>> {
    let records: Vec<TagRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(GitTag::from).collect())
}

/// Load commit records from a JSON file
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_commits(path: &Path) -> Result<Vec<GitCommit>> {
    let content = read_records(path)?;
    let commits = parse_commits(&content).map_err(|e| GitError::InvalidRecords {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(count = commits.len(), "loaded commit records");
    Ok(commits)
}

/// Load tag records from a JSON file
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_tags(path: &Path) -> Result<Vec<GitTag>> {
    let content = read_records(path)?;
    let tags = parse_tags(&content).map_err(|e| GitError::InvalidRecords {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(count = tags.len(), "loaded tag records");
    Ok(tags)
}

fn read_records(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GitError::RecordsNotFound(path.to_path_buf()).into());
    }
    let content = std::fs::read_to_string(path)?;
    debug!(bytes = content.len(), "read records file");
    Ok(content)
}
