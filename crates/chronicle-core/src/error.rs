//! Error types for Chronicle

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChronicleError
pub type Result<T> = std::result::Result<T, ChronicleError>;

/// Main error type for Chronicle operations
#[derive(Debug, Error)]
pub enum ChronicleError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Commit and tag record errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading commit and tag records
#[derive(Debug, Error)]
pub enum GitError {
    /// Records file not found
    #[error("Records file not found at {0}")]
    RecordsNotFound(PathBuf),

    /// Records file could not be decoded
    #[error("Malformed records in {path}: {reason}")]
    InvalidRecords { path: PathBuf, reason: String },
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A category label matched no entry of the category table
    #[error("Could not match a change type with '{label}'")]
    UnrecognizedCategory { label: String },

    /// A commit filter or parser pattern failed to compile
    #[error("Invalid pattern in {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The commit parser pattern lacks a required named group
    #[error("Pattern in {field} is missing the named group '{group}'")]
    MissingCaptureGroup { field: String, group: String },

    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// Template file not found
    #[error("Changelog template not found at {0}")]
    TemplateNotFound(PathBuf),

    /// Template file could not be decoded
    #[error("Failed to parse changelog template {path}: {reason}")]
    TemplateParse { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
