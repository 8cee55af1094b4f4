//! Chronicle Core - Core library for changelog management
//!
//! This crate provides the foundational error types and configuration
//! shared by the Chronicle crates.

pub mod config;
pub mod error;

pub use config::{CategoryRule, ChangelogConfig, Config};
pub use error::{ChangelogError, ChronicleError, ConfigError, GitError, Result};
