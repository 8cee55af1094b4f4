//! Chronicle Git - Commit and tag records for changelog generation
//!
//! Chronicle never runs git itself. An external collaborator exports the
//! history as records; this crate defines those records and reads them.

mod records;
pub mod types;

pub use records::{load_commits, load_tags, parse_commits, parse_tags};
pub use types::{normalize_version, GitCommit, GitTag};
