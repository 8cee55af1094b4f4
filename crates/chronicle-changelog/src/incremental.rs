//! Incremental regeneration: splice fresh history onto an existing tree

use chronicle_git::normalize_version;
use tracing::{debug, info, warn};

use crate::markdown::classifier::version_token;
use crate::types::{VersionNode, VersionTree};

/// Merge a tree built from history with the tree parsed from an existing
/// changelog.
///
/// The newest released version of `existing` (the first node with a
/// version other than `unreleased`) is the anchor. Fresh nodes are kept
/// until one names the anchor; the existing tree follows from the anchor
/// on. Names are compared the way a version header reads them back, so
/// `v1.0.0-rc.1` matches a parsed `v1.0.0`, and `v1.2.0` matches `1.2.0`.
/// Without an anchor, or when the history never reaches it, the fresh tree
/// is returned as is.
pub fn merge_trees(fresh: VersionTree, existing: VersionTree, unreleased: &str) -> VersionTree {
    let Some(anchor) = existing
        .iter()
        .position(|node| !node.version.is_empty() && node.version != unreleased)
    else {
        debug!("existing changelog has no released version, using fresh tree");
        return fresh;
    };

    let anchor_version = comparable_version(&existing[anchor].version);
    let Some(fresh_count) = fresh
        .iter()
        .position(|node| comparable_version(&node.version) == anchor_version)
    else {
        warn!(anchor = %anchor_version, "history does not reach the existing changelog, using fresh tree");
        return fresh;
    };

    let mut merged = fresh;
    merged.truncate(fresh_count);
    merged.extend(existing.into_iter().skip(anchor));
    info!(
        anchor = %anchor_version,
        fresh = fresh_count,
        total = merged.len(),
        "merged changelog trees"
    );
    merged
}

fn comparable_version(name: &str) -> String {
    normalize_version(version_token(name))
}

/// The newest released version in a tree, if any
pub fn latest_version<'a>(tree: &'a [VersionNode], unreleased: &str) -> Option<&'a str> {
    tree.iter()
        .map(|node| node.version.as_str())
        .find(|version| !version.is_empty() && *version != unreleased)
}
