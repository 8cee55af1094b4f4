//! Block-to-tree compilation

use chronicle_core::error::ChangelogError;
use tracing::{debug, instrument, warn};

use crate::categories::CategoryMapper;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Parsed};
use crate::types::{CategoryKey, VersionNode, VersionTree};

use super::blocks::split_blocks;
use super::classifier::{parse_category_header, parse_entry, parse_version_header};

/// Compiles version blocks into version nodes.
///
/// Category headers are lower-cased and mapped through the category
/// table; a label the table does not know is a hard error.
#[derive(Debug, Clone, Default)]
pub struct BlockCompiler {
    mapper: CategoryMapper,
}

impl BlockCompiler {
    /// Create a compiler over a category table
    pub fn new(mapper: CategoryMapper) -> Self {
        Self { mapper }
    }

    /// Compile one block
    pub fn compile_block(&self, block: &[&str]) -> Result<Parsed<VersionNode>, ChangelogError> {
        let mut node = VersionNode::default();
        let mut diagnostics = Vec::new();
        let mut current: Option<CategoryKey> = None;

        for &line in block {
            if let Some(header) = parse_version_header(line) {
                current = None;
                node.version = header.version.to_string();
                node.date = header.date.map(str::to_string);
                continue;
            }

            if line.starts_with("### ") {
                match parse_category_header(line) {
                    Some(header) => {
                        let label = header.change_type.to_lowercase();
                        current = Some(self.mapper.map(&label)?);
                    }
                    None => {
                        warn!(line, "ignoring malformed category header");
                        diagnostics.push(Diagnostic::new(
                            DiagnosticKind::MalformedCategoryHeader,
                            line,
                        ));
                    }
                }
                continue;
            }

            if let Some(entry) = parse_entry(line) {
                match &current {
                    Some(key) => node.changes.push(key.clone(), entry),
                    // Entries before any category header are dropped
                    None => {
                        warn!(line, version = %node.version, "dropping entry outside any category");
                        diagnostics.push(Diagnostic::new(
                            DiagnosticKind::EntryOutsideCategory,
                            line,
                        ));
                    }
                }
                continue;
            }

            warn!(line, "skipping unrecognized changelog line");
            diagnostics.push(Diagnostic::new(DiagnosticKind::UnrecognizedLine, line));
        }

        debug!(
            version = %node.version,
            categories = node.changes.len(),
            entries = node.changes.entry_count(),
            skipped = diagnostics.len(),
            "compiled version block"
        );
        Ok(Parsed::new(node, diagnostics))
    }

    /// Split and compile a whole document, in document order
    #[instrument(skip_all, fields(bytes = document.len()))]
    pub fn compile_document(&self, document: &str) -> Result<Parsed<VersionTree>, ChangelogError> {
        let mut tree = Vec::new();
        let mut diagnostics = Vec::new();

        for block in split_blocks(document) {
            let parsed = self.compile_block(&block)?;
            tree.push(parsed.value);
            diagnostics.extend(parsed.diagnostics);
        }

        debug!(versions = tree.len(), skipped = diagnostics.len(), "compiled changelog");
        Ok(Parsed::new(tree, diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeEntry;

    const CHANGELOG: &str = "
## 1.0.0 (2019-07-12)

### Fix

- issue in poetry add preventing the installation in py36
- **users**: lorem ipsum apap

### Feat

- it is possible to specify a pattern to be matched in configuration files bump.

## 0.9 (2019-07-11)

### Fix

- holis

";

    #[test]
    fn test_compile_first_block() {
        let compiler = BlockCompiler::default();
        let block = split_blocks(CHANGELOG).next().unwrap();
        let parsed = compiler.compile_block(&block).unwrap();
        assert!(parsed.is_clean());

        let node = parsed.value;
        assert_eq!(node.version, "1.0.0");
        assert_eq!(node.date.as_deref(), Some("2019-07-12"));

        let keys: Vec<_> = node.changes.keys().map(CategoryKey::as_str).collect();
        assert_eq!(keys, vec!["fix", "feat"]);
        assert_eq!(
            node.changes.get("fix").unwrap(),
            &[
                ChangeEntry::new("issue in poetry add preventing the installation in py36"),
                ChangeEntry::new("lorem ipsum apap").with_scope("users"),
            ]
        );
        assert_eq!(
            node.changes.get("feat").unwrap(),
            &[ChangeEntry::new(
                "it is possible to specify a pattern to be matched in configuration files bump."
            )]
        );
    }

    #[test]
    fn test_compile_document() {
        let compiler = BlockCompiler::default();
        let tree = compiler.compile_document(CHANGELOG).unwrap().value;
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[1].version, "0.9");
        assert_eq!(tree[1].date.as_deref(), Some("2019-07-11"));
        assert_eq!(tree[1].changes.get("fix").unwrap(), &[ChangeEntry::new("holis")]);
    }

    #[test]
    fn test_labels_are_canonicalized() {
        let compiler = BlockCompiler::default();
        let node = compiler
            .compile_block(&["## 2.0.0", "### Bug fixes", "- a", "### BREAKING CHANGES", "- b"])
            .unwrap()
            .value;
        let keys: Vec<_> = node.changes.keys().map(CategoryKey::as_str).collect();
        assert_eq!(keys, vec!["fix", "BREAKING CHANGES"]);
    }

    #[test]
    fn test_unknown_category_is_hard_error() {
        let compiler = BlockCompiler::default();
        let result = compiler.compile_block(&["## 1.0.0", "### Bugs", "- a"]);
        assert!(matches!(
            result,
            Err(ChangelogError::UnrecognizedCategory { ref label }) if label == "bugs"
        ));
    }

    #[test]
    fn test_entries_before_category_are_dropped() {
        let compiler = BlockCompiler::default();
        let parsed = compiler
            .compile_block(&["## 1.0.0", "- orphan", "### Fix", "- kept"])
            .unwrap();
        assert_eq!(parsed.value.changes.entry_count(), 1);
        assert_eq!(parsed.value.changes.get("fix").unwrap(), &[ChangeEntry::new("kept")]);
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::new(DiagnosticKind::EntryOutsideCategory, "- orphan")]
        );
    }

    #[test]
    fn test_version_header_resets_category() {
        let compiler = BlockCompiler::default();
        let parsed = compiler
            .compile_block(&["### Fix", "## 1.0.0", "- orphan"])
            .unwrap();
        assert!(parsed.value.changes.is_empty());
        assert_eq!(parsed.value.version, "1.0.0");
        assert_eq!(parsed.diagnostics.len(), 1);
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        let compiler = BlockCompiler::default();
        let parsed = compiler
            .compile_block(&["## 1.0.0", "### Fix", "some prose", "- a", "### ⚠ Oops", "- b"])
            .unwrap();
        assert_eq!(
            parsed.value.changes.get("fix").unwrap(),
            &[ChangeEntry::new("a"), ChangeEntry::new("b")]
        );
        let kinds: Vec<_> = parsed.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::UnrecognizedLine,
                DiagnosticKind::MalformedCategoryHeader
            ]
        );
    }

    #[test]
    fn test_leading_block_has_no_version() {
        let compiler = BlockCompiler::default();
        let parsed = compiler
            .compile_document("# Changelog\n\n## 0.1.0\n\n### Fix\n\n- a\n")
            .unwrap();
        assert_eq!(parsed.value.len(), 2);
        assert_eq!(parsed.value[0].version, "");
        assert_eq!(parsed.value[1].version, "0.1.0");
        assert_eq!(parsed.diagnostics.len(), 1);
    }
}
