//! Changelog generation

use std::path::Path;

use chronicle_core::config::{validate_changelog, ChangelogConfig};
use chronicle_core::error::Result;
use chronicle_git::{GitCommit, GitTag};
use tracing::{debug, info, instrument};

use crate::categories::CategoryMapper;
use crate::diagnostics::Parsed;
use crate::formatter::{ChangelogFormatter, ChangelogTemplate, MarkdownFormatter};
use crate::history::TreeBuilder;
use crate::incremental::{latest_version, merge_trees};
use crate::markdown::{read_changelog, BlockCompiler};
use crate::types::{VersionNode, VersionTree};

/// Changelog generator tying the markdown parser, the history builder and
/// the formatter to one configuration
pub struct ChangelogGenerator {
    compiler: BlockCompiler,
    builder: TreeBuilder,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a generator, validating the configuration and loading the
    /// configured template
    pub fn new(config: ChangelogConfig) -> Result<Self> {
        validate_changelog(&config)?;

        let mapper = CategoryMapper::new(config.categories.clone());
        let template = match &config.template {
            Some(path) => ChangelogTemplate::load(path)?,
            None => ChangelogTemplate::default(),
        };

        Ok(Self {
            compiler: BlockCompiler::new(mapper.clone()),
            builder: TreeBuilder::from_config(&config)?,
            formatter: Box::new(
                MarkdownFormatter::new()
                    .with_template(template)
                    .with_categories(mapper),
            ),
        })
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Parse a changelog document
    pub fn parse(&self, document: &str) -> Result<Parsed<VersionTree>> {
        Ok(self.compiler.compile_document(document)?)
    }

    /// Read and parse a changelog file
    pub fn parse_file(&self, path: &Path) -> Result<Parsed<VersionTree>> {
        let document = read_changelog(path)?;
        self.parse(&document)
    }

    /// Build the tree for a commit history, newest commit first
    pub fn from_history(&self, commits: &[GitCommit], tags: &[GitTag]) -> VersionTree {
        self.builder.build(commits, tags)
    }

    /// Build the tree for a history and splice it onto an existing tree
    #[instrument(skip_all, fields(commits = commits.len(), existing = existing.len()))]
    pub fn incremental(
        &self,
        commits: &[GitCommit],
        tags: &[GitTag],
        existing: VersionTree,
    ) -> VersionTree {
        let unreleased = self.builder.unreleased_name();
        if let Some(latest) = latest_version(&existing, unreleased) {
            info!(latest, "regenerating changelog after latest released version");
        }
        let fresh = self.builder.build(commits, tags);
        merge_trees(fresh, existing, unreleased)
    }

    /// Render a tree
    pub fn render(&self, tree: &[VersionNode]) -> String {
        let output = self.formatter.format(tree);
        debug!(output_len = output.len(), "changelog rendered");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::error::{ChangelogError, ChronicleError};
    use tempfile::TempDir;

    #[test]
    fn test_generate_from_history() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default()).unwrap();
        let commits = vec![
            GitCommit::new("c2", "feat: add new feature"),
            GitCommit::new("c1", "fix: fix bug"),
        ];
        let tags = vec![GitTag::new("v0.1.0", "c1", "2020-01-01")];

        let tree = generator.from_history(&commits, &tags);
        let output = generator.render(&tree);
        assert_eq!(
            output,
            "## Unreleased\n\n### Feat\n\n- add new feature\n\n## v0.1.0 (2020-01-01)\n\n### Fix\n\n- fix bug\n"
        );
    }

    #[test]
    fn test_invalid_config_is_rejected_up_front() {
        let config = ChangelogConfig {
            commit_parser: "(".to_string(),
            ..Default::default()
        };
        let result = ChangelogGenerator::new(config);
        assert!(matches!(
            result,
            Err(ChronicleError::Changelog(ChangelogError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = ChangelogConfig {
            template: Some(temp.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(matches!(
            ChangelogGenerator::new(config),
            Err(ChronicleError::Changelog(ChangelogError::TemplateNotFound(_)))
        ));
    }

    #[test]
    fn test_parse_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "## 0.9 (2019-07-11)\n\n### Fix\n\n- holis\n").unwrap();

        let generator = ChangelogGenerator::new(ChangelogConfig::default()).unwrap();
        let parsed = generator.parse_file(&path).unwrap();
        assert!(parsed.is_clean());
        assert_eq!(parsed.value[0].version, "0.9");
    }

    #[test]
    fn test_incremental_keeps_existing_sections() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default()).unwrap();
        let existing = generator
            .parse("## v0.1.0 (2020-01-01)\n\n### Fix\n\n- hand written note\n")
            .unwrap()
            .value;
        let commits = vec![
            GitCommit::new("c2", "feat: add new feature"),
            GitCommit::new("c1", "fix: fix bug"),
        ];
        let tags = vec![GitTag::new("v0.1.0", "c1", "2020-01-01")];

        let tree = generator.incremental(&commits, &tags, existing);
        assert_eq!(
            generator.render(&tree),
            "## Unreleased\n\n### Feat\n\n- add new feature\n\n## v0.1.0 (2020-01-01)\n\n### Fix\n\n- hand written note\n"
        );
    }

    struct CountingFormatter;

    impl ChangelogFormatter for CountingFormatter {
        fn format(&self, tree: &[VersionNode]) -> String {
            format!("{} versions", tree.len())
        }
    }

    #[test]
    fn test_custom_formatter() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default())
            .unwrap()
            .with_formatter(CountingFormatter);
        let tree = generator.from_history(&[], &[]);
        assert_eq!(generator.render(&tree), "1 versions");
    }
}
