//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::template::{expand, ChangelogTemplate};
use super::ChangelogFormatter;
use crate::categories::CategoryMapper;
use crate::types::{CategoryKey, ChangeEntry, VersionNode};

/// Markdown changelog formatter.
///
/// Categories come out in category table order; keys the table does not
/// know follow in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    template: ChangelogTemplate,
    mapper: CategoryMapper,
}

impl MarkdownFormatter {
    /// Create a formatter with the built-in template and category table
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom template
    pub fn with_template(mut self, template: ChangelogTemplate) -> Self {
        self.template = template;
        self
    }

    /// Use a custom category table
    pub fn with_categories(mut self, mapper: CategoryMapper) -> Self {
        self.mapper = mapper;
        self
    }

    fn version_header(&self, node: &VersionNode) -> String {
        match &node.date {
            Some(date) => expand(
                &self.template.dated_version_header,
                &[("version", node.version.as_str()), ("date", date.as_str())],
            ),
            None => expand(&self.template.version_header, &[("version", node.version.as_str())]),
        }
    }

    fn entry_line(&self, entry: &ChangeEntry) -> String {
        let breaking = if entry.breaking {
            self.template.breaking_marker.as_str()
        } else {
            ""
        };
        match &entry.scope {
            Some(scope) => expand(
                &self.template.scoped_entry,
                &[
                    ("scope", scope.as_str()),
                    ("message", entry.message.as_str()),
                    ("breaking", breaking),
                ],
            ),
            None => expand(
                &self.template.entry,
                &[("message", entry.message.as_str()), ("breaking", breaking)],
            ),
        }
    }

    /// Non-empty categories of a node in rendering order
    fn ordered_changes<'n>(&self, node: &'n VersionNode) -> Vec<(&'n CategoryKey, &'n [ChangeEntry])> {
        let mut ordered: Vec<_> = node
            .changes
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .collect();
        // Stable sort keeps first-seen order among unknown keys
        ordered.sort_by_key(|(key, _)| self.mapper.position(key).unwrap_or(usize::MAX));
        ordered
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip_all, fields(versions = tree.len()))]
    fn format(&self, tree: &[VersionNode]) -> String {
        let mut blocks: Vec<String> = Vec::new();

        for (index, node) in tree.iter().enumerate() {
            // A leading unversioned node without changes is a document preamble
            let preamble = index == 0 && node.version.is_empty() && node.changes.is_empty();
            if !preamble {
                blocks.push(self.version_header(node));
            }

            for (key, entries) in self.ordered_changes(node) {
                let title = self.mapper.title(key);
                blocks.push(expand(&self.template.category_header, &[("category", title.as_str())]));
                blocks.push(
                    entries
                        .iter()
                        .map(|entry| self.entry_line(entry))
                        .collect::<Vec<_>>()
                        .join("\n"),
                );
            }
        }

        if blocks.is_empty() {
            return String::new();
        }

        let mut output = blocks.join("\n\n");
        output.push('\n');
        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}
