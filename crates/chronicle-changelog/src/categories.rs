//! Category label normalization

use chronicle_core::config::{default_categories, CategoryRule};
use chronicle_core::error::ChangelogError;

use crate::types::CategoryKey;

/// Maps free-form category labels onto the canonical keys of an ordered
/// table. The table order is also the rendering order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMapper {
    rules: Vec<CategoryRule>,
}

impl CategoryMapper {
    /// Create a mapper over an ordered table
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Map a label to the key of the first rule whose pattern occurs in
    /// it, ignoring case
    pub fn map(&self, label: &str) -> Result<CategoryKey, ChangelogError> {
        let lowered = label.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(&rule.pattern.to_lowercase()))
            .map(|rule| CategoryKey::new(rule.key.as_str()))
            .ok_or_else(|| ChangelogError::UnrecognizedCategory {
                label: label.to_string(),
            })
    }

    /// The table rows, in order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Table position of a canonical key
    pub fn position(&self, key: &CategoryKey) -> Option<usize> {
        self.rules.iter().position(|rule| *key == rule.key.as_str())
    }

    /// Header text for a key: the rule's title if set, else the key in
    /// title case
    pub fn title(&self, key: &CategoryKey) -> String {
        self.rules
            .iter()
            .find(|rule| *key == rule.key.as_str())
            .and_then(|rule| rule.title.clone())
            .unwrap_or_else(|| title_case(key.as_str()))
    }
}

impl Default for CategoryMapper {
    fn default() -> Self {
        Self::new(default_categories())
    }
}

/// `BREAKING CHANGES` -> `Breaking Changes`, `fix` -> `Fix`
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_known_labels() {
        let mapper = CategoryMapper::default();
        assert_eq!(mapper.map("Bug fixes").unwrap(), "fix");
        assert_eq!(mapper.map("Features").unwrap(), "feat");
        assert_eq!(mapper.map("BREAKING CHANGES").unwrap(), "BREAKING CHANGES");
        assert_eq!(mapper.map("BREAKING CHANGE").unwrap(), "BREAKING CHANGES");
        assert_eq!(mapper.map("Performance").unwrap(), "perf");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let mapper = CategoryMapper::default();
        // "fix" precedes "feat" in the table
        assert_eq!(mapper.map("feature fix").unwrap(), "fix");
    }

    #[test]
    fn test_map_unknown_label_fails() {
        let mapper = CategoryMapper::default();
        let err = mapper.map("Bugs").unwrap_err();
        assert!(matches!(
            err,
            ChangelogError::UnrecognizedCategory { ref label } if label == "Bugs"
        ));
        assert!(err.to_string().contains("Could not match a change type"));
    }

    #[test]
    fn test_canonical_keys_map_to_themselves() {
        let mapper = CategoryMapper::default();
        for rule in mapper.rules() {
            let title = mapper.title(&CategoryKey::new(rule.key.as_str()));
            assert_eq!(mapper.map(&title).unwrap(), rule.key.as_str());
        }
    }

    #[test]
    fn test_title() {
        let mapper = CategoryMapper::new(vec![
            CategoryRule::new("fix", "fix").with_title("Bug Fixes"),
            CategoryRule::new("breaking", "BREAKING CHANGES"),
        ]);
        assert_eq!(mapper.title(&"fix".into()), "Bug Fixes");
        assert_eq!(mapper.title(&"BREAKING CHANGES".into()), "Breaking Changes");
        assert_eq!(mapper.title(&"docs".into()), "Docs");
    }

    #[test]
    fn test_position() {
        let mapper = CategoryMapper::default();
        assert_eq!(mapper.position(&"fix".into()), Some(0));
        assert_eq!(mapper.position(&"feat".into()), Some(2));
        assert_eq!(mapper.position(&"docs".into()), None);
    }
}
