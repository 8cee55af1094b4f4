//! Configuration validation

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::error::{ChangelogError, ConfigError, Result};

use super::types::{ChangelogConfig, Config};

/// Named groups the commit parser must define
pub const REQUIRED_PARSER_GROUPS: [&str; 2] = ["change_type", "message"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(&config.changelog)?;
    debug!("configuration validation passed");
    Ok(())
}

/// Validate the changelog section on its own
pub fn validate_changelog(changelog: &ChangelogConfig) -> Result<()> {
    compile_pattern("changelog.commit_filter", &changelog.commit_filter)?;
    compile_parser_pattern("changelog.commit_parser", &changelog.commit_parser)?;
    validate_categories(changelog)?;
    Ok(())
}

/// Compile a configured pattern, naming the field on failure
pub fn compile_pattern(field: &str, pattern: &str) -> std::result::Result<Regex, ChangelogError> {
    Regex::new(pattern).map_err(|source| ChangelogError::InvalidPattern {
        field: field.to_string(),
        source,
    })
}

/// Compile a commit parser pattern and check its named groups
pub fn compile_parser_pattern(
    field: &str,
    pattern: &str,
) -> std::result::Result<Regex, ChangelogError> {
    let regex = compile_pattern(field, pattern)?;
    let names: HashSet<&str> = regex.capture_names().flatten().collect();
    for group in REQUIRED_PARSER_GROUPS {
        if !names.contains(group) {
            return Err(ChangelogError::MissingCaptureGroup {
                field: field.to_string(),
                group: group.to_string(),
            });
        }
    }
    Ok(regex)
}

fn validate_categories(changelog: &ChangelogConfig) -> Result<()> {
    if changelog.categories.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.categories".to_string(),
            message: "category table cannot be empty".to_string(),
        }
        .into());
    }

    let mut seen = HashSet::new();
    for (i, rule) in changelog.categories.iter().enumerate() {
        if rule.pattern.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.categories[{}].pattern", i),
                message: "pattern cannot be empty".to_string(),
            }
            .into());
        }
        if rule.key.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.categories[{}].key", i),
                message: "key cannot be empty".to_string(),
            }
            .into());
        }
        if !seen.insert(rule.key.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.categories[{}].key", i),
                message: format!("duplicate category key '{}'", rule.key),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryRule;
    use crate::error::ChronicleError;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_filter_pattern() {
        let mut config = Config::default();
        config.changelog.commit_filter = "(unclosed".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ChronicleError::Changelog(ChangelogError::InvalidPattern { ref field, .. })
                if field == "changelog.commit_filter"
        ));
    }

    #[test]
    fn test_parser_missing_message_group() {
        let mut config = Config::default();
        config.changelog.commit_parser = r"^(?P<change_type>feat|fix): .*".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ChronicleError::Changelog(ChangelogError::MissingCaptureGroup { ref group, .. })
                if group == "message"
        ));
    }

    #[test]
    fn test_empty_category_table() {
        let mut config = Config::default();
        config.changelog.categories.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_duplicate_category_key() {
        let mut config = Config::default();
        config
            .changelog
            .categories
            .push(CategoryRule::new("bug", "fix"));
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("duplicate category key 'fix'"));
    }
}
