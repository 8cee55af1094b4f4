//! Default configuration values

use super::types::Config;
use crate::error::ConfigError;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "chronicle.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "chronicle.yaml";

/// Default changelog document
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Commits whose subject does not match this are ignored
pub const DEFAULT_COMMIT_FILTER: &str = r"^(BREAKING CHANGE|feat|fix|refactor|perf)";

/// Conventional commit grammar
pub const DEFAULT_COMMIT_PARSER: &str = r"^(?P<change_type>feat|fix|refactor|perf|BREAKING CHANGE)(?:\((?P<scope>[^()\r\n]*)\)|\()?(?P<breaking>!)?:\s(?P<message>.*)?";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".chronicle.toml",
        ".chronicle.yaml",
    ]
}

/// Generate the default configuration as TOML
pub fn default_config_toml() -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(&Config::default())?;
    Ok(format!("{}{}", DEFAULT_CONFIG_HEADER, body))
}

const DEFAULT_CONFIG_HEADER: &str = "# Chronicle configuration
#
# commit_filter: a commit subject must match this to be considered
# commit_parser: named groups change_type, scope, breaking, message
# categories:    ordered (pattern, key) table, also the rendering order

";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_toml_round_trips() {
        let text = default_config_toml().unwrap();
        assert!(text.starts_with("# Chronicle configuration"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.changelog.commit_parser, DEFAULT_COMMIT_PARSER);
        assert_eq!(parsed.changelog.categories.len(), 9);
    }

    #[test]
    fn test_serialize_failure_is_a_config_error() {
        // A bare integer is not a TOML document
        let err: ConfigError = toml::to_string(&1u8).unwrap_err().into();
        assert!(matches!(err, ConfigError::TomlSerialize(_)));
    }
}
