//! Line templates used by the markdown formatter

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use chronicle_core::error::ChangelogError;

/// Line templates with `{{name}}` placeholders.
///
/// The defaults mirror the grammar the markdown parser reads, so a
/// canonical changelog survives parse and render unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogTemplate {
    /// Version header without a date; `{{version}}`
    pub version_header: String,
    /// Version header with a date; `{{version}}`, `{{date}}`
    pub dated_version_header: String,
    /// Category header; `{{category}}`
    pub category_header: String,
    /// Unscoped entry; `{{message}}`, `{{breaking}}`
    pub entry: String,
    /// Scoped entry; `{{scope}}`, `{{message}}`, `{{breaking}}`
    pub scoped_entry: String,
    /// Substituted for `{{breaking}}` on breaking entries
    pub breaking_marker: String,
}

impl Default for ChangelogTemplate {
    fn default() -> Self {
        Self {
            version_header: "## {{version}}".to_string(),
            dated_version_header: "## {{version}} ({{date}})".to_string(),
            category_header: "### {{category}}".to_string(),
            entry: "- {{message}}{{breaking}}".to_string(),
            scoped_entry: "- **{{scope}}**: {{message}}{{breaking}}".to_string(),
            breaking_marker: "!".to_string(),
        }
    }
}

impl ChangelogTemplate {
    /// Parse a template from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a template file
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ChangelogError> {
        if !path.exists() {
            return Err(ChangelogError::TemplateNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let template = Self::from_toml_str(&content).map_err(|e| ChangelogError::TemplateParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("loaded changelog template");
        Ok(template)
    }
}

/// Expand `{{name}}` placeholders in one pass.
///
/// Substituted values are never re-scanned. Unknown placeholders are
/// kept verbatim.
pub fn expand(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut remaining = template;

    while let Some(start) = remaining.find("{{") {
        output.push_str(&remaining[..start]);
        let after = &remaining[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match vars.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => output.push_str(value),
                    None => output.push_str(&remaining[start..start + 2 + end + 2]),
                }
                remaining = &after[end + 2..];
            }
            None => {
                output.push_str(&remaining[start..]);
                remaining = "";
            }
        }
    }
    output.push_str(remaining);

    output
}
