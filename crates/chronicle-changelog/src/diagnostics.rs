//! Skipped-line diagnostics collected while compiling markdown

use std::fmt;

use serde::Serialize;

/// Why a line contributed nothing to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The line matched none of the known shapes
    UnrecognizedLine,
    /// A `### ` line whose label could not be read
    MalformedCategoryHeader,
    /// A list item seen before any category header in its block
    EntryOutsideCategory,
}

impl DiagnosticKind {
    fn describe(&self) -> &'static str {
        match self {
            Self::UnrecognizedLine => "unrecognized line",
            Self::MalformedCategoryHeader => "malformed category header",
            Self::EntryOutsideCategory => "entry outside any category",
        }
    }
}

/// A skipped line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Reason the line was skipped
    pub kind: DiagnosticKind,
    /// The line as it appeared in the document
    pub line: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(kind: DiagnosticKind, line: impl Into<String>) -> Self {
        Self {
            kind,
            line: line.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.describe(), self.line)
    }
}

/// A parse result together with the diagnostics raised while producing it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parsed<T> {
    /// Parsed value
    pub value: T,
    /// Skipped lines, in document order
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    /// Wrap a value with its diagnostics
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Check if nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Diagnostic::new(DiagnosticKind::UnrecognizedLine, "# Changelog");
        assert_eq!(d.to_string(), "unrecognized line: # Changelog");
    }

    #[test]
    fn test_parsed_is_clean() {
        assert!(Parsed::new(1, Vec::new()).is_clean());
        let dirty = Parsed::new(
            1,
            vec![Diagnostic::new(DiagnosticKind::EntryOutsideCategory, "- x")],
        );
        assert!(!dirty.is_clean());
        assert_eq!(dirty.value, 1);
    }
}
