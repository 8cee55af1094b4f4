//! Parse command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use chronicle_changelog::{CategoryMapper, ChangelogGenerator, Diagnostic, VersionNode};

use super::report_diagnostics;
use crate::cli::{output, Cli, OutputFormat};

/// Parse an existing changelog into a version tree
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Changelog file (defaults to the configured changelog file)
    pub file: Option<PathBuf>,
}

#[derive(Serialize)]
struct ParseReport<'a> {
    versions: &'a [VersionNode],
    diagnostics: &'a [Diagnostic],
}

impl ParseCommand {
    /// Execute the parse command in `cwd`
    pub fn run(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<()> {
        let config = cli.load_config(cwd)?;
        let path = match &self.file {
            Some(file) => cwd.join(file),
            None => config.changelog.file.clone(),
        };
        info!(path = %path.display(), "executing parse command");

        let mapper = CategoryMapper::new(config.changelog.categories.clone());
        let generator = ChangelogGenerator::new(config.changelog)?;
        let parsed = generator.parse_file(&path)?;

        match cli.format {
            OutputFormat::Json => {
                let report = ParseReport {
                    versions: &parsed.value,
                    diagnostics: &parsed.diagnostics,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                report_diagnostics(cli, &parsed.diagnostics);
                if !cli.quiet {
                    print_summary(cli, &mapper, &parsed.value);
                }
            }
        }
        Ok(())
    }
}

fn print_summary(cli: &Cli, mapper: &CategoryMapper, tree: &[VersionNode]) {
    for node in tree {
        println!("{}", output::version_heading(node));
        for (key, entries) in node.changes.iter() {
            println!("{}", output::category_count(&mapper.title(key), entries.len()));
            if cli.verbose {
                for entry in entries {
                    match &entry.scope {
                        Some(scope) => println!("      {}: {}", style(scope).bold(), entry.message),
                        None => println!("      {}", entry.message),
                    }
                }
            }
        }
    }
    println!("{} versions", tree.len());
}
