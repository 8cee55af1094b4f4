//! Generate command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info};

use chronicle_changelog::ChangelogGenerator;
use chronicle_git::{load_commits, load_tags};

use super::report_diagnostics;
use crate::cli::{output, Cli, OutputFormat};

/// Generate a changelog from commit and tag records
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Commit records (JSON array, newest first)
    #[arg(long, value_name = "FILE")]
    pub commits: PathBuf,

    /// Tag records (JSON array)
    #[arg(long, value_name = "FILE")]
    pub tags: Option<PathBuf>,

    /// Only regenerate versions newer than the latest one in the existing changelog
    #[arg(long)]
    pub incremental: bool,

    /// Output file (defaults to configured changelog file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write to file (default: print to stdout)
    #[arg(short, long)]
    pub write: bool,
}

impl GenerateCommand {
    /// Execute the generate command in `cwd`
    pub fn run(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<()> {
        let config = cli.load_config(cwd)?;
        let incremental = self.incremental || config.changelog.incremental;
        info!(incremental, write = self.write, "executing generate command");

        let output_path = match &self.output {
            Some(path) => cwd.join(path),
            None => config.changelog.file.clone(),
        };

        let commits = load_commits(&cwd.join(&self.commits))?;
        let tags = match &self.tags {
            Some(path) => load_tags(&cwd.join(path))?,
            None => Vec::new(),
        };

        let generator = ChangelogGenerator::new(config.changelog)?;
        let tree = if incremental && output_path.exists() {
            let existing = generator.parse_file(&output_path)?;
            report_diagnostics(cli, &existing.diagnostics);
            generator.incremental(&commits, &tags, existing.value)
        } else {
            if incremental {
                debug!(path = %output_path.display(), "no existing changelog, generating in full");
            }
            generator.from_history(&commits, &tags)
        };

        let changelog = generator.render(&tree);

        if self.write {
            std::fs::write(&output_path, &changelog)?;
            if !cli.quiet {
                output::success(&format!("Changelog written to {}", output::path(&output_path)));
            }
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
            OutputFormat::Text => print!("{}", changelog),
        }
        Ok(())
    }
}
