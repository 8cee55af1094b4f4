//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use chronicle_core::config::{load_config, load_config_or_default, Config};

use commands::{GenerateCommand, InitCommand, ParseCommand};

/// Chronicle - changelog parser and generator
#[derive(Debug, Parser)]
#[command(name = "chronicle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (skips discovery)
    #[arg(long, global = true, env = "CHRONICLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a starter configuration file
    Init(InitCommand),

    /// Parse an existing changelog into a version tree
    Parse(ParseCommand),

    /// Generate a changelog from commit and tag records
    Generate(GenerateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }
        let cwd = std::env::current_dir()?;

        match self.command {
            Commands::Init(ref cmd) => cmd.run(&self, &cwd),
            Commands::Parse(ref cmd) => cmd.run(&self, &cwd),
            Commands::Generate(ref cmd) => cmd.run(&self, &cwd),
        }
    }

    /// Load the configuration for `cwd`.
    ///
    /// Relative paths inside the configuration are resolved against the
    /// directory holding the config file, or `cwd` when defaults are used.
    pub fn load_config(&self, cwd: &Path) -> anyhow::Result<Config> {
        let (mut config, path) = match &self.config {
            Some(path) => {
                let path = cwd.join(path);
                (load_config(&path)?, Some(path))
            }
            None => load_config_or_default(cwd)?,
        };

        let base = path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd)
            .to_path_buf();
        debug!(config = ?path, base = %base.display(), "configuration loaded");

        config.changelog.file = base.join(&config.changelog.file);
        if let Some(template) = config.changelog.template.take() {
            config.changelog.template = Some(base.join(template));
        }
        Ok(config)
    }
}
