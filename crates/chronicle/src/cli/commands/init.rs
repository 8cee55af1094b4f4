//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use chronicle_core::config::{default_config_toml, DEFAULT_CONFIG_TOML};

use crate::cli::{output, Cli};

/// Write a starter configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command in `cwd`
    pub fn run(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<()> {
        info!(force = self.force, "executing init command");
        let config_path = cwd.join(self.output.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG_TOML)));

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, default_config_toml()?)?;

        if !cli.quiet {
            output::success(&format!("Created configuration at {}", output::path(&config_path)));
        }
        Ok(())
    }
}
