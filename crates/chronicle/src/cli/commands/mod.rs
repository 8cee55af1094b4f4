//! CLI commands

mod generate;
mod init;
mod parse;

pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use parse::ParseCommand;

use chronicle_changelog::Diagnostic;

use crate::cli::{output, Cli};

/// Report skipped lines on stderr
fn report_diagnostics(cli: &Cli, diagnostics: &[Diagnostic]) {
    if cli.quiet {
        return;
    }
    for diagnostic in diagnostics {
        output::diagnostic(diagnostic);
    }
}
