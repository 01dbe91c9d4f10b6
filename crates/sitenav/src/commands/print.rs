//! `sitenav print` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the print command.
#[derive(Args)]
pub(crate) struct PrintArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose output (show resolution timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl PrintArgs {
    /// Execute the print command.
    ///
    /// Writes the resolved navigation tree as JSON to stdout; warnings go
    /// to stderr so piped output stays clean.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, resolution, or
    /// serialization fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            base_path: None,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let nav = super::resolve_nav(&config)?;

        for warning in &nav.warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if self.pretty {
            serde_json::to_writer_pretty(&mut handle, &nav.items)?;
        } else {
            serde_json::to_writer(&mut handle, &nav.items)?;
        }
        handle.write_all(b"\n")?;

        Ok(())
    }
}
