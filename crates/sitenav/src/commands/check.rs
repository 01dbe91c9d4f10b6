//! `sitenav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(short, long)]
    base_path: Option<String>,

    /// Enable verbose output (show resolution timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or resolution fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            base_path: self.base_path,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let nav = super::resolve_nav(&config)?;

        for warning in &nav.warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        output.success(&format!(
            "Sidebar resolved: {} top-level items, {} routes, {} warnings",
            nav.items.len(),
            nav.routes.len(),
            nav.warnings.len()
        ));

        Ok(())
    }
}
