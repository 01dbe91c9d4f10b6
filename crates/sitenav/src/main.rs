//! sitenav CLI - navigation resolution for documentation sites.
//!
//! Provides commands for:
//! - `check`: Resolve the sidebar and validate all internal links
//! - `print`: Resolve the sidebar and emit the navigation tree as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, PrintArgs};
use output::Output;

/// sitenav - navigation resolution engine.
#[derive(Parser)]
#[command(name = "sitenav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the sidebar and validate all internal links.
    Check(CheckArgs),
    /// Resolve the sidebar and print the navigation tree as JSON.
    Print(PrintArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set
    let verbose = match &cli.command {
        Commands::Check(args) => args.verbose,
        Commands::Print(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Print(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
