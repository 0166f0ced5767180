//! Speedup report CLI
//!
//! Renders a speedup chart from positional timings and prints the file path.

use anyhow::Result;
use clap::Parser;
use speedup_report::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging; stdout carries only the generated path
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = cli.run()?;
    println!("{}", path.display());

    Ok(())
}
