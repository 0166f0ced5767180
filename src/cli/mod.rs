//! CLI argument parsing and command handling

use crate::config::ReportConfig;
use crate::generator::ReportGenerator;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Speedup report - charts how three steps of a parallel run scale across 1, 2, 4 and 8 nodes
///
/// Writes an SVG to docs/images/ and prints its path.
#[derive(Parser, Debug)]
#[command(name = "speedup-report")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(override_usage = "speedup-report <STEP1> <STEP2> <STEP3> \
    <STEP1_T1> <STEP1_T2> <STEP1_T4> <STEP1_T8> \
    <STEP2_T1> <STEP2_T2> <STEP2_T4> <STEP2_T8> \
    <STEP3_T1> <STEP3_T2> <STEP3_T4> <STEP3_T8>")]
pub struct Cli {
    /// Three step names followed by each step's timings at 1, 2, 4 and 8 nodes
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Generate the chart and return its path
    pub fn run(&self) -> Result<PathBuf> {
        self.run_with(ReportConfig::default())
    }

    /// Generate the chart with an explicit configuration
    pub fn run_with(&self, config: ReportConfig) -> Result<PathBuf> {
        tracing::debug!(args = ?self.args, "parsed command line");

        let generator = ReportGenerator::new(config)?;
        let path = generator.generate_from_args(&self.args).with_context(|| {
            format!(
                "Failed to generate speedup chart in: {}",
                generator.config().output_dir.display()
            )
        })?;

        Ok(path)
    }
}
