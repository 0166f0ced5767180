//! Report generation: parse, derive speedups, render, persist
//!
//! Input is validated completely before anything touches the filesystem, and
//! the chart is rendered in memory before the output file is created.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::output::SvgWriter;
use crate::speedup::{ScalingReport, STEP_COUNT, TIMING_COUNT};
use crate::visualization::SpeedupPlotter;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Generates speedup charts into a configured directory
pub struct ReportGenerator {
    config: ReportConfig,
    writer: SvgWriter,
}

impl ReportGenerator {
    /// Create a generator, rejecting an unusable configuration
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate(STEP_COUNT)?;
        let writer = SvgWriter::new(config.output_dir.clone());
        Ok(Self { config, writer })
    }

    /// Configuration the generator was built with
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Generate a chart from step names and step-major timings
    pub fn generate(
        &self,
        step_names: [String; STEP_COUNT],
        timings: [f64; TIMING_COUNT],
    ) -> Result<PathBuf> {
        self.generate_report(&ScalingReport::new(step_names, timings))
    }

    /// Generate a chart from raw positional arguments
    pub fn generate_from_args<S: AsRef<str>>(&self, args: &[S]) -> Result<PathBuf> {
        let report = ScalingReport::from_args(args)?;
        self.generate_report(&report)
    }

    /// Render `report` and write it under a fresh random name
    pub fn generate_report(&self, report: &ScalingReport) -> Result<PathBuf> {
        for (step, series) in report.steps().iter().zip(report.speedups()) {
            tracing::debug!(
                step = %step.name,
                timings = ?step.timings,
                speedups = ?series.values(),
                "derived speedups"
            );
            if !series.is_finite() {
                tracing::warn!(
                    step = %step.name,
                    speedups = ?series.values(),
                    "non-finite speedup, a timing is zero or not finite"
                );
            }
        }

        let svg = SpeedupPlotter::render(report, &self.config)
            .map_err(|e| ReportError::Render(format!("{:#}", e)))?;

        let path = self.writer.write(&svg)?;
        tracing::info!(
            path = %path.display(),
            dir = %self.writer.dir().display(),
            "speedup chart generated"
        );
        Ok(path)
    }
}
