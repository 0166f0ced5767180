//! Report configuration

use crate::error::ConfigError;
use std::path::PathBuf;

/// Directory generated images are written to, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "docs/images";

/// Report configuration
///
/// Controls where the chart lands and how large the canvas is. The CLI always
/// runs with the defaults; library callers can redirect output.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory the SVG file is created in
    pub output_dir: PathBuf,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels, chart and table together
    pub height: u32,

    /// Height of one table row in pixels
    pub table_row_height: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: 900,
            height: 400,
            table_row_height: 26,
        }
    }
}

impl ReportConfig {
    /// Create a config writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the table row height
    pub fn with_table_row_height(mut self, height: u32) -> Self {
        self.table_row_height = height;
        self
    }

    /// Pixels reserved below the chart for a table of `rows` rows plus its header
    pub fn table_height(&self, rows: usize) -> u32 {
        self.table_row_height * (rows as u32 + 1) + self.table_row_height / 2
    }

    /// Validate the configuration for a table of `rows` rows
    pub fn validate(&self, rows: usize) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidCanvas(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }

        if self.table_height(rows) >= self.height {
            return Err(ConfigError::InvalidCanvas(format!(
                "height {} leaves no room for the chart above a {}px table",
                self.height,
                self.table_height(rows)
            )));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidOutputDir(
                "output directory must not be empty".into(),
            ));
        }

        Ok(())
    }
}
