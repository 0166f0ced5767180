//! Speedup report - node-scaling charts for multi-step parallel runs
//!
//! Takes the timings of three named steps measured on 1, 2, 4 and 8 nodes,
//! derives each step's speedup over its single-node run, and renders a line
//! chart with a table of the raw timings to an SVG file.
//!
//! # Architecture
//!
//! - **Speedup**: step timings and derived speedup series
//! - **Visualization**: SVG line chart and timing table
//! - **Output**: atomic, uniquely named file persistence
//! - **Generator**: ties parsing, rendering and persistence together
//!
//! # Example
//!
//! ```rust,no_run
//! use speedup_report::{ReportConfig, ReportGenerator};
//!
//! fn main() -> speedup_report::Result<()> {
//!     let generator = ReportGenerator::new(ReportConfig::default())?;
//!     let path = generator.generate(
//!         ["load".into(), "solve".into(), "store".into()],
//!         [10.0, 5.0, 2.0, 1.0, 20.0, 10.0, 4.0, 2.0, 30.0, 15.0, 6.0, 3.0],
//!     )?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod speedup;
pub mod visualization;

// Re-export commonly used types
pub use config::ReportConfig;
pub use error::{ArgumentError, ReportError, Result};
pub use generator::ReportGenerator;
pub use speedup::{ScalingReport, SpeedupSeries, StepMeasurement};
pub use visualization::SpeedupPlotter;
