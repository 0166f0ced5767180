//! Raw timing table drawn beneath the speedup chart

use crate::speedup::{ScalingReport, NODE_COUNTS};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const TABLE_FONT_SIZE: u32 = 14;
const CELL_PADDING: i32 = 6;
const HEADER_FILL: RGBColor = RGBColor(242, 242, 242);
const GRID_COLOR: RGBColor = RGBColor(0, 0, 0);

/// Table of raw timings: one header row, one row per step
pub struct TimingTable<'a> {
    report: &'a ScalingReport,
}

impl<'a> TimingTable<'a> {
    pub fn new(report: &'a ScalingReport) -> Self {
        Self { report }
    }

    /// Column headers: "Steps" followed by the node counts
    pub fn header() -> Vec<String> {
        std::iter::once("Steps".to_string())
            .chain(NODE_COUNTS.iter().map(|n| n.to_string()))
            .collect()
    }

    /// Body rows: step name followed by its formatted timings
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.report
            .steps()
            .iter()
            .map(|step| {
                std::iter::once(step.name.clone())
                    .chain(step.timings.iter().map(|t| format_timing(*t)))
                    .collect()
            })
            .collect()
    }

    /// Draw the table into `area`, inset horizontally to line up with the plot
    pub fn draw(
        &self,
        area: &DrawingArea<SVGBackend<'_>, Shift>,
        inset: (i32, i32),
        row_height: u32,
    ) -> Result<()> {
        let (width, _) = area.dim_in_pixel();
        let header = Self::header();
        let rows = self.rows();

        let left = inset.0;
        let right = width as i32 - inset.1;
        let columns = header.len() as i32;
        let column_width = (right - left) / columns;
        let row_height = row_height as i32;
        // leave a half row between the x-axis labels and the table
        let top = row_height / 2;

        for (row_idx, row) in std::iter::once(&header).chain(rows.iter()).enumerate() {
            let y0 = top + row_idx as i32 * row_height;
            let y1 = y0 + row_height;
            let is_header = row_idx == 0;

            for (col_idx, cell) in row.iter().enumerate() {
                let x0 = left + col_idx as i32 * column_width;
                let x1 = x0 + column_width;

                if is_header {
                    area.draw(&Rectangle::new([(x0, y0), (x1, y1)], HEADER_FILL.filled()))?;
                }
                area.draw(&Rectangle::new(
                    [(x0, y0), (x1, y1)],
                    GRID_COLOR.stroke_width(1),
                ))?;

                let (anchor, x) = if is_header {
                    (HPos::Center, (x0 + x1) / 2)
                } else {
                    (HPos::Right, x1 - CELL_PADDING)
                };
                area.draw(&Text::new(
                    cell.clone(),
                    (x, (y0 + y1) / 2),
                    ("sans-serif", TABLE_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(anchor, VPos::Center)),
                ))?;
            }
        }

        Ok(())
    }
}

/// Format a timing for a table cell
///
/// Whole numbers keep one decimal place (`10.0`). Magnitudes from `1e16` up or
/// below `1e-4` switch to exponent form (`1e+16`, `1e-05`). Everything else uses
/// the shortest representation that round-trips.
pub fn format_timing(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if value != 0.0 && (value.abs() >= 1e16 || value.abs() < 1e-4) {
        scientific(value)
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Shortest mantissa with a signed, at least two-digit exponent: `1e+16`, `2.5e-05`
fn scientific(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}
